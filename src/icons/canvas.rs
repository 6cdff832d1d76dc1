//! Offscreen RGBA canvas for icon rendering.
//!
//! Icons are drawn into a small in-memory pixel buffer, monochrome
//! filtered, then blitted onto the display. Keeping the buffer in memory
//! (instead of round-tripping through an offscreen surface) removes a
//! suspension point without changing the visible output.
//!
//! Storage is row-major RGBA8, 4 bytes per pixel. Alpha starts at 0
//! (transparent); drawing a pixel sets alpha to 255. The blit iterator
//! skips transparent pixels so icons composite over the widget
//! background.

use core::convert::Infallible;

use embedded_graphics::Pixel;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;

/// Square RGBA8 canvas implementing [`DrawTarget`] for icon drawing.
#[derive(Debug)]
pub struct IconCanvas {
    edge: u32,
    data: Vec<u8>,
}

impl IconCanvas {
    /// Create a transparent canvas with the given edge length.
    pub fn new(edge: u32) -> Self {
        Self {
            edge,
            data: vec![0; (edge * edge * 4) as usize],
        }
    }

    /// Edge length in pixels.
    pub fn edge(&self) -> u32 {
        self.edge
    }

    /// Raw RGBA8 pixel buffer, row-major.
    pub fn data(&self) -> &[u8] {
        &self.data
    }

    /// Mutable raw RGBA8 pixel buffer (for the monochrome filter).
    pub fn data_mut(&mut self) -> &mut [u8] {
        &mut self.data
    }

    /// Set one pixel, making it opaque. Out-of-bounds points are ignored.
    fn set_pixel(&mut self, point: Point, color: Rgb888) {
        let edge = self.edge as i32;
        if point.x < 0 || point.y < 0 || point.x >= edge || point.y >= edge {
            return;
        }
        let offset = ((point.y * edge + point.x) * 4) as usize;
        self.data[offset] = color.r();
        self.data[offset + 1] = color.g();
        self.data[offset + 2] = color.b();
        self.data[offset + 3] = 255;
    }

    /// Iterate the opaque pixels, translated by `origin`, for blitting
    /// onto the display. Transparent pixels are skipped.
    pub fn pixels(&self, origin: Point) -> impl Iterator<Item = Pixel<Rgb888>> + '_ {
        let edge = self.edge as i32;
        self.data
            .chunks_exact(4)
            .enumerate()
            .filter(|(_, px)| px[3] != 0)
            .map(move |(index, px)| {
                let x = index as i32 % edge;
                let y = index as i32 / edge;
                Pixel(origin + Point::new(x, y), Rgb888::new(px[0], px[1], px[2]))
            })
    }
}

impl OriginDimensions for IconCanvas {
    fn size(&self) -> Size {
        Size::new(self.edge, self.edge)
    }
}

impl DrawTarget for IconCanvas {
    type Color = Rgb888;
    type Error = Infallible;

    fn draw_iter<I>(&mut self, pixels: I) -> Result<(), Self::Error>
    where
        I: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(point, color) in pixels {
            self.set_pixel(point, color);
        }
        Ok(())
    }
}

// =============================================================================
// Unit Tests
// =============================================================================
