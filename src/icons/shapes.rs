//! Procedural symbol drawing.
//!
//! Symbols are drawn with embedded-graphics primitives, proportional to
//! the canvas edge so the same code serves the 30px and 16px footprints.
//! Strokes are white; the sun core and battery fill use colored fills
//! whose red channels land on opposite sides of the monochrome threshold,
//! so tiering stays visible after binarization.

use embedded_graphics::prelude::*;
use embedded_graphics::primitives::{Circle, Line, PrimitiveStyle, Rectangle, Triangle};

use crate::colors::{CHARGE_GREEN, SUN_YELLOW, WHITE};

use super::canvas::IconCanvas;

/// White 1px stroke shared by all outlines.
const STROKE: PrimitiveStyle<embedded_graphics::pixelcolor::Rgb888> =
    PrimitiveStyle::with_stroke(WHITE, 1);

/// House: triangular roof over a rectangular body with a door.
pub fn draw_house(canvas: &mut IconCanvas) {
    let edge = canvas.edge() as i32;
    let mid = edge / 2;

    // Roof
    Triangle::new(
        Point::new(mid, 1),
        Point::new(1, mid),
        Point::new(edge - 2, mid),
    )
    .into_styled(STROKE)
    .draw(canvas)
    .ok();

    // Body
    let body_left = edge / 6;
    let body_width = (edge - 2 * body_left) as u32;
    Rectangle::new(
        Point::new(body_left, mid),
        Size::new(body_width, (edge - 1 - mid) as u32),
    )
    .into_styled(STROKE)
    .draw(canvas)
    .ok();

    // Door
    let door_width = (edge / 5).max(2) as u32;
    let door_height = (edge / 3).max(3) as u32;
    Rectangle::new(
        Point::new(mid - door_width as i32 / 2, edge - 1 - door_height as i32),
        Size::new(door_width, door_height),
    )
    .into_styled(STROKE)
    .draw(canvas)
    .ok();
}

/// Sun with rays: filled core circle plus eight radial rays.
pub fn draw_sun_max(canvas: &mut IconCanvas) {
    let edge = canvas.edge() as i32;
    let mid = edge / 2;
    let core_diameter = (edge / 3).max(4) as u32;
    let core_top_left = mid - core_diameter as i32 / 2;

    Circle::new(Point::new(core_top_left, core_top_left), core_diameter)
        .into_styled(PrimitiveStyle::with_fill(SUN_YELLOW))
        .draw(canvas)
        .ok();
    Circle::new(Point::new(core_top_left, core_top_left), core_diameter)
        .into_styled(STROKE)
        .draw(canvas)
        .ok();

    // Eight rays at 45 degree steps; diagonals scaled by ~0.7
    let inner = core_diameter as i32 / 2 + 2;
    let outer = mid - 1;
    let directions: [(i32, i32); 8] = [
        (1, 0),
        (0, 1),
        (-1, 0),
        (0, -1),
        (1, 1),
        (1, -1),
        (-1, 1),
        (-1, -1),
    ];
    for (dx, dy) in directions {
        let scale = |reach: i32| {
            if dx != 0 && dy != 0 {
                reach * 7 / 10
            } else {
                reach
            }
        };
        let start = Point::new(mid + dx * scale(inner), mid + dy * scale(inner));
        let end = Point::new(mid + dx * scale(outer), mid + dy * scale(outer));
        Line::new(start, end).into_styled(STROKE).draw(canvas).ok();
    }
}

/// Power plug: body with two prongs on top and a cable stub below.
pub fn draw_powerplug(canvas: &mut IconCanvas) {
    let edge = canvas.edge() as i32;
    let mid = edge / 2;

    // Prongs
    let prong_height = (edge / 4).max(2);
    let prong_offset = (edge / 6).max(2);
    for x in [mid - prong_offset, mid + prong_offset] {
        Line::new(Point::new(x, 1), Point::new(x, prong_height))
            .into_styled(STROKE)
            .draw(canvas)
            .ok();
    }

    // Body
    let body_left = edge / 5;
    let body_top = prong_height;
    let body_width = (edge - 2 * body_left) as u32;
    let body_height = (edge / 2).max(4) as u32;
    Rectangle::new(
        Point::new(body_left, body_top),
        Size::new(body_width, body_height),
    )
    .into_styled(STROKE)
    .draw(canvas)
    .ok();

    // Cable stub
    Line::new(
        Point::new(mid, body_top + body_height as i32),
        Point::new(mid, edge - 2),
    )
    .into_styled(STROKE)
    .draw(canvas)
    .ok();
}

/// Battery: horizontal body with terminal tip and a proportional charge
/// fill. `level` is the charge tier percentage; `None` draws the bare
/// (unfilled) symbol.
pub fn draw_battery(canvas: &mut IconCanvas, level: Option<u32>) {
    let edge = canvas.edge() as i32;
    let body_top = edge / 3;
    let body_height = (edge / 3).max(6) as u32;
    let body_width = (edge - 5) as u32;

    Rectangle::new(Point::new(1, body_top), Size::new(body_width, body_height))
        .into_styled(STROKE)
        .draw(canvas)
        .ok();

    // Terminal tip
    let tip_height = (body_height / 2).max(2);
    Rectangle::new(
        Point::new(edge - 4, body_top + (body_height - tip_height) as i32 / 2),
        Size::new(3, tip_height),
    )
    .into_styled(PrimitiveStyle::with_fill(WHITE))
    .draw(canvas)
    .ok();

    // Charge fill, inset 2px inside the body
    if let Some(level) = level {
        let inner_width = body_width.saturating_sub(4);
        let fill_width = inner_width * level.min(100) / 100;
        if fill_width > 0 {
            Rectangle::new(
                Point::new(3, body_top + 2),
                Size::new(fill_width, body_height.saturating_sub(4)),
            )
            .into_styled(PrimitiveStyle::with_fill(CHARGE_GREEN))
            .draw(canvas)
            .ok();
        }
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn opaque_count(canvas: &IconCanvas) -> usize {
        canvas.pixels(Point::zero()).count()
    }

    #[test]
    fn test_shapes_draw_something_at_both_footprints() {
        for edge in [30, 16] {
            for draw in [
                draw_house as fn(&mut IconCanvas),
                draw_sun_max,
                draw_powerplug,
            ] {
                let mut canvas = IconCanvas::new(edge);
                draw(&mut canvas);
                assert!(opaque_count(&canvas) > 0, "shape should mark pixels at edge {edge}");
            }
        }
    }

    #[test]
    fn test_battery_fill_grows_with_level() {
        let mut empty = IconCanvas::new(30);
        draw_battery(&mut empty, Some(0));
        let mut half = IconCanvas::new(30);
        draw_battery(&mut half, Some(50));
        let mut full = IconCanvas::new(30);
        draw_battery(&mut full, Some(100));

        let empty_px = opaque_count(&empty);
        let half_px = opaque_count(&half);
        let full_px = opaque_count(&full);
        assert!(empty_px < half_px, "50% fill should add pixels over 0%");
        assert!(half_px < full_px, "100% fill should add pixels over 50%");
    }

    #[test]
    fn test_bare_battery_matches_zero_fill() {
        let mut bare = IconCanvas::new(30);
        draw_battery(&mut bare, None);
        let mut zero = IconCanvas::new(30);
        draw_battery(&mut zero, Some(0));
        // Zero percent draws no fill, so both are outline-only
        assert_eq!(opaque_count(&bare), opaque_count(&zero));
    }
}
