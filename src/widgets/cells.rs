//! Item cell rendering.
//!
//! Each cell draws its content (icon or label) centered in a fixed-height
//! band at the top, then stacks its attribute lines below. The band height
//! matches the regular icon edge so lines start at the same y across every
//! cell in a row, icon and label cells alike.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::config::ICON_SIZE_REGULAR;
use crate::error::DashboardError;
use crate::icons;
use crate::styles::{
    CENTERED, LABEL_STYLE, VALUE_STYLE, VALUE_STYLE_BOLD, VALUE_STYLE_COMPACT,
    VALUE_STYLE_COMPACT_BOLD,
};
use crate::tree::{CellContent, CellNode, TextLine};

/// Height of the content band above the attribute lines.
const CONTENT_HEIGHT: u32 = ICON_SIZE_REGULAR;

/// Gap between the content band and the first attribute line.
const CONTENT_GAP: u32 = 4;

/// Vertical advance per attribute line.
const LINE_HEIGHT: u32 = 13;

/// Extra bottom padding after a compact line.
const COMPACT_PADDING: u32 = 1;

/// Pick the value character style for a line.
fn line_style(line: &TextLine) -> embedded_graphics::mono_font::MonoTextStyle<'static, Rgb888> {
    match (line.compact, line.emphasize) {
        (false, false) => VALUE_STYLE,
        (false, true) => VALUE_STYLE_BOLD,
        (true, false) => VALUE_STYLE_COMPACT,
        (true, true) => VALUE_STYLE_COMPACT_BOLD,
    }
}

/// Draw one cell with its top-left corner at `(x, y)` and the given width.
pub fn draw_cell(
    display: &mut SimulatorDisplay<Rgb888>,
    cell: &CellNode,
    x: i32,
    y: i32,
    width: u32,
) -> Result<(), DashboardError> {
    let center_x = x + width as i32 / 2;

    match &cell.content {
        CellContent::Icon { name, edge } => {
            let canvas = icons::render(name, *edge)?;
            let origin = Point::new(
                center_x - *edge as i32 / 2,
                y + (CONTENT_HEIGHT - *edge) as i32 / 2,
            );
            display.draw_iter(canvas.pixels(origin)).ok();
        }
        CellContent::Label(label) => {
            // Vertically centered in the content band
            let label_y = y + (CONTENT_HEIGHT as i32 - 13) / 2;
            Text::with_text_style(label, Point::new(center_x, label_y), LABEL_STYLE, CENTERED)
                .draw(display)
                .ok();
        }
    }

    let mut line_y = y + (CONTENT_HEIGHT + CONTENT_GAP) as i32;
    for line in &cell.lines {
        Text::with_text_style(
            line.text.as_str(),
            Point::new(center_x, line_y),
            line_style(line),
            CENTERED,
        )
        .draw(display)
        .ok();

        line_y += LINE_HEIGHT as i32;
        if line.compact {
            line_y += COMPACT_PADDING as i32;
        }
    }

    Ok(())
}
