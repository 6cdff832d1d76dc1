//! Widget painting.
//!
//! [`paint`] walks a resolved [`WidgetTree`](crate::tree::WidgetTree) and
//! draws it onto the simulator display:
//!
//! 1. Background fill
//! 2. Header (title left, timestamp right)
//! 3. Item rows, each cell at its pre-computed horizontal offset
//!
//! All text and primitive draws onto the simulator are infallible; the
//! only fallible step is icon catalog lookup, which fails on a name
//! outside the catalog.

mod cells;
mod header;

pub use cells::draw_cell;
pub use header::{TITLE, draw_header};

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::config::{BODY_SPACER, HEADER_HEIGHT, ROW_ADVANCE, ROW_TOP_PADDING};
use crate::error::DashboardError;
use crate::tree::WidgetTree;

/// Paint the whole widget tree onto the display.
pub fn paint(
    display: &mut SimulatorDisplay<Rgb888>,
    tree: &WidgetTree,
) -> Result<(), DashboardError> {
    display.clear(tree.background).ok();

    draw_header(display, &tree.generated_at);

    for (row_index, row) in tree.rows.iter().enumerate() {
        let y = (HEADER_HEIGHT + BODY_SPACER + ROW_TOP_PADDING) as i32
            + row_index as i32 * ROW_ADVANCE as i32;

        let mut x = row.geometry.leading_spacer as i32;
        for cell in &row.cells {
            draw_cell(display, cell, x, y, row.geometry.cell_width)?;
            x += row.geometry.cell_width as i32;
        }
    }

    Ok(())
}

// =============================================================================
// Unit Tests
// =============================================================================
