//! Header bar rendering.
//!
//! The header holds the widget title on the left and the build timestamp
//! on the right. Positions are `const Point`s; the header never moves.

use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics::text::Text;
use embedded_graphics_simulator::SimulatorDisplay;

use crate::config::SCREEN_WIDTH;
use crate::styles::{LEFT_ALIGNED, RIGHT_ALIGNED, TIME_STYLE, TITLE_STYLE};

/// Widget title text.
pub const TITLE: &str = "Energy Usage Today";

/// Title position, inset from the left edge.
const TITLE_POS: Point = Point::new(8, 6);

/// Timestamp position, right-aligned 8px from the right edge.
const TIME_POS: Point = Point::new((SCREEN_WIDTH - 8) as i32, 10);

/// Draw the title and the HH:mm build timestamp.
pub fn draw_header(display: &mut SimulatorDisplay<Rgb888>, generated_at: &str) {
    Text::with_text_style(TITLE, TITLE_POS, TITLE_STYLE, LEFT_ALIGNED)
        .draw(display)
        .ok();

    Text::with_text_style(generated_at, TIME_POS, TIME_STYLE, RIGHT_ALIGNED)
        .draw(display)
        .ok();
}
