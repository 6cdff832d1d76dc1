//! Color constants for the energy dashboard.
//!
//! # Rgb888 Color Format
//!
//! The widget uses Rgb888 (24-bit truecolor) rather than a display-native
//! packed format. The monochrome icon filter thresholds raw 8-bit channel
//! values (red > 200), so keeping full 8-bit channels end to end avoids a
//! lossy conversion step between icon processing and display output.

use embedded_graphics::pixelcolor::{Rgb888, RgbColor};

// =============================================================================
// Standard Colors (from RgbColor trait)
// =============================================================================

/// Pure black (0, 0, 0). Used for the header title and label text.
pub const BLACK: Rgb888 = Rgb888::BLACK;

/// Pure white (255, 255, 255). Used for value text and icon strokes.
pub const WHITE: Rgb888 = Rgb888::WHITE;

// =============================================================================
// Custom Colors (application-specific)
// =============================================================================

/// Widget background, a warm tan (#c7a69d).
pub const BACKGROUND: Rgb888 = Rgb888::new(0xc7, 0xa6, 0x9d);

/// Battery charge fill. Red channel is 52, below the monochrome threshold,
/// so the fill renders black after filtering while the outline stays white.
pub const CHARGE_GREEN: Rgb888 = Rgb888::new(52, 199, 89);

/// Sun core yellow. Red channel is 255, above the monochrome threshold,
/// so the core renders white after filtering.
pub const SUN_YELLOW: Rgb888 = Rgb888::new(255, 204, 0);
