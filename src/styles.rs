//! Text styles for the energy dashboard.
//!
//! All styles are `const` so style lookup costs nothing at draw time.
//! Value fonts come from the ISO 8859-1 set because cost lines start with
//! a pound sign, which the ASCII set cannot render.
//!
//! Compact variants exist for long formatted values: a line longer than
//! the compact threshold drops to a narrower font and gains a pixel of
//! bottom padding so stacked lines stay aligned.

use embedded_graphics::mono_font::MonoTextStyle;
use embedded_graphics::mono_font::iso_8859_1::{
    FONT_6X10, FONT_6X12, FONT_6X13_BOLD, FONT_7X13, FONT_7X13_BOLD, FONT_8X13_BOLD,
};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::text::{Alignment, Baseline, TextStyle, TextStyleBuilder};
use profont::PROFONT_14_POINT;

use crate::colors::{BLACK, WHITE};

// =============================================================================
// Character Styles
// =============================================================================

/// Header title ("Energy Usage Today").
pub const TITLE_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&PROFONT_14_POINT, BLACK);

/// Header timestamp (HH:mm).
pub const TIME_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_6X10, BLACK);

/// Static cell labels ("Peak", "Off-Peak", "Total").
pub const LABEL_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_8X13_BOLD, BLACK);

/// Attribute value line, regular weight.
pub const VALUE_STYLE: MonoTextStyle<'static, Rgb888> = MonoTextStyle::new(&FONT_7X13, WHITE);

/// Attribute value line, emphasized.
pub const VALUE_STYLE_BOLD: MonoTextStyle<'static, Rgb888> =
    MonoTextStyle::new(&FONT_7X13_BOLD, WHITE);

/// Long attribute value line, regular weight.
pub const VALUE_STYLE_COMPACT: MonoTextStyle<'static, Rgb888> =
    MonoTextStyle::new(&FONT_6X12, WHITE);

/// Long attribute value line, emphasized.
pub const VALUE_STYLE_COMPACT_BOLD: MonoTextStyle<'static, Rgb888> =
    MonoTextStyle::new(&FONT_6X13_BOLD, WHITE);

// =============================================================================
// Alignment Styles
// =============================================================================

/// Centered text, anchored at the top of the glyph box.
pub const CENTERED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Center)
    .baseline(Baseline::Top)
    .build();

/// Left-aligned text, anchored at the top of the glyph box.
pub const LEFT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Left)
    .baseline(Baseline::Top)
    .build();

/// Right-aligned text, anchored at the top of the glyph box.
pub const RIGHT_ALIGNED: TextStyle = TextStyleBuilder::new()
    .alignment(Alignment::Right)
    .baseline(Baseline::Top)
    .build();

// =============================================================================
// Unit Tests
// =============================================================================
