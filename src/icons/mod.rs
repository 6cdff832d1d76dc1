//! Icon catalog: name resolution, rendering, monochrome filtering.
//!
//! Icons are addressed by name (`house`, `sun.max`, `battery.75`). A base
//! symbol with variant tiers resolves to a tiered name from a numeric
//! sensor value, then the catalog renders the named symbol into an
//! [`IconCanvas`] and binarizes it. Unknown names are an error: a typo in
//! the item table should fail loudly, not draw a blank cell.

pub mod canvas;
pub mod monochrome;
mod shapes;

use core::fmt::Write;

use heapless::String;

pub use canvas::IconCanvas;

use crate::error::DashboardError;

/// Maximum length of a resolved icon name.
pub const NAME_CAPACITY: usize = 24;

/// Resolve a tiered icon name from a numeric value.
///
/// The first threshold at or above `value` selects the tier and the name
/// becomes `{symbol}.{tier}`. A value above every threshold, or a NaN
/// (non-numeric sensor state), falls back to the bare symbol name.
pub fn resolve_name(symbol: &str, thresholds: &[f32], value: f32) -> String<NAME_CAPACITY> {
    let mut name: String<NAME_CAPACITY> = String::new();
    let _ = write!(name, "{symbol}");

    // NaN fails every comparison, so it falls through to the bare name
    if let Some(tier) = thresholds.iter().find(|&&threshold| value <= threshold) {
        let _ = write!(name, ".{tier}");
    }
    name
}

/// Render the named symbol at the given edge length, monochrome filtered.
///
/// Returns [`DashboardError::UnknownSymbol`] for names outside the
/// catalog.
pub fn render(name: &str, edge: u32) -> Result<IconCanvas, DashboardError> {
    let mut canvas = IconCanvas::new(edge);

    match name {
        "house" => shapes::draw_house(&mut canvas),
        "sun.max" => shapes::draw_sun_max(&mut canvas),
        "powerplug" => shapes::draw_powerplug(&mut canvas),
        "battery" => shapes::draw_battery(&mut canvas, None),
        "battery.0" => shapes::draw_battery(&mut canvas, Some(0)),
        "battery.25" => shapes::draw_battery(&mut canvas, Some(25)),
        "battery.50" => shapes::draw_battery(&mut canvas, Some(50)),
        "battery.75" => shapes::draw_battery(&mut canvas, Some(75)),
        "battery.100" => shapes::draw_battery(&mut canvas, Some(100)),
        _ => {
            return Err(DashboardError::UnknownSymbol {
                name: name.to_string(),
            });
        }
    }

    monochrome::apply(canvas.data_mut());
    Ok(canvas)
}

// =============================================================================
// Unit Tests
// =============================================================================
