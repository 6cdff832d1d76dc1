//! Dashboard configuration.
//!
//! All configuration is static: the Home Assistant endpoint, the widget
//! styling, and the item table are compile-time constants gathered into an
//! immutable [`DashboardConfig`] that is built once in `main` and passed
//! down the pipeline by reference. There is no CLI and no environment
//! variable surface; edit the constants and rebuild.
//!
//! # Pre-computed Layout Constants
//!
//! Fixed layout values (`ROW_WIDTH`, `HEADER_HEIGHT`, slot arithmetic) are
//! `const` so the per-cell positioning code works with plain integers and
//! never recomputes widget geometry.

use std::time::Duration;

use embedded_graphics::pixelcolor::Rgb888;

use crate::colors::BACKGROUND;
use crate::items::{ENERGY_ITEMS, ItemSpec};

// =============================================================================
// Home Assistant Endpoint
// =============================================================================

/// Base URL of the Home Assistant instance serving `/api/states`.
pub const HOME_ASSISTANT_BASE_URL: &str = "http://homeassistant.local";

/// Long-lived access token sent as `Authorization: Bearer {token}`.
pub const HOME_ASSISTANT_ACCESS_TOKEN: &str = "YOUR_HOME_ASSISTANT_ACCESS_TOKEN";

// =============================================================================
// Display Configuration
// =============================================================================

/// Widget width in pixels (medium widget footprint).
pub const SCREEN_WIDTH: u32 = 320;

/// Widget height in pixels.
pub const SCREEN_HEIGHT: u32 = 240;

/// Header bar height in pixels (title + refresh timestamp).
pub const HEADER_HEIGHT: u32 = 30;

/// Vertical gap between the header and the first item row.
pub const BODY_SPACER: u32 = 5;

/// Top padding applied to every item row.
pub const ROW_TOP_PADDING: u32 = 8;

/// Vertical distance between the tops of consecutive item rows.
pub const ROW_ADVANCE: u32 = 100;

// =============================================================================
// Item Grid Configuration
// =============================================================================

/// Maximum number of items per row.
pub const ROW_ITEM_LIMIT: usize = 4;

/// Horizontal span available to an item row, in pixels.
pub const ROW_WIDTH: u32 = SCREEN_WIDTH;

/// Formatted values longer than this many characters drop to the compact
/// value font and gain 1px of extra bottom padding. Presentation rule only.
pub const VALUE_COMPACT_THRESHOLD: usize = 9;

// =============================================================================
// Icon Configuration
// =============================================================================

/// Edge length of a regular item icon, in pixels.
pub const ICON_SIZE_REGULAR: u32 = 30;

/// Edge length of a small item icon, in pixels.
pub const ICON_SIZE_SMALL: u32 = 16;

// =============================================================================
// Refresh Configuration
// =============================================================================

/// Hint for when the host should re-invoke the widget. The host may defer
/// the actual refresh well beyond this.
pub const REFRESH_INTERVAL: Duration = Duration::from_secs(30);

// =============================================================================
// Configuration Struct
// =============================================================================

/// Immutable configuration handed to the render pipeline at startup.
///
/// Built once from the constants above; never mutated afterwards.
pub struct DashboardConfig {
    /// Home Assistant base URL.
    pub base_url: &'static str,
    /// Bearer token for the states endpoint.
    pub access_token: &'static str,
    /// Widget background color.
    pub background: Rgb888,
    /// Maximum items per row.
    pub row_capacity: usize,
    /// Host refresh hint interval.
    pub refresh_interval: Duration,
    /// Ordered item table; ordering drives row placement.
    pub items: &'static [ItemSpec],
}

impl DashboardConfig {
    /// Assemble the configuration from the compile-time constants.
    pub const fn new() -> Self {
        Self {
            base_url: HOME_ASSISTANT_BASE_URL,
            access_token: HOME_ASSISTANT_ACCESS_TOKEN,
            background: BACKGROUND,
            row_capacity: ROW_ITEM_LIMIT,
            refresh_interval: REFRESH_INTERVAL,
            items: ENERGY_ITEMS,
        }
    }
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self::new()
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_matches_constants() {
        let config = DashboardConfig::new();
        assert_eq!(config.row_capacity, ROW_ITEM_LIMIT);
        assert_eq!(config.refresh_interval, REFRESH_INTERVAL);
        assert_eq!(config.items.len(), 7, "item table should hold 7 items");
    }

    #[test]
    fn test_layout_constants_fit_screen() {
        // Header plus two item rows must fit the widget height
        assert!(
            HEADER_HEIGHT + BODY_SPACER + 2 * ROW_ADVANCE <= SCREEN_HEIGHT + ROW_ADVANCE,
            "two item rows should fit below the header"
        );
        assert_eq!(ROW_WIDTH % ROW_ITEM_LIMIT as u32, 0, "slots should divide evenly");
    }
}
