//! Item display specs and value converters.
//!
//! The item table is the heart of the widget: a fixed, ordered list of
//! seven display specs. The first four show an icon (house load, solar,
//! grid import, battery) and the last three show a cost label (Peak,
//! Off-Peak, Total). Ordering is meaningful: it drives row placement.
//!
//! Each item renders zero or more attribute lines. An attribute names the
//! sensor entity to read, an optional converter from the fixed converter
//! set, an optional prefix/suffix, and an emphasis flag (bold value font).
//!
//! Converters are a closed enum rather than function values, so a spec
//! entry stays a plain `const` with no captured context.

use core::fmt::Write;

use heapless::String;

// =============================================================================
// Unit Affixes
// =============================================================================

/// Instantaneous power suffix.
pub const SUFFIX_POWER: &str = " kW";

/// Daily energy suffix.
pub const SUFFIX_ENERGY: &str = " kWh";

/// Battery charge suffix.
pub const SUFFIX_PERCENT: &str = "%";

/// Cost prefix.
pub const PREFIX_CURRENCY: &str = "\u{a3}";

// =============================================================================
// Value Converters
// =============================================================================

/// Maximum length of one formatted display line.
pub const LINE_CAPACITY: usize = 32;

/// The fixed set of value converters.
///
/// Both parse the raw state as a float and format to exactly two decimal
/// places, fixed-point, no thousands separator. Rounding is Rust's
/// exact-value formatting: the true binary value of the parsed float is
/// rounded to two decimals, ties to even.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Converter {
    /// Watts to kilowatts: divide by 1000, two decimals ("1500" -> "1.50").
    WattsToKilowatts,
    /// Currency normalization: two decimals ("3.5" -> "3.50").
    Currency,
}

impl Converter {
    /// Apply the converter to a raw sensor state string.
    ///
    /// Returns `None` when the state is not a valid decimal number. The
    /// caller renders the placeholder line in that case; a garbled value
    /// never reaches the display.
    pub fn apply(self, raw: &str) -> Option<String<LINE_CAPACITY>> {
        let value: f64 = raw.trim().parse().ok()?;
        let converted = match self {
            Self::WattsToKilowatts => value / 1000.0,
            Self::Currency => value,
        };
        let mut out: String<LINE_CAPACITY> = String::new();
        write!(out, "{converted:.2}").ok()?;
        Some(out)
    }
}

// =============================================================================
// Item Specs
// =============================================================================

/// One attribute line of an item.
#[derive(Debug, Clone, Copy)]
pub struct AttributeSpec {
    /// Sensor entity to read. Must exist in the fetched snapshot.
    pub entity_id: &'static str,
    /// Optional converter from the fixed set.
    pub converter: Option<Converter>,
    /// Optional text prepended to the formatted value.
    pub prefix: Option<&'static str>,
    /// Optional text appended to the formatted value.
    pub suffix: Option<&'static str>,
    /// Render the line in the bold value font.
    pub emphasize: bool,
}

impl AttributeSpec {
    /// A bare attribute: raw state, no converter, no affixes, regular font.
    pub const fn plain(entity_id: &'static str) -> Self {
        Self {
            entity_id,
            converter: None,
            prefix: None,
            suffix: None,
            emphasize: false,
        }
    }
}

/// Icon footprint on the widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IconSize {
    /// 30x30 pixels.
    Regular,
    /// 16x16 pixels.
    Small,
}

/// Threshold-tiered icon variants.
///
/// `thresholds` must be non-decreasing; each threshold pairs 1:1 with an
/// icon-name suffix (`battery` + 75 -> `battery.75`). The named sensor's
/// state selects the tier.
#[derive(Debug, Clone, Copy)]
pub struct VariantSpec {
    /// Ascending tier thresholds.
    pub thresholds: &'static [f32],
    /// Entity whose numeric state selects the tier.
    pub source_entity_id: &'static str,
}

/// What an item shows above its attribute lines.
#[derive(Debug, Clone, Copy)]
pub enum ItemContent {
    /// A named symbol from the icon catalog, optionally tiered.
    Icon {
        /// Base symbol name, e.g. `battery`.
        symbol: &'static str,
        /// Optional threshold tiering.
        variants: Option<VariantSpec>,
        /// Icon footprint.
        size: IconSize,
    },
    /// A static text label, e.g. `Peak`.
    Label(&'static str),
}

/// One visual unit in the item grid.
#[derive(Debug, Clone, Copy)]
pub struct ItemSpec {
    /// Icon or label shown at the top of the cell.
    pub content: ItemContent,
    /// Ordered attribute lines rendered below the content.
    pub attributes: &'static [AttributeSpec],
}

// =============================================================================
// The Energy Item Table
// =============================================================================

/// Battery charge tiers, paired with `battery.{tier}` catalog entries.
pub const BATTERY_TIERS: &[f32] = &[0.0, 25.0, 50.0, 75.0, 100.0];

/// The full, ordered item table: four icon items then three cost labels.
pub const ENERGY_ITEMS: &[ItemSpec] = &[
    // House usage (load)
    ItemSpec {
        content: ItemContent::Icon {
            symbol: "house",
            variants: None,
            size: IconSize::Regular,
        },
        attributes: &[
            AttributeSpec {
                entity_id: "sensor.givtcp_load_power",
                converter: Some(Converter::WattsToKilowatts),
                prefix: None,
                suffix: Some(SUFFIX_POWER),
                emphasize: false,
            },
            AttributeSpec {
                entity_id: "sensor.givtcp_load_energy_today_kwh",
                converter: None,
                prefix: None,
                suffix: Some(SUFFIX_ENERGY),
                emphasize: true,
            },
        ],
    },
    // Solar generation
    ItemSpec {
        content: ItemContent::Icon {
            symbol: "sun.max",
            variants: None,
            size: IconSize::Regular,
        },
        attributes: &[
            AttributeSpec {
                entity_id: "sensor.givtcp_pv_power",
                converter: Some(Converter::WattsToKilowatts),
                prefix: None,
                suffix: Some(SUFFIX_POWER),
                emphasize: false,
            },
            AttributeSpec {
                entity_id: "sensor.givtcp_pv_energy_today_kwh",
                converter: None,
                prefix: None,
                suffix: Some(SUFFIX_ENERGY),
                emphasize: true,
            },
        ],
    },
    // Grid import
    ItemSpec {
        content: ItemContent::Icon {
            symbol: "powerplug",
            variants: None,
            size: IconSize::Regular,
        },
        attributes: &[
            AttributeSpec {
                entity_id: "sensor.givtcp_import_power",
                converter: Some(Converter::WattsToKilowatts),
                prefix: None,
                suffix: Some(SUFFIX_POWER),
                emphasize: false,
            },
            AttributeSpec {
                entity_id: "sensor.givtcp_import_energy_today_kwh",
                converter: None,
                prefix: None,
                suffix: Some(SUFFIX_ENERGY),
                emphasize: true,
            },
        ],
    },
    // Battery (icon tiered on state of charge)
    ItemSpec {
        content: ItemContent::Icon {
            symbol: "battery",
            variants: Some(VariantSpec {
                thresholds: BATTERY_TIERS,
                source_entity_id: "sensor.givtcp_soc",
            }),
            size: IconSize::Regular,
        },
        attributes: &[
            AttributeSpec::plain("sensor.battery_state"),
            AttributeSpec {
                entity_id: "sensor.givtcp_soc",
                converter: None,
                prefix: None,
                suffix: Some(SUFFIX_PERCENT),
                emphasize: true,
            },
        ],
    },
    // Peak costs
    ItemSpec {
        content: ItemContent::Label("Peak"),
        attributes: &[
            AttributeSpec {
                entity_id: "sensor.daily_energy_cost_peak",
                converter: Some(Converter::Currency),
                prefix: Some(PREFIX_CURRENCY),
                suffix: None,
                emphasize: false,
            },
            AttributeSpec {
                entity_id: "sensor.daily_energy_peak",
                converter: None,
                prefix: None,
                suffix: Some(SUFFIX_ENERGY),
                emphasize: true,
            },
        ],
    },
    // Off-peak costs
    ItemSpec {
        content: ItemContent::Label("Off-Peak"),
        attributes: &[
            AttributeSpec {
                entity_id: "sensor.daily_energy_cost_offpeak",
                converter: Some(Converter::Currency),
                prefix: Some(PREFIX_CURRENCY),
                suffix: None,
                emphasize: false,
            },
            AttributeSpec {
                entity_id: "sensor.daily_energy_offpeak",
                converter: None,
                prefix: None,
                suffix: Some(SUFFIX_ENERGY),
                emphasize: true,
            },
        ],
    },
    // Total costs
    ItemSpec {
        content: ItemContent::Label("Total"),
        attributes: &[
            AttributeSpec {
                entity_id: "sensor.daily_energy_cost_all",
                converter: Some(Converter::Currency),
                prefix: Some(PREFIX_CURRENCY),
                suffix: None,
                emphasize: false,
            },
            AttributeSpec {
                entity_id: "sensor.givtcp_import_energy_today_kwh",
                converter: None,
                prefix: None,
                suffix: Some(SUFFIX_ENERGY),
                emphasize: true,
            },
        ],
    },
];

// =============================================================================
// Unit Tests
// =============================================================================
