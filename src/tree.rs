//! Widget tree construction.
//!
//! The tree is the fully-resolved middle stage of the pipeline: every
//! sensor lookup done, every icon name tiered, every value converted and
//! affixed, every row's geometry computed. Painting then walks the tree
//! without touching the snapshot or the item table, so all fallible work
//! happens here and the paint pass stays mechanical.
//!
//! Failure policy: a missing entity aborts the build (the item table is
//! trusted and a miss means misconfiguration), while a present but
//! non-numeric state under a converter degrades to a placeholder line and
//! a warning.

use core::fmt::Write;

use chrono::{DateTime, Local, TimeDelta};
use heapless::String;
use tracing::warn;

use crate::config::{DashboardConfig, ICON_SIZE_REGULAR, ICON_SIZE_SMALL, ROW_WIDTH,
    VALUE_COMPACT_THRESHOLD};
use crate::error::DashboardError;
use crate::icons::{self, NAME_CAPACITY};
use crate::items::{AttributeSpec, IconSize, ItemContent, ItemSpec, LINE_CAPACITY};
use crate::layout::{RowGeometry, plan_rows, row_geometry};
use crate::states::StateSnapshot;

/// Rendered in place of a value whose converter rejected the raw state.
/// Affixes are dropped so the placeholder stands alone.
pub const PLACEHOLDER: &str = "--";

/// Capacity of the header timestamp string (HH:mm).
const TIME_CAPACITY: usize = 8;

// =============================================================================
// Tree Node Types
// =============================================================================

/// One formatted attribute line of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TextLine {
    /// Final display text, affixes included.
    pub text: String<LINE_CAPACITY>,
    /// Render in the bold value font.
    pub emphasize: bool,
    /// Render in the compact value font with extra bottom padding.
    pub compact: bool,
}

/// Resolved content at the top of a cell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CellContent {
    /// A resolved icon catalog name and its edge length.
    Icon {
        /// Catalog name, tier suffix applied.
        name: String<NAME_CAPACITY>,
        /// Edge length in pixels.
        edge: u32,
    },
    /// A static text label.
    Label(&'static str),
}

/// One cell of the item grid.
#[derive(Debug, Clone)]
pub struct CellNode {
    /// Icon or label.
    pub content: CellContent,
    /// Formatted lines below the content, in item-table order.
    pub lines: Vec<TextLine>,
}

/// One row of cells plus its horizontal geometry.
#[derive(Debug, Clone)]
pub struct RowNode {
    /// Cells on this row, left to right.
    pub cells: Vec<CellNode>,
    /// Pre-computed horizontal offsets for this row.
    pub geometry: RowGeometry,
}

/// The fully-resolved widget, ready to paint.
#[derive(Debug)]
pub struct WidgetTree {
    /// Background fill color.
    pub background: embedded_graphics::pixelcolor::Rgb888,
    /// Wall-clock build time, formatted HH:mm for the header.
    pub generated_at: String<TIME_CAPACITY>,
    /// Earliest time the host should rebuild the widget.
    pub refresh_after: DateTime<Local>,
    /// Item rows, top to bottom.
    pub rows: Vec<RowNode>,
}

// =============================================================================
// Tree Construction
// =============================================================================

/// Resolve one attribute spec to a display line.
fn format_line(attribute: &AttributeSpec, snapshot: &StateSnapshot) -> Result<TextLine, DashboardError> {
    let raw = snapshot.state(attribute.entity_id)?;

    let mut text: String<LINE_CAPACITY> = String::new();
    match attribute.converter {
        Some(converter) => match converter.apply(raw) {
            Some(converted) => {
                let _ = write!(
                    text,
                    "{}{}{}",
                    attribute.prefix.unwrap_or(""),
                    converted,
                    attribute.suffix.unwrap_or("")
                );
            }
            None => {
                warn!(
                    entity_id = attribute.entity_id,
                    state = raw,
                    "state is not numeric, rendering placeholder"
                );
                let _ = write!(text, "{PLACEHOLDER}");
            }
        },
        None => {
            let _ = write!(
                text,
                "{}{}{}",
                attribute.prefix.unwrap_or(""),
                raw,
                attribute.suffix.unwrap_or("")
            );
        }
    }

    let compact = text.chars().count() > VALUE_COMPACT_THRESHOLD;
    Ok(TextLine {
        text,
        emphasize: attribute.emphasize,
        compact,
    })
}

/// Resolve one item spec to a cell node.
fn build_cell(item: &ItemSpec, snapshot: &StateSnapshot) -> Result<CellNode, DashboardError> {
    let content = match item.content {
        ItemContent::Icon {
            symbol,
            variants,
            size,
        } => {
            let name = match variants {
                Some(spec) => {
                    let value = snapshot.numeric(spec.source_entity_id)?;
                    icons::resolve_name(symbol, spec.thresholds, value)
                }
                None => icons::resolve_name(symbol, &[], 0.0),
            };
            let edge = match size {
                IconSize::Regular => ICON_SIZE_REGULAR,
                IconSize::Small => ICON_SIZE_SMALL,
            };
            CellContent::Icon { name, edge }
        }
        ItemContent::Label(label) => CellContent::Label(label),
    };

    let lines = item
        .attributes
        .iter()
        .map(|attribute| format_line(attribute, snapshot))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(CellNode { content, lines })
}

/// Build the widget tree from the configuration and a state snapshot.
pub fn build_tree(
    config: &DashboardConfig,
    snapshot: &StateSnapshot,
    now: DateTime<Local>,
) -> Result<WidgetTree, DashboardError> {
    let mut generated_at: String<TIME_CAPACITY> = String::new();
    let _ = write!(generated_at, "{}", now.format("%H:%M"));

    let refresh_after =
        now + TimeDelta::from_std(config.refresh_interval).unwrap_or_else(|_| TimeDelta::zero());

    let mut rows = Vec::new();
    let mut next_item = 0;
    for cells_in_row in plan_rows(config.items.len(), config.row_capacity) {
        let geometry = row_geometry(ROW_WIDTH, config.row_capacity, cells_in_row);
        let cells = config.items[next_item..next_item + cells_in_row]
            .iter()
            .map(|item| build_cell(item, snapshot))
            .collect::<Result<Vec<_>, _>>()?;
        next_item += cells_in_row;
        rows.push(RowNode { cells, geometry });
    }

    Ok(WidgetTree {
        background: config.background,
        generated_at,
        refresh_after,
        rows,
    })
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use chrono::TimeZone;

    use crate::items::{Converter, ENERGY_ITEMS};
    use crate::states::SensorRecord;

    use super::*;

    fn record(entity_id: &str, state: &str) -> SensorRecord {
        SensorRecord {
            entity_id: entity_id.into(),
            state: state.into(),
        }
    }

    fn full_snapshot() -> StateSnapshot {
        StateSnapshot::from_records(vec![
            record("sensor.givtcp_load_power", "1500"),
            record("sensor.givtcp_load_energy_today_kwh", "12.5"),
            record("sensor.givtcp_pv_power", "230"),
            record("sensor.givtcp_pv_energy_today_kwh", "4.1"),
            record("sensor.givtcp_import_power", "0"),
            record("sensor.givtcp_import_energy_today_kwh", "8.4"),
            record("sensor.givtcp_soc", "75"),
            record("sensor.battery_state", "Charging"),
            record("sensor.daily_energy_cost_peak", "3.5"),
            record("sensor.daily_energy_peak", "4.2"),
            record("sensor.daily_energy_cost_offpeak", "1.25"),
            record("sensor.daily_energy_offpeak", "9.8"),
            record("sensor.daily_energy_cost_all", "4.75"),
        ])
    }

    fn fixed_now() -> DateTime<Local> {
        Local.with_ymd_and_hms(2025, 1, 2, 9, 5, 0).unwrap()
    }

    #[test]
    fn test_tree_shape_and_header() {
        let config = DashboardConfig::new();
        let tree = build_tree(&config, &full_snapshot(), fixed_now()).unwrap();

        assert_eq!(tree.generated_at.as_str(), "09:05");
        assert_eq!(tree.refresh_after - fixed_now(), TimeDelta::seconds(30));
        assert_eq!(tree.rows.len(), 2, "7 items should pack into two rows");
        assert_eq!(tree.rows[0].cells.len(), 4);
        assert_eq!(tree.rows[1].cells.len(), 3);
        assert_eq!(tree.rows[0].geometry.leading_spacer, 0);
        assert_eq!(tree.rows[1].geometry.leading_spacer, 40);
    }

    #[test]
    fn test_tree_formats_lines() {
        let config = DashboardConfig::new();
        let tree = build_tree(&config, &full_snapshot(), fixed_now()).unwrap();

        let house = &tree.rows[0].cells[0];
        assert_eq!(house.lines[0].text.as_str(), "1.50 kW");
        assert!(!house.lines[0].emphasize);
        assert_eq!(house.lines[1].text.as_str(), "12.5 kWh");
        assert!(house.lines[1].emphasize);

        let peak = &tree.rows[1].cells[0];
        assert_eq!(peak.content, CellContent::Label("Peak"));
        assert_eq!(peak.lines[0].text.as_str(), "\u{a3}3.50");
        assert_eq!(peak.lines[1].text.as_str(), "4.2 kWh");
    }

    #[test]
    fn test_tree_resolves_battery_tier() {
        let config = DashboardConfig::new();
        let tree = build_tree(&config, &full_snapshot(), fixed_now()).unwrap();

        let battery = &tree.rows[0].cells[3];
        match &battery.content {
            CellContent::Icon { name, edge } => {
                assert_eq!(name.as_str(), "battery.75");
                assert_eq!(*edge, 30);
            }
            other => panic!("expected icon content, got {other:?}"),
        }
        assert_eq!(battery.lines[0].text.as_str(), "Charging");
        assert_eq!(battery.lines[1].text.as_str(), "75%");
    }

    #[test]
    fn test_non_numeric_state_becomes_placeholder() {
        let attribute = AttributeSpec {
            entity_id: "sensor.givtcp_load_power",
            converter: Some(Converter::WattsToKilowatts),
            prefix: Some("\u{a3}"),
            suffix: Some(" kW"),
            emphasize: false,
        };
        let snapshot =
            StateSnapshot::from_records(vec![record("sensor.givtcp_load_power", "unavailable")]);

        let line = format_line(&attribute, &snapshot).unwrap();
        // Placeholder stands alone; affixes are dropped
        assert_eq!(line.text.as_str(), PLACEHOLDER);
    }

    #[test]
    fn test_missing_entity_aborts_build() {
        let config = DashboardConfig::new();
        let snapshot = StateSnapshot::from_records(vec![record("sensor.givtcp_load_power", "1")]);

        let err = build_tree(&config, &snapshot, fixed_now()).unwrap_err();
        assert!(matches!(err, DashboardError::Lookup { .. }));
    }

    #[test]
    fn test_long_value_flagged_compact() {
        let attribute = AttributeSpec {
            entity_id: "sensor.givtcp_import_power",
            converter: Some(Converter::WattsToKilowatts),
            prefix: None,
            suffix: Some(" kW"),
            emphasize: false,
        };
        let snapshot =
            StateSnapshot::from_records(vec![record("sensor.givtcp_import_power", "12345678")]);

        // "12345.68 kW" is 11 characters, past the compact threshold
        let line = format_line(&attribute, &snapshot).unwrap();
        assert_eq!(line.text.as_str(), "12345.68 kW");
        assert!(line.compact);

        let short = ENERGY_ITEMS[0].attributes[0];
        let line = format_line(&short, &full_snapshot()).unwrap();
        assert!(!line.compact, "\"1.50 kW\" is under the threshold");
    }
}
