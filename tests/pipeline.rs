//! End-to-end pipeline test: decode a realistic states payload, build the
//! widget tree, and paint it. Exercises every stage except the network
//! fetch.

use chrono::{Local, TimeZone};
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::SimulatorDisplay;

use energy_dashboard::colors::BACKGROUND;
use energy_dashboard::config::{DashboardConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use energy_dashboard::states::decode_states;
use energy_dashboard::tree::{CellContent, build_tree};
use energy_dashboard::widgets::paint;

/// A states payload the way Home Assistant actually serves it: referenced
/// sensors mixed with unrelated entities, every record carrying extra
/// fields.
const STATES_BODY: &str = r#"[
    {"entity_id": "sun.sun", "state": "above_horizon", "attributes": {}},
    {"entity_id": "sensor.givtcp_load_power", "state": "1500",
     "attributes": {"unit_of_measurement": "W"},
     "last_changed": "2025-01-02T09:04:58+00:00"},
    {"entity_id": "sensor.givtcp_load_energy_today_kwh", "state": "12.5"},
    {"entity_id": "sensor.givtcp_pv_power", "state": "230"},
    {"entity_id": "sensor.givtcp_pv_energy_today_kwh", "state": "4.1"},
    {"entity_id": "sensor.givtcp_import_power", "state": "0"},
    {"entity_id": "sensor.givtcp_import_energy_today_kwh", "state": "8.4"},
    {"entity_id": "sensor.givtcp_soc", "state": "62"},
    {"entity_id": "sensor.battery_state", "state": "Charging"},
    {"entity_id": "sensor.daily_energy_cost_peak", "state": "3.5"},
    {"entity_id": "sensor.daily_energy_peak", "state": "4.2"},
    {"entity_id": "sensor.daily_energy_cost_offpeak", "state": "1.25"},
    {"entity_id": "sensor.daily_energy_offpeak", "state": "9.8"},
    {"entity_id": "sensor.daily_energy_cost_all", "state": "4.75"},
    {"entity_id": "light.kitchen", "state": "off"},
    {"entity_id": "binary_sensor.front_door", "state": "off"}
]"#;

#[test]
fn decode_build_paint_round_trip() {
    let snapshot = decode_states(STATES_BODY).expect("payload should decode");
    assert_eq!(snapshot.len(), 16, "all records decode, referenced or not");

    let config = DashboardConfig::new();
    let now = Local.with_ymd_and_hms(2025, 1, 2, 9, 5, 0).unwrap();
    let tree = build_tree(&config, &snapshot, now).expect("tree should build");

    // Seven items pack into a full row of four and a centered row of three
    assert_eq!(tree.generated_at.as_str(), "09:05");
    assert_eq!(tree.rows.len(), 2);
    assert_eq!(tree.rows[0].cells.len(), 4);
    assert_eq!(tree.rows[1].cells.len(), 3);
    assert_eq!(tree.rows[1].geometry.leading_spacer, 40);
    assert_eq!(tree.rows[1].geometry.cell_width, 80);

    // House load: watts converted to kilowatts, daily energy emphasized
    let house = &tree.rows[0].cells[0];
    assert_eq!(house.lines[0].text.as_str(), "1.50 kW");
    assert_eq!(house.lines[1].text.as_str(), "12.5 kWh");
    assert!(house.lines[1].emphasize);

    // Battery: 62% charge tiers up to the 75 variant
    let battery = &tree.rows[0].cells[3];
    match &battery.content {
        CellContent::Icon { name, .. } => assert_eq!(name.as_str(), "battery.75"),
        other => panic!("expected battery icon, got {other:?}"),
    }
    assert_eq!(battery.lines[0].text.as_str(), "Charging");
    assert_eq!(battery.lines[1].text.as_str(), "62%");

    // Cost cells: currency prefix, two decimals
    assert_eq!(tree.rows[1].cells[0].lines[0].text.as_str(), "\u{a3}3.50");
    assert_eq!(tree.rows[1].cells[1].lines[0].text.as_str(), "\u{a3}1.25");
    assert_eq!(tree.rows[1].cells[2].lines[0].text.as_str(), "\u{a3}4.75");

    // The tree paints without error and fills the background
    let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    paint(&mut display, &tree).expect("paint should succeed");
    assert_eq!(
        display.get_pixel(Point::new(0, (SCREEN_HEIGHT - 1) as i32)),
        BACKGROUND
    );
}

#[test]
fn missing_referenced_sensor_fails_the_build() {
    // Drop the SoC sensor; the battery item's variant lookup must abort
    let body = STATES_BODY.replace("sensor.givtcp_soc", "sensor.renamed_soc");
    let snapshot = decode_states(&body).expect("payload should decode");

    let config = DashboardConfig::new();
    let now = Local.with_ymd_and_hms(2025, 1, 2, 9, 5, 0).unwrap();
    let err = build_tree(&config, &snapshot, now).unwrap_err();
    assert!(err.to_string().contains("sensor.givtcp_soc"));
}
