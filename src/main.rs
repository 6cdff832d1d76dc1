//! Binary entry point: fetch, build, paint, show, exit.
//!
//! The widget is a one-shot program. It fetches sensor states once,
//! resolves the widget tree, paints it onto a simulator display, shows
//! the static frame in a window, and exits when the window closes. The
//! 30 second refresh hint is logged for the host; this process never
//! loops.

use anyhow::Context;
use chrono::Local;
use embedded_graphics::pixelcolor::Rgb888;
use embedded_graphics::prelude::*;
use embedded_graphics_simulator::{OutputSettingsBuilder, SimulatorDisplay, Window};
use tracing::info;

use energy_dashboard::config::{DashboardConfig, SCREEN_HEIGHT, SCREEN_WIDTH};
use energy_dashboard::states::fetch_states;
use energy_dashboard::tree::build_tree;
use energy_dashboard::widgets::{self, TITLE};

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let config = DashboardConfig::new();

    let snapshot = fetch_states(&config).context("fetching sensor states")?;
    let tree = build_tree(&config, &snapshot, Local::now()).context("building widget tree")?;

    let mut display = SimulatorDisplay::<Rgb888>::new(Size::new(SCREEN_WIDTH, SCREEN_HEIGHT));
    widgets::paint(&mut display, &tree).context("painting widget")?;

    info!(
        generated_at = %tree.generated_at,
        refresh_after = %tree.refresh_after,
        "widget rendered"
    );

    let output_settings = OutputSettingsBuilder::new().scale(2).build();
    Window::new(TITLE, &output_settings).show_static(&display);

    Ok(())
}
