//! Native chart viewer.

pub mod plot;

use anyhow::Result;
use eframe::egui;

use crate::app::ChartApp;
use crate::charts::ChartSet;
use crate::config::{WINDOW_MIN_SIZE, WINDOW_SIZE, WINDOW_TITLE};

/// Open the viewer and block until the user closes it.
pub fn show_charts(charts: ChartSet) -> Result<()> {
    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_inner_size(WINDOW_SIZE)
            .with_min_inner_size(WINDOW_MIN_SIZE),
        ..Default::default()
    };

    eframe::run_native(
        WINDOW_TITLE,
        options,
        Box::new(|_cc| Ok(Box::new(ChartApp::new(charts)))),
    )
    .map_err(|e| anyhow::anyhow!("chart viewer failed: {e}"))
}
