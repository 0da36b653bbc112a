use eframe::egui;

use crate::charts::ChartSet;
use crate::color::SpeciesColors;
use crate::config::CHART_SIZE;
use crate::ui::plot;

// ---------------------------------------------------------------------------
// eframe App implementation
// ---------------------------------------------------------------------------

/// Holds the finished charts; drawing never mutates them.
pub struct ChartApp {
    charts: ChartSet,
    colors: SpeciesColors,
}

impl ChartApp {
    pub fn new(charts: ChartSet) -> Self {
        Self {
            charts,
            colors: SpeciesColors::default(),
        }
    }
}

impl eframe::App for ChartApp {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        let [w, h] = CHART_SIZE;
        let charts = &self.charts;
        let colors = &self.colors;

        // One window per chart, tiled 2×2 on first show.
        egui::Window::new(charts.line.labels.title.as_str())
            .default_pos([10.0, 10.0])
            .default_size(CHART_SIZE)
            .show(ctx, |ui| plot::line_plot(ui, &charts.line));

        egui::Window::new(charts.bar.labels.title.as_str())
            .default_pos([w + 30.0, 10.0])
            .default_size(CHART_SIZE)
            .show(ctx, |ui| plot::bar_plot(ui, &charts.bar, colors));

        egui::Window::new(charts.histogram.labels.title.as_str())
            .default_pos([10.0, h + 60.0])
            .default_size(CHART_SIZE)
            .show(ctx, |ui| plot::histogram_plot(ui, &charts.histogram));

        egui::Window::new(charts.scatter.labels.title.as_str())
            .default_pos([w + 30.0, h + 60.0])
            .default_size(CHART_SIZE)
            .show(ctx, |ui| plot::scatter_plot(ui, &charts.scatter, colors));
    }
}
