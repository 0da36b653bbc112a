use eframe::egui::{Color32, Ui};
use egui_plot::{Bar, BarChart, GridMark, Legend, Line, Plot, PlotPoints, Points};

use crate::charts::{self, ChartLabels};
use crate::color::SpeciesColors;

// ---------------------------------------------------------------------------
// Chart renderers (one per chart window)
// ---------------------------------------------------------------------------

fn base_plot(id: &str, labels: &ChartLabels) -> Plot<'static> {
    Plot::new(id.to_string())
        .x_axis_label(labels.x_label.clone())
        .y_axis_label(labels.y_label.clone())
        .allow_boxed_zoom(true)
        .allow_drag(true)
        .allow_scroll(true)
        .allow_zoom(true)
}

/// Column value against record index.
pub fn line_plot(ui: &mut Ui, chart: &charts::LineChart) {
    base_plot("line_plot", &chart.labels)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            let points: PlotPoints = chart.points.iter().copied().collect();
            let line = Line::new(points)
                .name(&chart.series_name)
                .color(Color32::LIGHT_BLUE)
                .width(1.5);
            plot_ui.line(line);
        });
}

/// Mean per label code; the x axis shows display names instead of codes.
pub fn bar_plot(ui: &mut Ui, chart: &charts::BarChart, colors: &SpeciesColors) {
    let names: Vec<(usize, String)> = chart
        .bars
        .iter()
        .map(|(species, name, _)| (species.index(), name.clone()))
        .collect();

    base_plot("bar_plot", &chart.labels)
        .x_axis_formatter(move |mark: GridMark, _range| {
            let idx = mark.value.round();
            if (mark.value - idx).abs() > f64::EPSILON || idx < 0.0 {
                return String::new();
            }
            names
                .iter()
                .find(|(i, _)| *i == idx as usize)
                .map(|(_, name)| name.clone())
                .unwrap_or_default()
        })
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = chart
                .bars
                .iter()
                .map(|(species, name, height)| {
                    Bar::new(species.index() as f64, *height)
                        .name(name)
                        .width(0.6)
                        .fill(colors.color_for(*species))
                })
                .collect();
            plot_ui.bar_chart(BarChart::new(bars));
        });
}

/// Binned counts with the scaled density curve on top.
pub fn histogram_plot(ui: &mut Ui, chart: &charts::HistogramChart) {
    let width = chart.histogram.bin_width();

    base_plot("histogram_plot", &chart.labels)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            let bars: Vec<Bar> = chart
                .histogram
                .centers()
                .into_iter()
                .zip(&chart.histogram.counts)
                .map(|(x, &count)| Bar::new(x, count as f64).width(width))
                .collect();
            plot_ui.bar_chart(
                BarChart::new(bars)
                    .name("count")
                    .color(Color32::from_rgb(70, 130, 180)),
            );

            let curve: PlotPoints = chart.density.iter().copied().collect();
            plot_ui.line(
                Line::new(curve)
                    .name("density")
                    .color(Color32::from_rgb(20, 60, 120))
                    .width(2.0),
            );
        });
}

/// Two columns against each other, one coloured series per label.
pub fn scatter_plot(ui: &mut Ui, chart: &charts::ScatterChart, colors: &SpeciesColors) {
    ui.label(chart.legend_title.as_str());
    base_plot("scatter_plot", &chart.labels)
        .legend(Legend::default())
        .show(ui, |plot_ui| {
            for group in &chart.groups {
                let points: PlotPoints = group.points.iter().copied().collect();
                plot_ui.points(
                    Points::new(points)
                        .name(&group.name)
                        .color(colors.color_for(group.species))
                        .radius(3.0),
                );
            }
        });
}
