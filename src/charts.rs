//! Chart models.
//!
//! Each chart is built from the cleaned dataset into a plain value holding
//! its title, axis labels and series.  Rendering lives in [`crate::ui`];
//! nothing here touches the GUI, so the models can be checked in tests.

use crate::config::{HISTOGRAM_BINS, KDE_POINTS};
use crate::data::model::{Dataset, Feature, Species};
use crate::error::AnalysisError;
use crate::stats::{Histogram, column_mean, gaussian_kde, linspace};

/// Title and axis labels shared by every chart.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartLabels {
    pub title: String,
    pub x_label: String,
    pub y_label: String,
}

impl ChartLabels {
    fn new(title: &str, x_label: &str, y_label: &str) -> Self {
        ChartLabels {
            title: title.to_string(),
            x_label: x_label.to_string(),
            y_label: y_label.to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// The four chart kinds
// ---------------------------------------------------------------------------

/// One column against record index.
#[derive(Debug, Clone, PartialEq)]
pub struct LineChart {
    pub labels: ChartLabels,
    pub series_name: String,
    pub points: Vec<[f64; 2]>,
}

/// One bar per label code, in code order.
#[derive(Debug, Clone, PartialEq)]
pub struct BarChart {
    pub labels: ChartLabels,
    /// `(label, display_name, height)`; labels with no values are absent.
    pub bars: Vec<(Species, String, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct HistogramChart {
    pub labels: ChartLabels,
    pub histogram: Histogram,
    /// Density curve scaled to bin counts.
    pub density: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterGroup {
    pub species: Species,
    pub name: String,
    pub points: Vec<[f64; 2]>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScatterChart {
    pub labels: ChartLabels,
    pub legend_title: String,
    pub groups: Vec<ScatterGroup>,
}

/// The four charts of one run.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSet {
    pub line: LineChart,
    pub bar: BarChart,
    pub histogram: HistogramChart,
    pub scatter: ScatterChart,
}

// ---------------------------------------------------------------------------
// Builders
// ---------------------------------------------------------------------------

/// Build all four charts.  An empty dataset has nothing to draw and fails.
pub fn build_charts(
    dataset: &Dataset,
    target_names: &[String; 3],
) -> Result<ChartSet, AnalysisError> {
    if dataset.is_empty() {
        return Err(AnalysisError::EmptyDataset);
    }

    let set = ChartSet {
        line: line_chart(dataset, Feature::PetalLength),
        bar: bar_chart(dataset, Feature::PetalLength, target_names),
        histogram: histogram_chart(dataset, Feature::SepalWidth, HISTOGRAM_BINS),
        scatter: scatter_chart(
            dataset,
            Feature::SepalLength,
            Feature::PetalLength,
            target_names,
        ),
    };
    log::debug!(
        "built charts: {} line points, {} bars, {} bins, {} scatter groups",
        set.line.points.len(),
        set.bar.bars.len(),
        set.histogram.histogram.counts.len(),
        set.scatter.groups.len()
    );
    Ok(set)
}

pub fn line_chart(dataset: &Dataset, feature: Feature) -> LineChart {
    let name = feature.axis_title();
    let title = format!("{} Over Samples", name.trim_end_matches(" (cm)"));

    // x is the source row, so rows removed by cleaning leave a gap.
    let points = dataset
        .records
        .iter()
        .filter_map(|r| r.get(feature).map(|v| [r.row as f64, v]))
        .collect();

    LineChart {
        labels: ChartLabels::new(&title, "Sample Index", name),
        series_name: name.to_string(),
        points,
    }
}

pub fn bar_chart(dataset: &Dataset, feature: Feature, target_names: &[String; 3]) -> BarChart {
    let short = feature.axis_title().trim_end_matches(" (cm)");
    // A label with no remaining values has no mean and gets no bar.
    let bars = Species::ALL
        .into_iter()
        .filter_map(|s| {
            let mean = column_mean(dataset, feature, Some(s));
            (!mean.is_nan()).then(|| (s, target_names[s.index()].clone(), mean))
        })
        .collect();

    BarChart {
        labels: ChartLabels::new(
            &format!("Average {short} per Species"),
            "Species",
            &format!("Average {}", feature.axis_title()),
        ),
        bars,
    }
}

pub fn histogram_chart(dataset: &Dataset, feature: Feature, bins: usize) -> HistogramChart {
    let values = dataset.column(feature);
    let histogram = Histogram::new(&values, bins);

    let (lo, hi) = match (histogram.edges.first(), histogram.edges.last()) {
        (Some(&lo), Some(&hi)) => (lo, hi),
        _ => (0.0, 0.0),
    };
    let grid = linspace(lo, hi, KDE_POINTS);
    let scale = values.len() as f64 * histogram.bin_width();
    let density = grid
        .iter()
        .zip(gaussian_kde(&values, &grid))
        .map(|(&x, d)| [x, d * scale])
        .collect();

    let short = feature.axis_title().trim_end_matches(" (cm)");
    HistogramChart {
        labels: ChartLabels::new(
            &format!("Distribution of {short}"),
            feature.axis_title(),
            "Frequency",
        ),
        histogram,
        density,
    }
}

pub fn scatter_chart(
    dataset: &Dataset,
    x: Feature,
    y: Feature,
    target_names: &[String; 3],
) -> ScatterChart {
    let groups = Species::ALL
        .into_iter()
        .map(|s| {
            let points = dataset
                .records
                .iter()
                .filter(|r| r.target == Some(s))
                .filter_map(|r| Some([r.get(x)?, r.get(y)?]))
                .collect();
            ScatterGroup {
                species: s,
                name: target_names[s.index()].clone(),
                points,
            }
        })
        .collect();

    let short = |f: Feature| f.axis_title().trim_end_matches(" (cm)");
    ScatterChart {
        labels: ChartLabels::new(
            &format!("{} vs {} by Species", short(x), short(y)),
            x.axis_title(),
            y.axis_title(),
        ),
        legend_title: "Species".to_string(),
        groups,
    }
}
