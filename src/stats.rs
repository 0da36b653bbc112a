//! Summary statistics over a cleaned [`Dataset`].
//!
//! Everything here is pure: the functions read the table and return derived
//! values, nothing is cached on the dataset.

use std::collections::BTreeMap;
use std::f64::consts::PI;

use crate::data::model::{Dataset, Feature, Species};

// ---------------------------------------------------------------------------
// Descriptive statistics
// ---------------------------------------------------------------------------

/// `describe()`-style summary of one numeric column.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColumnSummary {
    pub count: usize,
    pub mean: f64,
    /// Sample standard deviation (n - 1 denominator).
    pub std: f64,
    pub min: f64,
    pub q1: f64,
    pub median: f64,
    pub q3: f64,
    pub max: f64,
}

impl ColumnSummary {
    /// Summarise a column.  Empty input yields count 0 and NaN everywhere.
    pub fn new(values: &[f64]) -> Self {
        let mut sorted = values.to_vec();
        sorted.sort_by(f64::total_cmp);

        let (Some(&min), Some(&max)) = (sorted.first(), sorted.last()) else {
            return ColumnSummary {
                count: 0,
                mean: f64::NAN,
                std: f64::NAN,
                min: f64::NAN,
                q1: f64::NAN,
                median: f64::NAN,
                q3: f64::NAN,
                max: f64::NAN,
            };
        };

        ColumnSummary {
            count: sorted.len(),
            mean: mean(&sorted),
            std: sample_std(&sorted),
            min,
            q1: quantile_sorted(&sorted, 0.25),
            median: quantile_sorted(&sorted, 0.5),
            q3: quantile_sorted(&sorted, 0.75),
            max,
        }
    }
}

/// One [`ColumnSummary`] per feature, in column order.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryStatistics {
    pub columns: Vec<(Feature, ColumnSummary)>,
}

impl SummaryStatistics {
    pub fn get(&self, feature: Feature) -> Option<&ColumnSummary> {
        self.columns
            .iter()
            .find(|(f, _)| *f == feature)
            .map(|(_, s)| s)
    }
}

pub fn describe(dataset: &Dataset) -> SummaryStatistics {
    let columns = Feature::ALL
        .into_iter()
        .map(|f| (f, ColumnSummary::new(&dataset.column(f))))
        .collect();
    SummaryStatistics { columns }
}

// ---------------------------------------------------------------------------
// Grouped means
// ---------------------------------------------------------------------------

/// Per-label column means, ordered by label code.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GroupedMeans {
    pub groups: BTreeMap<Species, [f64; 4]>,
}

impl GroupedMeans {
    pub fn get(&self, species: Species, feature: Feature) -> Option<f64> {
        self.groups.get(&species).map(|m| m[feature.index()])
    }
}

/// Mean of every feature for each label that occurs in the table.
pub fn group_means(dataset: &Dataset) -> GroupedMeans {
    let mut sums: BTreeMap<Species, ([f64; 4], [usize; 4])> = BTreeMap::new();
    for record in &dataset.records {
        let Some(species) = record.target else {
            continue;
        };
        let (sum, n) = sums.entry(species).or_insert(([0.0; 4], [0; 4]));
        for (i, value) in record.measurements.iter().enumerate() {
            if let Some(v) = value {
                sum[i] += v;
                n[i] += 1;
            }
        }
    }

    let groups = sums
        .into_iter()
        .map(|(species, (sum, n))| {
            let mut means = [f64::NAN; 4];
            for i in 0..4 {
                if n[i] > 0 {
                    means[i] = sum[i] / n[i] as f64;
                }
            }
            (species, means)
        })
        .collect();
    GroupedMeans { groups }
}

/// Mean of one column, optionally restricted to a single label.
pub fn column_mean(dataset: &Dataset, feature: Feature, species: Option<Species>) -> f64 {
    match species {
        Some(s) => mean(&dataset.column_for(feature, s)),
        None => mean(&dataset.column(feature)),
    }
}

// ---------------------------------------------------------------------------
// Distribution helpers (histogram + KDE)
// ---------------------------------------------------------------------------

/// Equal-width histogram.
#[derive(Debug, Clone, PartialEq)]
pub struct Histogram {
    /// `bins + 1` ascending edges.
    pub edges: Vec<f64>,
    pub counts: Vec<usize>,
}

impl Histogram {
    /// Bin `values` into `bins` equal-width bins spanning `[min, max]`.
    /// The last bin is closed on the right so every value lands in a bin.
    pub fn new(values: &[f64], bins: usize) -> Self {
        let bins = bins.max(1);
        let (mut lo, mut hi) = values
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), &v| {
                (lo.min(v), hi.max(v))
            });
        if values.is_empty() {
            lo = 0.0;
            hi = 1.0;
        } else if hi - lo < f64::EPSILON {
            lo -= 0.5;
            hi += 0.5;
        }

        let width = (hi - lo) / bins as f64;
        let edges: Vec<f64> = (0..=bins).map(|i| lo + width * i as f64).collect();
        let mut counts = vec![0usize; bins];
        for &v in values {
            let idx = (((v - lo) / width).floor() as usize).min(bins - 1);
            counts[idx] += 1;
        }

        Histogram { edges, counts }
    }

    pub fn bin_width(&self) -> f64 {
        match (self.edges.first(), self.edges.last()) {
            (Some(lo), Some(hi)) if !self.counts.is_empty() => (hi - lo) / self.counts.len() as f64,
            _ => 0.0,
        }
    }

    pub fn total(&self) -> usize {
        self.counts.iter().sum()
    }

    /// Centre of each bin, for drawing bars.
    pub fn centers(&self) -> Vec<f64> {
        self.edges.windows(2).map(|w| (w[0] + w[1]) / 2.0).collect()
    }
}

/// Gaussian kernel density estimate evaluated on `grid`, Scott's-rule
/// bandwidth.  Returns all zeros when fewer than two distinct values exist.
pub fn gaussian_kde(values: &[f64], grid: &[f64]) -> Vec<f64> {
    let n = values.len();
    let std = sample_std(values);
    if n < 2 || std.is_nan() || std <= 0.0 {
        return vec![0.0; grid.len()];
    }

    let bandwidth = std * (n as f64).powf(-1.0 / 5.0);
    let norm = 1.0 / (n as f64 * bandwidth * (2.0 * PI).sqrt());
    grid.iter()
        .map(|&x| {
            let sum: f64 = values
                .iter()
                .map(|&xi| {
                    let z = (x - xi) / bandwidth;
                    (-0.5 * z * z).exp()
                })
                .sum();
            sum * norm
        })
        .collect()
}

/// `points` evenly spaced values spanning `[lo, hi]`.
pub fn linspace(lo: f64, hi: f64, points: usize) -> Vec<f64> {
    match points {
        0 => Vec::new(),
        1 => vec![lo],
        _ => {
            let step = (hi - lo) / (points - 1) as f64;
            (0..points).map(|i| lo + step * i as f64).collect()
        }
    }
}

// -- scalar helpers --

fn mean(values: &[f64]) -> f64 {
    if values.is_empty() {
        return f64::NAN;
    }
    values.iter().sum::<f64>() / values.len() as f64
}

fn sample_std(values: &[f64]) -> f64 {
    let n = values.len();
    if n < 2 {
        return f64::NAN;
    }
    let m = mean(values);
    let ss: f64 = values.iter().map(|v| (v - m).powi(2)).sum();
    (ss / (n - 1) as f64).sqrt()
}

/// Linear interpolation between closest ranks; `sorted` must be ascending.
fn quantile_sorted(sorted: &[f64], q: f64) -> f64 {
    if sorted.is_empty() {
        return f64::NAN;
    }
    let pos = q * (sorted.len() - 1) as f64;
    let lo = pos.floor() as usize;
    let hi = pos.ceil() as usize;
    let frac = pos - lo as f64;
    sorted[lo] + (sorted[hi] - sorted[lo]) * frac
}
