//! Fixed analysis parameters.  The run takes no user configuration; these
//! are the values every stage is called with.

/// Number of equal-width bins in the sepal-width histogram.
pub const HISTOGRAM_BINS: usize = 20;

/// Rows shown by the `head` table.
pub const HEAD_ROWS: usize = 5;

/// Grid resolution of the density overlay.
pub const KDE_POINTS: usize = 200;

/// Title of the native viewer window.
pub const WINDOW_TITLE: &str = "Iris Explorer – Charts";

pub const WINDOW_SIZE: [f32; 2] = [1200.0, 800.0];
pub const WINDOW_MIN_SIZE: [f32; 2] = [600.0, 400.0];

/// Default size of each chart window inside the viewer.
pub const CHART_SIZE: [f32; 2] = [560.0, 340.0];
