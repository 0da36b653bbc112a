//! The analysis as an ordered series of stages.
//!
//! ```text
//!   load ──► clean ──► summarize ──► visualize
//! ```
//!
//! Each stage takes the previous stage's output by value or reference and
//! returns its own; nothing is shared between them.  A failed load aborts
//! the run.  The raw-table overview (head, info, null counts) is rendered
//! from the loaded table, before cleaning touches it.

use anyhow::{Context, Result};

use crate::charts::{self, ChartSet};
use crate::config::HEAD_ROWS;
use crate::data::clean::{CleanOutcome, MissingCounts, missing_counts};
use crate::data::loader;
use crate::data::model::Dataset;
use crate::report;
use crate::stats::{self, GroupedMeans, SummaryStatistics};

/// Derived summaries of the cleaned table.
#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub statistics: SummaryStatistics,
    pub grouped_means: GroupedMeans,
}

/// Everything one run produces.
#[derive(Debug, Clone)]
pub struct Analysis {
    /// The cleaned table.
    pub dataset: Dataset,
    /// Overview of the table as loaded, before cleaning.
    pub overview: String,
    pub missing_before: MissingCounts,
    pub clean_outcome: CleanOutcome,
    pub summary: Summary,
    pub charts: ChartSet,
}

// ---------------------------------------------------------------------------
// Stages
// ---------------------------------------------------------------------------

pub fn load() -> Result<Dataset> {
    let dataset = loader::load_iris()?;
    println!("Dataset loaded successfully.");
    log::info!("loaded {} records", dataset.len());
    Ok(dataset)
}

pub fn clean(dataset: Dataset) -> (Dataset, CleanOutcome) {
    let (dataset, outcome) = crate::data::clean::clean(dataset);
    println!("{}", outcome.message());
    if let CleanOutcome::Dropped { rows } = outcome {
        log::info!("dropped {rows} rows with missing values, {} remain", dataset.len());
    }
    (dataset, outcome)
}

pub fn summarize(dataset: &Dataset) -> Summary {
    Summary {
        statistics: stats::describe(dataset),
        grouped_means: stats::group_means(dataset),
    }
}

pub fn visualize(dataset: &Dataset) -> Result<ChartSet> {
    let charts = charts::build_charts(dataset, &dataset.target_names)
        .context("building charts")?;
    Ok(charts)
}

/// Run load → clean → summarize → visualize and collect the results.
pub fn run_analysis() -> Result<Analysis> {
    analyze(load()?)
}

/// Everything after loading: overview of the raw table, then
/// clean → summarize → visualize.
pub fn analyze(loaded: Dataset) -> Result<Analysis> {
    let overview = render_overview(&loaded)?;
    let missing_before = missing_counts(&loaded);
    let (dataset, clean_outcome) = clean(loaded);
    let summary = summarize(&dataset);
    let charts = visualize(&dataset)?;

    Ok(Analysis {
        dataset,
        overview,
        missing_before,
        clean_outcome,
        summary,
        charts,
    })
}

// ---------------------------------------------------------------------------
// Console report
// ---------------------------------------------------------------------------

/// Head, info and null counts of a table as it stands.
pub fn render_overview(dataset: &Dataset) -> Result<String> {
    let missing = missing_counts(dataset);
    Ok(sections([
        ("Head", report::head(dataset, HEAD_ROWS)?),
        ("Info", report::info(dataset, &missing)?),
        ("Missing values", report::missing(&missing)?),
    ]))
}

/// describe() and grouped means of the cleaned table.
pub fn render_summary(summary: &Summary) -> Result<String> {
    Ok(sections([
        ("Summary statistics", report::describe(&summary.statistics)?),
        ("Mean by target", report::group_means(&summary.grouped_means)?),
    ]))
}

/// Full textual report: the raw-table overview followed by the summary.
pub fn render_report(analysis: &Analysis) -> Result<String> {
    Ok(format!(
        "{}{}",
        analysis.overview,
        render_summary(&analysis.summary)?
    ))
}

fn sections<const N: usize>(parts: [(&str, String); N]) -> String {
    let mut out = String::new();
    for (heading, body) in parts {
        out.push_str(&format!("\n== {heading} ==\n{body}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_run_on_bundled_data() {
        let analysis = run_analysis().unwrap();
        assert_eq!(analysis.dataset.len(), 150);
        assert_eq!(analysis.clean_outcome, CleanOutcome::NoneFound);
        assert_eq!(analysis.missing_before.total(), 0);
        assert_eq!(analysis.summary.grouped_means.groups.len(), 3);
    }

    #[test]
    fn overview_describes_the_table_before_cleaning() {
        let text = "\
sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target
5.1,3.5,1.4,0.2,0
4.9,,1.4,0.2,0
7.0,3.2,4.7,1.4,1
6.3,3.3,6.0,2.5,2
";
        let loaded = loader::load_csv_reader(text.as_bytes()).unwrap();
        let analysis = analyze(loaded).unwrap();
        assert_eq!(analysis.dataset.len(), 3);
        assert_eq!(analysis.missing_before.total(), 1);

        // Info and the null-count table describe the same 4-row table.
        assert!(analysis.overview.contains("4 entries, 5 columns"));
        assert!(analysis.overview.contains("4.9"));
        let report = render_report(&analysis).unwrap();
        assert!(report.starts_with(&analysis.overview));
    }

    #[test]
    fn report_contains_every_section() {
        let analysis = run_analysis().unwrap();
        let text = render_report(&analysis).unwrap();
        for heading in ["Head", "Info", "Missing values", "Summary statistics", "Mean by target"] {
            assert!(text.contains(&format!("== {heading} ==")));
        }
    }
}
