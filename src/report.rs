//! Plain-text tables for the console report.
//!
//! Each table is assembled as an Arrow [`RecordBatch`] and printed with
//! `arrow::util::pretty`, so missing cells render as empty and columns line
//! up without hand-rolled padding.

use std::sync::Arc;

use anyhow::Result;
use arrow::array::{ArrayRef, Float64Array, Int64Array, StringArray, UInt64Array};
use arrow::datatypes::{DataType, Field, Schema};
use arrow::record_batch::RecordBatch;
use arrow::util::pretty::pretty_format_batches;

use crate::data::clean::MissingCounts;
use crate::data::model::{Dataset, Feature, TARGET_COLUMN};
use crate::stats::{GroupedMeans, SummaryStatistics};

// ---------------------------------------------------------------------------
// Table renderings
// ---------------------------------------------------------------------------

/// First `n` rows of the table.
pub fn head(dataset: &Dataset, n: usize) -> Result<String> {
    let rows = &dataset.records[..n.min(dataset.len())];

    let mut fields = Vec::with_capacity(5);
    let mut columns: Vec<ArrayRef> = Vec::with_capacity(5);
    for feature in Feature::ALL {
        fields.push(Field::new(feature.column_name(), DataType::Float64, true));
        let values: Vec<Option<f64>> = rows.iter().map(|r| r.get(feature)).collect();
        columns.push(Arc::new(Float64Array::from(values)));
    }
    fields.push(Field::new(TARGET_COLUMN, DataType::Int64, true));
    let targets: Vec<Option<i64>> = rows.iter().map(|r| r.target.map(|s| s.code())).collect();
    columns.push(Arc::new(Int64Array::from(targets)));

    render(fields, columns)
}

/// Column overview: entry count, then non-null count and dtype per column.
pub fn info(dataset: &Dataset, missing: &MissingCounts) -> Result<String> {
    let per_column = missing.per_column();
    let names: Vec<&str> = per_column.iter().map(|(name, _)| *name).collect();
    let non_null: Vec<u64> = per_column
        .iter()
        .map(|(_, nulls)| (dataset.len() - nulls) as u64)
        .collect();
    let dtypes: Vec<&str> = per_column
        .iter()
        .map(|(name, _)| if *name == TARGET_COLUMN { "int64" } else { "float64" })
        .collect();

    let table = render(
        vec![
            Field::new("Column", DataType::Utf8, false),
            Field::new("Non-Null Count", DataType::UInt64, false),
            Field::new("Dtype", DataType::Utf8, false),
        ],
        vec![
            Arc::new(StringArray::from(names)),
            Arc::new(UInt64Array::from(non_null)),
            Arc::new(StringArray::from(dtypes)),
        ],
    )?;
    Ok(format!(
        "{} entries, {} columns\n{table}",
        dataset.len(),
        per_column.len()
    ))
}

/// Null count per column.
pub fn missing(missing: &MissingCounts) -> Result<String> {
    let per_column = missing.per_column();
    let names: Vec<&str> = per_column.iter().map(|(name, _)| *name).collect();
    let counts: Vec<u64> = per_column.iter().map(|(_, n)| *n as u64).collect();
    render(
        vec![
            Field::new("Column", DataType::Utf8, false),
            Field::new("Missing", DataType::UInt64, false),
        ],
        vec![
            Arc::new(StringArray::from(names)),
            Arc::new(UInt64Array::from(counts)),
        ],
    )
}

/// count / mean / std / min / quartiles / max, one column per feature.
pub fn describe(summary: &SummaryStatistics) -> Result<String> {
    const STATS: [&str; 8] = ["count", "mean", "std", "min", "25%", "50%", "75%", "max"];

    let mut fields = vec![Field::new("", DataType::Utf8, false)];
    let mut columns: Vec<ArrayRef> = vec![Arc::new(StringArray::from(STATS.to_vec()))];
    for (feature, s) in &summary.columns {
        fields.push(Field::new(feature.column_name(), DataType::Float64, false));
        let values = [
            s.count as f64,
            s.mean,
            s.std,
            s.min,
            s.q1,
            s.median,
            s.q3,
            s.max,
        ]
        .map(round6);
        columns.push(Arc::new(Float64Array::from(values.to_vec())));
    }

    render(fields, columns)
}

/// One row per label code with every feature mean.
pub fn group_means(means: &GroupedMeans) -> Result<String> {
    let mut fields = vec![Field::new(TARGET_COLUMN, DataType::Int64, false)];
    let codes: Vec<i64> = means.groups.keys().map(|s| s.code()).collect();
    let mut columns: Vec<ArrayRef> = vec![Arc::new(Int64Array::from(codes))];
    for feature in Feature::ALL {
        fields.push(Field::new(feature.column_name(), DataType::Float64, false));
        let values: Vec<f64> = means
            .groups
            .values()
            .map(|m| round6(m[feature.index()]))
            .collect();
        columns.push(Arc::new(Float64Array::from(values)));
    }

    render(fields, columns)
}

// -- helpers --

fn render(fields: Vec<Field>, columns: Vec<ArrayRef>) -> Result<String> {
    let batch = RecordBatch::try_new(Arc::new(Schema::new(fields)), columns)?;
    Ok(pretty_format_batches(&[batch])?.to_string())
}

fn round6(v: f64) -> f64 {
    (v * 1e6).round() / 1e6
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::clean::missing_counts;
    use crate::data::loader::load_iris;
    use crate::data::model::{Record, Species};
    use crate::stats;

    #[test]
    fn head_shows_first_rows_and_all_columns() {
        let ds = load_iris().unwrap();
        let table = head(&ds, 5).unwrap();
        assert!(table.contains("sepal length (cm)"));
        assert!(table.contains("target"));
        assert!(table.contains("5.1"));
        // 5 data rows + header row, each framed by a `|` line.
        assert_eq!(table.lines().filter(|l| l.starts_with('|')).count(), 6);
    }

    #[test]
    fn head_renders_missing_cells_empty() {
        let mut r = Record::new([5.1, 3.5, 1.4, 0.2], Species::Setosa);
        r.measurements[0] = None;
        let table = head(&Dataset::new(vec![r]), 5).unwrap();
        assert!(!table.contains("5.1"));
        assert!(table.contains("3.5"));
    }

    #[test]
    fn info_reports_entries_and_dtypes() {
        let ds = load_iris().unwrap();
        let text = info(&ds, &missing_counts(&ds)).unwrap();
        assert!(text.starts_with("150 entries, 5 columns"));
        assert!(text.contains("float64"));
        assert!(text.contains("int64"));
    }

    #[test]
    fn describe_and_group_tables_have_expected_rows() {
        let ds = load_iris().unwrap();
        let text = describe(&stats::describe(&ds)).unwrap();
        for label in ["count", "mean", "std", "min", "25%", "50%", "75%", "max"] {
            assert!(text.contains(label), "missing {label}");
        }

        let text = group_means(&stats::group_means(&ds)).unwrap();
        assert!(text.contains("1.462"));
        assert!(text.contains("5.552"));
    }

    #[test]
    fn missing_table_lists_every_column() {
        let ds = load_iris().unwrap();
        let text = missing(&missing_counts(&ds)).unwrap();
        for f in Feature::ALL {
            assert!(text.contains(f.column_name()));
        }
        assert!(text.contains("Missing"));
    }
}
