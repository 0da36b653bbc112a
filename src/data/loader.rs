use std::io::Read;

use anyhow::{Context, Result};
use serde::Deserialize;

use super::model::{Dataset, Feature, Record, Species};
use crate::error::AnalysisError;

/// The Iris table shipped with the binary (150 rows, label codes 0..=2).
const IRIS_CSV: &str = include_str!("../../assets/iris.csv");

// ---------------------------------------------------------------------------
// Public entry-points
// ---------------------------------------------------------------------------

/// Load the bundled Iris dataset.
pub fn load_iris() -> Result<Dataset> {
    load_csv_reader(IRIS_CSV.as_bytes()).context("loading bundled iris dataset")
}

/// Parse a CSV table with the Iris schema.
///
/// Expected header row:
///
/// ```text
/// sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target
/// ```
///
/// Empty cells and the usual pandas null spellings (`NA`, `NaN`, `null`)
/// become missing values; anything else must parse.
pub fn load_csv_reader<R: Read>(reader: R) -> Result<Dataset> {
    let mut reader = csv::Reader::from_reader(reader);

    let headers = reader.headers().context("reading CSV headers")?.clone();
    for required in Feature::ALL
        .iter()
        .map(|f| f.column_name())
        .chain(std::iter::once(super::model::TARGET_COLUMN))
    {
        if !headers.iter().any(|h| h == required) {
            return Err(AnalysisError::UnknownColumn(required.to_string()))
                .context("CSV is missing a required column");
        }
    }

    let mut records = Vec::new();
    for (row_no, result) in reader.deserialize::<RawRow>().enumerate() {
        // Messages count data rows from 1; `Record::row` keeps the 0-based index.
        let raw = result.with_context(|| format!("CSV row {}", row_no + 1))?;
        let record = raw
            .into_record(row_no)
            .with_context(|| format!("CSV row {}", row_no + 1))?;
        records.push(record);
    }

    log::debug!("parsed {} records", records.len());
    Ok(Dataset::new(records))
}

// ---------------------------------------------------------------------------
// Row decoding
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawRow {
    #[serde(rename = "sepal length (cm)")]
    sepal_length: Option<String>,
    #[serde(rename = "sepal width (cm)")]
    sepal_width: Option<String>,
    #[serde(rename = "petal length (cm)")]
    petal_length: Option<String>,
    #[serde(rename = "petal width (cm)")]
    petal_width: Option<String>,
    target: Option<String>,
}

impl RawRow {
    fn into_record(self, row: usize) -> Result<Record> {
        let cells = [
            self.sepal_length,
            self.sepal_width,
            self.petal_length,
            self.petal_width,
        ];

        let mut measurements = [None; 4];
        for (feature, cell) in Feature::ALL.into_iter().zip(cells) {
            measurements[feature.index()] = parse_measurement(feature, cell.as_deref())?;
        }

        let target = match non_null(self.target.as_deref()) {
            None => None,
            Some(tok) => {
                let code: i64 = tok
                    .parse()
                    .with_context(|| format!("target: '{tok}' is not an integer"))?;
                Some(Species::from_code(code)?)
            }
        };

        Ok(Record {
            row,
            measurements,
            target,
        })
    }
}

fn parse_measurement(feature: Feature, cell: Option<&str>) -> Result<Option<f64>> {
    let Some(tok) = non_null(cell) else {
        return Ok(None);
    };
    let value: f64 = tok
        .parse()
        .with_context(|| format!("{feature}: '{tok}' is not a number"))?;
    if !value.is_finite() || value < 0.0 {
        return Err(AnalysisError::InvalidMeasurement {
            column: feature.column_name().to_string(),
            value,
        }
        .into());
    }
    Ok(Some(value))
}

/// Trimmed cell text, or `None` for a null cell.
fn non_null(cell: Option<&str>) -> Option<&str> {
    let tok = cell?.trim();
    if tok.is_empty()
        || tok.eq_ignore_ascii_case("na")
        || tok.eq_ignore_ascii_case("nan")
        || tok.eq_ignore_ascii_case("null")
    {
        None
    } else {
        Some(tok)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    const HEADER: &str =
        "sepal length (cm),sepal width (cm),petal length (cm),petal width (cm),target\n";

    #[test]
    fn bundled_iris_has_expected_shape() {
        let ds = load_iris().unwrap();
        assert_eq!(ds.len(), 150);
        assert!(ds.records.iter().all(|r| !r.has_missing()));

        let codes: BTreeSet<i64> = ds
            .records
            .iter()
            .filter_map(|r| r.target.map(Species::code))
            .collect();
        assert_eq!(codes, BTreeSet::from([0, 1, 2]));

        for f in Feature::ALL {
            assert_eq!(ds.column(f).len(), 150);
        }
        assert_eq!(ds.target_names, ["setosa", "versicolor", "virginica"]);
    }

    #[test]
    fn null_spellings_become_missing() {
        let text = format!("{HEADER}5.1,,1.4,NA,0\n4.9,3.0,nan,0.2,\n");
        let ds = load_csv_reader(text.as_bytes()).unwrap();
        assert_eq!(ds.len(), 2);
        assert_eq!(ds.records[0].measurements, [Some(5.1), None, Some(1.4), None]);
        assert_eq!(ds.records[1].get(Feature::PetalLength), None);
        assert_eq!(ds.records[1].target, None);
    }

    #[test]
    fn out_of_range_label_is_rejected() {
        let text = format!("{HEADER}5.1,3.5,1.4,0.2,7\n");
        let err = load_csv_reader(text.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("label code 7"));
    }

    #[test]
    fn rows_keep_their_source_index() {
        let text = format!("{HEADER}5.1,3.5,1.4,0.2,0\n4.9,3.0,1.4,0.2,0\n");
        let ds = load_csv_reader(text.as_bytes()).unwrap();
        let rows: Vec<usize> = ds.records.iter().map(|r| r.row).collect();
        assert_eq!(rows, [0, 1]);
    }

    #[test]
    fn error_context_counts_data_rows_from_one() {
        let text = format!("{HEADER}5.1,3.5,1.4,0.2,0\n4.9,3.0,1.4,0.2,9\n");
        let err = load_csv_reader(text.as_bytes()).unwrap_err();
        let msg = format!("{err:#}");
        assert!(msg.contains("CSV row 2"), "{msg}");
        assert!(!msg.contains("CSV row 1"), "{msg}");
    }

    #[test]
    fn negative_measurement_is_rejected() {
        let text = format!("{HEADER}5.1,-3.5,1.4,0.2,0\n");
        let err = load_csv_reader(text.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("sepal width (cm)"));
    }

    #[test]
    fn missing_column_is_rejected() {
        let text = "sepal length (cm),target\n5.1,0\n";
        let err = load_csv_reader(text.as_bytes()).unwrap_err();
        assert!(format!("{err:#}").contains("unknown column"));
    }
}
