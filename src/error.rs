use thiserror::Error;

/// Domain errors raised while loading and analysing the table.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error("label code {0} is outside 0..=2")]
    InvalidLabel(i64),

    #[error("column '{column}' has invalid measurement {value}")]
    InvalidMeasurement { column: String, value: f64 },

    #[error("unknown column '{0}'")]
    UnknownColumn(String),

    #[error("dataset has no records")]
    EmptyDataset,
}
