use super::model::{Dataset, Feature, TARGET_COLUMN};

// ---------------------------------------------------------------------------
// Missing-value inspection
// ---------------------------------------------------------------------------

/// Null count per column, in table order.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MissingCounts {
    pub measurements: [usize; 4],
    pub target: usize,
}

impl MissingCounts {
    pub fn total(&self) -> usize {
        self.measurements.iter().sum::<usize>() + self.target
    }

    /// `(column_name, null_count)` pairs, features first then the label.
    pub fn per_column(&self) -> Vec<(&'static str, usize)> {
        Feature::ALL
            .iter()
            .map(|f| (f.column_name(), self.measurements[f.index()]))
            .chain(std::iter::once((TARGET_COLUMN, self.target)))
            .collect()
    }
}

pub fn missing_counts(dataset: &Dataset) -> MissingCounts {
    let mut counts = MissingCounts::default();
    for record in &dataset.records {
        for (slot, value) in counts.measurements.iter_mut().zip(&record.measurements) {
            if value.is_none() {
                *slot += 1;
            }
        }
        if record.target.is_none() {
            counts.target += 1;
        }
    }
    counts
}

// ---------------------------------------------------------------------------
// Row removal
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CleanOutcome {
    /// At least one row had a missing cell and was removed.
    Dropped { rows: usize },
    NoneFound,
}

impl CleanOutcome {
    /// Status line printed after cleaning.
    pub fn message(&self) -> &'static str {
        match self {
            CleanOutcome::Dropped { .. } => "Missing values dropped.",
            CleanOutcome::NoneFound => "No missing values found.",
        }
    }
}

/// Drop every record that has any missing cell.  No imputation.
pub fn clean(mut dataset: Dataset) -> (Dataset, CleanOutcome) {
    if missing_counts(&dataset).total() == 0 {
        return (dataset, CleanOutcome::NoneFound);
    }
    let before = dataset.len();
    dataset.records.retain(|r| !r.has_missing());
    let rows = before - dataset.len();
    (dataset, CleanOutcome::Dropped { rows })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::model::{Record, Species};

    fn sample() -> Dataset {
        let mut with_gap = Record::new([4.9, 3.0, 1.4, 0.2], Species::Setosa);
        with_gap.measurements[2] = None;
        let mut no_label = Record::new([6.3, 3.3, 6.0, 2.5], Species::Virginica);
        no_label.target = None;
        Dataset::new(vec![
            Record::new([5.1, 3.5, 1.4, 0.2], Species::Setosa),
            with_gap,
            Record::new([7.0, 3.2, 4.7, 1.4], Species::Versicolor),
            no_label,
        ])
    }

    #[test]
    fn counts_missing_per_column() {
        let counts = missing_counts(&sample());
        assert_eq!(counts.measurements, [0, 0, 1, 0]);
        assert_eq!(counts.target, 1);
        assert_eq!(counts.total(), 2);
        assert_eq!(counts.per_column()[2], ("petal length (cm)", 1));
        assert_eq!(counts.per_column()[4], ("target", 1));
    }

    #[test]
    fn drops_rows_with_any_missing_cell() {
        let (cleaned, outcome) = clean(sample());
        assert_eq!(outcome, CleanOutcome::Dropped { rows: 2 });
        assert_eq!(outcome.message(), "Missing values dropped.");
        assert_eq!(cleaned.len(), 2);
        assert_eq!(missing_counts(&cleaned).total(), 0);
    }

    #[test]
    fn cleaning_is_idempotent() {
        let (once, _) = clean(sample());
        let (twice, outcome) = clean(once.clone());
        assert_eq!(outcome, CleanOutcome::NoneFound);
        assert_eq!(once.records, twice.records);
    }
}
