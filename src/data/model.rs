use std::fmt;

use crate::error::AnalysisError;

// ---------------------------------------------------------------------------
// Species – the categorical label column
// ---------------------------------------------------------------------------

/// Display names of the three label codes, in code order.
pub const TARGET_NAMES: [&str; 3] = ["setosa", "versicolor", "virginica"];

/// A label code.  Only 0, 1 and 2 are representable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Species {
    Setosa = 0,
    Versicolor = 1,
    Virginica = 2,
}

impl Species {
    pub const ALL: [Species; 3] = [Species::Setosa, Species::Versicolor, Species::Virginica];

    pub fn code(self) -> i64 {
        self as i64
    }

    /// Position of this label in the 3-entry name lookup.
    pub fn index(self) -> usize {
        self as usize
    }

    pub fn from_code(code: i64) -> Result<Self, AnalysisError> {
        match code {
            0 => Ok(Species::Setosa),
            1 => Ok(Species::Versicolor),
            2 => Ok(Species::Virginica),
            other => Err(AnalysisError::InvalidLabel(other)),
        }
    }
}

impl fmt::Display for Species {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}

// ---------------------------------------------------------------------------
// Feature – the four numeric measurement columns
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Feature {
    SepalLength = 0,
    SepalWidth = 1,
    PetalLength = 2,
    PetalWidth = 3,
}

/// Name of the label column in the source table.
pub const TARGET_COLUMN: &str = "target";

impl Feature {
    pub const ALL: [Feature; 4] = [
        Feature::SepalLength,
        Feature::SepalWidth,
        Feature::PetalLength,
        Feature::PetalWidth,
    ];

    pub fn index(self) -> usize {
        self as usize
    }

    /// Column name exactly as it appears in the source table.
    pub fn column_name(self) -> &'static str {
        match self {
            Feature::SepalLength => "sepal length (cm)",
            Feature::SepalWidth => "sepal width (cm)",
            Feature::PetalLength => "petal length (cm)",
            Feature::PetalWidth => "petal width (cm)",
        }
    }

    /// Title-cased label used on chart axes.
    pub fn axis_title(self) -> &'static str {
        match self {
            Feature::SepalLength => "Sepal Length (cm)",
            Feature::SepalWidth => "Sepal Width (cm)",
            Feature::PetalLength => "Petal Length (cm)",
            Feature::PetalWidth => "Petal Width (cm)",
        }
    }

    pub fn from_column_name(name: &str) -> Result<Self, AnalysisError> {
        Feature::ALL
            .into_iter()
            .find(|f| f.column_name() == name)
            .ok_or_else(|| AnalysisError::UnknownColumn(name.to_string()))
    }
}

impl fmt::Display for Feature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

// ---------------------------------------------------------------------------
// Record – one row of the table
// ---------------------------------------------------------------------------

/// One sample.  `None` marks a missing cell.
#[derive(Debug, Clone, PartialEq)]
pub struct Record {
    /// 0-based position in the source table; survives row removal.
    pub row: usize,
    pub measurements: [Option<f64>; 4],
    pub target: Option<Species>,
}

impl Record {
    pub fn new(measurements: [f64; 4], target: Species) -> Self {
        Record {
            row: 0,
            measurements: measurements.map(Some),
            target: Some(target),
        }
    }

    pub fn at_row(mut self, row: usize) -> Self {
        self.row = row;
        self
    }

    pub fn get(&self, feature: Feature) -> Option<f64> {
        self.measurements[feature.index()]
    }

    pub fn has_missing(&self) -> bool {
        self.target.is_none() || self.measurements.iter().any(Option::is_none)
    }
}

// ---------------------------------------------------------------------------
// Dataset – the complete loaded table
// ---------------------------------------------------------------------------

/// The loaded table plus the label-name lookup.
#[derive(Debug, Clone)]
pub struct Dataset {
    /// All records, in source order.
    pub records: Vec<Record>,
    /// Display name for each label code, indexed by [`Species::index`].
    pub target_names: [String; 3],
}

impl Dataset {
    pub fn new(records: Vec<Record>) -> Self {
        Dataset {
            records,
            target_names: TARGET_NAMES.map(String::from),
        }
    }

    /// Number of records.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty.
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Present values of one column, in record order.
    pub fn column(&self, feature: Feature) -> Vec<f64> {
        self.records.iter().filter_map(|r| r.get(feature)).collect()
    }

    /// Present values of one column restricted to a single label.
    pub fn column_for(&self, feature: Feature, species: Species) -> Vec<f64> {
        self.records
            .iter()
            .filter(|r| r.target == Some(species))
            .filter_map(|r| r.get(feature))
            .collect()
    }

    pub fn target_name(&self, species: Species) -> &str {
        &self.target_names[species.index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn species_codes_round_trip_through_lookup() {
        for s in Species::ALL {
            assert_eq!(Species::from_code(s.code()).unwrap(), s);
        }
        assert!(matches!(
            Species::from_code(3),
            Err(AnalysisError::InvalidLabel(3))
        ));
    }

    #[test]
    fn feature_lookup_by_column_name() {
        assert_eq!(
            Feature::from_column_name("petal length (cm)").unwrap(),
            Feature::PetalLength
        );
        assert!(Feature::from_column_name("petal length").is_err());
    }

    #[test]
    fn record_reports_missing_cells() {
        let mut r = Record::new([5.1, 3.5, 1.4, 0.2], Species::Setosa);
        assert!(!r.has_missing());
        r.measurements[1] = None;
        assert!(r.has_missing());

        let mut r = Record::new([5.1, 3.5, 1.4, 0.2], Species::Setosa);
        r.target = None;
        assert!(r.has_missing());
    }

    #[test]
    fn column_skips_missing_values() {
        let mut a = Record::new([1.0, 2.0, 3.0, 4.0], Species::Setosa);
        a.measurements[0] = None;
        let b = Record::new([5.0, 6.0, 7.0, 8.0], Species::Virginica);
        let ds = Dataset::new(vec![a, b]);

        assert_eq!(ds.column(Feature::SepalLength), vec![5.0]);
        assert_eq!(ds.column(Feature::PetalWidth), vec![4.0, 8.0]);
        assert_eq!(ds.column_for(Feature::PetalWidth, Species::Virginica), vec![8.0]);
        assert_eq!(ds.target_name(Species::Versicolor), "versicolor");
    }
}
