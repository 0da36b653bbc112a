/// Data layer: core types, loading, and cleaning.
///
/// Architecture:
/// ```text
///   bundled iris.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse CSV → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record>, label-name lookup
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  clean    │  drop rows with missing cells
///   └──────────┘
/// ```

pub mod clean;
pub mod loader;
pub mod model;
