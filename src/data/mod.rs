/// Data layer: core types, loading, normalization, filtering and aggregation.
///
/// Architecture:
/// ```text
///  remote .csv (Drive file id) / local .csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  fetch + parse → raw CSV records
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ normalize  │  header names, title-case cities, numeric salaries
///   └───────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ Dataset   │  Vec<JobRecord>, sorted distinct cities
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  keep rows of the selected city
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │ summary   │  salary histogram + density, top localities
///   └──────────┘
/// ```

pub mod error;
pub mod filter;
pub mod loader;
pub mod model;
pub mod normalize;
pub mod summary;
