/// Data layer: core types, loading, and filtering.
///
/// Architecture:
/// ```text
///  .csv / .json / .parquet
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate file → LaunchDataset
///   └──────────┘
///        │
///        ▼
///   ┌───────────────┐
///   │ LaunchDataset  │  Vec<LaunchRecord>, site / category index
///   └───────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  payload interval → ordered subsequence
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod filter;
