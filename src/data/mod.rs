/// Data layer: core types, loading, and descriptive statistics.
///
/// Architecture:
/// ```text
///  .csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + validate file → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  Dataset  │  Vec<Record> {Gender, Height, Weight, Index}
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  describe, gender × category counts, observations
///   └──────────┘
/// ```

pub mod loader;
pub mod model;
pub mod stats;
