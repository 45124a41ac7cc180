/// Data layer: core types, loading, filtering and aggregation.
///
/// Architecture:
/// ```text
///   heart.csv / .json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse file → HeartDataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────────┐
///   │ HeartDataset  │  Vec<Record>, age range, chest-pain codes
///   └──────────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  age band, sex, chest pain → FilteredView
///   └──────────┘
///        │
///        ▼
///   ┌───────────┐
///   │ aggregate  │  per-topic counts / oldpeak points (+ sex facet switch)
///   └───────────┘
/// ```

pub mod aggregate;
pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
