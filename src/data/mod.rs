/// Data layer: company records, loading, filtering and statistics.
///
/// Architecture:
/// ```text
///    data.json
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  read + validate → Vec<Company>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  FilterOptions (once), Criteria → matching indices
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  stats    │  count, average revenue, per-country tally
///   └──────────┘
/// ```

pub mod filter;
pub mod loader;
pub mod model;
pub mod stats;
