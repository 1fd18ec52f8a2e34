/// Data layer: CPI rows, loading, filtering and writing.
///
/// Architecture:
/// ```text
///   data.csv (StatCan CPI table)
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  header lookup, parse REF_DATE / VALUE → Dataset
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  filter   │  year >= min_year, food allow-list (+ All-items)
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  writer   │  REF_DATE, GEO, Products and product groups, VALUE
///   └──────────┘
/// ```

pub mod columns;
pub mod filter;
pub mod loader;
pub mod model;
pub mod writer;
