/// Data layer: schema, loading, caching, and derived views.
///
/// Architecture:
/// ```text
///  Tabela_Clubes_2014.csv
///        │
///        ▼
///   ┌──────────┐
///   │  loader   │  parse + normalize → ClubTable
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  cache    │  memoize per path → Arc<ClubTable>
///   └──────────┘
///        │
///        ▼
///   ┌──────────┐
///   │  views    │  (table, selection) → sorted rows, highlight, metrics
///   └──────────┘
/// ```
pub mod cache;
pub mod loader;
pub mod model;
pub mod views;
