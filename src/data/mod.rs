/// Data layer: payload parsing, column resolution, and the two reducers.
///
/// Architecture:
/// ```text
///  raw delimited text
///        │
///        ▼
///   ┌──────────┐
///   │  table    │  split lines/fields → RawTable
///   └──────────┘
///        │
///        ├──────────────────────┐
///        ▼                      ▼
///   ┌──────────┐          ┌──────────┐
///   │ savings   │          │   geo     │
///   └──────────┘          └──────────┘
///   WITH/WITHOUT pairs     communities, clinics,
///   → SavingsSummary       routes (GeoExtract)
/// ```
///
/// The two reducers are independent and order-irrelevant; `columns` holds
/// the role→position resolution both of them build on.
pub mod columns;
pub mod geo;
pub mod model;
pub mod savings;
pub mod table;
