//! Result extraction and aggregation engine for healthcare access analyses.
//!
//! An external cost/distance-optimization backend emits a row-oriented
//! tabular payload: one row per analyzed community, with paired
//! WITH-intervention / WITHOUT-intervention metric columns and named
//! geospatial columns. [`extract`] turns one such payload into scalar
//! savings totals plus a normalized community/clinic/route graph ready for
//! map rendering.
//!
//! The engine is pure and stateless: no I/O, no retained references, one
//! immutable [`ExtractionResult`] per call. Re-invoking with the same
//! payload always yields a structurally equal result.

pub mod color;
pub mod data;
pub mod error;
pub mod format;

pub use data::geo::GeoExtract;
pub use data::model::{
    Clinic, Community, ExtractionResult, Route, SavingsSummary, SAVINGS_RATE_PER_KM,
};
pub use data::table::{parse, RawTable};
pub use error::ExtractError;

use log::debug;

use data::{geo, savings, table};

/// Run the full extraction pipeline on one raw payload.
///
/// Parses once, then fans out to the two independent reducers (savings
/// totals and the geospatial graph) and merges their output. The original
/// payload text is carried through verbatim so the caller can offer an
/// unmodified re-download.
///
/// Fails only on a payload with no usable header line
/// ([`ExtractError::EmptyPayload`]); every other data problem degrades
/// gracefully per the missing-column and malformed-cell policies.
pub fn extract(raw_text: &str) -> Result<ExtractionResult, ExtractError> {
    let table = table::parse(raw_text)?;
    debug!(
        "parsed payload: {} columns, {} rows",
        table.headers.len(),
        table.len()
    );

    let summary = savings::compute_savings(&table);
    let GeoExtract {
        communities,
        clinics,
        routes,
    } = geo::extract_geospatial(&table);

    Ok(ExtractionResult {
        summary,
        communities,
        clinics,
        routes,
        raw_payload: raw_text.to_string(),
    })
}
