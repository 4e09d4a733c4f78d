use serde::Serialize;

// ---------------------------------------------------------------------------
// SavingsSummary – the scalar KPI block
// ---------------------------------------------------------------------------

/// Fixed conversion rate from kilometres saved to currency units.
///
/// A deliberately simple placeholder estimate. It is applied once to the
/// accumulated distance total and must never be confused with a
/// backend-computed currency figure.
pub const SAVINGS_RATE_PER_KM: f64 = 0.5;

/// Signed savings totals, one per tracked metric pair.
///
/// Every field is the sum of `without − with` across rows where both paired
/// columns exist; a row missing either side of a pair contributes 0 to that
/// field only. `total_savings_currency` is derived from the distance total,
/// not independently summed.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SavingsSummary {
    pub total_distance_km: f64,
    pub total_duration_hours: f64,
    #[serde(rename = "totalCO2Kg")]
    pub total_co2_kg: f64,
    pub total_trips: f64,
    pub total_savings_currency: f64,
}

// ---------------------------------------------------------------------------
// Geospatial entities
// ---------------------------------------------------------------------------

/// A community, identified by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Community {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A clinic, identified by name.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Clinic {
    pub name: String,
    pub lat: f64,
    pub lng: f64,
}

/// A weighted directed edge from a community to its nearest clinic.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Route {
    /// Community name.
    pub from: String,
    /// Clinic name.
    pub to: String,
    pub distance_km: f64,
    pub duration_hours: f64,
    /// Opaque `#rrggbb` token assigned at extraction time; cosmetic only.
    pub display_color: String,
}

// ---------------------------------------------------------------------------
// ExtractionResult – the engine's sole output
// ---------------------------------------------------------------------------

/// Everything derived from one payload, handed to the renderer as-is.
///
/// Communities and clinics are deduplicated by name (first occurrence wins)
/// and kept in first-seen payload order. `raw_payload` carries the original
/// text verbatim so the caller can offer an unmodified re-download.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtractionResult {
    pub summary: SavingsSummary,
    pub communities: Vec<Community>,
    pub clinics: Vec<Clinic>,
    pub routes: Vec<Route>,
    pub raw_payload: String,
}
