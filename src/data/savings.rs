use log::debug;

use super::columns::{ResolvedPair, METRIC_PAIRS};
use super::model::{SavingsSummary, SAVINGS_RATE_PER_KM};
use super::table::{numeric_cell, RawTable};

// ---------------------------------------------------------------------------
// Metric Differencer
// ---------------------------------------------------------------------------

/// Reduce the WITH/WITHOUT metric pairs into signed savings totals.
///
/// Each resolved pair accumulates `without − with` over every row; a pair
/// with either column absent contributes a zero total, and malformed or
/// missing cells count as zero rather than skipping the row. The currency
/// figure is derived once at the end from the distance total. Never fails:
/// a table with no matching columns yields an all-zero summary.
pub fn compute_savings(table: &RawTable) -> SavingsSummary {
    let resolved: Vec<Option<ResolvedPair>> = METRIC_PAIRS
        .iter()
        .map(|pair| pair.resolve(&table.headers))
        .collect();
    debug!(
        "savings pairs resolved: {}/{} over {} rows",
        resolved.iter().filter(|p| p.is_some()).count(),
        METRIC_PAIRS.len(),
        table.len()
    );

    let mut totals = [0.0_f64; 4];
    for row in &table.rows {
        for (total, pair) in totals.iter_mut().zip(&resolved) {
            if let Some(pair) = pair {
                let with_value = numeric_cell(row, pair.with_index);
                let without_value = numeric_cell(row, pair.without_index);
                *total += without_value - with_value;
            }
        }
    }

    let [total_distance_km, total_duration_hours, total_co2_kg, total_trips] = totals;
    SavingsSummary {
        total_distance_km,
        total_duration_hours,
        total_co2_kg,
        total_trips,
        total_savings_currency: total_distance_km * SAVINGS_RATE_PER_KM,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
