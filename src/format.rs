// ---------------------------------------------------------------------------
// KPI display formatting
// ---------------------------------------------------------------------------
//
// Each summary field is formatted independently; there is no shared rounding
// rule across fields. Totals are signed (an intervention can cost distance
// instead of saving it) and keep their sign in display.

/// Monetary savings: `$1.2M` from a million up, `$3.4K` from a thousand up,
/// whole units below that.
pub fn format_currency(amount: f64) -> String {
    if amount.abs() >= 1_000_000.0 {
        format!("${:.1}M", amount / 1_000_000.0)
    } else if amount.abs() >= 1_000.0 {
        format!("${:.1}K", amount / 1_000.0)
    } else {
        format!("${amount:.0}")
    }
}

/// Distance savings: `1.2K km` from a thousand kilometres up.
pub fn format_distance(km: f64) -> String {
    if km.abs() >= 1_000.0 {
        format!("{:.1}K km", km / 1_000.0)
    } else {
        format!("{km:.1} km")
    }
}

/// Duration savings: split into days once past 24 hours.
pub fn format_duration(hours: f64) -> String {
    if hours >= 24.0 {
        let days = (hours / 24.0).floor();
        let remaining = hours % 24.0;
        format!("{days:.0}d {remaining:.1}h")
    } else {
        format!("{hours:.1}h")
    }
}

/// CO2 savings in kilograms, one decimal.
pub fn format_co2(kg: f64) -> String {
    format!("{kg:.1} kg")
}

/// Trip-count savings as a whole number.
pub fn format_trips(trips: f64) -> String {
    format!("{trips:.0}")
}
