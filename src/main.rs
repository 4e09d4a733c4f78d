use anyhow::{bail, Context, Result};

use careroute::{extract, format};

fn main() -> Result<()> {
    env_logger::init();

    let mut args = std::env::args().skip(1);
    let Some(payload_path) = args.next() else {
        bail!("usage: careroute <payload.csv> [result.json]");
    };
    let json_path = args.next();

    let raw = std::fs::read_to_string(&payload_path)
        .with_context(|| format!("reading payload {payload_path}"))?;
    let result = extract(&raw)?;

    let summary = &result.summary;
    println!(
        "Total savings:  {}",
        format::format_currency(summary.total_savings_currency)
    );
    println!(
        "Total distance: {}",
        format::format_distance(summary.total_distance_km)
    );
    println!(
        "Total time:     {}",
        format::format_duration(summary.total_duration_hours)
    );
    println!("Total CO2:      {}", format::format_co2(summary.total_co2_kg));
    println!("Total trips:    {}", format::format_trips(summary.total_trips));
    println!(
        "Map data:       {} communities, {} clinics, {} routes",
        result.communities.len(),
        result.clinics.len(),
        result.routes.len()
    );

    if let Some(path) = json_path {
        let json = serde_json::to_string_pretty(&result).context("serializing result")?;
        std::fs::write(&path, json).with_context(|| format!("writing {path}"))?;
        println!("Result written to {path}");
    }

    Ok(())
}
