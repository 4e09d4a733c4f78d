use pretty_assertions::assert_eq;

use careroute::{extract, ExtractError, SavingsSummary};

const SCENARIO_HEADER: &str = "Title,Latitude,Longitude,Nearest Clinic,Clinic Latitude,\
Clinic Longitude,Google Distance (km),Duration (hours),\
WITH_total_distance,WITHOUT_total_distance";

fn scenario_payload() -> String {
    format!(
        "{SCENARIO_HEADER}\n\
         \"Townsville\",50.1,-97.2,\"Central Clinic\",50.5,-97.0,12.3,0.4,100,150\n"
    )
}

#[test]
fn extraction_is_deterministic() {
    let payload = scenario_payload();
    assert_eq!(extract(&payload).unwrap(), extract(&payload).unwrap());
}

#[test]
fn full_scenario_extracts_summary_entities_and_route() {
    let result = extract(&scenario_payload()).unwrap();

    assert_eq!(result.summary.total_distance_km, 50.0);
    assert_eq!(result.summary.total_savings_currency, 25.0);
    assert_eq!(result.summary.total_duration_hours, 0.0);
    assert_eq!(result.summary.total_co2_kg, 0.0);
    assert_eq!(result.summary.total_trips, 0.0);

    assert_eq!(result.communities.len(), 1);
    let community = &result.communities[0];
    assert_eq!(community.name, "Townsville");
    assert_eq!(community.lat, 50.1);
    assert_eq!(community.lng, -97.2);

    assert_eq!(result.clinics.len(), 1);
    let clinic = &result.clinics[0];
    assert_eq!(clinic.name, "Central Clinic");
    assert_eq!(clinic.lat, 50.5);
    assert_eq!(clinic.lng, -97.0);

    assert_eq!(result.routes.len(), 1);
    let route = &result.routes[0];
    assert_eq!(route.from, "Townsville");
    assert_eq!(route.to, "Central Clinic");
    assert_eq!(route.distance_km, 12.3);
    assert_eq!(route.duration_hours, 0.4);
}

#[test]
fn header_only_payload_yields_empty_result_without_error() {
    let result = extract(SCENARIO_HEADER).unwrap();
    assert_eq!(result.summary, SavingsSummary::default());
    assert!(result.communities.is_empty());
    assert!(result.clinics.is_empty());
    assert!(result.routes.is_empty());
}

#[test]
fn empty_and_whitespace_payloads_are_rejected() {
    assert_eq!(extract(""), Err(ExtractError::EmptyPayload));
    assert_eq!(extract("  \n\t\n  "), Err(ExtractError::EmptyPayload));
}

#[test]
fn removing_one_pair_side_zeroes_that_field_only() {
    let payload = "WITH_total_distance,WITH_total_duration,WITHOUT_total_duration\n\
                   100,2.0,5.5\n";
    let summary = extract(payload).unwrap().summary;
    assert_eq!(summary.total_distance_km, 0.0);
    assert_eq!(summary.total_savings_currency, 0.0);
    assert_eq!(summary.total_duration_hours, 3.5);
}

#[test]
fn identical_titles_deduplicate_to_one_community() {
    let payload = format!(
        "{SCENARIO_HEADER}\n\
         Townsville,50.1,-97.2,Central Clinic,50.5,-97.0,12.3,0.4,100,150\n\
         Townsville,50.1,-97.2,Central Clinic,50.5,-97.0,12.3,0.4,80,90\n"
    );
    let result = extract(&payload).unwrap();
    assert_eq!(result.communities.len(), 1);
    // Both rows still aggregate and both still emit a route.
    assert_eq!(result.summary.total_distance_km, 60.0);
    assert_eq!(result.routes.len(), 2);
}

#[test]
fn duplicate_title_with_different_coordinates_keeps_first_seen() {
    let payload = format!(
        "{SCENARIO_HEADER}\n\
         Townsville,50.1,-97.2,Central Clinic,50.5,-97.0,12.3,0.4,100,150\n\
         Townsville,61.0,-99.9,Central Clinic,50.5,-97.0,12.3,0.4,0,0\n"
    );
    let communities = extract(&payload).unwrap().communities;
    assert_eq!(communities.len(), 1);
    assert_eq!(communities[0].lat, 50.1);
    assert_eq!(communities[0].lng, -97.2);
}

#[test]
fn quoted_title_is_stored_without_quote_characters() {
    let payload = format!(
        "{SCENARIO_HEADER}\n\
         \"Lake View\",50.1,-97.2,Central Clinic,50.5,-97.0,12.3,0.4,100,150\n"
    );
    let result = extract(&payload).unwrap();
    assert_eq!(result.communities[0].name, "Lake View");
    assert_eq!(result.routes[0].from, "Lake View");
}

#[test]
fn zero_latitude_excludes_the_community() {
    let payload = format!(
        "{SCENARIO_HEADER}\n\
         Townsville,0,-97.2,Central Clinic,50.5,-97.0,12.3,0.4,100,150\n"
    );
    let result = extract(&payload).unwrap();
    assert!(result.communities.is_empty());
    // Summary aggregation is untouched by geometry filtering.
    assert_eq!(result.summary.total_distance_km, 50.0);
}

#[test]
fn raw_payload_is_carried_through_verbatim() {
    let payload = scenario_payload();
    let result = extract(&payload).unwrap();
    assert_eq!(result.raw_payload, payload);
}

#[test]
fn crlf_payload_extracts_like_lf() {
    let lf = scenario_payload();
    let crlf = lf.replace('\n', "\r\n");

    let from_lf = extract(&lf).unwrap();
    let from_crlf = extract(&crlf).unwrap();

    assert_eq!(from_lf.summary, from_crlf.summary);
    assert_eq!(from_lf.communities, from_crlf.communities);
    assert_eq!(from_lf.clinics, from_crlf.clinics);
    assert_eq!(from_lf.routes, from_crlf.routes);
}

#[test]
fn ragged_rows_degrade_to_zero_contributions() {
    let payload = format!(
        "{SCENARIO_HEADER}\n\
         Townsville,50.1\n\
         Riverton,49.0,-96.5,Central Clinic,50.5,-97.0,8.0,0.2,10,40\n"
    );
    let result = extract(&payload).unwrap();
    // The short row contributes nothing; the complete row works normally.
    assert_eq!(result.communities.len(), 1);
    assert_eq!(result.communities[0].name, "Riverton");
    assert_eq!(result.summary.total_distance_km, 30.0);
}

#[test]
fn result_serializes_to_the_renderer_contract() {
    let result = extract(&scenario_payload()).unwrap();
    let json = serde_json::to_value(&result).unwrap();

    assert_eq!(json["summary"]["totalDistanceKm"], 50.0);
    assert_eq!(json["summary"]["totalSavingsCurrency"], 25.0);
    assert_eq!(json["communities"][0]["name"], "Townsville");
    assert_eq!(json["routes"][0]["from"], "Townsville");
    let color = json["routes"][0]["displayColor"].as_str().unwrap();
    assert!(color.starts_with('#') && color.len() == 7);
    assert_eq!(json["rawPayload"], scenario_payload());
}
