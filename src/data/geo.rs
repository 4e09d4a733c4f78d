use std::collections::BTreeSet;

use log::{debug, warn};

use super::columns::GeoColumns;
use super::model::{Clinic, Community, Route};
use super::table::{numeric_cell, string_cell, RawTable};
use crate::color;

// ---------------------------------------------------------------------------
// GeoExtract – the geospatial slice of one extraction
// ---------------------------------------------------------------------------

/// Deduplicated entity lists plus the ordered route list.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct GeoExtract {
    pub communities: Vec<Community>,
    pub clinics: Vec<Clinic>,
    pub routes: Vec<Route>,
}

// ---------------------------------------------------------------------------
// Geospatial Extractor
// ---------------------------------------------------------------------------

/// Derive the geospatial graph from the payload table.
///
/// Per row: a community candidate from `Title`/`Latitude`/`Longitude`, a
/// clinic candidate from `Nearest Clinic`/`Clinic Latitude`/
/// `Clinic Longitude`, and a route when name, clinic, distance and duration
/// are all usable. Entities are deduplicated by exact name with the first
/// occurrence winning; routes are not deduplicated, since distinct
/// communities legitimately share a clinic.
pub fn extract_geospatial(table: &RawTable) -> GeoExtract {
    let cols = GeoColumns::locate(&table.headers);

    let community_cols = cols.community();
    let clinic_cols = cols.clinic();
    let route_cols = cols.route();
    if community_cols.is_none() {
        warn!("community columns unresolved; community extraction disabled");
    }
    if clinic_cols.is_none() {
        warn!("clinic columns unresolved; clinic extraction disabled");
    }
    if route_cols.is_none() {
        warn!("route columns unresolved; route extraction disabled");
    }

    let mut out = GeoExtract::default();
    let mut seen_communities: BTreeSet<String> = BTreeSet::new();
    let mut seen_clinics: BTreeSet<String> = BTreeSet::new();

    for row in &table.rows {
        if let Some((title_idx, lat_idx, lng_idx)) = community_cols {
            let name = string_cell(row, title_idx);
            let lat = numeric_cell(row, lat_idx);
            let lng = numeric_cell(row, lng_idx);
            if !name.is_empty()
                && coordinate_present(lat)
                && coordinate_present(lng)
                && seen_communities.insert(name.clone())
            {
                out.communities.push(Community { name, lat, lng });
            }
        }

        if let Some((name_idx, lat_idx, lng_idx)) = clinic_cols {
            let name = string_cell(row, name_idx);
            let lat = numeric_cell(row, lat_idx);
            let lng = numeric_cell(row, lng_idx);
            if !name.is_empty()
                && coordinate_present(lat)
                && coordinate_present(lng)
                && seen_clinics.insert(name.clone())
            {
                out.clinics.push(Clinic { name, lat, lng });
            }
        }

        if let Some((from_idx, to_idx, dist_idx, dur_idx)) = route_cols {
            let from = string_cell(row, from_idx);
            let to = string_cell(row, to_idx);
            let distance_km = numeric_cell(row, dist_idx);
            let duration_hours = numeric_cell(row, dur_idx);
            if !from.is_empty()
                && !to.is_empty()
                && coordinate_present(distance_km)
                && coordinate_present(duration_hours)
            {
                let display_color = color::route_color(out.routes.len());
                out.routes.push(Route {
                    from,
                    to,
                    distance_km,
                    duration_hours,
                    display_color,
                });
            }
        }
    }

    debug!(
        "geospatial extraction: {} communities, {} clinics, {} routes from {} rows",
        out.communities.len(),
        out.clinics.len(),
        out.routes.len(),
        table.len()
    );
    out
}

/// Zero reads as "absent", not as an equatorial/prime-meridian coordinate:
/// the source domain (named regional facilities) never legitimately sits at
/// zero. Non-finite values are rejected the same way.
fn coordinate_present(value: f64) -> bool {
    value != 0.0 && value.is_finite()
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
