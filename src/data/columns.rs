use log::warn;

// ---------------------------------------------------------------------------
// Matching strategies
// ---------------------------------------------------------------------------
//
// Two deliberately separate strategies. Metric columns come from the backend
// and drift (unit suffixes, prefixes), so they match by substring
// containment. Geometry columns are caller-controlled and spelled stably, so
// they match by exact equality. Unifying the two would change matching
// semantics for one of them.

/// Position of the first header containing `fragment`, if any.
pub fn find_containing(headers: &[String], fragment: &str) -> Option<usize> {
    headers.iter().position(|h| h.contains(fragment))
}

/// Position of the first header exactly equal to `name`, if any.
pub fn find_exact(headers: &[String], name: &str) -> Option<usize> {
    headers.iter().position(|h| h == name)
}

// ---------------------------------------------------------------------------
// Metric pairs (WITH / WITHOUT scenario columns)
// ---------------------------------------------------------------------------

/// A paired metric: the same quantity under the WITH-intervention and
/// WITHOUT-intervention scenarios. Per-row savings are `without − with`.
#[derive(Debug, Clone, Copy)]
pub struct MetricPair {
    /// Short label for logging.
    pub name: &'static str,
    pub with_fragment: &'static str,
    pub without_fragment: &'static str,
}

/// The four tracked pairs, in [`crate::data::model::SavingsSummary`] field
/// order. Adding a pair is a one-line edit here plus a summary field.
pub const METRIC_PAIRS: [MetricPair; 4] = [
    MetricPair {
        name: "distance",
        with_fragment: "WITH_total_distance",
        without_fragment: "WITHOUT_total_distance",
    },
    MetricPair {
        name: "duration",
        with_fragment: "WITH_total_duration",
        without_fragment: "WITHOUT_total_duration",
    },
    MetricPair {
        name: "co2",
        with_fragment: "WITH_total_CO2",
        without_fragment: "WITHOUT_total_CO2",
    },
    MetricPair {
        name: "trips",
        with_fragment: "WITH_total_trips",
        without_fragment: "WITHOUT_total_trips",
    },
];

/// Column positions of a pair whose both sides resolved.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResolvedPair {
    pub with_index: usize,
    pub without_index: usize,
}

impl MetricPair {
    /// Resolve both sides against the header row by substring containment.
    ///
    /// `None` when either side is absent; the whole field is then disabled
    /// for the payload while the other pairs keep computing.
    pub fn resolve(&self, headers: &[String]) -> Option<ResolvedPair> {
        let with_index = find_containing(headers, self.with_fragment);
        let without_index = find_containing(headers, self.without_fragment);
        match (with_index, without_index) {
            (Some(with_index), Some(without_index)) => Some(ResolvedPair {
                with_index,
                without_index,
            }),
            _ => {
                warn!(
                    "metric pair '{}' incomplete (with={:?}, without={:?}); field disabled",
                    self.name, with_index, without_index
                );
                None
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Geometry columns
// ---------------------------------------------------------------------------

/// Exactly-matched geometry column positions, one `Option` per role.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GeoColumns {
    pub title: Option<usize>,
    pub latitude: Option<usize>,
    pub longitude: Option<usize>,
    pub clinic: Option<usize>,
    pub clinic_latitude: Option<usize>,
    pub clinic_longitude: Option<usize>,
    pub distance_km: Option<usize>,
    pub duration_hours: Option<usize>,
}

impl GeoColumns {
    /// Resolve every geometry role against the header row.
    pub fn locate(headers: &[String]) -> Self {
        GeoColumns {
            title: find_exact(headers, "Title"),
            latitude: find_exact(headers, "Latitude"),
            longitude: find_exact(headers, "Longitude"),
            clinic: find_exact(headers, "Nearest Clinic"),
            clinic_latitude: find_exact(headers, "Clinic Latitude"),
            clinic_longitude: find_exact(headers, "Clinic Longitude"),
            distance_km: find_exact(headers, "Google Distance (km)"),
            duration_hours: find_exact(headers, "Duration (hours)"),
        }
    }

    /// `(title, latitude, longitude)` when community extraction is possible.
    pub fn community(&self) -> Option<(usize, usize, usize)> {
        Some((self.title?, self.latitude?, self.longitude?))
    }

    /// `(name, latitude, longitude)` when clinic extraction is possible.
    pub fn clinic(&self) -> Option<(usize, usize, usize)> {
        Some((self.clinic?, self.clinic_latitude?, self.clinic_longitude?))
    }

    /// `(from, to, distance, duration)` when route extraction is possible.
    pub fn route(&self) -> Option<(usize, usize, usize, usize)> {
        Some((
            self.title?,
            self.clinic?,
            self.distance_km?,
            self.duration_hours?,
        ))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
