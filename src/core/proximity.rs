use crate::core::distance::haversine_distance;
use crate::models::{Donor, GeoPoint, NearbyDonor};

/// Radius applied when a nearby search does not specify one, in kilometers
pub const DEFAULT_RADIUS_KM: f64 = 10.0;

/// Parameters for a proximity search.
///
/// The origin is mandatory; callers building a query from untrusted input
/// must reject missing coordinates before a `ProximityQuery` can exist.
/// `blood_group` is an exact, case-sensitive match.
#[derive(Debug, Clone)]
pub struct ProximityQuery {
    pub origin: GeoPoint,
    pub blood_group: Option<String>,
    pub radius_km: f64,
}

impl ProximityQuery {
    pub fn new(origin: GeoPoint) -> Self {
        Self {
            origin,
            blood_group: None,
            radius_km: DEFAULT_RADIUS_KM,
        }
    }

    pub fn with_blood_group(mut self, blood_group: Option<String>) -> Self {
        self.blood_group = blood_group;
        self
    }

    pub fn with_radius_km(mut self, radius_km: f64) -> Self {
        self.radius_km = radius_km;
        self
    }
}

/// Filter donors by great-circle distance from the query origin.
///
/// Single linear scan, in input order:
/// 1. If a blood group is given, keep only exact matches.
/// 2. Drop donors without a complete coordinate pair.
/// 3. Keep donors within `radius_km` (inclusive boundary).
///
/// Each surviving donor is returned with its distance in kilometers,
/// rounded to 2 decimal places. An empty input or an empty result is an
/// empty vector, never an error. Inputs are not mutated.
pub fn filter_by_proximity(candidates: &[Donor], query: &ProximityQuery) -> Vec<NearbyDonor> {
    candidates
        .iter()
        .filter(|donor| match &query.blood_group {
            Some(group) => donor.blood_group == *group,
            None => true,
        })
        .filter_map(|donor| {
            let location = donor.location()?;
            let distance = haversine_distance(query.origin, location);

            if distance <= query.radius_km {
                Some(NearbyDonor {
                    donor: donor.clone(),
                    distance: round_km(distance),
                })
            } else {
                None
            }
        })
        .collect()
}

/// Round a distance to 2 decimal places
#[inline]
fn round_km(distance: f64) -> f64 {
    (distance * 100.0).round() / 100.0
}
