use serde::{Deserialize, Serialize};

/// A geographic point in decimal degrees (WGS84-style, no datum correction).
///
/// No range validation is performed here; the distance math is defined for
/// any finite pair and input validation belongs to the HTTP layer.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Self { latitude, longitude }
    }
}

/// A registered donor profile
#[derive(Debug, Clone, Serialize, Deserialize, sqlx::FromRow)]
pub struct Donor {
    pub id: i64,
    pub name: String,
    pub email: String,
    pub phone: String,
    #[serde(rename = "bloodGroup")]
    pub blood_group: String,
    pub district: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
    #[serde(rename = "createdAt", default)]
    pub created_at: Option<chrono::DateTime<chrono::Utc>>,
    #[serde(rename = "updatedAt", default)]
    pub updated_at: Option<chrono::DateTime<chrono::Utc>>,
}

impl Donor {
    /// The donor's location, if both coordinates are on record.
    ///
    /// A partial pair counts as no location. Zero is a valid coordinate
    /// (equator, prime meridian); only absent values mean "unlocated".
    pub fn location(&self) -> Option<GeoPoint> {
        match (self.latitude, self.longitude) {
            (Some(latitude), Some(longitude)) => Some(GeoPoint { latitude, longitude }),
            _ => None,
        }
    }
}

/// Donor data accepted at registration, before an id is assigned
#[derive(Debug, Clone)]
pub struct NewDonor {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub blood_group: String,
    pub district: String,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
}

/// Attribute filter for donor listings.
///
/// `blood_group` is an exact, case-sensitive match (blood groups are
/// canonical tokens). `district` matches case-insensitively.
#[derive(Debug, Clone, Default)]
pub struct DonorFilter {
    pub blood_group: Option<String>,
    pub district: Option<String>,
}

/// A donor annotated with the distance from a query origin, in kilometers
/// rounded to 2 decimal places.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyDonor {
    #[serde(flatten)]
    pub donor: Donor,
    pub distance: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn donor(latitude: Option<f64>, longitude: Option<f64>) -> Donor {
        Donor {
            id: 1,
            name: "Test Donor".to_string(),
            email: "test@example.com".to_string(),
            phone: "555-000-0000".to_string(),
            blood_group: "A+".to_string(),
            district: "Mumbai".to_string(),
            latitude,
            longitude,
            created_at: None,
            updated_at: None,
        }
    }

    #[test]
    fn test_location_requires_both_coordinates() {
        assert!(donor(Some(19.0760), Some(72.8777)).location().is_some());
        assert!(donor(Some(19.0760), None).location().is_none());
        assert!(donor(None, Some(72.8777)).location().is_none());
        assert!(donor(None, None).location().is_none());
    }

    #[test]
    fn test_zero_coordinates_are_a_location() {
        let location = donor(Some(0.0), Some(0.0)).location();
        assert_eq!(location, Some(GeoPoint::new(0.0, 0.0)));
    }
}
