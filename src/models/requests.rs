use serde::{Deserialize, Serialize};
use validator::Validate;

/// Request to register a donor
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RegisterDonorRequest {
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(email)]
    pub email: String,
    #[validate(length(min = 1))]
    pub phone: String,
    #[validate(length(min = 1))]
    #[serde(alias = "blood_group", rename = "bloodGroup")]
    pub blood_group: String,
    #[validate(length(min = 1))]
    #[serde(alias = "District")]
    pub district: String,
    #[serde(default)]
    pub latitude: Option<f64>,
    #[serde(default)]
    pub longitude: Option<f64>,
}

/// Query parameters for the donor listing
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListDonorsParams {
    #[serde(alias = "blood_group", rename = "bloodGroup")]
    pub blood_group: Option<String>,
    #[serde(alias = "District")]
    pub district: Option<String>,
}

/// Query parameters for the nearby donor search.
///
/// `latitude` and `longitude` are optional only at the wire level; the
/// handler rejects a request that lacks either one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyDonorsParams {
    #[serde(alias = "blood_group", rename = "bloodGroup")]
    pub blood_group: Option<String>,
    pub latitude: Option<f64>,
    pub longitude: Option<f64>,
    pub radius: Option<f64>,
}
