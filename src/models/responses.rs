use serde::{Deserialize, Serialize};
use crate::models::domain::{Donor, NearbyDonor};

/// Response for successful donor registration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RegisterDonorResponse {
    pub message: String,
    pub donor: Donor,
}

/// Response for the donor listing endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DonorListResponse {
    pub donors: Vec<Donor>,
    pub count: usize,
}

/// Response for the nearby donor search endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NearbyDonorsResponse {
    pub donors: Vec<NearbyDonor>,
    pub count: usize,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
