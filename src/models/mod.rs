// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{Donor, DonorFilter, GeoPoint, NearbyDonor, NewDonor};
pub use requests::{ListDonorsParams, NearbyDonorsParams, RegisterDonorRequest};
pub use responses::{
    DonorListResponse, ErrorResponse, HealthResponse, NearbyDonorsResponse, RegisterDonorResponse,
};
