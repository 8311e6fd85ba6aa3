//! DonorLink - donor directory and proximity search service
//!
//! This library provides the donor lookup used by the DonorLink blood donor
//! app: attribute filtering plus a pure great-circle proximity search over
//! an in-memory snapshot of donor records.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use self::core::{filter_by_proximity, haversine_distance, ProximityQuery, DEFAULT_RADIUS_KM};
pub use self::models::{Donor, DonorFilter, GeoPoint, NearbyDonor, NewDonor};
