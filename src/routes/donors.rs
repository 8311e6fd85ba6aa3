use actix_web::{web, HttpResponse, Responder};
use std::sync::Arc;
use validator::Validate;

use crate::core::{filter_by_proximity, ProximityQuery};
use crate::models::{
    DonorFilter, DonorListResponse, ErrorResponse, GeoPoint, HealthResponse, ListDonorsParams,
    NearbyDonorsParams, NearbyDonorsResponse, NewDonor, RegisterDonorRequest,
    RegisterDonorResponse,
};
use crate::services::{DonorStore, StoreError};

/// Application state shared across all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn DonorStore>,
    pub default_radius_km: f64,
}

/// Configure all donor-related routes
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.route("/health", web::get().to(health_check))
        .route("/register", web::post().to(register_donor))
        .route("/donors", web::get().to(list_donors))
        .route("/donors/nearby", web::get().to(nearby_donors));
}

/// Health check endpoint
async fn health_check(state: web::Data<AppState>) -> impl Responder {
    let store_healthy = state.store.health_check().await.unwrap_or(false);

    let status = if store_healthy { "healthy" } else { "degraded" };

    HttpResponse::Ok().json(HealthResponse {
        status: status.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        timestamp: chrono::Utc::now(),
    })
}

/// Donor registration endpoint
///
/// POST /api/register
///
/// Request body:
/// ```json
/// {
///   "name": "string",
///   "email": "string",
///   "phone": "string",
///   "bloodGroup": "A+",
///   "district": "string",
///   "latitude": 19.0760,
///   "longitude": 72.8777
/// }
/// ```
async fn register_donor(
    state: web::Data<AppState>,
    req: web::Json<RegisterDonorRequest>,
) -> impl Responder {
    if let Err(errors) = req.validate() {
        tracing::info!("Validation failed for register request: {:?}", errors);
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Validation failed".to_string(),
            message: errors.to_string(),
            status_code: 400,
        });
    }

    // Reject duplicates up front for a clean 409
    match state.store.find_by_email(&req.email).await {
        Ok(Some(_)) => {
            return HttpResponse::Conflict().json(ErrorResponse {
                error: "Duplicate email".to_string(),
                message: format!("A donor with email {} already exists", req.email),
                status_code: 409,
            });
        }
        Ok(None) => {}
        Err(e) => {
            tracing::error!("Failed to check email {}: {}", req.email, e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Storage error".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    }

    let new_donor = NewDonor {
        name: req.name.clone(),
        email: req.email.clone(),
        phone: req.phone.clone(),
        blood_group: req.blood_group.clone(),
        district: req.district.clone(),
        latitude: req.latitude,
        longitude: req.longitude,
    };

    match state.store.insert(new_donor).await {
        Ok(donor) => {
            tracing::info!("Registered donor {} in {}", donor.id, donor.district);
            HttpResponse::Created().json(RegisterDonorResponse {
                message: "Donor registered successfully".to_string(),
                donor,
            })
        }
        // Insert raced with another registration for the same email
        Err(StoreError::DuplicateEmail(email)) => HttpResponse::Conflict().json(ErrorResponse {
            error: "Duplicate email".to_string(),
            message: format!("A donor with email {} already exists", email),
            status_code: 409,
        }),
        Err(e) => {
            tracing::error!("Failed to register donor: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to register donor".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Donor listing endpoint
///
/// GET /api/donors?bloodGroup=A%2B&district=Mumbai
///
/// Blood group matches exactly; district matches case-insensitively.
async fn list_donors(
    state: web::Data<AppState>,
    params: web::Query<ListDonorsParams>,
) -> impl Responder {
    let filter = DonorFilter {
        blood_group: params.blood_group.clone(),
        district: params.district.clone(),
    };

    match state.store.search(&filter).await {
        Ok(donors) => {
            tracing::debug!("Listing {} donors", donors.len());
            let count = donors.len();
            HttpResponse::Ok().json(DonorListResponse { donors, count })
        }
        Err(e) => {
            tracing::error!("Failed to list donors: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to list donors".to_string(),
                message: e.to_string(),
                status_code: 500,
            })
        }
    }
}

/// Nearby donor search endpoint
///
/// GET /api/donors/nearby?latitude=40.7128&longitude=-74.0060&bloodGroup=A%2B&radius=10
///
/// Latitude and longitude are required; radius defaults to the configured
/// value (10 km) and must be non-negative.
async fn nearby_donors(
    state: web::Data<AppState>,
    params: web::Query<NearbyDonorsParams>,
) -> impl Responder {
    // A proximity query without an origin is a contract violation; fail
    // fast instead of defaulting to an arbitrary point.
    let origin = match (params.latitude, params.longitude) {
        (Some(latitude), Some(longitude)) => GeoPoint::new(latitude, longitude),
        _ => {
            return HttpResponse::BadRequest().json(ErrorResponse {
                error: "Missing origin".to_string(),
                message: "latitude and longitude are required".to_string(),
                status_code: 400,
            });
        }
    };

    let radius_km = params.radius.unwrap_or(state.default_radius_km);
    if radius_km < 0.0 || !radius_km.is_finite() {
        return HttpResponse::BadRequest().json(ErrorResponse {
            error: "Invalid radius".to_string(),
            message: "radius must be a non-negative number of kilometers".to_string(),
            status_code: 400,
        });
    }

    tracing::debug!(
        "Nearby search at ({}, {}) radius {}km blood group {:?}",
        origin.latitude,
        origin.longitude,
        radius_km,
        params.blood_group
    );

    // The store pre-filters by blood group; the proximity scan re-applies
    // the same exact-match policy, so both paths agree.
    let candidate_filter = DonorFilter {
        blood_group: params.blood_group.clone(),
        district: None,
    };

    let candidates = match state.store.search(&candidate_filter).await {
        Ok(donors) => donors,
        Err(e) => {
            tracing::error!("Failed to load nearby candidates: {}", e);
            return HttpResponse::InternalServerError().json(ErrorResponse {
                error: "Failed to load candidates".to_string(),
                message: e.to_string(),
                status_code: 500,
            });
        }
    };

    let query = ProximityQuery::new(origin)
        .with_blood_group(params.blood_group.clone())
        .with_radius_km(radius_km);

    let donors = filter_by_proximity(&candidates, &query);

    tracing::info!(
        "Nearby search returned {} of {} candidates",
        donors.len(),
        candidates.len()
    );

    let count = donors.len();
    HttpResponse::Ok().json(NearbyDonorsResponse { donors, count })
}
