use crate::models::GeoPoint;

/// Earth's radius in kilometers
const EARTH_RADIUS_KM: f64 = 6371.0;

/// Calculate the Haversine great-circle distance between two points.
///
/// # Arguments
/// * `a` - First point in decimal degrees
/// * `b` - Second point in decimal degrees
///
/// # Returns
/// Distance in kilometers
#[inline]
pub fn haversine_distance(a: GeoPoint, b: GeoPoint) -> f64 {
    let lat_a_rad = a.latitude.to_radians();
    let lat_b_rad = b.latitude.to_radians();
    let delta_lat = (b.latitude - a.latitude).to_radians();
    let delta_lon = (b.longitude - a.longitude).to_radians();

    // Rounding can push h fractionally outside [0, 1] for identical or
    // near-antipodal points, which would feed sqrt a negative number.
    let h = ((delta_lat / 2.0).sin().powi(2)
        + lat_a_rad.cos() * lat_b_rad.cos() * (delta_lon / 2.0).sin().powi(2))
    .clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}
