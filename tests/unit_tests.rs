// Unit tests for DonorLink

use donorlink::core::{filter_by_proximity, haversine_distance, ProximityQuery, DEFAULT_RADIUS_KM};
use donorlink::models::{Donor, GeoPoint};

fn create_donor(id: i64, blood_group: &str, lat: Option<f64>, lon: Option<f64>) -> Donor {
    Donor {
        id,
        name: format!("Donor {}", id),
        email: format!("donor{}@example.com", id),
        phone: "555-123-4567".to_string(),
        blood_group: blood_group.to_string(),
        district: "New York".to_string(),
        latitude: lat,
        longitude: lon,
        created_at: None,
        updated_at: None,
    }
}

#[test]
fn test_haversine_distance_zero_for_identical_points() {
    let p = GeoPoint::new(40.7128, -74.0060);
    assert_eq!(haversine_distance(p, p), 0.0);
}

#[test]
fn test_haversine_distance_symmetric() {
    let a = GeoPoint::new(40.7128, -74.0060);
    let b = GeoPoint::new(34.0522, -118.2437);
    assert_eq!(haversine_distance(a, b), haversine_distance(b, a));
}

#[test]
fn test_haversine_distance_non_negative() {
    let points = [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(90.0, 0.0),
        GeoPoint::new(-90.0, 0.0),
        GeoPoint::new(40.7128, -74.0060),
        GeoPoint::new(-33.8688, 151.2093),
    ];

    for a in points {
        for b in points {
            assert!(haversine_distance(a, b) >= 0.0, "negative distance for {:?} -> {:?}", a, b);
        }
    }
}

#[test]
fn test_haversine_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan = GeoPoint::new(40.7580, -73.9855);
    let brooklyn = GeoPoint::new(40.6782, -73.9442);

    let distance = haversine_distance(manhattan, brooklyn);
    assert!(distance > 5.0 && distance < 15.0);
}

#[test]
fn test_haversine_distance_nyc_to_la() {
    // New York to Los Angeles is approximately 3936 km
    let nyc = GeoPoint::new(40.7128, -74.0060);
    let la = GeoPoint::new(34.0522, -118.2437);

    let distance = haversine_distance(nyc, la);
    assert!((distance - 3936.0).abs() < 100.0, "Expected ~3936km, got {}", distance);
}

#[test]
fn test_haversine_distance_grows_with_separation() {
    let origin = GeoPoint::new(40.7128, -74.0060);
    let near = GeoPoint::new(40.7308, -73.9975);
    let mid = GeoPoint::new(41.8781, -87.6298);
    let far = GeoPoint::new(34.0522, -118.2437);

    let d_near = haversine_distance(origin, near);
    let d_mid = haversine_distance(origin, mid);
    let d_far = haversine_distance(origin, far);

    assert!(d_near < d_mid && d_mid < d_far);
}

#[test]
fn test_default_radius_is_ten_km() {
    let query = ProximityQuery::new(GeoPoint::new(40.7128, -74.0060));
    assert_eq!(query.radius_km, DEFAULT_RADIUS_KM);
    assert_eq!(DEFAULT_RADIUS_KM, 10.0);
}

#[test]
fn test_nearby_scenario_new_york() {
    // Origin in lower Manhattan, candidate ~2 km north, default 10 km radius
    let origin = GeoPoint::new(40.7128, -74.0060);
    let donors = vec![create_donor(1, "AB+", Some(40.7308), Some(-73.9975))];

    let nearby = filter_by_proximity(&donors, &ProximityQuery::new(origin));

    assert_eq!(nearby.len(), 1);
    assert!((nearby[0].distance - 2.13).abs() < 0.05, "got {}", nearby[0].distance);
}

#[test]
fn test_nearby_scenario_cross_country_excluded() {
    let origin = GeoPoint::new(40.7128, -74.0060);
    let donors = vec![create_donor(1, "O-", Some(34.0522), Some(-118.2437))];

    let nearby = filter_by_proximity(&donors, &ProximityQuery::new(origin));

    assert!(nearby.is_empty());
}

#[test]
fn test_boundary_donor_included_at_exact_radius() {
    let origin = GeoPoint::new(40.7128, -74.0060);
    let location = GeoPoint::new(40.7308, -73.9975);
    let exact = haversine_distance(origin, location);

    let donors = vec![create_donor(1, "A+", Some(location.latitude), Some(location.longitude))];

    let at_radius = ProximityQuery::new(origin).with_radius_km(exact);
    assert_eq!(filter_by_proximity(&donors, &at_radius).len(), 1);

    let under_radius = ProximityQuery::new(origin).with_radius_km(exact - 1e-9);
    assert!(filter_by_proximity(&donors, &under_radius).is_empty());
}

#[test]
fn test_unlocated_donors_never_returned() {
    let origin = GeoPoint::new(40.7128, -74.0060);
    let donors = vec![
        create_donor(1, "A+", None, None),
        create_donor(2, "A+", Some(40.7128), None),
        create_donor(3, "A+", None, Some(-74.0060)),
    ];

    // Even a radius spanning the whole planet surfaces nothing
    let query = ProximityQuery::new(origin).with_radius_km(25_000.0);
    assert!(filter_by_proximity(&donors, &query).is_empty());
}

#[test]
fn test_order_preserved_for_all_in_radius() {
    let origin = GeoPoint::new(40.7128, -74.0060);
    let donors = vec![
        create_donor(10, "A+", Some(40.7135), Some(-74.0070)),
        create_donor(20, "A+", Some(40.7120), Some(-74.0050)),
        create_donor(30, "A+", Some(40.7140), Some(-74.0080)),
    ];

    let nearby = filter_by_proximity(&donors, &ProximityQuery::new(origin));
    let ids: Vec<i64> = nearby.iter().map(|n| n.donor.id).collect();

    assert_eq!(ids, vec![10, 20, 30]);
}

#[test]
fn test_empty_candidates_yield_empty_result() {
    let query = ProximityQuery::new(GeoPoint::new(40.7128, -74.0060));
    assert!(filter_by_proximity(&[], &query).is_empty());
}

#[test]
fn test_blood_group_prefilter_overrides_proximity() {
    let origin = GeoPoint::new(40.7128, -74.0060);
    let donors = vec![
        create_donor(1, "A+", Some(40.7130), Some(-74.0062)),
        create_donor(2, "B+", Some(40.7129), Some(-74.0061)), // closer, wrong group
        create_donor(3, "A+", Some(40.7150), Some(-74.0100)),
        create_donor(4, "O-", Some(40.7128), Some(-74.0060)), // at the origin, wrong group
    ];

    let query = ProximityQuery::new(origin).with_blood_group(Some("A+".to_string()));
    let nearby = filter_by_proximity(&donors, &query);

    let ids: Vec<i64> = nearby.iter().map(|n| n.donor.id).collect();
    assert_eq!(ids, vec![1, 3]);
}

#[test]
fn test_equator_donor_is_searchable() {
    // A zero coordinate is a real location, not a missing one
    let origin = GeoPoint::new(0.1, 0.0);
    let donors = vec![create_donor(1, "A+", Some(0.0), Some(0.0))];

    let query = ProximityQuery::new(origin).with_radius_km(50.0);
    assert_eq!(filter_by_proximity(&donors, &query).len(), 1);
}

#[test]
fn test_zero_radius_matches_only_the_origin() {
    let origin = GeoPoint::new(40.7128, -74.0060);
    let donors = vec![
        create_donor(1, "A+", Some(40.7128), Some(-74.0060)),
        create_donor(2, "A+", Some(40.7129), Some(-74.0060)),
    ];

    let query = ProximityQuery::new(origin).with_radius_km(0.0);
    let nearby = filter_by_proximity(&donors, &query);

    assert_eq!(nearby.len(), 1);
    assert_eq!(nearby[0].donor.id, 1);
    assert_eq!(nearby[0].distance, 0.0);
}
