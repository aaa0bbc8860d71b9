// Unit tests for Midway Algo

use midway_algo::core::{
    expand_circle, haversine_distance, minimum_enclosing_circle, spherical_centroid,
};
use midway_algo::models::{Circle, GeoPoint};

#[test]
fn test_haversine_distance_zero_for_identical_points() {
    let p = GeoPoint::new(40.7128, -74.0060);
    assert_eq!(haversine_distance(&p, &p), 0.0);
}

#[test]
fn test_haversine_distance_symmetric() {
    let a = GeoPoint::new(40.7580, -73.9855);
    let b = GeoPoint::new(48.8566, 2.3522);

    assert_eq!(haversine_distance(&a, &b), haversine_distance(&b, &a));
}

#[test]
fn test_haversine_distance_manhattan_to_brooklyn() {
    // Manhattan to Brooklyn is approximately 5-10 km
    let manhattan = GeoPoint::new(40.7580, -73.9855);
    let brooklyn = GeoPoint::new(40.6782, -73.9442);

    let distance = haversine_distance(&manhattan, &brooklyn);
    assert!(distance > 5_000.0 && distance < 15_000.0);
}

#[test]
fn test_haversine_distance_nyc_to_la() {
    // Approximately 3944 km
    let nyc = GeoPoint::new(40.7128, -74.0060);
    let la = GeoPoint::new(34.0522, -118.2437);

    let distance = haversine_distance(&nyc, &la);
    assert!((distance - 3_944_000.0).abs() < 100_000.0, "Expected ~3944km, got {}", distance);
}

#[test]
fn test_centroid_empty_input() {
    assert!(spherical_centroid(&[]).is_none());
}

#[test]
fn test_centroid_antimeridian_regression() {
    // The defining regression test distinguishing the spherical method
    // from naive averaging: +179 and -179 must not average to 0.
    let points = [GeoPoint::new(10.0, 179.0), GeoPoint::new(10.0, -179.0)];

    let centroid = spherical_centroid(&points).unwrap();
    assert!(
        centroid.lng.abs() > 179.0,
        "centroid lng should be near ±180, got {}",
        centroid.lng
    );
}

#[test]
fn test_centroid_simple_average_far_from_meridian() {
    let points = [GeoPoint::new(0.0, 10.0), GeoPoint::new(0.0, 20.0)];

    let centroid = spherical_centroid(&points).unwrap();
    assert!((centroid.lat - 0.0).abs() < 1e-6);
    assert!((centroid.lng - 15.0).abs() < 0.01);
}

#[test]
fn test_mec_empty_input() {
    assert!(minimum_enclosing_circle(&[]).is_none());
}

#[test]
fn test_mec_single_point_policy() {
    let circle = minimum_enclosing_circle(&[GeoPoint::new(40.0, -74.0)]).unwrap();

    assert_eq!(circle.center, GeoPoint::new(40.0, -74.0));
    assert_eq!(circle.radius_m, 100.0);
}

#[test]
fn test_mec_two_points_on_equator() {
    let a = GeoPoint::new(0.0, 0.0);
    let b = GeoPoint::new(0.0, 2.0);

    let circle = minimum_enclosing_circle(&[a, b]).unwrap();

    assert!((circle.center.lat).abs() < 1e-9);
    assert!((circle.center.lng - 1.0).abs() < 1e-9);
    assert!((circle.radius_m - haversine_distance(&a, &b) / 2.0).abs() < 1.0);
}

#[test]
fn test_mec_collinear_points_do_not_crash() {
    let points = [
        GeoPoint::new(0.0, 0.0),
        GeoPoint::new(0.0, 1.0),
        GeoPoint::new(0.0, 2.0),
    ];

    let circle = minimum_enclosing_circle(&points).unwrap();

    // Falls back to the diameter circle of the extreme pair
    for point in &points {
        assert!(haversine_distance(point, &circle.center) <= circle.radius_m * 1.01);
    }
    assert!((circle.center.lng - 1.0).abs() < 1e-6);
}

#[test]
fn test_mec_radius_floor_applies_to_tight_clusters() {
    // A few meters apart; the raw MEC would be tiny
    let points = [
        GeoPoint::new(52.520000, 13.405000),
        GeoPoint::new(52.520010, 13.405010),
        GeoPoint::new(52.520020, 13.404990),
    ];

    let circle = minimum_enclosing_circle(&points).unwrap();
    assert!(circle.radius_m >= 100.0);
}

#[test]
fn test_mec_containment_property() {
    // Every input point must land within radius * 1.01 of the center
    let points: Vec<GeoPoint> = (0..50)
        .map(|i| {
            let i = i as f64;
            GeoPoint::new(
                (i * 11.17).sin() * 0.03,
                (i * 5.93).cos() * 0.03,
            )
        })
        .collect();

    let circle = minimum_enclosing_circle(&points).unwrap();
    for point in &points {
        assert!(haversine_distance(point, &circle.center) <= circle.radius_m * 1.01);
    }
}

#[test]
fn test_mec_idempotent_geometry() {
    // Internal randomization must not change the returned geometry
    let points = [
        GeoPoint::new(0.00, 0.00),
        GeoPoint::new(0.02, -0.02),
        GeoPoint::new(-0.01, 0.02),
        GeoPoint::new(0.01, -0.04),
    ];

    let first = minimum_enclosing_circle(&points).unwrap();
    let second = minimum_enclosing_circle(&points).unwrap();

    assert!((first.center.lat - second.center.lat).abs() < 1e-6);
    assert!((first.center.lng - second.center.lng).abs() < 1e-6);
    assert!((first.radius_m - second.radius_m).abs() < 1.0);
}

#[test]
fn test_expand_circle_ten_percent() {
    let circle = Circle::new(GeoPoint::new(40.0, -74.0), 100.0);

    let expanded = expand_circle(&circle, 0.1);
    assert!((expanded.radius_m - 110.0).abs() < 1e-9);
    assert_eq!(expanded.center, circle.center);
}

#[test]
fn test_expand_circle_zero_is_identity() {
    let circle = Circle::new(GeoPoint::new(40.0, -74.0), 250.0);

    let expanded = expand_circle(&circle, 0.0);
    assert_eq!(expanded.radius_m, circle.radius_m);
    assert_eq!(expanded.center, circle.center);
}

#[test]
fn test_expand_circle_negative_epsilon_shrinks() {
    let circle = Circle::new(GeoPoint::new(40.0, -74.0), 200.0);

    let shrunk = expand_circle(&circle, -0.5);
    assert!((shrunk.radius_m - 100.0).abs() < 1e-9);
}
