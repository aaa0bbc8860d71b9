// Integration tests for Midway Algo

use midway_algo::core::haversine_distance;
use midway_algo::models::{ComputeAreaRequest, GeoPoint, GeometryTunables, VenueCandidate};
use midway_algo::GeometryEngine;
use validator::Validate;

fn singapore_group() -> Vec<GeoPoint> {
    vec![
        GeoPoint::new(1.2834, 103.8607), // Marina Bay
        GeoPoint::new(1.3048, 103.8318), // Orchard
        GeoPoint::new(1.2838, 103.8443), // Chinatown
        GeoPoint::new(1.3100, 103.8714), // Kallang
    ]
}

#[test]
fn test_end_to_end_meeting_area() {
    let engine = GeometryEngine::with_defaults();
    let locations = singapore_group();

    let area = engine.compute_meeting_area(&locations).unwrap();

    // Everyone is inside the search circle
    for location in &locations {
        assert!(
            haversine_distance(location, &area.circle.center) <= area.circle.radius_m * 1.01,
            "participant left outside the circle"
        );
    }

    // Search radius carries the expansion margin
    assert!(area.search_radius_m > area.circle.radius_m);

    // The centroid lands inside the city, not at (0, 0)
    let centroid = area.centroid.unwrap();
    assert!(centroid.lat > 1.27 && centroid.lat < 1.32);
    assert!(centroid.lng > 103.82 && centroid.lng < 103.89);
}

#[test]
fn test_end_to_end_candidate_classification() {
    let engine = GeometryEngine::with_defaults();
    let area = engine.compute_meeting_area(&singapore_group()).unwrap();

    let near_center = VenueCandidate {
        place_id: "near".to_string(),
        name: "Maxwell Food Centre".to_string(),
        location: area.circle.center,
    };
    let out_of_town = VenueCandidate {
        place_id: "johor".to_string(),
        name: "Johor Bahru Mall".to_string(),
        location: GeoPoint::new(1.4927, 103.7414),
    };

    let classified = engine.classify_candidates(&area.circle, vec![out_of_town, near_center]);

    // The far candidate never survives the bounding-box stage for a
    // city-scale circle
    assert_eq!(classified.len(), 1);
    assert_eq!(classified[0].candidate.place_id, "near");
    assert!(classified[0].in_circle);
}

#[test]
fn test_custom_tunables_respected() {
    let engine = GeometryEngine::new(GeometryTunables {
        min_radius_m: 250.0,
        ..GeometryTunables::default()
    });

    let area = engine
        .compute_meeting_area(&[GeoPoint::new(40.0, -74.0)])
        .unwrap();

    assert_eq!(area.circle.radius_m, 250.0);
}

#[test]
fn test_request_parsing_and_validation() {
    let raw = r#"{
        "participants": [
            {"name": "Ada", "lat": 52.52, "lng": 13.405},
            {"name": "Linus", "lat": 52.50, "lng": 13.33, "address": "Kantstraße 12"}
        ],
        "radiusMultiplier": 1.5,
        "candidates": [
            {"placeId": "p1", "name": "Cafe", "lat": 52.51, "lng": 13.37}
        ]
    }"#;

    let request: ComputeAreaRequest = serde_json::from_str(raw).unwrap();
    request.validate().unwrap();

    assert_eq!(request.participants.len(), 2);
    assert_eq!(request.radius_multiplier, 1.5);
    assert_eq!(request.candidates[0].place_id, "p1");
    assert!(!request.blur_locations);
}

#[test]
fn test_request_rejects_out_of_range_latitude() {
    let raw = r#"{"participants": [{"name": "Ada", "lat": 91.0, "lng": 13.405}]}"#;

    let request: ComputeAreaRequest = serde_json::from_str(raw).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_request_rejects_out_of_range_longitude() {
    let raw = r#"{"participants": [{"name": "Ada", "lat": 52.52, "lng": 181.0}]}"#;

    let request: ComputeAreaRequest = serde_json::from_str(raw).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_request_rejects_bad_multiplier() {
    let raw = r#"{
        "participants": [{"name": "Ada", "lat": 52.52, "lng": 13.405}],
        "radiusMultiplier": 2.5
    }"#;

    let request: ComputeAreaRequest = serde_json::from_str(raw).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_request_rejects_empty_participants() {
    let raw = r#"{"participants": []}"#;

    let request: ComputeAreaRequest = serde_json::from_str(raw).unwrap();
    assert!(request.validate().is_err());
}

#[test]
fn test_solo_group_still_gets_search_area() {
    // A party of one must produce a usable, non-degenerate search region
    let engine = GeometryEngine::with_defaults();
    let area = engine
        .compute_meeting_area(&[GeoPoint::new(40.0, -74.0)])
        .unwrap();

    assert_eq!(area.circle.radius_m, 100.0);
    assert!((area.search_radius_m - 110.0).abs() < 1e-9);
}
