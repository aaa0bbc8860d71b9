use crate::models::{BoundingBox, GeoPoint};

/// Earth's radius in meters
const EARTH_RADIUS_M: f64 = 6_371_000.0;

/// Calculate the Haversine distance between two points in meters
///
/// Uses the half-angle form, which stays numerically stable for both
/// very small and near-antipodal separations.
#[inline]
pub fn haversine_distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1_rad = a.lat.to_radians();
    let lat2_rad = b.lat.to_radians();
    let delta_lat = (b.lat - a.lat).to_radians();
    let delta_lng = (b.lng - a.lng).to_radians();

    let h = (delta_lat / 2.0).sin().powi(2)
        + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_M * c
}

/// Calculate a bounding box around a center point
///
/// Much cheaper than Haversine, used to pre-filter candidates before the
/// exact distance check. 1° latitude ≈ 111km, 1° longitude ≈ 111km * cos(latitude).
pub fn calculate_bounding_box(center: &GeoPoint, radius_m: f64) -> BoundingBox {
    // 1 degree latitude is approximately 111 km
    let lat_delta = radius_m / 111_000.0;

    // 1 degree longitude varies by latitude
    let lng_delta = radius_m / (111_000.0 * center.lat.to_radians().cos().abs());

    BoundingBox {
        min_lat: center.lat - lat_delta,
        max_lat: center.lat + lat_delta,
        min_lng: center.lng - lng_delta,
        max_lng: center.lng + lng_delta,
    }
}

/// Check if a point is within a bounding box
#[inline]
pub fn is_within_bounding_box(point: &GeoPoint, bbox: &BoundingBox) -> bool {
    point.lat >= bbox.min_lat
        && point.lat <= bbox.max_lat
        && point.lng >= bbox.min_lng
        && point.lng <= bbox.max_lng
}
