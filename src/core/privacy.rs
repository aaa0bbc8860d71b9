use rand::Rng;

use crate::models::GeoPoint;

/// Default blur radius applied to participant locations, in meters
pub const DEFAULT_FUZZ_RADIUS_M: f64 = 500.0;

/// Apply a random offset to a coordinate for privacy (blur mode)
///
/// Offsets are uniform in each axis within ±radius, with the longitude
/// axis scaled by latitude. The displaced point is what other
/// participants see; the true location still feeds the geometry.
pub fn fuzz_location(point: &GeoPoint, radius_m: f64) -> GeoPoint {
    fuzz_location_with(point, radius_m, &mut rand::thread_rng())
}

/// [`fuzz_location`] with an explicit RNG, for deterministic tests
pub fn fuzz_location_with<R: Rng>(point: &GeoPoint, radius_m: f64, rng: &mut R) -> GeoPoint {
    // Convert meters to degrees (approximate)
    let lat_offset = (rng.gen::<f64>() - 0.5) * 2.0 * (radius_m / 111_000.0);
    let lng_offset = (rng.gen::<f64>() - 0.5)
        * 2.0
        * (radius_m / (111_000.0 * point.lat.to_radians().cos()));

    GeoPoint::new(point.lat + lat_offset, point.lng + lng_offset)
}
