use rand::Rng;

use crate::core::distance::haversine_distance;
use crate::models::{Circle, GeoPoint};

/// Fractional slack applied to the in-circle containment test, absorbing
/// floating-point and planar-approximation error
pub const CONTAINMENT_TOLERANCE: f64 = 0.01;

/// Floor applied to every circle radius returned by the public entry
/// point, in meters, so downstream search never gets a degenerate area
pub const MIN_RADIUS_M: f64 = 100.0;

/// Default fractional margin used by [`expand_circle`]
pub const DEFAULT_EXPAND_EPSILON: f64 = 0.10;

/// Circumcenter denominators below this magnitude mean the three points
/// are collinear and the solver falls back to a diameter circle
const COLLINEAR_EPSILON: f64 = 1e-10;

/// Circle with the two points as a diameter
fn circle_from_two(p1: &GeoPoint, p2: &GeoPoint) -> Circle {
    let center = GeoPoint::new((p1.lat + p2.lat) / 2.0, (p1.lng + p2.lng) / 2.0);
    let radius_m = haversine_distance(p1, p2) / 2.0;
    Circle::new(center, radius_m)
}

/// Diameter circle over the farthest pair of the three points
///
/// Used when the circumcircle is ill-conditioned; taking the extreme pair
/// keeps the middle point inside the result.
fn circle_from_farthest_pair(p1: &GeoPoint, p2: &GeoPoint, p3: &GeoPoint) -> Circle {
    let d12 = haversine_distance(p1, p2);
    let d13 = haversine_distance(p1, p3);
    let d23 = haversine_distance(p2, p3);

    if d12 >= d13 && d12 >= d23 {
        circle_from_two(p1, p2)
    } else if d13 >= d23 {
        circle_from_two(p1, p3)
    } else {
        circle_from_two(p2, p3)
    }
}

/// Circumcircle of three points, treating (lng, lat) as planar (x, y)
///
/// Valid for small regions where Earth curvature is negligible across the
/// triangle's extent. Collinear triples fall back to the diameter circle
/// of the extreme pair.
fn circle_from_three(p1: &GeoPoint, p2: &GeoPoint, p3: &GeoPoint) -> Circle {
    let ax = p1.lng;
    let ay = p1.lat;
    let bx = p2.lng;
    let by = p2.lat;
    let cx = p3.lng;
    let cy = p3.lat;

    let d = 2.0 * (ax * (by - cy) + bx * (cy - ay) + cx * (ay - by));

    if d.abs() < COLLINEAR_EPSILON {
        return circle_from_farthest_pair(p1, p2, p3);
    }

    let ux = ((ax * ax + ay * ay) * (by - cy)
        + (bx * bx + by * by) * (cy - ay)
        + (cx * cx + cy * cy) * (ay - by))
        / d;
    let uy = ((ax * ax + ay * ay) * (cx - bx)
        + (bx * bx + by * by) * (ax - cx)
        + (cx * cx + cy * cy) * (bx - ax))
        / d;

    let center = GeoPoint::new(uy, ux);
    let radius_m = haversine_distance(&center, p1);

    Circle::new(center, radius_m)
}

/// Check if a point lies inside (or on) a circle, within a fractional tolerance
#[inline]
pub fn is_inside_circle(point: &GeoPoint, circle: &Circle, tolerance: f64) -> bool {
    haversine_distance(point, &circle.center) <= circle.radius_m * (1.0 + tolerance)
}

/// Smallest circle determined by 0..=3 boundary points
fn circle_from_boundary(boundary: &[GeoPoint]) -> Option<Circle> {
    match boundary {
        [] => None,
        [p] => Some(Circle::new(*p, 0.0)),
        [p1, p2] => Some(circle_from_two(p1, p2)),
        [p1, p2, p3, ..] => Some(circle_from_three(p1, p2, p3)),
    }
}

/// Welzl's randomized incremental construction
///
/// `points[..n]` is the working set, owned by the caller of the public
/// entry point, so destructive swaps never touch caller data. `boundary`
/// holds the points forced onto the circle's edge so far.
fn welzl<R: Rng>(
    points: &mut [GeoPoint],
    boundary: &mut Vec<GeoPoint>,
    n: usize,
    tolerance: f64,
    rng: &mut R,
) -> Option<Circle> {
    if n == 0 || boundary.len() == 3 {
        return circle_from_boundary(boundary);
    }

    // Random pivot keeps the expected running time linear
    let idx = rng.gen_range(0..n);
    let p = points[idx];
    points.swap(idx, n - 1);

    if let Some(circle) = welzl(points, boundary, n - 1, tolerance, rng) {
        if is_inside_circle(&p, &circle, tolerance) {
            return Some(circle);
        }
    }

    // p must lie on the boundary of the true enclosing circle
    boundary.push(p);
    let circle = welzl(points, boundary, n - 1, tolerance, rng);
    boundary.pop();
    circle
}

/// Compute the minimum enclosing circle of a point set
///
/// Returns None only for empty input. A single point yields a circle with
/// the configured minimum radius, and the final radius is floored at that
/// minimum regardless of input size. Coordinate ranges are not validated
/// here; that is the caller's contract.
pub fn minimum_enclosing_circle_with(
    points: &[GeoPoint],
    tolerance: f64,
    min_radius_m: f64,
) -> Option<Circle> {
    if points.is_empty() {
        return None;
    }
    if let [point] = points {
        return Some(Circle::new(*point, min_radius_m));
    }

    // Work on an owned copy; the recursion reorders it in place
    let mut working = points.to_vec();
    let n = working.len();
    let mut boundary = Vec::with_capacity(3);
    let mut rng = rand::thread_rng();

    let circle = welzl(&mut working, &mut boundary, n, tolerance, &mut rng)?;

    Some(Circle::new(circle.center, circle.radius_m.max(min_radius_m)))
}

/// [`minimum_enclosing_circle_with`] using the default tolerance and radius floor
pub fn minimum_enclosing_circle(points: &[GeoPoint]) -> Option<Circle> {
    minimum_enclosing_circle_with(points, CONTAINMENT_TOLERANCE, MIN_RADIUS_M)
}

/// Inflate a circle's radius by a fractional margin
///
/// Total over all inputs; a negative epsilon shrinks the circle, callers
/// are expected to pass non-negative values.
pub fn expand_circle(circle: &Circle, epsilon: f64) -> Circle {
    Circle::new(circle.center, circle.radius_m * (1.0 + epsilon))
}
