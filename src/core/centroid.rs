use crate::models::GeoPoint;

/// Averaged vectors shorter than this are treated as degenerate
/// (perfectly cancelling antipodal inputs)
const DEGENERATE_VECTOR_EPSILON: f64 = 1e-9;

/// 3D Cartesian projection of a coordinate onto the unit sphere
///
/// Internal to centroid computation, never exposed.
#[derive(Debug, Clone, Copy)]
struct UnitVector3 {
    x: f64,
    y: f64,
    z: f64,
}

impl UnitVector3 {
    fn from_geo(point: &GeoPoint) -> Self {
        let lat_rad = point.lat.to_radians();
        let lng_rad = point.lng.to_radians();
        Self {
            x: lat_rad.cos() * lng_rad.cos(),
            y: lat_rad.cos() * lng_rad.sin(),
            z: lat_rad.sin(),
        }
    }

    /// Renormalize and convert back to degrees
    ///
    /// Returns None when the vector has (numerically) zero length, which
    /// happens only when the averaged inputs cancel exactly.
    fn to_geo(self) -> Option<GeoPoint> {
        let length = (self.x * self.x + self.y * self.y + self.z * self.z).sqrt();
        if length < DEGENERATE_VECTOR_EPSILON {
            return None;
        }

        let x = self.x / length;
        let y = self.y / length;
        let z = self.z / length;

        let lat = z.atan2((x * x + y * y).sqrt()).to_degrees();
        let lng = y.atan2(x).to_degrees();

        Some(GeoPoint::new(lat, lng))
    }
}

/// Compute the centroid of a set of coordinates on the sphere
///
/// Averaging latitudes and longitudes directly breaks down near the poles
/// and across the 180° meridian; averaging unit vectors does not. Returns
/// None for an empty slice and for inputs that cancel exactly (antipodal
/// pairs).
pub fn spherical_centroid(points: &[GeoPoint]) -> Option<GeoPoint> {
    if points.is_empty() {
        return None;
    }

    let mut sum_x = 0.0;
    let mut sum_y = 0.0;
    let mut sum_z = 0.0;

    for point in points {
        let v = UnitVector3::from_geo(point);
        sum_x += v.x;
        sum_y += v.y;
        sum_z += v.z;
    }

    let n = points.len() as f64;
    let avg = UnitVector3 {
        x: sum_x / n,
        y: sum_y / n,
        z: sum_z / n,
    };

    avg.to_geo()
}
