use serde::{Deserialize, Serialize};

/// A geographic coordinate in degrees
///
/// Latitude is expected in [-90, 90] and longitude in [-180, 180].
/// The geometry functions do not validate ranges; the request layer does.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lng: f64,
}

impl GeoPoint {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A circle on the map: center plus radius in meters
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Circle {
    pub center: GeoPoint,
    #[serde(rename = "radius")]
    pub radius_m: f64,
}

impl Circle {
    pub fn new(center: GeoPoint, radius_m: f64) -> Self {
        Self { center, radius_m }
    }
}

/// Geospatial bounding box
#[derive(Debug, Clone, Copy)]
pub struct BoundingBox {
    pub min_lat: f64,
    pub max_lat: f64,
    pub min_lng: f64,
    pub max_lng: f64,
}

/// An event participant with a submitted location
///
/// The engine only reads `location`; everything else is opaque caller
/// metadata carried through to responses.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Participant {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    pub location: GeoPoint,
    /// Blurred location shown to other participants when the event
    /// visibility is set to blur
    #[serde(rename = "fuzzyLocation", default)]
    pub fuzzy_location: Option<GeoPoint>,
}

/// A venue candidate supplied by the search collaborator
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct VenueCandidate {
    #[serde(rename = "placeId")]
    pub place_id: String,
    pub name: String,
    pub location: GeoPoint,
}

/// A venue candidate annotated with its position relative to the search circle
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassifiedCandidate {
    #[serde(flatten)]
    pub candidate: VenueCandidate,
    #[serde(rename = "distanceFromCenter")]
    pub distance_from_center_m: f64,
    #[serde(rename = "inCircle")]
    pub in_circle: bool,
}

/// Tunable constants for the geometry pipeline
#[derive(Debug, Clone, Copy)]
pub struct GeometryTunables {
    /// Fractional slack applied to the in-circle containment test
    pub containment_tolerance: f64,
    /// Floor applied to every returned circle radius, in meters
    pub min_radius_m: f64,
    /// Fractional margin used when expanding the search circle
    pub expand_epsilon: f64,
    /// Multiplier applied to the MEC radius to derive the search radius
    pub radius_multiplier: f64,
}

impl Default for GeometryTunables {
    fn default() -> Self {
        Self {
            containment_tolerance: 0.01,
            min_radius_m: 100.0,
            expand_epsilon: 0.10,
            radius_multiplier: 1.0,
        }
    }
}
