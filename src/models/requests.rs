use serde::{Deserialize, Serialize};
use validator::Validate;

use crate::models::GeoPoint;

/// A participant location as submitted by a caller
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ParticipantInput {
    #[validate(length(min = 1))]
    pub name: String,
    #[serde(default)]
    pub address: Option<String>,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl ParticipantInput {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// A venue candidate to classify against the computed search circle
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct CandidateInput {
    #[validate(length(min = 1))]
    #[serde(alias = "place_id", rename = "placeId")]
    pub place_id: String,
    #[validate(length(min = 1))]
    pub name: String,
    #[validate(range(min = -90.0, max = 90.0))]
    pub lat: f64,
    #[validate(range(min = -180.0, max = 180.0))]
    pub lng: f64,
}

impl CandidateInput {
    pub fn location(&self) -> GeoPoint {
        GeoPoint::new(self.lat, self.lng)
    }
}

/// Request to compute a meeting area for a set of participants
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct ComputeAreaRequest {
    #[validate(length(min = 1))]
    #[validate(nested)]
    pub participants: Vec<ParticipantInput>,
    /// Search exactly within the MEC by default
    #[validate(range(min = 1.0, max = 2.0))]
    #[serde(alias = "radius_multiplier", rename = "radiusMultiplier", default = "default_radius_multiplier")]
    pub radius_multiplier: f64,
    #[validate(nested)]
    #[serde(default)]
    pub candidates: Vec<CandidateInput>,
    /// Blur participant locations in the response
    #[serde(alias = "blur_locations", rename = "blurLocations", default)]
    pub blur_locations: bool,
}

fn default_radius_multiplier() -> f64 {
    1.0
}
