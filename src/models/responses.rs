use serde::{Deserialize, Serialize};
use crate::models::domain::{Circle, ClassifiedCandidate, GeoPoint, Participant};

/// Per-participant distance to the search circle center
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParticipantDistance {
    pub id: String,
    pub name: String,
    pub location: GeoPoint,
    #[serde(rename = "distanceFromCenter")]
    pub distance_from_center_m: f64,
}

/// Response for the compute-area operation
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MeetingAreaResponse {
    #[serde(rename = "computationId")]
    pub computation_id: String,
    /// Absent when the inputs cancel exactly on the sphere
    pub centroid: Option<GeoPoint>,
    pub circle: Circle,
    #[serde(rename = "searchRadius")]
    pub search_radius_m: f64,
    pub participants: Vec<ParticipantDistance>,
    pub candidates: Vec<ClassifiedCandidate>,
    #[serde(rename = "computedAt")]
    pub computed_at: chrono::DateTime<chrono::Utc>,
}

impl ParticipantDistance {
    pub fn from_participant(participant: &Participant, distance_from_center_m: f64) -> Self {
        // Blurred location takes precedence when present
        let location = participant.fuzzy_location.unwrap_or(participant.location);
        Self {
            id: participant.id.clone(),
            name: participant.name.clone(),
            location,
            distance_from_center_m,
        }
    }
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}
