// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{BoundingBox, Circle, ClassifiedCandidate, GeoPoint, GeometryTunables, Participant, VenueCandidate};
pub use requests::{CandidateInput, ComputeAreaRequest, ParticipantInput};
pub use responses::{ErrorResponse, MeetingAreaResponse, ParticipantDistance};
