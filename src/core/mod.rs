// Core geometry exports
pub mod centroid;
pub mod distance;
pub mod enclosing;
pub mod engine;
pub mod privacy;

pub use centroid::spherical_centroid;
pub use distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box};
pub use enclosing::{expand_circle, is_inside_circle, minimum_enclosing_circle, minimum_enclosing_circle_with};
pub use engine::{GeometryEngine, MeetingArea};
pub use privacy::fuzz_location;
