//! Midway Algo - Geometry engine for the Midway meetup planner
//!
//! This library computes the "meeting area" for a group of participants:
//! a spherical centroid for map centering plus a minimum enclosing circle
//! that derives the venue search radius. All operations are pure and
//! stateless; page rendering, venue lookup and persistence live in the
//! surrounding application.

pub mod config;
pub mod core;
pub mod models;

// Re-export commonly used types
pub use crate::core::{GeometryEngine, MeetingArea, expand_circle, haversine_distance, minimum_enclosing_circle, spherical_centroid};
pub use crate::models::{Circle, ClassifiedCandidate, GeoPoint, GeometryTunables, Participant, VenueCandidate};
