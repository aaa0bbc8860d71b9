use tracing::debug;

use crate::core::{
    centroid::spherical_centroid,
    distance::{calculate_bounding_box, haversine_distance, is_within_bounding_box},
    enclosing::{expand_circle, is_inside_circle, minimum_enclosing_circle_with},
};
use crate::models::{Circle, ClassifiedCandidate, GeoPoint, GeometryTunables, VenueCandidate};

/// Result of the meeting-area computation
#[derive(Debug, Clone)]
pub struct MeetingArea {
    /// Visually centered point for map display; absent when the inputs
    /// cancel exactly on the sphere
    pub centroid: Option<GeoPoint>,
    /// Minimum enclosing circle of the participant locations
    pub circle: Circle,
    /// Radius handed to venue lookup, in meters
    pub search_radius_m: f64,
}

/// Geometry pipeline orchestrator
///
/// # Pipeline Stages
/// 1. Minimum enclosing circle over the participant locations
/// 2. Spherical centroid for map centering
/// 3. Search-radius derivation (expansion margin, then multiplier)
#[derive(Debug, Clone)]
pub struct GeometryEngine {
    tunables: GeometryTunables,
}

impl GeometryEngine {
    pub fn new(tunables: GeometryTunables) -> Self {
        Self { tunables }
    }

    pub fn with_defaults() -> Self {
        Self {
            tunables: GeometryTunables::default(),
        }
    }

    /// Compute the meeting area for a set of participant locations
    ///
    /// Returns None for an empty slice; callers must branch before use.
    pub fn compute_meeting_area(&self, locations: &[GeoPoint]) -> Option<MeetingArea> {
        let circle = minimum_enclosing_circle_with(
            locations,
            self.tunables.containment_tolerance,
            self.tunables.min_radius_m,
        )?;

        let centroid = spherical_centroid(locations);

        let search_radius_m = expand_circle(&circle, self.tunables.expand_epsilon).radius_m
            * self.tunables.radius_multiplier;

        debug!(
            participants = locations.len(),
            radius_m = circle.radius_m,
            search_radius_m,
            "meeting area computed"
        );

        Some(MeetingArea {
            centroid,
            circle,
            search_radius_m,
        })
    }

    /// Annotate venue candidates with their position relative to the circle
    ///
    /// Stage 1 drops candidates outside the bounding box of the tolerant
    /// search boundary (they could never qualify); stage 2 computes the
    /// exact distance and in-circle flag; results come back sorted by
    /// ascending distance from the center.
    pub fn classify_candidates(
        &self,
        circle: &Circle,
        candidates: Vec<VenueCandidate>,
    ) -> Vec<ClassifiedCandidate> {
        let total = candidates.len();
        let tolerant = expand_circle(circle, self.tunables.containment_tolerance);
        let bbox = calculate_bounding_box(&tolerant.center, tolerant.radius_m);

        let mut classified: Vec<ClassifiedCandidate> = candidates
            .into_iter()
            .filter(|candidate| is_within_bounding_box(&candidate.location, &bbox))
            .map(|candidate| {
                let distance_from_center_m =
                    haversine_distance(&candidate.location, &circle.center);
                let in_circle = distance_from_center_m <= circle.radius_m;

                ClassifiedCandidate {
                    candidate,
                    distance_from_center_m,
                    in_circle,
                }
            })
            .collect();

        classified.sort_by(|a, b| {
            a.distance_from_center_m
                .partial_cmp(&b.distance_from_center_m)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        if classified.len() < total {
            debug!(
                dropped = total - classified.len(),
                "candidates outside search bounding box"
            );
        }

        classified
    }

    /// The containment predicate handed to downstream collaborators
    pub fn contains(&self, circle: &Circle, point: &GeoPoint) -> bool {
        is_inside_circle(point, circle, self.tunables.containment_tolerance)
    }

    pub fn tunables(&self) -> &GeometryTunables {
        &self.tunables
    }
}

impl Default for GeometryEngine {
    fn default() -> Self {
        Self::with_defaults()
    }
}
