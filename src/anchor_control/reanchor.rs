use crate::geo::{Displacement, destination};
use crate::vehicle_link::Mission;

/// Rigidly translates every waypoint of a mission by the same displacement.
///
/// Each waypoint is moved independently through the forward geodesic, so the
/// mission's shape relative to the reference is preserved: pairwise
/// distances and bearings between waypoints are unchanged up to
/// floating-point rounding. Payload fields and ordering pass through
/// untouched, and the identity displacement returns the mission unchanged.
pub fn reanchor(mut mission: Mission, displacement: &Displacement) -> Mission {
    for wp in mission.items_mut() {
        let moved = destination(
            &wp.position(),
            displacement.bearing_deg(),
            displacement.distance_km(),
        );
        wp.set_position(moved);
    }
    mission
}
