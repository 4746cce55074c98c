use crate::geo::{Displacement, GeoPoint, bearing, distance};

/// Outcome of one drift measurement: how far the reference moved since the
/// last anchor and whether that exceeds the re-anchoring threshold.
#[derive(Debug, Clone, Copy)]
pub struct DriftResult {
    displacement: Displacement,
    exceeds: bool,
}

impl DriftResult {
    pub const fn displacement(&self) -> Displacement { self.displacement }

    pub const fn exceeds(&self) -> bool { self.exceeds }

    pub fn distance_m(&self) -> f64 { self.displacement.distance_m() }
}

/// Measures the reference point's drift since the last anchored position.
///
/// The displacement's bearing points from `previous_anchor` toward
/// `current_sample`, the direction the reference actually moved, so the same
/// displacement translates waypoints without any reciprocal-bearing step.
/// The threshold is inclusive: drift exactly at `threshold_m` triggers.
pub fn detect(
    previous_anchor: &GeoPoint,
    current_sample: &GeoPoint,
    threshold_m: f64,
) -> DriftResult {
    let distance_km = distance(previous_anchor, current_sample);
    let bearing_deg = bearing(previous_anchor, current_sample);
    let displacement = Displacement::new(bearing_deg, distance_km);
    DriftResult {
        displacement,
        exceeds: distance_km * 1000.0 >= threshold_m,
    }
}

#[cfg(test)]
mod tests {
    use super::detect;
    use crate::geo::GeoPoint;

    #[test]
    fn test_no_drift_does_not_exceed() {
        let anchor = GeoPoint::new(47.0, 8.0);
        let result = detect(&anchor, &anchor, 10.0);
        assert!(!result.exceeds());
        assert_eq!(result.distance_m(), 0.0);
    }

    #[test]
    fn test_small_drift_north() {
        // ~11.1 m north of the anchor against a 10 m threshold.
        let anchor = GeoPoint::new(0.0, 0.0);
        let sample = GeoPoint::new(0.0001, 0.0);
        let result = detect(&anchor, &sample, 10.0);
        assert!(result.exceeds());
        assert!((result.distance_m() - 11.1).abs() < 0.1);
        assert!(result.displacement().bearing_deg() < 1e-9);
    }

    #[test]
    fn test_threshold_is_inclusive() {
        let anchor = GeoPoint::new(0.0, 0.0);
        let sample = GeoPoint::new(0.0001, 0.0);
        let drift_m = detect(&anchor, &sample, 0.0).distance_m();
        assert!(detect(&anchor, &sample, drift_m).exceeds());
        assert!(!detect(&anchor, &sample, drift_m + 1e-6).exceeds());
    }

    #[test]
    fn test_bearing_points_from_anchor_to_sample() {
        let anchor = GeoPoint::new(0.0, 0.0);
        let east = GeoPoint::new(0.0, 0.001);
        let result = detect(&anchor, &east, 10.0);
        assert!((result.displacement().bearing_deg() - 90.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_threshold_always_exceeds() {
        let anchor = GeoPoint::new(47.0, 8.0);
        assert!(detect(&anchor, &anchor, 0.0).exceeds());
    }
}
