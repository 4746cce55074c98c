use std::fmt;

/// A great-circle displacement: a bearing in [0, 360) degrees paired with a
/// non-negative distance in kilometers.
///
/// Describes how to move one [`GeoPoint`](super::GeoPoint) to reach another.
/// Derived per drift measurement and applied within the same cycle, never
/// stored across cycles.
#[derive(Debug, PartialEq, Clone, Copy)]
pub struct Displacement {
    bearing_deg: f64,
    distance_km: f64,
}

impl Displacement {
    /// The identity displacement. Translating by it is a no-op.
    pub const NONE: Displacement = Displacement {
        bearing_deg: 0.0,
        distance_km: 0.0,
    };

    pub const fn new(bearing_deg: f64, distance_km: f64) -> Self {
        Self {
            bearing_deg,
            distance_km,
        }
    }

    /// Returns the bearing in degrees clockwise from north.
    pub const fn bearing_deg(&self) -> f64 { self.bearing_deg }

    /// Returns the distance in kilometers.
    pub const fn distance_km(&self) -> f64 { self.distance_km }

    /// Returns the distance in meters.
    pub fn distance_m(&self) -> f64 { self.distance_km * 1000.0 }
}

impl fmt::Display for Displacement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.1} m at {:.1}°", self.distance_m(), self.bearing_deg)
    }
}
