use crate::geo::GeoPoint;
use strum_macros::Display;

/// Camera trigger attached to a waypoint.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display, serde::Serialize, serde::Deserialize)]
pub enum CameraAction {
    None,
    TakePhoto,
    StartPhotoInterval,
    StopPhotoInterval,
    StartVideo,
    StopVideo,
}

/// A single mission item: a position plus payload the re-anchoring core
/// passes through untouched.
///
/// Only the position is ever rewritten; altitude, speed, radius, fly-through
/// and camera fields survive a re-anchor byte for byte.
#[derive(Debug, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
pub struct Waypoint {
    position: GeoPoint,
    relative_altitude_m: f64,
    speed_m_s: f64,
    acceptance_radius_m: f64,
    fly_through: bool,
    camera_action: CameraAction,
}

impl Waypoint {
    pub const fn new(
        position: GeoPoint,
        relative_altitude_m: f64,
        speed_m_s: f64,
        acceptance_radius_m: f64,
        fly_through: bool,
        camera_action: CameraAction,
    ) -> Self {
        Self {
            position,
            relative_altitude_m,
            speed_m_s,
            acceptance_radius_m,
            fly_through,
            camera_action,
        }
    }

    pub const fn position(&self) -> GeoPoint { self.position }

    pub const fn relative_altitude_m(&self) -> f64 { self.relative_altitude_m }

    pub const fn speed_m_s(&self) -> f64 { self.speed_m_s }

    pub const fn acceptance_radius_m(&self) -> f64 { self.acceptance_radius_m }

    pub const fn fly_through(&self) -> bool { self.fly_through }

    pub const fn camera_action(&self) -> CameraAction { self.camera_action }

    /// Rewrites the position. Everything else is untouchable from outside
    /// the mission subsystem.
    pub fn set_position(&mut self, position: GeoPoint) { self.position = position; }
}

/// An ordered waypoint sequence. Order defines the flight sequence and is
/// never changed by this crate.
///
/// A mission is fetched fresh from the vehicle at the start of each
/// re-anchoring cycle and handed back for upload; it is not cached between
/// cycles, so out-of-band edits on the vehicle side are picked up.
#[derive(Debug, Default, PartialEq, Clone, serde::Serialize, serde::Deserialize)]
pub struct Mission {
    items: Vec<Waypoint>,
}

impl Mission {
    pub const fn new(items: Vec<Waypoint>) -> Self { Self { items } }

    pub fn len(&self) -> usize { self.items.len() }

    pub fn is_empty(&self) -> bool { self.items.is_empty() }

    pub fn items(&self) -> &[Waypoint] { &self.items }

    pub fn items_mut(&mut self) -> &mut [Waypoint] { &mut self.items }
}
