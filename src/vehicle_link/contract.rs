//! Collaborator contracts for the vehicle-control subsystem.
//!
//! Everything behind these traits is out of scope for this crate: link
//! establishment, wire encoding, retry and timeout policy all live with the
//! implementor. The core calls them as synchronous, potentially slow,
//! fallible operations and degrades every failure to a retry on the next
//! tick.

use super::mission::Mission;
use crate::geo::{GeoPoint, wrap_360};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use futures_core::Stream;
use std::pin::Pin;
use strum_macros::Display;

pub type PositionStream = Pin<Box<dyn Stream<Item = GeoPoint> + Send>>;
pub type AttitudeStream = Pin<Box<dyn Stream<Item = AttitudeSample> + Send>>;

/// The most recently observed reference-point position, stamped with the
/// time it was received.
///
/// Lives in one lock-guarded cell written by the reference monitor and read
/// by the re-anchoring loop; the whole sample is swapped as a unit so a new
/// latitude can never be paired with a stale longitude.
#[derive(Debug, Clone, Copy)]
pub struct ReferenceSample {
    position: GeoPoint,
    received: DateTime<Utc>,
}

impl ReferenceSample {
    pub fn now(position: GeoPoint) -> Self {
        Self {
            position,
            received: Utc::now(),
        }
    }

    pub const fn position(&self) -> GeoPoint { self.position }

    pub const fn received(&self) -> DateTime<Utc> { self.received }
}

/// Euler attitude of the reference platform. Yaw is normalized into
/// [0, 360) on construction.
#[derive(Debug, Clone, Copy)]
pub struct AttitudeSample {
    roll_deg: f64,
    pitch_deg: f64,
    yaw_deg: f64,
}

impl AttitudeSample {
    pub fn new(roll_deg: f64, pitch_deg: f64, yaw_deg: f64) -> Self {
        Self {
            roll_deg,
            pitch_deg,
            yaw_deg: wrap_360(yaw_deg),
        }
    }

    pub const fn roll_deg(&self) -> f64 { self.roll_deg }

    pub const fn pitch_deg(&self) -> f64 { self.pitch_deg }

    pub const fn yaw_deg(&self) -> f64 { self.yaw_deg }
}

#[derive(Debug, Display)]
pub enum CommandError {
    Unavailable,
    Denied,
    Timeout,
}

impl std::error::Error for CommandError {}

#[derive(Debug, Display)]
pub enum MissionError {
    Unavailable,
    TransferFailed,
    Busy,
    InvalidArgument,
}

impl std::error::Error for MissionError {}

/// Telemetry feed of the moving reference platform.
#[async_trait]
pub trait ReferenceFeed {
    /// Pushes position samples as the platform moves. The core keeps only
    /// the most recent one.
    fn subscribe_reference_position(&self) -> PositionStream;

    /// Pushes attitude samples of the platform.
    fn subscribe_reference_attitude(&self) -> AttitudeStream;

    /// Requests a position update rate from the telemetry source. Best
    /// effort; a denial is logged and ignored.
    async fn set_position_rate(&self, rate_hz: f64) -> Result<(), CommandError>;
}

/// Command surface of the vehicle whose mission tracks the reference.
#[async_trait]
pub trait VehicleControl {
    /// Reports the vehicle's current home position. Used once at startup to
    /// seed the anchor baseline.
    async fn home_position(&self) -> Result<GeoPoint, CommandError>;

    /// Commands the vehicle to move its home/reference anchor.
    async fn set_home_position(&self, home: GeoPoint) -> Result<(), CommandError>;

    /// Fetches the active waypoint sequence.
    async fn download_mission(&self) -> Result<Mission, MissionError>;

    /// Replaces the active waypoint sequence.
    async fn upload_mission(&self, mission: &Mission) -> Result<(), MissionError>;
}
