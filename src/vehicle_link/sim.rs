//! In-process stand-in for the vehicle-control subsystem.
//!
//! Simulates a platform drifting at constant speed and heading plus a
//! vehicle that accepts home and mission commands. Lets the binary run the
//! whole re-anchoring pipeline without a link to real hardware; a MAVLink or
//! similar adapter would implement the same two traits.

use super::contract::{
    AttitudeSample, AttitudeStream, CommandError, MissionError, PositionStream, ReferenceFeed,
    VehicleControl,
};
use super::mission::{CameraAction, Mission, Waypoint};
use crate::event;
use crate::geo::{GeoPoint, destination};
use async_trait::async_trait;
use futures::stream;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::sleep;

const DEFAULT_RATE_HZ: f64 = 1.0;
const MIN_RATE_HZ: f64 = 0.1;
const ATTITUDE_PERIOD: Duration = Duration::from_secs(1);
const SURVEY_LEG_KM: f64 = 0.2;
const SURVEY_ALTITUDE_M: f64 = 20.0;
const SURVEY_SPEED_M_S: f64 = 5.0;
const SURVEY_RADIUS_M: f64 = 2.0;

pub struct SimVehicleLink {
    platform_start: GeoPoint,
    drift_bearing_deg: f64,
    drift_speed_m_s: f64,
    position_rate_hz: Arc<RwLock<f64>>,
    home: RwLock<GeoPoint>,
    mission: RwLock<Mission>,
}

impl SimVehicleLink {
    /// Creates a simulated link with the vehicle's home and a small survey
    /// pattern seeded around the platform's starting position.
    pub fn new(platform_start: GeoPoint, drift_bearing_deg: f64, drift_speed_m_s: f64) -> Self {
        Self {
            platform_start,
            drift_bearing_deg,
            drift_speed_m_s,
            position_rate_hz: Arc::new(RwLock::new(DEFAULT_RATE_HZ)),
            home: RwLock::new(platform_start),
            mission: RwLock::new(Self::survey_mission(&platform_start)),
        }
    }

    fn survey_mission(center: &GeoPoint) -> Mission {
        let corners = [45.0, 135.0, 225.0, 315.0].map(|brg| {
            Waypoint::new(
                destination(center, brg, SURVEY_LEG_KM).with_altitude(None),
                SURVEY_ALTITUDE_M,
                SURVEY_SPEED_M_S,
                SURVEY_RADIUS_M,
                true,
                CameraAction::None,
            )
        });
        Mission::new(corners.to_vec())
    }
}

#[async_trait]
impl ReferenceFeed for SimVehicleLink {
    fn subscribe_reference_position(&self) -> PositionStream {
        let rate = Arc::clone(&self.position_rate_hz);
        let brg = self.drift_bearing_deg;
        let speed = self.drift_speed_m_s;
        Box::pin(stream::unfold(self.platform_start, move |pos| {
            let rate = Arc::clone(&rate);
            async move {
                let period = Duration::from_secs_f64(1.0 / (*rate.read().await).max(MIN_RATE_HZ));
                sleep(period).await;
                let next = destination(&pos, brg, speed * period.as_secs_f64() / 1000.0);
                Some((next, next))
            }
        }))
    }

    #[allow(clippy::cast_precision_loss)]
    fn subscribe_reference_attitude(&self) -> AttitudeStream {
        let yaw = self.drift_bearing_deg;
        Box::pin(stream::unfold(0u64, move |tick| async move {
            sleep(ATTITUDE_PERIOD).await;
            let sway = (tick as f64 * 0.4).sin();
            let att = AttitudeSample::new(2.0 * sway, 0.5 * sway, yaw);
            Some((att, tick.wrapping_add(1)))
        }))
    }

    async fn set_position_rate(&self, rate_hz: f64) -> Result<(), CommandError> {
        if !rate_hz.is_finite() || rate_hz <= 0.0 {
            return Err(CommandError::Denied);
        }
        *self.position_rate_hz.write().await = rate_hz;
        event!("Sim position rate set to {rate_hz} Hz");
        Ok(())
    }
}

#[async_trait]
impl VehicleControl for SimVehicleLink {
    async fn home_position(&self) -> Result<GeoPoint, CommandError> {
        Ok(*self.home.read().await)
    }

    async fn set_home_position(&self, home: GeoPoint) -> Result<(), CommandError> {
        *self.home.write().await = home;
        event!("Sim vehicle home moved to {home}");
        Ok(())
    }

    async fn download_mission(&self) -> Result<Mission, MissionError> {
        Ok(self.mission.read().await.clone())
    }

    async fn upload_mission(&self, mission: &Mission) -> Result<(), MissionError> {
        if mission.is_empty() {
            return Err(MissionError::InvalidArgument);
        }
        *self.mission.write().await = mission.clone();
        event!("Sim vehicle accepted {} waypoints", mission.len());
        Ok(())
    }
}
