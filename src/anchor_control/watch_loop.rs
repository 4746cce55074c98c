use super::drift::detect;
use super::reanchor::reanchor;
use crate::config::Config;
use crate::geo::{Displacement, GeoPoint};
use crate::vehicle_link::{CommandError, MissionError, ReferenceSample, VehicleControl};
use crate::{error, event, info, log, warn};
use std::sync::Arc;
use std::time::Duration;
use strum_macros::Display;
use tokio::sync::RwLock;
use tokio::time::interval;
use tokio_util::sync::CancellationToken;

/// Phase of the re-anchoring loop within one tick.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Display)]
pub enum WatchState {
    Idle,
    Sampling,
    Evaluating,
    Reanchoring,
}

#[derive(Debug, Display)]
enum CycleError {
    MissionDownload(MissionError),
    HomeUpdate(CommandError),
    PartialReanchor(MissionError),
}

/// The re-anchoring control loop.
///
/// Ticks at a fixed wall-clock cadence rather than per telemetry sample, so
/// command traffic toward the vehicle stays bounded no matter how fast the
/// reference feed runs. Each tick reads the latest reference sample, measures
/// drift against the last committed anchor and, only on threshold exceedance,
/// runs one re-anchoring cycle: download mission, translate, move home,
/// upload, commit. The anchor baseline is committed exactly once per
/// successful cycle; any failure leaves it untouched so the next tick retries
/// the same (or larger) displacement from the same baseline.
pub struct AnchorWatch {
    vehicle: Arc<dyn VehicleControl + Send + Sync>,
    sample_cell: Arc<RwLock<Option<ReferenceSample>>>,
    anchor: RwLock<GeoPoint>,
    state: RwLock<WatchState>,
    threshold_m: f64,
    tick_interval: Duration,
}

impl AnchorWatch {
    pub fn new(
        vehicle: Arc<dyn VehicleControl + Send + Sync>,
        sample_cell: Arc<RwLock<Option<ReferenceSample>>>,
        initial_anchor: GeoPoint,
        config: &Config,
    ) -> Self {
        Self {
            vehicle,
            sample_cell,
            anchor: RwLock::new(initial_anchor),
            state: RwLock::new(WatchState::Idle),
            threshold_m: config.threshold_m(),
            tick_interval: config.tick_interval(),
        }
    }

    /// Returns the last committed anchor position.
    pub async fn anchor(&self) -> GeoPoint { *self.anchor.read().await }

    /// Returns the current loop phase.
    pub async fn state(&self) -> WatchState { *self.state.read().await }

    /// Runs the loop until cancellation.
    pub async fn run(&self, cancel: CancellationToken) {
        info!(
            "Anchor watch running: threshold {} m, tick every {:?}",
            self.threshold_m, self.tick_interval
        );
        let mut ticker = interval(self.tick_interval);
        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    info!("Anchor watch shutting down");
                    break;
                }
                _ = ticker.tick() => self.tick().await,
            }
        }
    }

    async fn tick(&self) {
        self.set_state(WatchState::Sampling).await;
        let sample = *self.sample_cell.read().await;
        let Some(sample) = sample else {
            event!("No reference sample received yet");
            self.set_state(WatchState::Idle).await;
            return;
        };

        self.set_state(WatchState::Evaluating).await;
        let anchor = *self.anchor.read().await;
        let drift = detect(&anchor, &sample.position(), self.threshold_m);
        log!(
            "Reference drift {:.1} m at {:.1}° (threshold {} m)",
            drift.distance_m(),
            drift.displacement().bearing_deg(),
            self.threshold_m
        );

        if drift.exceeds() {
            self.set_state(WatchState::Reanchoring).await;
            // Home tracks the reference horizontally but keeps its own
            // commanded altitude.
            let new_anchor = sample.position().with_altitude(anchor.alt_m());
            match self.reanchor_cycle(new_anchor, &drift.displacement()).await {
                Ok(uploaded) => {
                    *self.anchor.write().await = new_anchor;
                    info!("Re-anchored {uploaded} waypoints, new anchor {new_anchor}");
                }
                Err(CycleError::MissionDownload(e)) => {
                    warn!("Mission download failed ({e}), retrying next tick");
                }
                Err(CycleError::HomeUpdate(e)) => {
                    warn!("Home update failed ({e}), retrying next tick");
                }
                Err(CycleError::PartialReanchor(e)) => {
                    error!(
                        "Mission upload failed after home update ({e}); home and mission \
                         are inconsistent until the next successful cycle"
                    );
                }
            }
        }
        self.set_state(WatchState::Idle).await;
    }

    /// One re-anchoring cycle. The home update and the mission upload are a
    /// best-effort pair, not a transaction; the collaborator offers no atomic
    /// combined primitive.
    async fn reanchor_cycle(
        &self,
        new_home: GeoPoint,
        displacement: &Displacement,
    ) -> Result<usize, CycleError> {
        let mission =
            self.vehicle.download_mission().await.map_err(CycleError::MissionDownload)?;
        let moved = reanchor(mission, displacement);
        self.vehicle.set_home_position(new_home).await.map_err(CycleError::HomeUpdate)?;
        self.vehicle.upload_mission(&moved).await.map_err(CycleError::PartialReanchor)?;
        Ok(moved.len())
    }

    async fn set_state(&self, next: WatchState) {
        let mut state = self.state.write().await;
        if *state != next {
            event!("Watch state {} -> {next}", *state);
            *state = next;
        }
    }
}
