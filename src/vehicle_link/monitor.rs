use super::contract::{AttitudeSample, ReferenceFeed, ReferenceSample};
use crate::geo::GeoPoint;
use crate::{event, warn};
use futures::StreamExt;
use std::sync::Arc;
use tokio::sync::RwLock;
use tokio_util::sync::CancellationToken;

/// Consumes the reference platform's telemetry streams and publishes the
/// latest validated sample for the re-anchoring loop.
///
/// This is the write side of the one piece of shared mutable state in the
/// crate. Samples are validated at ingestion so an out-of-domain coordinate
/// never reaches the spherical math, and a whole [`ReferenceSample`] is
/// swapped under the lock in one step.
pub struct ReferenceMonitor {
    sample_cell: Arc<RwLock<Option<ReferenceSample>>>,
    attitude_cell: Arc<RwLock<Option<AttitudeSample>>>,
}

impl Default for ReferenceMonitor {
    fn default() -> Self { Self::new() }
}

impl ReferenceMonitor {
    pub fn new() -> Self {
        Self {
            sample_cell: Arc::new(RwLock::new(None)),
            attitude_cell: Arc::new(RwLock::new(None)),
        }
    }

    /// Provides a cloned reference to the latest-position cell.
    pub fn sample_cell(&self) -> Arc<RwLock<Option<ReferenceSample>>> {
        Arc::clone(&self.sample_cell)
    }

    /// Provides a cloned reference to the latest-attitude cell.
    pub fn attitude_cell(&self) -> Arc<RwLock<Option<AttitudeSample>>> {
        Arc::clone(&self.attitude_cell)
    }

    /// Drains the feed's streams until cancellation or until both streams
    /// end.
    pub async fn run(&self, feed: Arc<dyn ReferenceFeed + Send + Sync>, cancel: CancellationToken) {
        let mut positions = feed.subscribe_reference_position();
        let mut attitudes = feed.subscribe_reference_attitude();
        loop {
            tokio::select! {
                () = cancel.cancelled() => {
                    event!("Reference monitor shutting down");
                    break;
                }
                Some(pos) = positions.next() => self.ingest_position(pos).await,
                Some(att) = attitudes.next() => self.ingest_attitude(att).await,
            }
        }
    }

    async fn ingest_position(&self, pos: GeoPoint) {
        match GeoPoint::validated(pos.lat_deg(), pos.lon_deg(), pos.alt_m()) {
            Ok(valid) => {
                event!("Reference position {valid}");
                *self.sample_cell.write().await = Some(ReferenceSample::now(valid));
            }
            Err(e) => {
                warn!("Dropping reference sample {pos}: {e}");
            }
        }
    }

    async fn ingest_attitude(&self, att: AttitudeSample) {
        event!(
            "Reference attitude roll {:.1}° pitch {:.1}° yaw {:.1}°",
            att.roll_deg(),
            att.pitch_deg(),
            att.yaw_deg()
        );
        *self.attitude_cell.write().await = Some(att);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_valid_sample_is_published() {
        let monitor = ReferenceMonitor::new();
        monitor.ingest_position(GeoPoint::new(47.0, 8.0)).await;
        let cell = monitor.sample_cell();
        let sample = (*cell.read().await).expect("sample missing");
        assert_eq!(sample.position(), GeoPoint::new(47.0, 8.0));
    }

    #[tokio::test]
    async fn test_invalid_sample_is_dropped() {
        let monitor = ReferenceMonitor::new();
        monitor.ingest_position(GeoPoint::new(91.0, 8.0)).await;
        monitor.ingest_position(GeoPoint::new(47.0, 180.0)).await;
        monitor.ingest_position(GeoPoint::new(f64::NAN, 8.0)).await;
        assert!(monitor.sample_cell().read().await.is_none());
    }

    #[tokio::test]
    async fn test_newer_sample_replaces_older() {
        let monitor = ReferenceMonitor::new();
        monitor.ingest_position(GeoPoint::new(47.0, 8.0)).await;
        monitor.ingest_position(GeoPoint::new(47.5, 8.5)).await;
        let cell = monitor.sample_cell();
        let sample = (*cell.read().await).expect("sample missing");
        assert_eq!(sample.position(), GeoPoint::new(47.5, 8.5));
    }

    #[tokio::test]
    async fn test_attitude_yaw_is_normalized() {
        let monitor = ReferenceMonitor::new();
        monitor.ingest_attitude(AttitudeSample::new(1.0, -2.0, -90.0)).await;
        let cell = monitor.attitude_cell();
        let att = (*cell.read().await).expect("attitude missing");
        assert_eq!(att.yaw_deg(), 270.0);
    }
}
