#![allow(dead_code, clippy::similar_names)]
#![warn(clippy::shadow_reuse, clippy::shadow_same, clippy::builtin_type_shadow)]
mod anchor_control;
mod config;
mod geo;
mod logger;
mod vehicle_link;

use crate::anchor_control::AnchorWatch;
use crate::config::Config;
use crate::geo::GeoPoint;
use crate::vehicle_link::{ReferenceFeed, ReferenceMonitor, SimVehicleLink, VehicleControl};
use std::sync::Arc;
use std::time::Duration;
use tokio_util::sync::CancellationToken;

// Simulated platform: starts over the default PX4 home and drifts
// north-east at a slow boat's pace.
const PLATFORM_START: GeoPoint = GeoPoint::with_alt(47.3977419, 8.2455938, -480.0);
const PLATFORM_DRIFT_BEARING_DEG: f64 = 45.0;
const PLATFORM_DRIFT_SPEED_M_S: f64 = 1.5;

const HOME_RETRY_DELAY: Duration = Duration::from_secs(2);

#[tokio::main(flavor = "multi_thread", worker_threads = 2)]
async fn main() {
    let conf = Config::from_env();
    let link = Arc::new(SimVehicleLink::new(
        PLATFORM_START,
        PLATFORM_DRIFT_BEARING_DEG,
        PLATFORM_DRIFT_SPEED_M_S,
    ));
    let cancel = CancellationToken::new();

    let cancel_on_signal = cancel.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            cancel_on_signal.cancel();
        }
    });

    let watch = init(&conf, Arc::clone(&link), cancel.clone()).await;
    watch.run(cancel).await;
}

async fn init(
    conf: &Config,
    link: Arc<SimVehicleLink>,
    cancel: CancellationToken,
) -> AnchorWatch {
    if let Err(e) = link.set_position_rate(conf.position_rate_hz()).await {
        warn!("Position rate request denied ({e}), staying on the feed's default");
    }

    let monitor = Arc::new(ReferenceMonitor::new());
    let sample_cell = monitor.sample_cell();
    let feed = Arc::clone(&link) as Arc<dyn ReferenceFeed + Send + Sync>;
    let monitor_cancel = cancel.clone();
    tokio::spawn(async move {
        monitor.run(feed, monitor_cancel).await;
    });

    let anchor = initial_anchor(&link).await;
    AnchorWatch::new(link, sample_cell, anchor, conf)
}

/// Seeds the anchor baseline from the vehicle's reported home position,
/// retrying until the vehicle answers.
async fn initial_anchor(vehicle: &Arc<SimVehicleLink>) -> GeoPoint {
    loop {
        match vehicle.home_position().await {
            Ok(home) => {
                info!("Initial anchor at {home}");
                return home;
            }
            Err(e) => {
                warn!("Vehicle home position not available yet ({e}), retrying");
                tokio::time::sleep(HOME_RETRY_DELAY).await;
            }
        }
    }
}
