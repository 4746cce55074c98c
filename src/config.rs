use std::env;
use std::time::Duration;

/// Runtime configuration, read from the environment at startup.
///
/// `ANCHORWATCH_THRESHOLD_M` is the drift threshold in meters before a
/// re-anchor is triggered, `ANCHORWATCH_TICK_SECS` the control-loop cadence
/// and `ANCHORWATCH_POSITION_RATE_HZ` the position rate requested from the
/// reference telemetry feed. Unparseable values fall back to the defaults.
#[derive(Debug, Clone, Copy)]
pub struct Config {
    threshold_m: f64,
    tick_interval: Duration,
    position_rate_hz: f64,
}

impl Config {
    const DEFAULT_THRESHOLD_M: f64 = 10.0;
    const DEFAULT_TICK_SECS: u64 = 1;
    const DEFAULT_POSITION_RATE_HZ: f64 = 1.0;

    pub const fn new(threshold_m: f64, tick_interval: Duration, position_rate_hz: f64) -> Self {
        Self {
            threshold_m,
            tick_interval,
            position_rate_hz,
        }
    }

    pub fn from_env() -> Self {
        let threshold_m = env_parse("ANCHORWATCH_THRESHOLD_M", Self::DEFAULT_THRESHOLD_M);
        let tick_secs = env_parse("ANCHORWATCH_TICK_SECS", Self::DEFAULT_TICK_SECS);
        let position_rate_hz =
            env_parse("ANCHORWATCH_POSITION_RATE_HZ", Self::DEFAULT_POSITION_RATE_HZ);
        Self {
            threshold_m,
            tick_interval: Duration::from_secs(tick_secs),
            position_rate_hz,
        }
    }

    pub const fn threshold_m(&self) -> f64 { self.threshold_m }

    pub const fn tick_interval(&self) -> Duration { self.tick_interval }

    pub const fn position_rate_hz(&self) -> f64 { self.position_rate_hz }
}

fn env_parse<T: std::str::FromStr>(key: &str, default: T) -> T {
    env::var(key).ok().and_then(|v| v.parse().ok()).unwrap_or(default)
}
