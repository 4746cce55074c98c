mod drift;
mod reanchor;
mod watch_loop;

pub use drift::{DriftResult, detect};
pub use reanchor::reanchor;
pub use watch_loop::{AnchorWatch, WatchState};
