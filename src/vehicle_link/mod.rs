mod contract;
mod encoding;
mod mission;
mod monitor;
mod sim;

pub use contract::{
    AttitudeSample, AttitudeStream, CommandError, MissionError, PositionStream, ReferenceFeed,
    ReferenceSample, VehicleControl,
};
pub use encoding::{deg_from_e7, deg_to_e7};
pub use mission::{CameraAction, Mission, Waypoint};
pub use monitor::ReferenceMonitor;
pub use sim::SimVehicleLink;
