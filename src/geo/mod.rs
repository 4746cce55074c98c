mod displacement;
mod point;
mod spherical;

pub use displacement::Displacement;
pub use point::{GeoError, GeoPoint};
pub use spherical::{EARTH_RADIUS_KM, bearing, destination, distance, wrap_180, wrap_360};

#[cfg(test)]
mod tests;
