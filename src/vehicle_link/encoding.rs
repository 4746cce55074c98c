//! Fixed-point coordinate encoding for collaborator wire formats.
//!
//! Some vehicle-link integrations exchange latitude/longitude as integer
//! degrees scaled by 10^7 (~1.1 cm resolution) instead of floating point.
//! The conversion lives here, at the boundary; everything inside the crate
//! is `f64` degrees.

/// Encodes degrees as a degrees-times-10^7 integer.
#[allow(clippy::cast_possible_truncation)]
pub fn deg_to_e7(deg: f64) -> i32 {
    (deg * 1e7).round() as i32
}

/// Decodes a degrees-times-10^7 integer back to degrees.
pub fn deg_from_e7(raw: i32) -> f64 {
    f64::from(raw) / 1e7
}
