use std::fmt;
use strum_macros::Display;

/// A geographic position in degrees on a spherical earth model.
///
/// Latitude and longitude are stored as `f64` degrees; an optional altitude
/// in meters rides along untouched by any of the spherical math except
/// [`destination`](super::destination), which carries the origin's altitude
/// into its result.
///
/// Validated instances satisfy lat ∈ [-90, 90] and lon ∈ [-180, 180).
#[derive(Debug, PartialEq, Clone, Copy, serde::Serialize, serde::Deserialize)]
pub struct GeoPoint {
    lat_deg: f64,
    lon_deg: f64,
    alt_m: Option<f64>,
}

#[derive(Debug, Display)]
pub enum GeoError {
    InvalidLatitude(f64),
    InvalidLongitude(f64),
}

impl std::error::Error for GeoError {}

impl GeoPoint {
    /// Creates a new position without an altitude.
    pub const fn new(lat_deg: f64, lon_deg: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            alt_m: None,
        }
    }

    /// Creates a new position with an altitude in meters.
    pub const fn with_alt(lat_deg: f64, lon_deg: f64, alt_m: f64) -> Self {
        Self {
            lat_deg,
            lon_deg,
            alt_m: Some(alt_m),
        }
    }

    /// Checks a raw coordinate pair against the coordinate domain.
    ///
    /// Rejects non-finite values, latitudes outside [-90, 90] and longitudes
    /// outside [-180, 180). Telemetry ingestion goes through here so the
    /// spherical math never sees an out-of-domain point.
    pub fn validated(lat_deg: f64, lon_deg: f64, alt_m: Option<f64>) -> Result<Self, GeoError> {
        if !lat_deg.is_finite() || !(-90.0..=90.0).contains(&lat_deg) {
            return Err(GeoError::InvalidLatitude(lat_deg));
        }
        if !lon_deg.is_finite() || !(-180.0..180.0).contains(&lon_deg) {
            return Err(GeoError::InvalidLongitude(lon_deg));
        }
        Ok(Self {
            lat_deg,
            lon_deg,
            alt_m,
        })
    }

    /// Returns the latitude in degrees.
    pub const fn lat_deg(&self) -> f64 { self.lat_deg }

    /// Returns the longitude in degrees.
    pub const fn lon_deg(&self) -> f64 { self.lon_deg }

    /// Returns the altitude in meters, if one is attached.
    pub const fn alt_m(&self) -> Option<f64> { self.alt_m }

    /// Returns the same horizontal position with the altitude replaced.
    pub const fn with_altitude(self, alt_m: Option<f64>) -> Self {
        Self { alt_m, ..self }
    }
}

impl fmt::Display for GeoPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:.7}, {:.7})", self.lat_deg, self.lon_deg)
    }
}

#[cfg(test)]
mod tests {
    use super::{GeoError, GeoPoint};

    #[test]
    fn test_domain_boundaries() {
        assert!(GeoPoint::validated(90.0, 0.0, None).is_ok());
        assert!(GeoPoint::validated(-90.0, -180.0, None).is_ok());
        assert!(GeoPoint::validated(0.0, 179.9999999, Some(12.0)).is_ok());
        assert!(matches!(
            GeoPoint::validated(90.0001, 0.0, None),
            Err(GeoError::InvalidLatitude(_))
        ));
        assert!(matches!(
            GeoPoint::validated(0.0, 180.0, None),
            Err(GeoError::InvalidLongitude(_))
        ));
    }

    #[test]
    fn test_non_finite_coordinates_are_rejected() {
        assert!(GeoPoint::validated(f64::NAN, 0.0, None).is_err());
        assert!(GeoPoint::validated(0.0, f64::INFINITY, None).is_err());
    }

    #[test]
    fn test_altitude_is_carried_not_checked() {
        let p = GeoPoint::validated(47.0, 8.0, Some(-480.0)).expect("in domain");
        assert_eq!(p.alt_m(), Some(-480.0));
        assert_eq!(p.with_altitude(None).alt_m(), None);
    }
}
