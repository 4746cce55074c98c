//! Great-circle math on a spherical earth.
//!
//! All public functions take and return degrees; the trigonometry runs in
//! radians internally. The model uses a fixed mean radius, which is accurate
//! to well under a percent for the platform-tracking distances this crate
//! deals in.

use super::GeoPoint;

/// Mean earth radius in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Wraps an angle in degrees into [0, 360).
pub fn wrap_360(angle_deg: f64) -> f64 {
    let wrapped = angle_deg % 360.0;
    if wrapped < 0.0 { wrapped + 360.0 } else { wrapped }
}

/// Wraps an angle in degrees into [-180, 180).
pub fn wrap_180(angle_deg: f64) -> f64 {
    wrap_360(angle_deg + 180.0) - 180.0
}

/// Initial bearing of the great-circle path from `from` to `to`.
///
/// Returned in degrees clockwise from north, normalized into [0, 360).
/// This is the forward bearing: travelling from `from` along the returned
/// heading leads toward `to`. For coincident points the longitude delta and
/// both `atan2` arguments collapse to zero and the result is 0.0, never NaN.
pub fn bearing(from: &GeoPoint, to: &GeoPoint) -> f64 {
    let lat1 = from.lat_deg().to_radians();
    let lat2 = to.lat_deg().to_radians();
    let delta_lon = (to.lon_deg() - from.lon_deg()).to_radians();

    let x = lat2.cos() * delta_lon.sin();
    let y = lat1.cos() * lat2.sin() - lat1.sin() * lat2.cos() * delta_lon.cos();

    wrap_360(x.atan2(y).to_degrees())
}

/// Haversine great-circle distance between two points in kilometers.
///
/// The square-root argument is clamped to [0, 1] so floating-point overshoot
/// near coincident or antipodal points cannot escape the trig domain.
pub fn distance(a: &GeoPoint, b: &GeoPoint) -> f64 {
    let lat1 = a.lat_deg().to_radians();
    let lat2 = b.lat_deg().to_radians();
    let d_lat = (b.lat_deg() - a.lat_deg()).to_radians();
    let d_lon = (b.lon_deg() - a.lon_deg()).to_radians();

    let h = (d_lat / 2.0).sin().powi(2) + lat1.cos() * lat2.cos() * (d_lon / 2.0).sin().powi(2);
    let h = h.clamp(0.0, 1.0);
    let c = 2.0 * h.sqrt().atan2((1.0 - h).sqrt());

    EARTH_RADIUS_KM * c
}

/// Forward geodesic problem: the point reached by travelling `distance_km`
/// along `bearing_deg` from `origin`.
///
/// Both coordinates of the result are computed; the longitude is returned
/// raw, without wrapping into [-180, 180). The origin's altitude is carried
/// over unchanged. The `asin` argument is clamped so pole-adjacent origins
/// cannot produce a domain error.
pub fn destination(origin: &GeoPoint, bearing_deg: f64, distance_km: f64) -> GeoPoint {
    let lat1 = origin.lat_deg().to_radians();
    let lon1 = origin.lon_deg().to_radians();
    let brg = bearing_deg.to_radians();
    let ang = distance_km / EARTH_RADIUS_KM;

    let sin_lat2 = lat1.sin() * ang.cos() + lat1.cos() * ang.sin() * brg.cos();
    let lat2 = sin_lat2.clamp(-1.0, 1.0).asin();
    let lon2 = lon1
        + (brg.sin() * ang.sin() * lat1.cos()).atan2(ang.cos() - lat1.sin() * lat2.sin());

    GeoPoint::new(lat2.to_degrees(), lon2.to_degrees()).with_altitude(origin.alt_m())
}
