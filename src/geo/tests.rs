use super::{EARTH_RADIUS_KM, GeoPoint, bearing, destination, distance, wrap_180, wrap_360};
use rand::{Rng, rng};

const RANDOM_ROUNDS: usize = 200;

fn random_point() -> GeoPoint {
    let lat = rng().random_range(-85.0..=85.0);
    let lon = rng().random_range(-180.0..180.0);
    GeoPoint::new(lat, lon)
}

#[test]
fn test_wrap_360() {
    assert_eq!(wrap_360(0.0), 0.0);
    assert_eq!(wrap_360(360.0), 0.0);
    assert_eq!(wrap_360(-90.0), 270.0);
    assert_eq!(wrap_360(450.0), 90.0);
    assert_eq!(wrap_360(-720.0), 0.0);
}

#[test]
fn test_wrap_180() {
    assert_eq!(wrap_180(190.0), -170.0);
    assert_eq!(wrap_180(-190.0), 170.0);
    assert_eq!(wrap_180(0.0), 0.0);
    assert_eq!(wrap_180(180.0), -180.0);
}

#[test]
fn test_coincident_points_are_finite() {
    for _ in 0..RANDOM_ROUNDS {
        let p = random_point();
        let b = bearing(&p, &p);
        let d = distance(&p, &p);
        assert!(b.is_finite(), "bearing({p}, {p}) not finite");
        assert_eq!(d, 0.0, "distance({p}, {p}) not zero");
    }
    let p = GeoPoint::new(47.3977419, 8.2455938);
    assert_eq!(bearing(&p, &p), 0.0);
}

#[test]
fn test_distance_is_symmetric() {
    for _ in 0..RANDOM_ROUNDS {
        let a = random_point();
        let b = random_point();
        let d_ab = distance(&a, &b);
        let d_ba = distance(&b, &a);
        assert!((d_ab - d_ba).abs() < 1e-9, "asymmetric: {a} -> {b}");
    }
}

#[test]
fn test_cardinal_bearings() {
    let origin = GeoPoint::new(0.0, 0.0);
    let north = GeoPoint::new(1.0, 0.0);
    let east = GeoPoint::new(0.0, 1.0);
    let south = GeoPoint::new(-1.0, 0.0);
    let west = GeoPoint::new(0.0, -1.0);
    assert!((bearing(&origin, &north) - 0.0).abs() < 1e-9);
    assert!((bearing(&origin, &east) - 90.0).abs() < 1e-9);
    assert!((bearing(&origin, &south) - 180.0).abs() < 1e-9);
    assert!((bearing(&origin, &west) - 270.0).abs() < 1e-9);
}

#[test]
fn test_known_distance() {
    // Zurich to Bern, roughly 95 km.
    let zurich = GeoPoint::new(47.3769, 8.5417);
    let bern = GeoPoint::new(46.9480, 7.4474);
    let d = distance(&zurich, &bern);
    assert!((d - 95.0).abs() < 2.0, "got {d} km");
}

#[test]
fn test_destination_round_trip() {
    for _ in 0..RANDOM_ROUNDS {
        let p = random_point();
        let b = rng().random_range(0.0..360.0);
        let d = rng().random_range(0.0..200.0);
        let moved = destination(&p, b, d);
        let back = distance(&p, &moved);
        assert!(
            (back - d).abs() < 1e-6,
            "round trip from {p} bearing {b} distance {d} gave {back}"
        );
    }
}

#[test]
fn test_destination_matches_bearing() {
    // The measured initial bearing toward the destination must agree with
    // the bearing we travelled on, which pins the forward convention down
    // end-to-end.
    for _ in 0..RANDOM_ROUNDS {
        let p = random_point();
        let b = rng().random_range(0.0..360.0);
        let moved = destination(&p, b, 25.0);
        let measured = bearing(&p, &moved);
        let diff = (measured - b).abs().min(360.0 - (measured - b).abs());
        assert!(diff < 1e-6, "travelled {b}, measured {measured} from {p}");
    }
}

#[test]
fn test_destination_zero_distance_is_identity() {
    let p = GeoPoint::with_alt(47.3977419, 8.2455938, -480.0);
    let moved = destination(&p, 123.0, 0.0);
    assert!((moved.lat_deg() - p.lat_deg()).abs() < 1e-12);
    assert!((moved.lon_deg() - p.lon_deg()).abs() < 1e-12);
    assert_eq!(moved.alt_m(), Some(-480.0));
}

#[test]
fn test_pole_adjacent_inputs_stay_in_domain() {
    let near_pole = GeoPoint::new(89.9999, 10.0);
    let d = destination(&near_pole, 0.0, 50.0);
    assert!(d.lat_deg().is_finite() && d.lon_deg().is_finite());
    let other = GeoPoint::new(-89.9999, -170.0);
    assert!(distance(&near_pole, &other).is_finite());
    assert!(bearing(&near_pole, &other).is_finite());
}

#[test]
fn test_antipodal_distance_is_half_circumference() {
    let a = GeoPoint::new(0.0, 0.0);
    let b = GeoPoint::new(0.0, 179.9999999);
    let d = distance(&a, &b);
    let half = std::f64::consts::PI * EARTH_RADIUS_KM;
    assert!((d - half).abs() < 0.1, "got {d}, expected ~{half}");
}
