//! The pure force model: repulsion falloff, home pull, ambient soft push.
//!
//! All functions are stateless maps from positions and repulsors to vectors.
//! Scaling by per-particle properties (density, polarity) and integration
//! happen in the particle field, not here.

use crate::repulsor::Repulsor;
use glam::DVec2;

/// Ambient dust feels a repulsor out to this multiple of its radius.
pub const AMBIENT_RANGE_SCALE: f64 = 1.5;
/// Fixed magnitude of the ambient soft push at the repulsor center.
pub const AMBIENT_PUSH_STRENGTH: f64 = 2.0;
/// The home pull is the ease constant further scaled down by this factor.
pub const HOME_PULL_RATE: f64 = 0.1;

/// Repulsion felt by a text particle from one repulsor.
///
/// Zero at and beyond the radius of influence; inside it, the magnitude
/// falls off linearly from 1 at the center to 0 at the boundary, directed
/// from the repulsor toward the particle (push-away). A particle exactly on
/// the repulsor center gets the zero vector: the direction is undefined
/// there and the result must stay finite.
pub fn repulsion(pos: DVec2, repulsor: &Repulsor) -> DVec2 {
    let offset = pos - repulsor.center;
    let distance = offset.length();
    if distance >= repulsor.radius || distance == 0.0 {
        return DVec2::ZERO;
    }
    let falloff = (repulsor.radius - distance) / repulsor.radius;
    offset / distance * falloff
}

/// The weak constant-rate pull back toward a text particle's home.
///
/// Not a physical spring: there is no velocity term here, damping is the
/// separate friction step applied after integration.
pub fn home_pull(pos: DVec2, home: DVec2, ease: f64) -> DVec2 {
    (home - pos) * ease * HOME_PULL_RATE
}

/// Positional displacement of an ambient particle away from a repulsor.
///
/// Same falloff shape as [`repulsion`] but over the wider boundary
/// `radius * 1.5` and with a small fixed magnitude. Applied directly to
/// position; ambient dust has no reactive velocity. The zero-distance
/// fallback is the zero vector, as for [`repulsion`].
pub fn ambient_push(pos: DVec2, repulsor: &Repulsor) -> DVec2 {
    let range = repulsor.radius * AMBIENT_RANGE_SCALE;
    let offset = pos - repulsor.center;
    let distance = offset.length();
    if distance >= range || distance == 0.0 {
        return DVec2::ZERO;
    }
    let falloff = (range - distance) / range;
    offset / distance * falloff * AMBIENT_PUSH_STRENGTH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn repulsor_at_origin(radius: f64) -> Repulsor {
        Repulsor::new(DVec2::ZERO, radius).unwrap()
    }

    // ---- repulsion ----

    #[test]
    fn repulsion_is_zero_at_and_beyond_the_radius() {
        let r = repulsor_at_origin(100.0);
        assert_eq!(repulsion(DVec2::new(100.0, 0.0), &r), DVec2::ZERO);
        assert_eq!(repulsion(DVec2::new(250.0, 0.0), &r), DVec2::ZERO);
    }

    #[test]
    fn repulsion_is_full_strength_near_the_center() {
        let r = repulsor_at_origin(100.0);
        let f = repulsion(DVec2::new(1e-9, 0.0), &r);
        assert!((f.length() - 1.0).abs() < 1e-6, "got {}", f.length());
    }

    #[test]
    fn repulsion_points_away_from_the_repulsor() {
        let r = repulsor_at_origin(100.0);
        let f = repulsion(DVec2::new(30.0, 40.0), &r);
        // Same direction as the particle offset.
        let cross = f.x * 40.0 - f.y * 30.0;
        assert!(cross.abs() < 1e-12, "not collinear, cross = {cross}");
        assert!(f.dot(DVec2::new(30.0, 40.0)) > 0.0, "points inward");
    }

    #[test]
    fn repulsion_halfway_out_has_half_magnitude() {
        let r = repulsor_at_origin(100.0);
        let f = repulsion(DVec2::new(50.0, 0.0), &r);
        assert!((f.length() - 0.5).abs() < 1e-12);
    }

    #[test]
    fn repulsion_zero_distance_falls_back_to_zero_vector() {
        let r = repulsor_at_origin(100.0);
        let f = repulsion(DVec2::ZERO, &r);
        assert_eq!(f, DVec2::ZERO);
        assert!(f.x.is_finite() && f.y.is_finite());
    }

    // ---- home_pull ----

    #[test]
    fn home_pull_points_toward_home() {
        let f = home_pull(DVec2::new(10.0, 0.0), DVec2::ZERO, 0.05);
        assert!(f.x < 0.0);
        assert_eq!(f.y, 0.0);
    }

    #[test]
    fn home_pull_is_zero_at_home() {
        assert_eq!(
            home_pull(DVec2::new(3.0, 4.0), DVec2::new(3.0, 4.0), 0.05),
            DVec2::ZERO
        );
    }

    #[test]
    fn home_pull_scales_with_ease_and_rate() {
        let f = home_pull(DVec2::ZERO, DVec2::new(100.0, 0.0), 0.05);
        // 100 * 0.05 * 0.1
        assert!((f.x - 0.5).abs() < 1e-12);
    }

    // ---- ambient_push ----

    #[test]
    fn ambient_push_reaches_past_the_plain_radius() {
        let r = repulsor_at_origin(100.0);
        let inside_extended = DVec2::new(120.0, 0.0);
        assert_eq!(repulsion(inside_extended, &r), DVec2::ZERO);
        assert!(ambient_push(inside_extended, &r).length() > 0.0);
    }

    #[test]
    fn ambient_push_is_zero_at_the_extended_boundary() {
        let r = repulsor_at_origin(100.0);
        assert_eq!(ambient_push(DVec2::new(150.0, 0.0), &r), DVec2::ZERO);
    }

    #[test]
    fn ambient_push_points_away_and_is_bounded() {
        let r = repulsor_at_origin(100.0);
        let f = ambient_push(DVec2::new(10.0, 0.0), &r);
        assert!(f.x > 0.0);
        assert!(f.length() <= AMBIENT_PUSH_STRENGTH);
    }

    #[test]
    fn ambient_push_zero_distance_falls_back_to_zero_vector() {
        let r = repulsor_at_origin(100.0);
        assert_eq!(ambient_push(DVec2::ZERO, &r), DVec2::ZERO);
    }

    // ---- Property-based tests ----

    mod proptests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Force magnitude strictly decreases with distance inside the
            /// radius and is exactly zero at the boundary.
            #[test]
            fn repulsion_magnitude_strictly_decreases_with_distance(
                radius in 10.0_f64..500.0,
                d1 in 0.01_f64..0.99,
                d2 in 0.01_f64..0.99,
            ) {
                prop_assume!(d1 < d2);
                let r = repulsor_at_origin(radius);
                let near = repulsion(DVec2::new(d1 * radius, 0.0), &r).length();
                let far = repulsion(DVec2::new(d2 * radius, 0.0), &r).length();
                prop_assert!(near > far, "near {near} <= far {far}");
                let edge = repulsion(DVec2::new(radius, 0.0), &r).length();
                prop_assert_eq!(edge, 0.0);
            }

            #[test]
            fn repulsion_never_produces_nan(
                radius in 1.0_f64..500.0,
                x in -1000.0_f64..1000.0,
                y in -1000.0_f64..1000.0,
            ) {
                let r = repulsor_at_origin(radius);
                let f = repulsion(DVec2::new(x, y), &r);
                prop_assert!(f.x.is_finite() && f.y.is_finite());
            }

            #[test]
            fn ambient_push_never_produces_nan(
                radius in 1.0_f64..500.0,
                x in -1000.0_f64..1000.0,
                y in -1000.0_f64..1000.0,
            ) {
                let r = repulsor_at_origin(radius);
                let f = ambient_push(DVec2::new(x, y), &r);
                prop_assert!(f.x.is_finite() && f.y.is_finite());
            }
        }
    }
}
