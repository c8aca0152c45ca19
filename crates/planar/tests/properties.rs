//! Algebraic properties and pair/vector agreement.
//!
//! Inputs stay in a moderate range so squared lengths neither overflow nor
//! underflow; the properties are about formulas, not extreme magnitudes.

use planar::{pair, vector, ApproxCfg, Vector};
use proptest::prelude::*;
use rand::{rngs::StdRng, SeedableRng};
use std::f64::consts::{FRAC_PI_2, PI};

fn coord() -> impl Strategy<Value = f64> {
    -1e3..1e3f64
}

fn tol() -> ApproxCfg {
    ApproxCfg {
        eps_abs: 1e-9,
        eps_rel: 1e-9,
    }
}

fn close(a: (f64, f64), b: (f64, f64)) -> bool {
    pair::approx_eq(a.0, a.1, b.0, b.1, tol())
}

proptest! {
    #[test]
    fn len2_is_len_squared(x in coord(), y in coord()) {
        let l = pair::len(x, y);
        prop_assert!(tol().close(pair::len2(x, y), l * l));
    }

    #[test]
    fn pair_and_vector_agree_exactly(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        // trim(0, 0, 0) is NaN on both sides, which assert_eq cannot compare.
        prop_assume!(pair::len2(x1, y1) > 0.0);
        let a = vector(x1, y1);
        let b = vector(x2, y2);
        prop_assert_eq!(pair::add(x1, y1, x2, y2), (a + b).unpack());
        prop_assert_eq!(pair::sub(x1, y1, x2, y2), (a - b).unpack());
        prop_assert_eq!(pair::dot(x1, y1, x2, y2), a * b);
        prop_assert_eq!(pair::permul(x1, y1, x2, y2), Vector::permul(a, b).unpack());
        prop_assert_eq!(pair::det(x1, y1, x2, y2), a.cross(b));
        prop_assert_eq!(pair::cross(x1, y1, x2, y2), a.cross(b));
        prop_assert_eq!(pair::dist(x1, y1, x2, y2), Vector::dist(a, b));
        prop_assert_eq!(pair::dist2(x1, y1, x2, y2), Vector::dist2(a, b));
        prop_assert_eq!(pair::eq(x1, y1, x2, y2), a == b);
        prop_assert_eq!(pair::lt(x1, y1, x2, y2), a.lt(b));
        prop_assert_eq!(pair::le(x1, y1, x2, y2), a.le(b));
        prop_assert_eq!(pair::mul(x2, x1, y1), (x2 * a).unpack());
        prop_assert_eq!(pair::mul(x2, x1, y1), (a * x2).unpack());
        prop_assert_eq!(pair::div(x2, x1, y1), (a / x2).unpack());
        prop_assert_eq!(pair::idiv(x2, x1, y1), a.idiv(x2).unpack());
        prop_assert_eq!(pair::normalize(x1, y1), a.normalized().unpack());
        prop_assert_eq!(pair::rotate(x2, x1, y1), a.rotated(x2).unpack());
        prop_assert_eq!(pair::trim(x2.abs(), x1, y1), a.trimmed(x2.abs()).unpack());
        prop_assert_eq!(pair::perpendicular(x1, y1), a.perpendicular().unpack());
        prop_assert_eq!(pair::to_polar(x1, y1), a.to_polar());
        prop_assert_eq!(pair::angle_to(x1, y1, x2, y2), a.angle_to(b));
        prop_assert_eq!(pair::to_string(x1, y1), a.to_string());
    }

    #[test]
    fn projections_agree(x in coord(), y in coord(), u in coord(), v in coord()) {
        prop_assume!(pair::len2(u, v) > 1e-6);
        let a = vector(x, y);
        let b = vector(u, v);
        prop_assert_eq!(pair::project(x, y, u, v), a.project_on(b).unpack());
        prop_assert_eq!(pair::mirror(x, y, u, v), a.mirror_on(b).unpack());
        // Mirroring twice is the identity (up to rounding).
        let (mx, my) = pair::mirror(x, y, u, v);
        prop_assert!(close(pair::mirror(mx, my, u, v), (x, y)));
    }

    #[test]
    fn polar_round_trip(theta in -PI + 1e-9..=PI, r in 1e-3..1e3f64) {
        let (x, y) = pair::from_polar(theta, r);
        let (t2, r2) = pair::to_polar(x, y);
        prop_assert!((t2 - theta).abs() < 1e-9, "theta {} vs {}", theta, t2);
        prop_assert!(tol().close(r2, r));
        prop_assert_eq!(Vector::from_polar(theta, r).unpack(), (x, y));
    }

    #[test]
    fn normalize_is_idempotent(x in coord(), y in coord()) {
        prop_assume!(pair::len2(x, y) > 1e-12);
        let (nx, ny) = pair::normalize(x, y);
        prop_assert!(close(pair::normalize(nx, ny), (nx, ny)));
        prop_assert!(tol().close(pair::len(nx, ny), 1.0));
    }

    #[test]
    fn trim_is_noop_or_clamps(max_len in 0.0..2e3f64, x in coord(), y in coord()) {
        let (tx, ty) = pair::trim(max_len, x, y);
        if pair::len(x, y) <= max_len {
            prop_assert_eq!((tx, ty), (x, y));
        } else {
            prop_assert!(tol().close(pair::len(tx, ty), max_len));
        }
    }

    #[test]
    fn perpendicular_is_quarter_turn(x in coord(), y in coord()) {
        prop_assert!(close(pair::perpendicular(x, y), pair::rotate(FRAC_PI_2, x, y)));
    }

    #[test]
    fn lt_is_strict_total_on_distinct_pairs(x1 in coord(), y1 in coord(), x2 in coord(), y2 in coord()) {
        let ab = pair::lt(x1, y1, x2, y2);
        let ba = pair::lt(x2, y2, x1, y1);
        if pair::eq(x1, y1, x2, y2) {
            prop_assert!(!ab && !ba);
        } else {
            prop_assert!(ab ^ ba);
        }
    }

    #[test]
    fn seeded_random_directions_agree(seed in any::<u64>(), lo in -1e3..1e3f64, span in 0.0..1e3f64) {
        let hi = lo.abs() + span + 1e-3;
        let mut r1 = StdRng::seed_from_u64(seed);
        let mut r2 = StdRng::seed_from_u64(seed);
        let p = pair::random_direction(&mut r1, lo, hi).unwrap();
        let v = Vector::random_direction(&mut r2, lo, hi).unwrap();
        prop_assert_eq!(p, v.unpack());

        let mut r1 = StdRng::seed_from_u64(seed);
        let mut r2 = StdRng::seed_from_u64(seed);
        let p = pair::random_direction_fixed(&mut r1, span + 1.0).unwrap();
        let v = Vector::random_direction_fixed(&mut r2, span + 1.0).unwrap();
        prop_assert_eq!(p, v.unpack());

        let mut r1 = StdRng::seed_from_u64(seed);
        let mut r2 = StdRng::seed_from_u64(seed);
        prop_assert_eq!(pair::random_unit_direction(&mut r1), Vector::random_unit_direction(&mut r2).unpack());
    }

    #[test]
    fn random_direction_fixed_length(seed in any::<u64>(), len in 1e-3..1e3f64) {
        let mut rng = StdRng::seed_from_u64(seed);
        let (x, y) = pair::random_direction(&mut rng, len, len).unwrap();
        prop_assert!(tol().close(pair::len(x, y), len));
    }
}

#[test]
fn le_is_not_lt_or_eq() {
    let (a, b) = ((1.0, 5.0), (2.0, 3.0));
    assert!(pair::lt(a.0, a.1, b.0, b.1));
    assert!(!pair::le(a.0, a.1, b.0, b.1));
    assert!(!pair::eq(a.0, a.1, b.0, b.1));
    let (va, vb) = (Vector::from(a), Vector::from(b));
    assert!(va.lt(vb) && !va.le(vb));
}

#[test]
fn end_to_end_values() {
    assert_eq!(pair::from_polar(0.0, 1.0), (1.0, 0.0));
    assert!(close(pair::from_polar(FRAC_PI_2, 1.0), (0.0, 1.0)));
    assert!(close(pair::rotate(PI, 1.0, 0.0), (-1.0, 0.0)));
    assert_eq!(pair::dist(0.0, 0.0, 3.0, 4.0), 5.0);
    assert_eq!(pair::normalize(0.0, 0.0), (0.0, 0.0));
    let mut rng = StdRng::seed_from_u64(0);
    for _ in 0..32 {
        let (x, y) = pair::random_direction(&mut rng, 2.0, 2.0).unwrap();
        assert!((pair::len(x, y) - 2.0).abs() < 1e-12);
    }
}
