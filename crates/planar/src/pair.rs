//! Coordinate-pair functions.
//!
//! Stateless operations on raw `(x, y)` values. Inputs are passed by value and
//! results are returned as tuples, so nothing here allocates or mutates.
//!
//! Conventions
//! - Angles are radians, counter-clockwise from the positive x-axis.
//! - Scalar-first argument order for `mul`, `div`, `idiv`, `rotate`, `trim`.
//! - Zero divisors and zero reference vectors yield inf/NaN, never an error.

use crate::cfg::ApproxCfg;
use crate::rand::DirectionParams;
use crate::VectorError;
use rand::Rng;

/// `"(x,y)"` using the default `f64` formatting.
pub fn to_string(x: f64, y: f64) -> String {
    format!("({x},{y})")
}

#[inline]
pub fn from_polar(angle: f64, radius: f64) -> (f64, f64) {
    (angle.cos() * radius, angle.sin() * radius)
}

/// `from_polar` with radius 1.
#[inline]
pub fn from_polar_unit(angle: f64) -> (f64, f64) {
    from_polar(angle, 1.0)
}

/// Returns `(angle, radius)` with the angle in (-π, π].
#[inline]
pub fn to_polar(x: f64, y: f64) -> (f64, f64) {
    (y.atan2(x), len(x, y))
}

/// Random direction with angle uniform on [0, 2π) and length uniform on
/// [len_min, len_max].
///
/// Fails when `len_max <= 0` or `len_max < len_min`.
pub fn random_direction<R: Rng + ?Sized>(
    rng: &mut R,
    len_min: f64,
    len_max: f64,
) -> Result<(f64, f64), VectorError> {
    let params = DirectionParams::new(len_min, len_max);
    params.validate("random_direction")?;
    Ok(params.sample_unchecked(rng))
}

/// Random direction of exactly `len`.
pub fn random_direction_fixed<R: Rng + ?Sized>(
    rng: &mut R,
    len: f64,
) -> Result<(f64, f64), VectorError> {
    random_direction(rng, len, len)
}

/// Random unit direction.
#[inline]
pub fn random_unit_direction<R: Rng + ?Sized>(rng: &mut R) -> (f64, f64) {
    DirectionParams::unit().sample_unchecked(rng)
}

#[inline]
pub fn mul(s: f64, x: f64, y: f64) -> (f64, f64) {
    (s * x, s * y)
}

#[inline]
pub fn div(s: f64, x: f64, y: f64) -> (f64, f64) {
    (x / s, y / s)
}

/// Floor division of both components by `s`.
#[inline]
pub fn idiv(s: f64, x: f64, y: f64) -> (f64, f64) {
    ((x / s).floor(), (y / s).floor())
}

#[inline]
pub fn add(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64) {
    (x1 + x2, y1 + y2)
}

#[inline]
pub fn sub(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64) {
    (x1 - x2, y1 - y2)
}

/// Component-wise product.
#[inline]
pub fn permul(x1: f64, y1: f64, x2: f64, y2: f64) -> (f64, f64) {
    (x1 * x2, y1 * y2)
}

#[inline]
pub fn dot(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    x1 * x2 + y1 * y2
}

/// Determinant of `[(x1, y1), (x2, y2)]`; positive when the second vector is
/// counter-clockwise of the first.
#[inline]
pub fn det(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    x1 * y2 - y1 * x2
}

/// Same as `det`.
#[inline]
pub fn cross(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    det(x1, y1, x2, y2)
}

#[inline]
pub fn eq(x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    x1 == x2 && y1 == y2
}

/// Lexicographic strict order: x first, then y.
#[inline]
pub fn lt(x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    x1 < x2 || (x1 == x2 && y1 < y2)
}

/// Component-wise `<=` on both axes.
///
/// Not the reflexive closure of `lt`: `le(1, 5, 2, 3)` is false while
/// `lt(1, 5, 2, 3)` is true.
#[inline]
pub fn le(x1: f64, y1: f64, x2: f64, y2: f64) -> bool {
    x1 <= x2 && y1 <= y2
}

/// Approximate component equality under `cfg`.
#[inline]
pub fn approx_eq(x1: f64, y1: f64, x2: f64, y2: f64, cfg: ApproxCfg) -> bool {
    cfg.close(x1, x2) && cfg.close(y1, y2)
}

#[inline]
pub fn len2(x: f64, y: f64) -> f64 {
    x * x + y * y
}

#[inline]
pub fn len(x: f64, y: f64) -> f64 {
    (x * x + y * y).sqrt()
}

#[inline]
pub fn dist2(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    let dx = x1 - x2;
    let dy = y1 - y2;
    dx * dx + dy * dy
}

#[inline]
pub fn dist(x1: f64, y1: f64, x2: f64, y2: f64) -> f64 {
    dist2(x1, y1, x2, y2).sqrt()
}

/// Unit vector in the direction of `(x, y)`; a zero vector is returned unchanged.
#[inline]
pub fn normalize(x: f64, y: f64) -> (f64, f64) {
    let l = len(x, y);
    if l > 0.0 {
        (x / l, y / l)
    } else {
        (x, y)
    }
}

/// Rotate counter-clockwise by `phi` radians.
#[inline]
pub fn rotate(phi: f64, x: f64, y: f64) -> (f64, f64) {
    let (s, c) = phi.sin_cos();
    (c * x - s * y, s * x + c * y)
}

/// 90° counter-clockwise rotation.
#[inline]
pub fn perpendicular(x: f64, y: f64) -> (f64, f64) {
    (-y, x)
}

/// Projection of `(x, y)` onto `(u, v)`.
#[inline]
pub fn project(x: f64, y: f64, u: f64, v: f64) -> (f64, f64) {
    let s = (x * u + y * v) / (u * u + v * v);
    (s * u, s * v)
}

/// Reflection of `(x, y)` across the line spanned by `(u, v)`.
#[inline]
pub fn mirror(x: f64, y: f64, u: f64, v: f64) -> (f64, f64) {
    let s = 2.0 * (x * u + y * v) / (u * u + v * v);
    (s * u - x, s * v - y)
}

/// Scale `(x, y)` down to `max_len` if it is longer; shorter vectors pass through.
#[inline]
pub fn trim(max_len: f64, x: f64, y: f64) -> (f64, f64) {
    let s = max_len * max_len / len2(x, y);
    let s = if s > 1.0 { 1.0 } else { s.sqrt() };
    (x * s, y * s)
}

/// Angle of `(x, y)` relative to `(u, v)`.
#[inline]
pub fn angle_to(x: f64, y: f64, u: f64, v: f64) -> f64 {
    y.atan2(x) - v.atan2(u)
}

/// Angle of `(x, y)` relative to the positive x-axis.
#[inline]
pub fn angle(x: f64, y: f64) -> f64 {
    y.atan2(x)
}
