//! The `Vector` value type.
//!
//! Purpose
//! - Method and operator surface over the same formulas as `crate::pair`.
//! - Geometric transforms come in pairs: `*_inplace` mutates and returns
//!   `&mut Self` for chaining; the copy variant (`normalized`, `rotated`,
//!   `trimmed`) copies first and leaves the receiver untouched.
//!
//! Ordering
//! - `lt` is lexicographic (x, then y). `le` is component-wise and is not
//!   `lt || ==`, so `Vector` does not implement `PartialOrd`. Use `lex_cmp`
//!   with `sort_by` for container ordering.
//!
//! Code cross-refs: `pair`, `Operand`, `crate::rand::DirectionParams`

mod convert;
mod operand;
mod ops;

pub use operand::{is_vector, Operand};

use crate::cfg::ApproxCfg;
use crate::rand::DirectionParams;
use crate::VectorError;
use rand::Rng;
use std::cmp::Ordering;
use std::fmt;

/// 2D vector with `f64` components.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Vector {
    pub x: f64,
    pub y: f64,
}

/// Shorthand for `Vector::new`.
#[inline]
pub fn vector(x: f64, y: f64) -> Vector {
    Vector::new(x, y)
}

impl Vector {
    /// `(0, 0)`.
    pub const ZERO: Vector = Vector { x: 0.0, y: 0.0 };

    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    #[inline]
    pub fn from_polar(angle: f64, radius: f64) -> Self {
        Self::new(angle.cos() * radius, angle.sin() * radius)
    }

    #[inline]
    pub fn from_polar_unit(angle: f64) -> Self {
        Self::from_polar(angle, 1.0)
    }

    /// Random direction with length uniform on [len_min, len_max].
    ///
    /// Fails when `len_max <= 0` or `len_max < len_min`.
    pub fn random_direction<R: Rng + ?Sized>(
        rng: &mut R,
        len_min: f64,
        len_max: f64,
    ) -> Result<Self, VectorError> {
        let params = DirectionParams::new(len_min, len_max);
        params.validate("Vector::random_direction")?;
        Ok(Self::from(params.sample_unchecked(rng)))
    }

    /// Random direction of exactly `len`.
    pub fn random_direction_fixed<R: Rng + ?Sized>(
        rng: &mut R,
        len: f64,
    ) -> Result<Self, VectorError> {
        Self::random_direction(rng, len, len)
    }

    #[inline]
    pub fn random_unit_direction<R: Rng + ?Sized>(rng: &mut R) -> Self {
        Self::from(DirectionParams::unit().sample_unchecked(rng))
    }

    /// Components as a tuple.
    #[inline]
    pub fn unpack(self) -> (f64, f64) {
        (self.x, self.y)
    }

    #[inline]
    pub fn is_zero(self) -> bool {
        self.x == 0.0 && self.y == 0.0
    }

    #[inline]
    pub fn len2(self) -> f64 {
        self.x * self.x + self.y * self.y
    }

    #[inline]
    pub fn len(self) -> f64 {
        (self.x * self.x + self.y * self.y).sqrt()
    }

    /// `(angle, radius)`, angle in (-π, π].
    #[inline]
    pub fn to_polar(self) -> (f64, f64) {
        (self.y.atan2(self.x), self.len())
    }

    #[inline]
    pub fn dot(self, other: Vector) -> f64 {
        self.x * other.x + self.y * other.y
    }

    /// Scalar multiple; the named form of `s * v`.
    #[inline]
    pub fn scale(self, s: f64) -> Vector {
        Vector::new(s * self.x, s * self.y)
    }

    /// Floor division of both components by `s`.
    #[inline]
    pub fn idiv(self, s: f64) -> Vector {
        Vector::new((self.x / s).floor(), (self.y / s).floor())
    }

    /// Component-wise product.
    #[inline]
    pub fn permul(a: Vector, b: Vector) -> Vector {
        Vector::new(a.x * b.x, a.y * b.y)
    }

    #[inline]
    pub fn dist2(a: Vector, b: Vector) -> f64 {
        let dx = a.x - b.x;
        let dy = a.y - b.y;
        dx * dx + dy * dy
    }

    #[inline]
    pub fn dist(a: Vector, b: Vector) -> f64 {
        Self::dist2(a, b).sqrt()
    }

    /// Lexicographic strict order.
    #[inline]
    pub fn lt(self, other: Vector) -> bool {
        self.x < other.x || (self.x == other.x && self.y < other.y)
    }

    /// Component-wise `<=`; see the module docs.
    #[inline]
    pub fn le(self, other: Vector) -> bool {
        self.x <= other.x && self.y <= other.y
    }

    /// Ordering consistent with `lt`; `None` if a NaN decides the comparison.
    pub fn lex_cmp(&self, other: &Vector) -> Option<Ordering> {
        match self.x.partial_cmp(&other.x)? {
            Ordering::Equal => self.y.partial_cmp(&other.y),
            o => Some(o),
        }
    }

    #[inline]
    pub fn approx_eq(self, other: Vector, cfg: ApproxCfg) -> bool {
        cfg.close(self.x, other.x) && cfg.close(self.y, other.y)
    }

    /// Scale to unit length in place; zero vectors stay zero.
    pub fn normalize_inplace(&mut self) -> &mut Self {
        let l = self.len();
        if l > 0.0 {
            self.x /= l;
            self.y /= l;
        }
        self
    }

    pub fn normalized(self) -> Vector {
        let mut v = self;
        v.normalize_inplace();
        v
    }

    /// Rotate counter-clockwise by `phi` radians in place.
    pub fn rotate_inplace(&mut self, phi: f64) -> &mut Self {
        let (s, c) = phi.sin_cos();
        let (x, y) = (self.x, self.y);
        self.x = c * x - s * y;
        self.y = s * x + c * y;
        self
    }

    pub fn rotated(self, phi: f64) -> Vector {
        let mut v = self;
        v.rotate_inplace(phi);
        v
    }

    /// Clamp the length to `max_len` in place.
    pub fn trim_inplace(&mut self, max_len: f64) -> &mut Self {
        let s = max_len * max_len / self.len2();
        let s = if s > 1.0 { 1.0 } else { s.sqrt() };
        self.x *= s;
        self.y *= s;
        self
    }

    pub fn trimmed(self, max_len: f64) -> Vector {
        let mut v = self;
        v.trim_inplace(max_len);
        v
    }

    /// 90° counter-clockwise rotation.
    #[inline]
    pub fn perpendicular(self) -> Vector {
        Vector::new(-self.y, self.x)
    }

    /// Projection onto `v`. NaN/inf if `v` is zero.
    #[inline]
    pub fn project_on(self, v: Vector) -> Vector {
        let s = (self.x * v.x + self.y * v.y) / (v.x * v.x + v.y * v.y);
        Vector::new(s * v.x, s * v.y)
    }

    /// Reflection across the line spanned by `v`. NaN/inf if `v` is zero.
    #[inline]
    pub fn mirror_on(self, v: Vector) -> Vector {
        let s = 2.0 * (self.x * v.x + self.y * v.y) / (v.x * v.x + v.y * v.y);
        Vector::new(s * v.x - self.x, s * v.y - self.y)
    }

    /// `self.x * other.y - self.y * other.x`.
    #[inline]
    pub fn cross(self, other: Vector) -> f64 {
        self.x * other.y - self.y * other.x
    }

    /// Angle relative to `other`.
    #[inline]
    pub fn angle_to(self, other: Vector) -> f64 {
        self.y.atan2(self.x) - other.y.atan2(other.x)
    }

    /// Angle relative to the positive x-axis.
    #[inline]
    pub fn angle(self) -> f64 {
        self.y.atan2(self.x)
    }
}

impl fmt::Display for Vector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.x, self.y)
    }
}
