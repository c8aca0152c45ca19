//! Random directions (uniform angle, uniform length range) and a replayable sampler.
//!
//! Model
//! - Angle uniform on [0, 2π), length uniform on [len_min, len_max].
//! - Callers inject the RNG; the library holds no global random state.
//! - `DirectionSampler` derives one RNG per draw from `(seed, index)`, so any
//!   draw can be regenerated later without replaying the stream.

use crate::{pair, Vector, VectorError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Length range for random directions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct DirectionParams {
    pub len_min: f64,
    pub len_max: f64,
}

impl Default for DirectionParams {
    fn default() -> Self {
        Self::unit()
    }
}

impl DirectionParams {
    #[inline]
    pub fn new(len_min: f64, len_max: f64) -> Self {
        Self { len_min, len_max }
    }

    /// Unit-length directions.
    #[inline]
    pub fn unit() -> Self {
        Self::fixed(1.0)
    }

    /// Directions of exactly `len`.
    #[inline]
    pub fn fixed(len: f64) -> Self {
        Self {
            len_min: len,
            len_max: len,
        }
    }

    /// Rejects `len_max <= 0` and `len_max < len_min` (NaN bounds fail both checks).
    pub fn validate(&self, op: &'static str) -> Result<(), VectorError> {
        if !(self.len_max > 0.0) || !(self.len_max >= self.len_min) {
            return Err(VectorError::invalid_range(op, self.len_min, self.len_max));
        }
        Ok(())
    }

    /// Drawn `(angle, len)` before conversion; `len` is negative when the
    /// range admits it, so this is not the canonical polar form.
    #[inline]
    pub(crate) fn sample_polar_unchecked<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let angle = rng.gen::<f64>() * std::f64::consts::TAU;
        let len = rng.gen::<f64>() * (self.len_max - self.len_min) + self.len_min;
        (angle, len)
    }

    /// Draw without validating; callers validate once up front.
    #[inline]
    pub(crate) fn sample_unchecked<R: Rng + ?Sized>(&self, rng: &mut R) -> (f64, f64) {
        let (angle, len) = self.sample_polar_unchecked(rng);
        pair::from_polar(angle, len)
    }

    /// Validate, then draw one direction.
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<(f64, f64), VectorError> {
        self.validate("random_direction")?;
        Ok(self.sample_unchecked(rng))
    }
}

/// Reproducible stream of random directions.
///
/// Draw `i` depends only on `(seed, i)`.
#[derive(Clone, Debug)]
pub struct DirectionSampler {
    params: DirectionParams,
    seed: u64,
    index: u64,
}

impl DirectionSampler {
    pub fn new(params: DirectionParams, seed: u64) -> Result<Self, VectorError> {
        params.validate("DirectionSampler::new")?;
        Ok(Self {
            params,
            seed,
            index: 0,
        })
    }

    #[inline]
    pub fn params(&self) -> &DirectionParams {
        &self.params
    }

    #[inline]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Index of the next draw.
    #[inline]
    pub fn index(&self) -> u64 {
        self.index
    }

    /// Recompute draw `index` without advancing the stream.
    pub fn regenerate(&self, index: u64) -> Vector {
        let (angle, len) = self.regenerate_polar(index);
        Vector::from_polar(angle, len)
    }

    /// The `(angle, len)` drawn for `index`, as sampled (angle in [0, 2π),
    /// `len` in [len_min, len_max], possibly negative).
    pub fn regenerate_polar(&self, index: u64) -> (f64, f64) {
        let mut rng = replay_rng(self.seed, index);
        self.params.sample_polar_unchecked(&mut rng)
    }
}

impl Iterator for DirectionSampler {
    type Item = Vector;

    fn next(&mut self) -> Option<Vector> {
        let v = self.regenerate(self.index);
        self.index = self.index.wrapping_add(1);
        Some(v)
    }
}

#[inline]
fn replay_rng(seed: u64, index: u64) -> StdRng {
    // SplitMix64-style mixing, cheap and stable.
    fn mix(mut x: u64) -> u64 {
        x ^= x >> 30;
        x = x.wrapping_mul(0xbf58476d1ce4e5b9);
        x ^= x >> 27;
        x = x.wrapping_mul(0x94d049bb133111eb);
        x ^ (x >> 31)
    }
    let k = mix(seed ^ mix(index.wrapping_add(0x9e3779b97f4a7c15)));
    StdRng::seed_from_u64(k)
}
