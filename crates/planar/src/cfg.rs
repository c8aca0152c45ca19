//! Tolerances for approximate comparisons.
//!
//! Exact operations (`eq`, `lt`, `le`, `==`) never consult these; they only
//! back the `approx_eq` helpers used by callers and tests.

/// Absolute tolerance used by `ApproxCfg::default()`.
pub const EPS_ABS: f64 = 1e-12;
/// Relative tolerance used by `ApproxCfg::default()`.
pub const EPS_REL: f64 = 1e-9;

/// Approximate-equality configuration.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ApproxCfg {
    pub eps_abs: f64,
    pub eps_rel: f64,
}

impl Default for ApproxCfg {
    fn default() -> Self {
        Self {
            eps_abs: EPS_ABS,
            eps_rel: EPS_REL,
        }
    }
}

impl ApproxCfg {
    /// Single tolerance used for both absolute and relative slack.
    #[inline]
    pub fn uniform(eps: f64) -> Self {
        Self {
            eps_abs: eps,
            eps_rel: eps,
        }
    }

    /// `|a - b| <= max(eps_abs, eps_rel * max(|a|, |b|))`. Exact matches
    /// (including equal infinities) always pass; NaN never does.
    #[inline]
    pub fn close(&self, a: f64, b: f64) -> bool {
        if a == b {
            return true;
        }
        let diff = (a - b).abs();
        let scale = a.abs().max(b.abs());
        diff <= self.eps_abs.max(self.eps_rel * scale)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn close_abs_and_rel() {
        let cfg = ApproxCfg::default();
        assert!(cfg.close(0.0, 1e-13));
        assert!(!cfg.close(0.0, 1e-6));
        assert!(cfg.close(1e6, 1e6 + 1e-4));
        assert!(cfg.close(f64::INFINITY, f64::INFINITY));
        assert!(!cfg.close(f64::NAN, f64::NAN));
        assert!(ApproxCfg::uniform(0.1).close(1.0, 1.05));
    }
}
