use std::fmt;

/// Invalid-argument failures raised by vector operations.
///
/// Every variant names the operation that rejected its input. Numeric
/// degeneracy (division by zero, zero-length reference vectors) is not an
/// error and never produces one of these.
#[derive(Clone, Debug, PartialEq)]
pub enum VectorError {
    /// A vector operand was required.
    NotAVector { op: &'static str, found: &'static str },
    /// A scalar operand was required.
    NotAScalar { op: &'static str, found: &'static str },
    /// `len_max <= 0` or `len_max < len_min`.
    InvalidLengthRange {
        op: &'static str,
        len_min: f64,
        len_max: f64,
    },
}

impl VectorError {
    pub(crate) fn not_a_vector(op: &'static str, found: &'static str) -> Self {
        Self::NotAVector { op, found }
    }

    pub(crate) fn not_a_scalar(op: &'static str, found: &'static str) -> Self {
        Self::NotAScalar { op, found }
    }

    pub(crate) fn invalid_range(op: &'static str, len_min: f64, len_max: f64) -> Self {
        Self::InvalidLengthRange {
            op,
            len_min,
            len_max,
        }
    }

    /// Name of the operation that failed.
    pub fn op(&self) -> &'static str {
        match self {
            Self::NotAVector { op, .. }
            | Self::NotAScalar { op, .. }
            | Self::InvalidLengthRange { op, .. } => op,
        }
    }

    /// All variants belong to the invalid-argument class.
    pub fn is_invalid_argument(&self) -> bool {
        true
    }
}

impl fmt::Display for VectorError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NotAVector { op, found } => write!(f, "{op}: expected vector, got {found}"),
            Self::NotAScalar { op, found } => write!(f, "{op}: expected number, got {found}"),
            Self::InvalidLengthRange {
                op,
                len_min,
                len_max,
            } => write!(
                f,
                "{op}: invalid length range [{len_min}, {len_max}] (need len_max > 0 and len_max >= len_min)"
            ),
        }
    }
}

impl std::error::Error for VectorError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_op_and_expected_type() {
        let e = VectorError::not_a_vector("add", "number");
        assert_eq!(e.to_string(), "add: expected vector, got number");
        assert_eq!(e.op(), "add");
        let e = VectorError::not_a_scalar("div", "vector");
        assert_eq!(e.to_string(), "div: expected number, got vector");
        let e = VectorError::invalid_range("random_direction", 2.0, 1.0);
        assert!(e.to_string().starts_with("random_direction: invalid length range [2, 1]"));
        assert!(e.is_invalid_argument());
    }
}
