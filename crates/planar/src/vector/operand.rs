//! Runtime-checked operands for heterogeneous call sites.
//!
//! Statically typed code uses the `std::ops` impls on `Vector` directly. When
//! operand kinds are only known at runtime (e.g. the CLI's `apply`), wrap them
//! in `Operand` and use the checked operators below. Malformed operands fail
//! with a `VectorError` naming the operation and the expected type.

use super::Vector;
use crate::VectorError;
use std::fmt;

/// A number or a vector.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Operand {
    Scalar(f64),
    Vector(Vector),
}

/// True iff the operand carries a vector.
#[inline]
pub fn is_vector(o: &Operand) -> bool {
    matches!(o, Operand::Vector(_))
}

impl Operand {
    /// `"number"` or `"vector"`, used in error messages.
    pub fn kind(&self) -> &'static str {
        match self {
            Operand::Scalar(_) => "number",
            Operand::Vector(_) => "vector",
        }
    }

    pub fn as_vector(&self, op: &'static str) -> Result<Vector, VectorError> {
        match *self {
            Operand::Vector(v) => Ok(v),
            Operand::Scalar(_) => Err(VectorError::not_a_vector(op, self.kind())),
        }
    }

    pub fn as_scalar(&self, op: &'static str) -> Result<f64, VectorError> {
        match *self {
            Operand::Scalar(s) => Ok(s),
            Operand::Vector(_) => Err(VectorError::not_a_scalar(op, self.kind())),
        }
    }

    /// `vector + vector`.
    pub fn add(self, rhs: Operand) -> Result<Operand, VectorError> {
        let a = self.as_vector("add")?;
        let b = rhs.as_vector("add")?;
        Ok(Operand::Vector(a + b))
    }

    /// `vector - vector`.
    pub fn sub(self, rhs: Operand) -> Result<Operand, VectorError> {
        let a = self.as_vector("sub")?;
        let b = rhs.as_vector("sub")?;
        Ok(Operand::Vector(a - b))
    }

    /// `-vector`.
    pub fn neg(self) -> Result<Operand, VectorError> {
        Ok(Operand::Vector(-self.as_vector("neg")?))
    }

    /// `number * vector`, `vector * number` (scaled vector) or
    /// `vector * vector` (dot product). Two numbers are rejected.
    pub fn mul(self, rhs: Operand) -> Result<Operand, VectorError> {
        match (self, rhs) {
            (Operand::Scalar(s), Operand::Vector(v)) => Ok(Operand::Vector(s * v)),
            (Operand::Vector(v), Operand::Scalar(s)) => Ok(Operand::Vector(v * s)),
            (Operand::Vector(a), Operand::Vector(b)) => Ok(Operand::Scalar(a * b)),
            (Operand::Scalar(_), Operand::Scalar(_)) => {
                Err(VectorError::not_a_vector("mul", "number"))
            }
        }
    }

    /// `vector / number`.
    pub fn div(self, rhs: Operand) -> Result<Operand, VectorError> {
        let v = self.as_vector("div")?;
        let s = rhs.as_scalar("div")?;
        Ok(Operand::Vector(v / s))
    }
}

impl From<f64> for Operand {
    #[inline]
    fn from(s: f64) -> Self {
        Operand::Scalar(s)
    }
}

impl From<Vector> for Operand {
    #[inline]
    fn from(v: Vector) -> Self {
        Operand::Vector(v)
    }
}

impl TryFrom<Operand> for Vector {
    type Error = VectorError;

    fn try_from(o: Operand) -> Result<Self, Self::Error> {
        o.as_vector("Vector::try_from")
    }
}

impl fmt::Display for Operand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Operand::Scalar(s) => write!(f, "{s}"),
            Operand::Vector(v) => write!(f, "{v}"),
        }
    }
}
