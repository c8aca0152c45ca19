//! Small 2D vector math for real-time code.
//!
//! Two surfaces over the same formulas:
//! - `pair`: free functions on raw `(x, y)` coordinates, zero allocation, for hot loops.
//! - `vector`: the `Vector` value type with operators, in-place mutators and copy variants.
//!
//! Both surfaces agree component-wise for every operation they share.
//!
//! Numeric policy
//! - Degenerate inputs (zero divisors, zero reference vectors) propagate IEEE-754
//!   infinities/NaNs; they are never reported as errors.
//! - Only contract violations (non-vector operands, inconsistent length ranges)
//!   surface as `VectorError`.

pub mod cfg;
mod error;
pub mod pair;
pub mod rand;
pub mod vector;

/// Library version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub use cfg::ApproxCfg;
pub use error::VectorError;
pub use vector::{is_vector, vector, Operand, Vector};

/// Common exports for quick imports in callers.
pub mod prelude {
    pub use crate::cfg::ApproxCfg;
    pub use crate::pair;
    pub use crate::rand::{DirectionParams, DirectionSampler};
    pub use crate::vector::{is_vector, vector, Operand, Vector};
    pub use crate::VectorError;
}
