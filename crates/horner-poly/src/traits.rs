//! Evaluation interface shared by all polynomial representations.

use crate::cost::OpCount;
use crate::error::PolyResult;
use crate::polynomial::{check_point, MultivarPoly};

/// A polynomial representation that can be evaluated at a point.
///
/// # Laws
///
/// - `eval_checked(x)` fails exactly when `x.len() != dim()`
/// - for a valid `x`, `eval_checked(x) == Ok(eval_unchecked(x))`
/// - `num_ops()` does not depend on the point
pub trait PolyEval {
    /// Number of variables.
    fn dim(&self) -> usize;

    /// Evaluates without checking the point.
    fn eval_unchecked(&self, x: &[f64]) -> f64;

    /// Scalar operations spent by one call to `eval_unchecked`.
    fn num_ops(&self) -> OpCount;

    /// Evaluates after checking the point's length.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch if `x.len() != self.dim()`.
    fn eval_checked(&self, x: &[f64]) -> PolyResult<f64> {
        check_point(self.dim(), x)?;
        Ok(self.eval_unchecked(x))
    }
}

impl PolyEval for MultivarPoly {
    fn dim(&self) -> usize {
        MultivarPoly::dim(self)
    }

    fn eval_unchecked(&self, x: &[f64]) -> f64 {
        MultivarPoly::eval_unchecked(self, x)
    }

    fn num_ops(&self) -> OpCount {
        MultivarPoly::num_ops(self)
    }
}
