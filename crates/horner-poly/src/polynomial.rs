//! Sparse multivariate polynomials evaluated by direct summation.
//!
//! [`MultivarPoly`] is the validated input to the Horner factorization and
//! also serves as the baseline evaluator.

use std::fmt;

use rustc_hash::FxHashMap;
use smallvec::SmallVec;

use crate::cost::OpCount;
use crate::error::{PolyError, PolyResult, ValidationError};
use crate::monomial::{Exponents, Monomial};
use crate::options::PolyOptions;

/// A sparse multivariate polynomial with `f64` coefficients.
///
/// Immutable once built. Every monomial has exactly `dim` exponents and, if
/// constructed with validation, no two monomials share an exponent vector.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MultivarPoly {
    /// Terms in input order, or sorted if rectified.
    monomials: Vec<Monomial>,
    /// Number of variables.
    dim: usize,
    /// Largest exponent of each variable.
    max_exponents: Exponents,
    /// Whether evaluation points are checked by [`MultivarPoly::eval`].
    validate: bool,
}

impl MultivarPoly {
    /// Builds a polynomial from coefficients and a row-per-monomial exponent
    /// matrix.
    ///
    /// Exponents are taken as signed integers so that negative input can be
    /// rejected rather than wrapped.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::LengthMismatch`] if the counts differ;
    /// - [`ValidationError::RaggedRow`] if rows differ in length;
    /// - [`ValidationError::NegativeExponent`] for exponents outside `0..=u32::MAX`;
    /// - [`ValidationError::DuplicateExponents`] for repeated rows when
    ///   `options.validate` is set;
    /// - [`PolyError::EmptyPolynomial`] if there are no rows.
    pub fn new<R>(coefficients: &[f64], exponents: &[R], options: PolyOptions) -> PolyResult<Self>
    where
        R: AsRef<[i64]>,
    {
        if coefficients.len() != exponents.len() {
            return Err(ValidationError::LengthMismatch {
                coefficients: coefficients.len(),
                rows: exponents.len(),
            }
            .into());
        }
        let Some(first) = exponents.first() else {
            return Err(PolyError::EmptyPolynomial);
        };
        let dim = first.as_ref().len();

        let mut monomials = Vec::with_capacity(coefficients.len());
        for (row, (&coefficient, exps)) in coefficients.iter().zip(exponents).enumerate() {
            let exps = exps.as_ref();
            if exps.len() != dim {
                return Err(ValidationError::RaggedRow {
                    row,
                    expected: dim,
                    found: exps.len(),
                }
                .into());
            }

            let converted = exps
                .iter()
                .enumerate()
                .map(|(variable, &value)| {
                    u32::try_from(value).map_err(|_| ValidationError::NegativeExponent {
                        row,
                        variable,
                        value,
                    })
                })
                .collect::<Result<Exponents, _>>()?;

            monomials.push(Monomial {
                coefficient,
                exponents: converted,
            });
        }

        Self::from_monomials(dim, monomials, options)
    }

    /// Builds a polynomial from typed monomials.
    ///
    /// # Errors
    ///
    /// Same as [`MultivarPoly::new`], except that negative exponents cannot
    /// occur.
    pub fn from_monomials(
        dim: usize,
        mut monomials: Vec<Monomial>,
        options: PolyOptions,
    ) -> PolyResult<Self> {
        if monomials.is_empty() {
            return Err(PolyError::EmptyPolynomial);
        }
        if let Some((row, m)) = monomials.iter().enumerate().find(|(_, m)| m.dim() != dim) {
            return Err(ValidationError::RaggedRow {
                row,
                expected: dim,
                found: m.dim(),
            }
            .into());
        }
        if options.validate {
            check_duplicates(&monomials)?;
        }
        if options.rectify {
            // Stable sort keeps duplicates (if unvalidated) in input order.
            monomials.sort_by(|a, b| options.order.compare(&a.exponents, &b.exponents));
        }

        let mut max_exponents: Exponents = SmallVec::from_elem(0, dim);
        for m in &monomials {
            for (slot, &e) in max_exponents.iter_mut().zip(&m.exponents) {
                *slot = (*slot).max(e);
            }
        }

        Ok(Self {
            monomials,
            dim,
            max_exponents,
            validate: options.validate,
        })
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the number of monomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.monomials.len()
    }

    /// Always false: construction rejects empty input.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.monomials.is_empty()
    }

    /// Returns the monomials.
    #[must_use]
    pub fn monomials(&self) -> &[Monomial] {
        &self.monomials
    }

    /// Returns the largest exponent of each variable.
    #[must_use]
    pub fn max_exponents(&self) -> &[u32] {
        &self.max_exponents
    }

    /// Returns the largest total degree over all monomials.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.monomials
            .iter()
            .map(Monomial::total_degree)
            .max()
            .unwrap_or(0)
    }

    /// Returns true if evaluation points are checked by [`MultivarPoly::eval`].
    #[must_use]
    pub fn validates(&self) -> bool {
        self.validate
    }

    /// Checks that `x` has one coordinate per variable.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DimensionMismatch`] otherwise.
    pub fn check_point(&self, x: &[f64]) -> Result<(), ValidationError> {
        check_point(self.dim, x)
    }

    /// Evaluates at `x`, checking its length if the polynomial was built with
    /// validation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DimensionMismatch`] for a point of the wrong
    /// length when validation is on.
    pub fn eval(&self, x: &[f64]) -> PolyResult<f64> {
        if self.validate {
            self.check_point(x)?;
        }
        Ok(self.eval_unchecked(x))
    }

    /// Evaluates at `x` after checking its length.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DimensionMismatch`] for a point of the wrong
    /// length.
    pub fn eval_checked(&self, x: &[f64]) -> PolyResult<f64> {
        self.check_point(x)?;
        Ok(self.eval_unchecked(x))
    }

    /// Evaluates by direct summation over all monomials.
    ///
    /// # Panics
    ///
    /// Panics if `x` is shorter than the highest variable index in use.
    #[must_use]
    pub fn eval_unchecked(&self, x: &[f64]) -> f64 {
        self.monomials.iter().map(|m| m.eval(x)).sum()
    }

    /// Returns the cost of [`MultivarPoly::eval_unchecked`].
    #[must_use]
    pub fn num_ops(&self) -> OpCount {
        OpCount::direct_sum(self.monomials.iter().map(Monomial::total_degree))
    }
}

/// Checks that a point has `dim` coordinates.
///
/// # Errors
///
/// Returns [`ValidationError::DimensionMismatch`] otherwise.
pub fn check_point(dim: usize, x: &[f64]) -> Result<(), ValidationError> {
    if x.len() == dim {
        Ok(())
    } else {
        Err(ValidationError::DimensionMismatch {
            expected: dim,
            found: x.len(),
        })
    }
}

fn check_duplicates(monomials: &[Monomial]) -> Result<(), ValidationError> {
    let mut seen: FxHashMap<&[u32], usize> = FxHashMap::default();
    seen.reserve(monomials.len());
    for (second, m) in monomials.iter().enumerate() {
        if let Some(&first) = seen.get(m.exponents.as_slice()) {
            return Err(ValidationError::DuplicateExponents { first, second });
        }
        seen.insert(m.exponents.as_slice(), second);
    }
    Ok(())
}

impl fmt::Display for MultivarPoly {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] p(x) = ", self.num_ops().total())?;
        for (i, m) in self.monomials.iter().enumerate() {
            if i > 0 {
                f.write_str(" + ")?;
            }
            write!(f, "{m}")?;
        }
        Ok(())
    }
}
