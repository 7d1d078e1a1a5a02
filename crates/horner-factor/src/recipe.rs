//! The reusable evaluation plan produced by factorization.

use horner_poly::{
    check_point, MultivarPoly, OpCount, PolyEval, PolyOptions, PolyResult, ValidationError,
};

use crate::engine::{Factorizer, FactorizerConfig};
use crate::node::FactorTree;

/// A polynomial in nested Horner form.
///
/// Built once, evaluated many times. The operation count is computed at
/// construction and does not depend on the evaluation point.
///
/// Deserialization rebuilds the operation count and rejects trees that use a
/// variable outside the stored dimension.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(
    feature = "serde",
    serde(try_from = "RecipeParts", into = "RecipeParts")
)]
pub struct HornerPoly {
    tree: FactorTree,
    dim: usize,
    ops: OpCount,
    validate: bool,
}

impl HornerPoly {
    /// Builds a recipe directly from coefficients and exponent rows.
    ///
    /// `options.validate` also controls whether [`HornerPoly::eval`] checks
    /// the point length.
    ///
    /// # Errors
    ///
    /// Any error of [`MultivarPoly::new`] or [`Factorizer::factorize`].
    pub fn new<R>(coefficients: &[f64], exponents: &[R], options: PolyOptions) -> PolyResult<Self>
    where
        R: AsRef<[i64]>,
    {
        let poly = MultivarPoly::new(coefficients, exponents, options)?;
        Factorizer::new(FactorizerConfig {
            validate: options.validate,
            ..FactorizerConfig::default()
        })
        .factorize(&poly)
    }

    /// Factorizes an existing polynomial, keeping its validation setting.
    ///
    /// # Errors
    ///
    /// See [`Factorizer::factorize`].
    pub fn from_poly(poly: &MultivarPoly) -> PolyResult<Self> {
        Factorizer::new(FactorizerConfig {
            validate: poly.validates(),
            ..FactorizerConfig::default()
        })
        .factorize(poly)
    }

    /// Wraps an existing tree as a recipe over `dim` variables.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::VariableOutOfRange`] if the tree uses a
    /// variable index of `dim` or more.
    pub fn from_tree(
        tree: FactorTree,
        dim: usize,
        validate: bool,
    ) -> Result<Self, ValidationError> {
        if let Some(variable) = tree.max_variable().filter(|&v| v >= dim) {
            return Err(ValidationError::VariableOutOfRange { variable, dim });
        }
        Ok(Self::from_parts(tree, dim, validate))
    }

    pub(crate) fn from_parts(tree: FactorTree, dim: usize, validate: bool) -> Self {
        let ops = tree.num_ops();
        Self {
            tree,
            dim,
            ops,
            validate,
        }
    }

    /// Returns the factorization tree.
    #[must_use]
    pub fn tree(&self) -> &FactorTree {
        &self.tree
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.dim
    }

    /// Returns the number of monomials.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tree.leaf_count()
    }

    /// Always false: a recipe holds at least one monomial.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        false
    }

    /// Returns the operations spent per evaluation.
    #[must_use]
    pub fn num_ops(&self) -> OpCount {
        self.ops
    }

    /// Evaluates at `x`, checking its length if built with validation.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch for a point of the wrong length when
    /// validation is on.
    pub fn eval(&self, x: &[f64]) -> PolyResult<f64> {
        if self.validate {
            check_point(self.dim, x)?;
        }
        Ok(self.tree.eval(x))
    }

    /// Evaluates at `x` after checking its length.
    ///
    /// # Errors
    ///
    /// Returns a dimension mismatch for a point of the wrong length.
    pub fn eval_checked(&self, x: &[f64]) -> PolyResult<f64> {
        check_point(self.dim, x)?;
        Ok(self.tree.eval(x))
    }

    /// Evaluates at `x` without checks.
    ///
    /// # Panics
    ///
    /// Panics if `x` is shorter than the highest variable index in use.
    #[must_use]
    pub fn eval_unchecked(&self, x: &[f64]) -> f64 {
        self.tree.eval(x)
    }
}

/// Serialized form of [`HornerPoly`]; the operation count is not stored.
#[cfg(feature = "serde")]
#[derive(serde::Serialize, serde::Deserialize)]
struct RecipeParts {
    tree: FactorTree,
    dim: usize,
    validate: bool,
}

#[cfg(feature = "serde")]
impl TryFrom<RecipeParts> for HornerPoly {
    type Error = ValidationError;

    fn try_from(parts: RecipeParts) -> Result<Self, Self::Error> {
        Self::from_tree(parts.tree, parts.dim, parts.validate)
    }
}

#[cfg(feature = "serde")]
impl From<HornerPoly> for RecipeParts {
    fn from(recipe: HornerPoly) -> Self {
        Self {
            tree: recipe.tree,
            dim: recipe.dim,
            validate: recipe.validate,
        }
    }
}

impl PolyEval for HornerPoly {
    fn dim(&self) -> usize {
        self.dim
    }

    fn eval_unchecked(&self, x: &[f64]) -> f64 {
        self.tree.eval(x)
    }

    fn num_ops(&self) -> OpCount {
        self.ops
    }
}
