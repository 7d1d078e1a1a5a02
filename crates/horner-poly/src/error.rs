//! Errors raised while building or evaluating polynomials.

use thiserror::Error;

/// Malformed input detected at construction or evaluation time.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// The number of coefficients differs from the number of exponent rows.
    #[error("got {coefficients} coefficients but {rows} exponent rows")]
    LengthMismatch {
        /// Number of coefficients supplied.
        coefficients: usize,
        /// Number of exponent rows supplied.
        rows: usize,
    },

    /// An exponent row has a different length than the first row.
    #[error("exponent row {row} has {found} entries, expected {expected}")]
    RaggedRow {
        /// Index of the offending row.
        row: usize,
        /// Length of the first row.
        expected: usize,
        /// Length of the offending row.
        found: usize,
    },

    /// An exponent is negative or does not fit the exponent width.
    #[error("exponent {value} at row {row}, variable {variable} is not a valid non-negative exponent")]
    NegativeExponent {
        /// Index of the offending row.
        row: usize,
        /// Variable index within the row.
        variable: usize,
        /// The rejected value.
        value: i64,
    },

    /// Two monomials share the same exponent vector.
    #[error("monomials {first} and {second} have identical exponent vectors")]
    DuplicateExponents {
        /// Index of the first occurrence.
        first: usize,
        /// Index of the repeated occurrence.
        second: usize,
    },

    /// A variable index is not below the dimension.
    #[error("variable {variable} is out of range for dimension {dim}")]
    VariableOutOfRange {
        /// The offending variable index.
        variable: usize,
        /// Number of variables.
        dim: usize,
    },

    /// A factorization tree does not form a single tree rooted at its last
    /// node.
    #[error("malformed factorization tree at node {node}: {reason}")]
    MalformedTree {
        /// Index of the offending node.
        node: usize,
        /// What is wrong with it.
        reason: &'static str,
    },

    /// An evaluation point has the wrong number of coordinates.
    #[error("input has {found} coordinates but the polynomial has dimension {expected}")]
    DimensionMismatch {
        /// Dimension of the polynomial.
        expected: usize,
        /// Length of the supplied point.
        found: usize,
    },
}

/// Errors produced by this crate and by the factorization engine.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum PolyError {
    /// Malformed input.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// No monomials were supplied.
    #[error("polynomial has no monomials")]
    EmptyPolynomial,

    /// A prime-encoded monomial id does not fit in 128 bits.
    #[error("monomial id overflows u128 at variable {dimension} with exponent {exponent}")]
    Overflow {
        /// Variable whose prime power did not fit.
        dimension: usize,
        /// Exponent being applied.
        exponent: u32,
    },
}

/// Shorthand result type.
pub type PolyResult<T> = Result<T, PolyError>;
