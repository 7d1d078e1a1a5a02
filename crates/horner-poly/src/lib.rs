//! # horner-poly
//!
//! Sparse multivariate polynomials with `f64` coefficients.
//!
//! This crate provides:
//! - Validated, optionally canonicalized polynomial construction
//! - Direct-summation evaluation with an operation count baseline
//! - Prime-power encoding of exponent vectors for O(1) divisibility tests
//! - Per-dimension prime table caching safe for concurrent readers
//!
//! The nested Horner form built from these polynomials lives in
//! `horner-factor`.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod cost;
pub mod encoder;
pub mod error;
pub mod monomial;
pub mod options;
pub mod ordering;
pub mod polynomial;
pub mod primes;
pub mod traits;

#[cfg(test)]
mod proptests;

pub use cost::OpCount;
pub use encoder::{MonomialEncoder, MonomialId};
pub use error::{PolyError, PolyResult, ValidationError};
pub use monomial::{powu, Exponents, Monomial};
pub use options::PolyOptions;
pub use ordering::MonomialOrder;
pub use polynomial::{check_point, MultivarPoly};
pub use primes::{first_primes, is_prime, PrimeCache, PrimeTable};
pub use traits::PolyEval;
