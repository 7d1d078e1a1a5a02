//! # Horner
//!
//! Fast evaluation of sparse multivariate polynomials.
//!
//! A polynomial is given as coefficients and an exponent row per monomial.
//! It is factorized once into a nested multivariate Horner form, which can
//! then be evaluated many times with fewer multiplications than summing the
//! monomials directly.
//!
//! ## Features
//!
//! - **Validated Input**: ragged, negative and duplicate exponents are rejected
//! - **Greedy Factorization**: largest exponent sum first, deterministic ties
//! - **Static Cost Model**: operation counts known before any evaluation
//! - **Parallel Batches**: factorize or evaluate many at once on rayon
//!
//! ## Quick Start
//!
//! ```rust
//! use horner::prelude::*;
//!
//! // x_1^3 x_2 + 2 x_1^2 x_3 + 3 x_1 x_2 x_3
//! let coefficients = [1.0, 2.0, 3.0];
//! let exponents = [vec![3i64, 1, 0], vec![2, 0, 1], vec![1, 1, 1]];
//!
//! let poly = MultivarPoly::new(&coefficients, &exponents, PolyOptions::default())?;
//! let horner = HornerPoly::from_poly(&poly)?;
//!
//! let x = [-2.0, 3.0, 1.0];
//! assert_eq!(poly.eval(&x)?, -34.0);
//! assert_eq!(horner.eval(&x)?, -34.0);
//! assert!(horner.num_ops().total() < poly.num_ops().total());
//! # Ok::<(), PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]

pub use horner_factor as factor;
pub use horner_poly as poly;

/// Prelude module for convenient imports.
pub mod prelude {
    pub use horner_factor::{
        eval_many, factorize, factorize_batch, BatchConfig, FactorNode, FactorTree, Factorizer,
        FactorizerConfig, HornerPoly,
    };
    pub use horner_poly::{
        MonomialOrder, MultivarPoly, OpCount, PolyError, PolyEval, PolyOptions, PolyResult,
        ValidationError,
    };
}
