//! # horner-factor
//!
//! Multivariate Horner factorization.
//!
//! This crate provides:
//! - **Factorization**: greedy construction of a nested Horner form
//! - **Recipes**: reusable evaluation plans with static operation counts
//! - **Formatting**: nested human-readable rendering of a recipe
//! - **Batches**: rayon-parallel construction and evaluation
//!
//! # Example
//!
//! ```
//! use horner_factor::HornerPoly;
//! use horner_poly::PolyOptions;
//!
//! // 5 + 2 x_1 + x_1^2 + 2 x_1^2 x_2
//! let h = HornerPoly::new(
//!     &[5.0, 2.0, 1.0, 2.0],
//!     &[vec![0i64, 0], vec![1, 0], vec![2, 0], vec![2, 1]],
//!     PolyOptions::default(),
//! )?;
//! assert_eq!(h.eval(&[-2.0, 3.0])?, 29.0);
//! # Ok::<(), horner_poly::PolyError>(())
//! ```

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod batch;
pub mod engine;
pub mod format;
pub mod node;
pub mod recipe;

#[cfg(test)]
mod proptests;

pub use batch::{eval_many, factorize_batch, BatchConfig};
pub use engine::{factorize, Factorizer, FactorizerConfig};
pub use node::{FactorNode, FactorTree, NodeId, Powers};
pub use recipe::HornerPoly;
