//! Greedy multivariate Horner factorization.
//!
//! The engine works on a set of monomials:
//! 1. A single monomial becomes a leaf.
//! 2. Otherwise the variable `d` with the largest exponent sum is chosen,
//!    ties going to the lowest index.
//! 3. With `k` the smallest nonzero exponent of `d`, the monomials containing
//!    `d` have `x_d^k` factored out and are processed recursively; the
//!    remaining monomials form a sibling branch.
//!
//! Every step strictly lowers the total exponent mass of each branch, so the
//! process terminates. The greedy choice is not globally optimal but never
//! costs more than direct summation.
//!
//! The tree is built with an explicit work stack over one shared term
//! buffer. Each branch is a range of that buffer, partitioned in place, so a
//! polynomial of degree `n` in one variable needs no call stack of depth `n`.
//!
//! Membership in the factored branch is decided with prime-encoded monomial
//! ids when all of them fit in 128 bits, and by reading exponents otherwise.

use std::ops::Range;

use horner_poly::{
    Exponents, Monomial, MonomialEncoder, MonomialId, MultivarPoly, OpCount, PolyError,
    PolyResult, PrimeCache, ValidationError,
};
use tracing::{debug, trace};

use crate::node::{FactorTree, NodeId, Powers, TreeBuilder};
use crate::recipe::HornerPoly;

/// Configuration for [`Factorizer`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FactorizerConfig {
    /// Whether the resulting [`HornerPoly::eval`] checks point lengths.
    pub validate: bool,
    /// Use prime-encoded ids for membership tests.
    pub use_monomial_ids: bool,
}

impl Default for FactorizerConfig {
    fn default() -> Self {
        Self {
            validate: true,
            use_monomial_ids: true,
        }
    }
}

/// Builds [`HornerPoly`] recipes.
#[derive(Clone, Debug, Default)]
pub struct Factorizer {
    config: FactorizerConfig,
}

/// A monomial being factored.
#[derive(Clone, Debug)]
struct Term {
    coefficient: f64,
    exponents: Exponents,
    id: Option<MonomialId>,
    /// Position in the input, for error reporting.
    index: usize,
}

impl Factorizer {
    /// Creates a factorizer.
    #[must_use]
    pub fn new(config: FactorizerConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[must_use]
    pub fn config(&self) -> &FactorizerConfig {
        &self.config
    }

    /// Factorizes a validated polynomial.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::DuplicateExponents`] if the polynomial was
    /// built without validation and repeats an exponent vector.
    pub fn factorize(&self, poly: &MultivarPoly) -> PolyResult<HornerPoly> {
        self.factorize_terms(poly.dim(), poly.monomials())
    }

    /// Factorizes raw monomials of dimension `dim`.
    ///
    /// # Errors
    ///
    /// - [`PolyError::EmptyPolynomial`] for an empty slice;
    /// - [`ValidationError::RaggedRow`] if a monomial has the wrong dimension;
    /// - [`ValidationError::DuplicateExponents`] for repeated exponent vectors.
    pub fn factorize_terms(&self, dim: usize, monomials: &[Monomial]) -> PolyResult<HornerPoly> {
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

        let mut terms: Vec<Term> = monomials
            .iter()
            .enumerate()
            .map(|(index, m)| Term {
                coefficient: m.coefficient,
                exponents: m.exponents.clone(),
                id: None,
                index,
            })
            .collect();

        let encoder = if self.config.use_monomial_ids {
            attach_ids(dim, &mut terms)
        } else {
            None
        };

        let tree = build(&mut terms, dim, encoder.as_ref())?;
        let recipe = HornerPoly::from_parts(tree, dim, self.config.validate);

        debug!(
            dim,
            monomials = monomials.len(),
            naive_ops = OpCount::direct_sum(monomials.iter().map(Monomial::total_degree)).total(),
            horner_ops = recipe.num_ops().total(),
            depth = recipe.tree().depth(),
            encoded = encoder.is_some(),
            "factorized polynomial"
        );
        Ok(recipe)
    }
}

/// Factorizes with the default configuration.
///
/// # Errors
///
/// See [`Factorizer::factorize`].
pub fn factorize(poly: &MultivarPoly) -> PolyResult<HornerPoly> {
    Factorizer::default().factorize(poly)
}

/// Encodes every term; on overflow no term keeps an id.
fn attach_ids(dim: usize, terms: &mut [Term]) -> Option<MonomialEncoder> {
    let encoder = MonomialEncoder::cached(PrimeCache::global(), dim);
    let ids = terms
        .iter()
        .map(|t| encoder.encode(&t.exponents))
        .collect::<Result<Vec<_>, _>>();

    match ids {
        Ok(ids) => {
            for (term, id) in terms.iter_mut().zip(ids) {
                term.id = Some(id);
            }
            Some(encoder)
        }
        Err(err) => {
            debug!(%err, "falling back to exponent scans");
            None
        }
    }
}

/// Picks the variable with the largest exponent sum, lowest index on ties.
fn choose_variable(terms: &[Term], dim: usize) -> Option<usize> {
    let mut sums = vec![0u64; dim];
    for term in terms {
        for (sum, &e) in sums.iter_mut().zip(term.exponents.iter()) {
            *sum += u64::from(e);
        }
    }

    let mut best: Option<(usize, u64)> = None;
    for (d, &sum) in sums.iter().enumerate() {
        if sum > 0 && best.map_or(true, |(_, s)| sum > s) {
            best = Some((d, sum));
        }
    }
    best.map(|(d, _)| d)
}

fn contains(term: &Term, d: usize, encoder: Option<&MonomialEncoder>) -> bool {
    match (encoder, term.id) {
        (Some(enc), Some(id)) => {
            let found = enc.contains(id, d);
            debug_assert_eq!(found, term.exponents[d] > 0);
            found
        }
        _ => term.exponents[d] > 0,
    }
}

/// Moves the terms matching `pred` to the front and returns their count.
fn partition_in_place(terms: &mut [Term], mut pred: impl FnMut(&Term) -> bool) -> usize {
    let mut split = 0;
    for i in 0..terms.len() {
        if pred(&terms[i]) {
            terms.swap(split, i);
            split += 1;
        }
    }
    split
}

fn leaf_powers(exponents: &Exponents) -> Powers {
    exponents
        .iter()
        .enumerate()
        .filter(|&(_, &e)| e > 0)
        .map(|(d, &e)| (d, e))
        .collect()
}

/// Pending work of [`build`].
enum Task {
    /// Factor the terms in this range of the buffer.
    Split(Range<usize>),
    /// Combine the top one or two built nodes under `x_variable^power`.
    Join {
        variable: usize,
        power: u32,
        has_rest: bool,
    },
}

fn build(
    terms: &mut [Term],
    dim: usize,
    encoder: Option<&MonomialEncoder>,
) -> PolyResult<FactorTree> {
    let mut builder = TreeBuilder::with_capacity(2 * terms.len());
    let mut tasks = vec![Task::Split(0..terms.len())];
    let mut built: Vec<NodeId> = Vec::new();

    while let Some(task) = tasks.pop() {
        match task {
            Task::Split(range) => {
                let branch = &mut terms[range.clone()];
                if let [term] = branch {
                    built.push(builder.leaf(term.coefficient, leaf_powers(&term.exponents)));
                    continue;
                }

                // With several terms left and no variable, two exponent vectors coincide.
                let Some(d) = choose_variable(branch, dim) else {
                    return Err(duplicate_error(branch));
                };

                let split = partition_in_place(branch, |t| contains(t, d, encoder));
                let (with, without) = branch.split_at_mut(split);
                let k = with.iter().map(|t| t.exponents[d]).min().unwrap_or(1);

                trace!(
                    variable = d,
                    power = k,
                    factored = with.len(),
                    rest = without.len(),
                    "split"
                );

                for term in with.iter_mut() {
                    term.exponents[d] -= k;
                    term.id = match (encoder, term.id) {
                        (Some(enc), Some(id)) => enc.divide(id, d, k),
                        _ => None,
                    };
                }

                let has_rest = !without.is_empty();
                let mid = range.start + split;
                tasks.push(Task::Join {
                    variable: d,
                    power: k,
                    has_rest,
                });
                if has_rest {
                    tasks.push(Task::Split(mid..range.end));
                }
                tasks.push(Task::Split(range.start..mid));
            }
            Task::Join {
                variable,
                power,
                has_rest,
            } => {
                let rest = if has_rest { built.pop() } else { None };
                let Some(factored) = built.pop() else {
                    unreachable!("a join always follows its factored branch");
                };
                built.push(builder.factor(variable, power, factored, rest));
            }
        }
    }

    builder.finish().ok_or(PolyError::EmptyPolynomial)
}

fn duplicate_error(terms: &[Term]) -> PolyError {
    let mut indices: Vec<usize> = terms.iter().map(|t| t.index).collect();
    indices.sort_unstable();
    ValidationError::DuplicateExponents {
        first: indices[0],
        second: indices[1],
    }
    .into()
}
