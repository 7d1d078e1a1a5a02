//! Monomial orderings used to canonicalize input.
//!
//! Rectified polynomials list their terms in ascending order, so the
//! constant term (if any) comes first.

use std::cmp::Ordering;

/// A total order on exponent vectors of equal length.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MonomialOrder {
    /// Lexicographic order.
    ///
    /// The first differing exponent decides.
    Lex,

    /// Graded lexicographic order.
    ///
    /// First compares total degree, then uses lex as tiebreaker.
    #[default]
    Grlex,

    /// Graded reverse lexicographic order.
    ///
    /// First compares total degree, then the last differing exponent decides,
    /// with the smaller exponent ranking higher.
    Grevlex,
}

impl MonomialOrder {
    /// Compares two exponent vectors according to this ordering.
    #[must_use]
    pub fn compare(&self, a: &[u32], b: &[u32]) -> Ordering {
        match self {
            MonomialOrder::Lex => cmp_lex(a, b),
            MonomialOrder::Grlex => cmp_grlex(a, b),
            MonomialOrder::Grevlex => cmp_grevlex(a, b),
        }
    }

    /// Returns a short name for the ordering.
    #[must_use]
    pub const fn name(&self) -> &'static str {
        match self {
            MonomialOrder::Lex => "lex",
            MonomialOrder::Grlex => "grlex",
            MonomialOrder::Grevlex => "grevlex",
        }
    }
}

impl std::fmt::Display for MonomialOrder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

fn degree(a: &[u32]) -> u64 {
    a.iter().map(|&e| u64::from(e)).sum()
}

/// Compares two exponent vectors lexicographically.
#[must_use]
pub fn cmp_lex(a: &[u32], b: &[u32]) -> Ordering {
    a.cmp(b)
}

/// Compares two exponent vectors by graded lexicographic order.
#[must_use]
pub fn cmp_grlex(a: &[u32], b: &[u32]) -> Ordering {
    degree(a).cmp(&degree(b)).then_with(|| cmp_lex(a, b))
}

/// Compares two exponent vectors by graded reverse lexicographic order.
#[must_use]
pub fn cmp_grevlex(a: &[u32], b: &[u32]) -> Ordering {
    match degree(a).cmp(&degree(b)) {
        Ordering::Equal => {}
        ord => return ord,
    }

    for (x, y) in a.iter().zip(b).rev() {
        match y.cmp(x) {
            Ordering::Equal => continue,
            ord => return ord,
        }
    }
    Ordering::Equal
}
