//! Operation counts for comparing evaluation strategies.
//!
//! Both representations are costed with the same model:
//! - computing `x^k` takes `k - 1` multiplications,
//! - scaling a value by a computed power takes one multiplication,
//! - joining two partial sums takes one addition.
//!
//! A term `c * x_0^a * x_1^b` therefore costs `a + b` multiplications.

use std::fmt;
use std::ops::{Add, AddAssign};

/// Scalar multiplications and additions needed for one evaluation.
#[derive(Clone, Copy, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OpCount {
    /// Number of multiplications.
    pub multiplications: u64,
    /// Number of additions.
    pub additions: u64,
}

impl OpCount {
    /// No operations.
    pub const ZERO: Self = Self {
        multiplications: 0,
        additions: 0,
    };

    /// Creates a count.
    #[must_use]
    pub const fn new(multiplications: u64, additions: u64) -> Self {
        Self {
            multiplications,
            additions,
        }
    }

    /// Cost of multiplying a value by `x^k`.
    #[must_use]
    pub const fn scale_by_power(k: u32) -> Self {
        Self::new(k as u64, 0)
    }

    /// Cost of joining two partial results.
    #[must_use]
    pub const fn join() -> Self {
        Self::new(0, 1)
    }

    /// Cost of summing monomials directly, given their total degrees.
    ///
    /// Each monomial costs its total degree in multiplications and the sum
    /// costs one addition fewer than there are monomials.
    #[must_use]
    pub fn direct_sum<I>(total_degrees: I) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let (multiplications, terms) = total_degrees
            .into_iter()
            .fold((0u64, 0u64), |(muls, n), degree| (muls + degree, n + 1));
        Self::new(multiplications, terms.saturating_sub(1))
    }

    /// Returns multiplications plus additions.
    #[must_use]
    pub const fn total(&self) -> u64 {
        self.multiplications + self.additions
    }
}

impl Add for OpCount {
    type Output = Self;

    fn add(self, rhs: Self) -> Self {
        Self::new(
            self.multiplications + rhs.multiplications,
            self.additions + rhs.additions,
        )
    }
}

impl AddAssign for OpCount {
    fn add_assign(&mut self, rhs: Self) {
        *self = *self + rhs;
    }
}

impl std::iter::Sum for OpCount {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(Self::ZERO, Add::add)
    }
}

impl fmt::Display for OpCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} mul + {} add", self.multiplications, self.additions)
    }
}
