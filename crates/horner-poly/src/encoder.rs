//! Prime-power encoding of exponent vectors.
//!
//! An exponent vector `e` is mapped to `Π prime[d]^e[d]`. Unique
//! factorization makes the map injective, and divisibility of ids mirrors
//! divisibility of monomials, so "does this monomial contain `x_d^k`" becomes
//! a single remainder operation.

use std::sync::Arc;

use crate::error::{PolyError, PolyResult, ValidationError};
use crate::primes::{PrimeCache, PrimeTable};

/// Integer identifier of an exponent vector.
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Debug)]
pub struct MonomialId(u128);

impl MonomialId {
    /// The id of the constant monomial.
    pub const ONE: Self = Self(1);

    /// Returns the raw integer.
    #[must_use]
    pub const fn raw(self) -> u128 {
        self.0
    }
}

/// Encodes exponent vectors of a fixed dimension.
#[derive(Clone, Debug)]
pub struct MonomialEncoder {
    table: Arc<PrimeTable>,
}

impl MonomialEncoder {
    /// Creates an encoder with a fresh prime table.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            table: Arc::new(PrimeTable::new(dim)),
        }
    }

    /// Creates an encoder backed by a cached table.
    #[must_use]
    pub fn cached(cache: &PrimeCache, dim: usize) -> Self {
        Self {
            table: cache.get(dim),
        }
    }

    /// Returns the prime table.
    #[must_use]
    pub fn table(&self) -> &PrimeTable {
        &self.table
    }

    /// Returns the dimension.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.table.dim()
    }

    /// Computes `prime[d]^k`.
    ///
    /// Returns `None` if `d` is not a variable of this encoder or the power
    /// does not fit in 128 bits.
    #[must_use]
    pub fn prime_power(&self, d: usize, k: u32) -> Option<u128> {
        let prime = self.table.primes().get(d)?;
        u128::from(*prime).checked_pow(k)
    }

    /// Encodes an exponent vector.
    ///
    /// # Errors
    ///
    /// - [`ValidationError::DimensionMismatch`] if `exponents` does not have
    ///   one entry per variable;
    /// - [`PolyError::Overflow`] if the id does not fit in 128 bits.
    pub fn encode(&self, exponents: &[u32]) -> PolyResult<MonomialId> {
        if exponents.len() != self.dim() {
            return Err(ValidationError::DimensionMismatch {
                expected: self.dim(),
                found: exponents.len(),
            }
            .into());
        }

        let mut id = 1u128;
        for (d, &e) in exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            let overflow = PolyError::Overflow {
                dimension: d,
                exponent: e,
            };
            let factor = self.prime_power(d, e).ok_or_else(|| overflow.clone())?;
            id = id.checked_mul(factor).ok_or(overflow)?;
        }
        Ok(MonomialId(id))
    }

    /// Returns true if the monomial `id` is divisible by `x_d^k`.
    ///
    /// False for a variable outside the encoder's dimension and for a factor
    /// wider than 128 bits, since neither can divide an id.
    #[must_use]
    pub fn is_divisible(&self, id: MonomialId, d: usize, k: u32) -> bool {
        self.prime_power(d, k).is_some_and(|p| id.0 % p == 0)
    }

    /// Returns true if the monomial `id` contains variable `d` at all.
    #[must_use]
    pub fn contains(&self, id: MonomialId, d: usize) -> bool {
        self.is_divisible(id, d, 1)
    }

    /// Removes `x_d^k` from `id`, or returns `None` if it is not a factor.
    #[must_use]
    pub fn divide(&self, id: MonomialId, d: usize, k: u32) -> Option<MonomialId> {
        let p = self.prime_power(d, k)?;
        (id.0 % p == 0).then(|| MonomialId(id.0 / p))
    }
}
