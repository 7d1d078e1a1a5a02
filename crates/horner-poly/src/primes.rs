//! Prime tables used to encode exponent vectors as integers.
//!
//! Variable `d` is assigned the `d`-th prime, so a monomial
//! `x_0^a x_1^b ...` maps to `2^a * 3^b * ...`. Tables depend only on the
//! dimension and can be shared read-only between threads.

use std::sync::{Arc, OnceLock};

use parking_lot::RwLock;
use rustc_hash::FxHashMap;

/// Checks if `n` is prime by trial division.
#[must_use]
pub const fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n % 2 == 0 {
        return n == 2;
    }

    let mut i = 3;
    while i * i <= n {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Returns the first `count` primes in increasing order.
#[must_use]
pub fn first_primes(count: usize) -> Vec<u64> {
    let mut primes = Vec::with_capacity(count);
    let mut candidate = 2u64;
    while primes.len() < count {
        if is_prime(candidate) {
            primes.push(candidate);
        }
        candidate += if candidate == 2 { 1 } else { 2 };
    }
    primes
}

/// Mapping from variable index to a distinct prime.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PrimeTable {
    primes: Vec<u64>,
}

impl PrimeTable {
    /// Builds the table for `dim` variables.
    #[must_use]
    pub fn new(dim: usize) -> Self {
        Self {
            primes: first_primes(dim),
        }
    }

    /// Returns the prime of variable `d`.
    ///
    /// # Panics
    ///
    /// Panics if `d` is not below the table's dimension.
    #[must_use]
    pub fn prime(&self, d: usize) -> u64 {
        self.primes[d]
    }

    /// Returns all primes.
    #[must_use]
    pub fn primes(&self) -> &[u64] {
        &self.primes
    }

    /// Returns the number of variables covered.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.primes.len()
    }
}

/// Per-dimension cache of prime tables.
///
/// A table is inserted once and never mutated afterwards; lookups only take
/// the read lock.
#[derive(Debug, Default)]
pub struct PrimeCache {
    tables: RwLock<FxHashMap<usize, Arc<PrimeTable>>>,
}

impl PrimeCache {
    /// Creates an empty cache.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the process-wide cache.
    pub fn global() -> &'static PrimeCache {
        static GLOBAL: OnceLock<PrimeCache> = OnceLock::new();
        GLOBAL.get_or_init(PrimeCache::new)
    }

    /// Returns the table for `dim`, building it on first use.
    pub fn get(&self, dim: usize) -> Arc<PrimeTable> {
        if let Some(table) = self.tables.read().get(&dim) {
            return Arc::clone(table);
        }

        let mut tables = self.tables.write();
        Arc::clone(
            tables
                .entry(dim)
                .or_insert_with(|| Arc::new(PrimeTable::new(dim))),
        )
    }

    /// Returns the number of cached dimensions.
    pub fn len(&self) -> usize {
        self.tables.read().len()
    }

    /// Returns true if nothing has been cached yet.
    pub fn is_empty(&self) -> bool {
        self.tables.read().is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime() {
        assert!(!is_prime(0));
        assert!(!is_prime(1));
        assert!(is_prime(2));
        assert!(is_prime(3));
        assert!(!is_prime(4));
        assert!(!is_prime(9));
        assert!(is_prime(104_729)); // 10000th prime
    }

    #[test]
    fn test_first_primes() {
        assert_eq!(first_primes(0), Vec::<u64>::new());
        assert_eq!(first_primes(6), vec![2, 3, 5, 7, 11, 13]);
    }

    #[test]
    fn test_table_is_deterministic() {
        let a = PrimeTable::new(5);
        let b = PrimeTable::new(5);
        assert_eq!(a, b);
        assert_eq!(a.prime(4), 11);
        assert_eq!(a.dim(), 5);
    }

    #[test]
    fn test_cache_reuses_tables() {
        let cache = PrimeCache::new();
        assert!(cache.is_empty());

        let t1 = cache.get(3);
        let t2 = cache.get(3);
        assert!(Arc::ptr_eq(&t1, &t2));

        let _ = cache.get(4);
        assert_eq!(cache.len(), 2);
    }

    #[test]
    fn test_cache_concurrent_reads() {
        let cache = PrimeCache::new();
        std::thread::scope(|s| {
            for _ in 0..4 {
                s.spawn(|| {
                    let table = cache.get(8);
                    assert_eq!(table.primes(), &[2, 3, 5, 7, 11, 13, 17, 19]);
                });
            }
        });
        assert_eq!(cache.len(), 1);
    }
}
