//! Monomials with `f64` coefficients.

use std::fmt::{self, Write as _};

use smallvec::SmallVec;

/// Exponent storage; eight variables stay inline.
pub type Exponents = SmallVec<[u32; 8]>;

/// Raises `base` to a non-negative integer power by square-and-multiply.
///
/// `powu(x, 0)` is `1.0` for every `x`, including `0.0`.
#[must_use]
pub fn powu(base: f64, exp: u32) -> f64 {
    match exp {
        0 => 1.0,
        1 => base,
        _ => {
            let mut result = 1.0;
            let mut b = base;
            let mut e = exp;
            while e > 0 {
                if e & 1 == 1 {
                    result *= b;
                }
                e >>= 1;
                if e > 0 {
                    b *= b;
                }
            }
            result
        }
    }
}

/// Appends `x_{d+1}^k` for every nonzero power, separated by spaces.
///
/// Variables are printed 1-based.
pub fn write_powers<I>(out: &mut String, powers: I)
where
    I: IntoIterator<Item = (usize, u32)>,
{
    for (d, k) in powers {
        if !out.is_empty() && !out.ends_with(' ') {
            out.push(' ');
        }
        // Writing to a String cannot fail.
        let _ = write!(out, "x_{}^{}", d + 1, k);
    }
}

/// One term `coefficient * Π x_d^exponents[d]`.
#[derive(Clone, PartialEq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Monomial {
    /// Coefficient of the term.
    pub coefficient: f64,
    /// Exponent of every variable.
    pub exponents: Exponents,
}

impl Monomial {
    /// Creates a monomial from its coefficient and exponents.
    #[must_use]
    pub fn new(coefficient: f64, exponents: &[u32]) -> Self {
        Self {
            coefficient,
            exponents: SmallVec::from_slice(exponents),
        }
    }

    /// Returns the number of variables.
    #[must_use]
    pub fn dim(&self) -> usize {
        self.exponents.len()
    }

    /// Returns the exponent of variable `d`.
    #[must_use]
    pub fn exponent(&self, d: usize) -> u32 {
        self.exponents.get(d).copied().unwrap_or(0)
    }

    /// Returns the sum of all exponents.
    #[must_use]
    pub fn total_degree(&self) -> u64 {
        self.exponents.iter().map(|&e| u64::from(e)).sum()
    }

    /// Iterates over `(variable, exponent)` for nonzero exponents.
    pub fn powers(&self) -> impl Iterator<Item = (usize, u32)> + '_ {
        self.exponents
            .iter()
            .enumerate()
            .filter(|&(_, &e)| e > 0)
            .map(|(d, &e)| (d, e))
    }

    /// Evaluates the term at `x`, skipping zero exponents.
    #[must_use]
    pub fn eval(&self, x: &[f64]) -> f64 {
        self.powers()
            .fold(self.coefficient, |acc, (d, e)| acc * powu(x[d], e))
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = format!("{:?}", self.coefficient);
        write_powers(&mut out, self.powers());
        f.write_str(&out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_powu() {
        assert_eq!(powu(0.0, 0), 1.0);
        assert_eq!(powu(-2.0, 0), 1.0);
        assert_eq!(powu(-2.0, 1), -2.0);
        assert_eq!(powu(-2.0, 3), -8.0);
        assert_eq!(powu(3.0, 5), 243.0);
        assert_eq!(powu(1.5, 2), 2.25);
    }

    #[test]
    fn test_basic_queries() {
        let m = Monomial::new(2.0, &[3, 0, 1]);
        assert_eq!(m.dim(), 3);
        assert_eq!(m.exponent(0), 3);
        assert_eq!(m.exponent(7), 0);
        assert_eq!(m.total_degree(), 4);
        assert_eq!(m.powers().collect::<Vec<_>>(), vec![(0, 3), (2, 1)]);
    }

    #[test]
    fn test_eval_zero_exponent_is_one() {
        // 5 * x^0 at x = 0 is 5, not 0
        let m = Monomial::new(5.0, &[0]);
        assert_eq!(m.eval(&[0.0]), 5.0);

        let m = Monomial::new(2.0, &[2, 1]);
        assert_eq!(m.eval(&[-2.0, 3.0]), 24.0);
    }

    #[test]
    fn test_display() {
        assert_eq!(Monomial::new(1.0, &[3, 1, 0]).to_string(), "1.0 x_1^3 x_2^1");
        assert_eq!(Monomial::new(-0.5, &[0, 0]).to_string(), "-0.5");
    }
}
