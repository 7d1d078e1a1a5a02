//! Parallel construction and evaluation.
//!
//! Recipes share no mutable state, so independent factorizations and
//! evaluations of one recipe at many points run on rayon workers without
//! locking. Small batches stay sequential.

use horner_poly::{MultivarPoly, PolyEval, PolyResult};
use rayon::prelude::*;
use tracing::debug;

use crate::engine::Factorizer;
use crate::recipe::HornerPoly;

/// Configuration for batch operations.
#[derive(Clone, Debug)]
pub struct BatchConfig {
    /// Minimum batch size to enable parallelism.
    pub parallel_threshold: usize,
}

impl Default for BatchConfig {
    fn default() -> Self {
        Self {
            parallel_threshold: 16,
        }
    }
}

/// Factorizes every polynomial; results keep the input order.
pub fn factorize_batch(
    factorizer: &Factorizer,
    polys: &[MultivarPoly],
    config: &BatchConfig,
) -> Vec<PolyResult<HornerPoly>> {
    let parallel = polys.len() >= config.parallel_threshold;
    debug!(count = polys.len(), parallel, "factorizing batch");

    if parallel {
        polys.par_iter().map(|p| factorizer.factorize(p)).collect()
    } else {
        polys.iter().map(|p| factorizer.factorize(p)).collect()
    }
}

/// Evaluates one polynomial at many points.
///
/// # Errors
///
/// Returns a dimension mismatch if any point has the wrong length. Which
/// offending point is reported is unspecified when running in parallel.
pub fn eval_many<P>(poly: &P, points: &[Vec<f64>], config: &BatchConfig) -> PolyResult<Vec<f64>>
where
    P: PolyEval + Sync,
{
    let parallel = points.len() >= config.parallel_threshold;
    debug!(count = points.len(), parallel, "evaluating batch");

    if parallel {
        points.par_iter().map(|x| poly.eval_checked(x)).collect()
    } else {
        points.iter().map(|x| poly.eval_checked(x)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use horner_poly::{PolyError, PolyOptions, ValidationError};

    fn sample_polys(n: usize) -> Vec<MultivarPoly> {
        (0..n)
            .map(|i| {
                let c = i as f64;
                MultivarPoly::new(
                    &[c, 1.0, 2.0],
                    &[vec![0i64, 0], vec![1, 1], vec![2, (i % 3) as i64]],
                    PolyOptions::default(),
                )
                .unwrap()
            })
            .collect()
    }

    #[test]
    fn test_parallel_matches_sequential() {
        let polys = sample_polys(40);
        let f = Factorizer::default();
        let seq = factorize_batch(&f, &polys, &BatchConfig { parallel_threshold: usize::MAX });
        let par = factorize_batch(&f, &polys, &BatchConfig { parallel_threshold: 1 });
        assert_eq!(seq, par);

        for (p, h) in polys.iter().zip(&par) {
            let h = h.as_ref().unwrap();
            assert_eq!(h.eval(&[1.5, -0.5]).unwrap(), p.eval(&[1.5, -0.5]).unwrap());
        }
    }

    #[test]
    fn test_eval_many() {
        let h = HornerPoly::new(
            &[5.0, 2.0, 1.0, 2.0],
            &[vec![0i64, 0], vec![1, 0], vec![2, 0], vec![2, 1]],
            PolyOptions::default(),
        )
        .unwrap();
        let points: Vec<Vec<f64>> = (0..32).map(|i| vec![f64::from(i) - 16.0, 3.0]).collect();

        let par = eval_many(&h, &points, &BatchConfig::default()).unwrap();
        for (x, v) in points.iter().zip(&par) {
            assert_eq!(*v, h.eval_unchecked(x));
        }
        assert_eq!(par[14], 29.0);
    }

    #[test]
    fn test_eval_many_rejects_bad_point() {
        let p = &sample_polys(1)[0];
        let points = vec![vec![1.0, 2.0], vec![1.0], vec![1.0, 2.0, 3.0]];
        let err = eval_many(p, &points, &BatchConfig { parallel_threshold: usize::MAX });
        assert_eq!(
            err,
            Err(PolyError::Validation(ValidationError::DimensionMismatch {
                expected: 2,
                found: 1
            }))
        );
    }
}
