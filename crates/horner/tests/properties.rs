//! Property tests across the public surface: direct summation, the Horner
//! form and batch evaluation agree on random polynomials.

use proptest::prelude::*;

use horner::prelude::*;

// Distinct exponent rows in `dim` variables, degree 0-6 per variable
fn exponent_rows(dim: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
    proptest::collection::btree_set(proptest::collection::vec(0i64..7, dim), 1..32)
        .prop_map(|rows| rows.into_iter().collect())
}

// A polynomial and a handful of points of matching dimension
fn poly_and_points() -> impl Strategy<Value = (MultivarPoly, Vec<Vec<f64>>)> {
    (1usize..5).prop_flat_map(|dim| {
        exponent_rows(dim).prop_flat_map(move |rows| {
            let n = rows.len();
            (
                proptest::collection::vec(-2.0f64..2.0, n),
                Just(rows),
                proptest::collection::vec(proptest::collection::vec(-1.0f64..1.0, dim), 1..40),
            )
                .prop_map(|(coeffs, rows, points)| {
                    let poly = MultivarPoly::new(&coeffs, &rows, PolyOptions::default()).unwrap();
                    (poly, points)
                })
        })
    })
}

proptest! {
    #[test]
    fn batch_matches_single_evaluation((poly, points) in poly_and_points()) {
        let horner = HornerPoly::from_poly(&poly).unwrap();

        let sequential = eval_many(&horner, &points, &BatchConfig { parallel_threshold: usize::MAX }).unwrap();
        let parallel = eval_many(&horner, &points, &BatchConfig { parallel_threshold: 1 }).unwrap();
        prop_assert_eq!(&sequential, &parallel);

        for (x, &value) in points.iter().zip(&sequential) {
            prop_assert_eq!(horner.eval(x).unwrap(), value);
            prop_assert_eq!(horner.eval_unchecked(x), value);

            let naive = poly.eval(x).unwrap();
            let scale: f64 = poly.monomials().iter().map(|m| m.coefficient.abs()).sum();
            prop_assert!((naive - value).abs() <= 1e-9 * scale.max(1.0), "naive {} vs horner {}", naive, value);
        }
    }

    #[test]
    fn batch_factorization_matches_single((poly, _points) in poly_and_points()) {
        let polys = vec![poly.clone(); 3];
        let single = factorize(&poly).unwrap();
        for recipe in factorize_batch(&Factorizer::default(), &polys, &BatchConfig { parallel_threshold: 1 }) {
            prop_assert_eq!(recipe.unwrap(), single.clone());
        }
        prop_assert!(single.num_ops().total() <= poly.num_ops().total());
        prop_assert_eq!(single.len(), poly.len());
    }
}
