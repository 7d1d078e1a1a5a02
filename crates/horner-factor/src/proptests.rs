//! Property-based tests comparing the Horner form with direct summation.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use horner_poly::{MultivarPoly, PolyOptions};

    use crate::engine::{factorize, Factorizer, FactorizerConfig};

    // Distinct exponent rows in `dim` variables, degree 0-5 per variable
    fn exponent_rows(dim: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
        proptest::collection::btree_set(proptest::collection::vec(0i64..6, dim), 1..24)
            .prop_map(|rows| rows.into_iter().collect())
    }

    // A polynomial together with an evaluation point of matching dimension
    fn poly_and_point() -> impl Strategy<Value = (MultivarPoly, Vec<f64>)> {
        (1usize..6).prop_flat_map(|dim| {
            exponent_rows(dim).prop_flat_map(move |rows| {
                let n = rows.len();
                (
                    proptest::collection::vec(-1.0f64..1.0, n),
                    Just(rows),
                    proptest::collection::vec(-1.5f64..1.5, dim),
                )
                    .prop_map(|(coeffs, rows, x)| {
                        let poly = MultivarPoly::new(&coeffs, &rows, PolyOptions::strict()).unwrap();
                        (poly, x)
                    })
            })
        })
    }

    fn close(a: f64, b: f64, scale: f64) -> bool {
        (a - b).abs() <= 1e-9 * scale.max(1.0)
    }

    proptest! {
        #[test]
        fn horner_matches_naive((poly, x) in poly_and_point()) {
            let horner = factorize(&poly).unwrap();

            // Bound on the magnitude of any partial sum
            let scale: f64 = poly
                .monomials()
                .iter()
                .map(|m| {
                    m.powers()
                        .fold(m.coefficient.abs(), |acc, (d, e)| acc * x[d].abs().powi(e as i32))
                })
                .sum();

            let naive = poly.eval(&x).unwrap();
            let nested = horner.eval(&x).unwrap();
            prop_assert!(close(naive, nested, scale), "naive {} vs horner {}", naive, nested);
        }

        #[test]
        fn horner_never_costs_more((poly, _x) in poly_and_point()) {
            let horner = factorize(&poly).unwrap();
            prop_assert!(horner.num_ops().total() <= poly.num_ops().total());
            prop_assert_eq!(horner.num_ops().additions, poly.num_ops().additions);
            prop_assert_eq!(horner.len(), poly.len());
        }

        #[test]
        fn factorization_is_deterministic((poly, _x) in poly_and_point()) {
            let a = factorize(&poly).unwrap();
            let b = factorize(&poly).unwrap();
            let c = Factorizer::new(FactorizerConfig {
                use_monomial_ids: false,
                ..FactorizerConfig::default()
            })
            .factorize(&poly)
            .unwrap();

            prop_assert_eq!(&a, &b);
            prop_assert_eq!(a.tree(), c.tree());
            prop_assert_eq!(a.to_string(), b.to_string());
        }

        #[test]
        fn wrong_dimension_is_rejected((poly, x) in poly_and_point(), extra in 1usize..3) {
            let horner = factorize(&poly).unwrap();

            let mut longer = x.clone();
            longer.extend(std::iter::repeat(0.0).take(extra));
            prop_assert!(horner.eval(&longer).is_err());
            prop_assert!(poly.eval(&longer).is_err());

            let shorter = &x[..x.len() - 1];
            prop_assert!(horner.eval(shorter).is_err());
            prop_assert!(poly.eval(shorter).is_err());
        }
    }
}
