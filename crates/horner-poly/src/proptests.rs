//! Property-based tests for polynomial construction and encoding.

#[cfg(test)]
mod tests {
    use proptest::prelude::*;

    use crate::encoder::MonomialEncoder;
    use crate::ordering::MonomialOrder;
    use crate::{MultivarPoly, PolyOptions};

    // Strategy for exponent rows of a fixed dimension (degree 0-4)
    fn exponent_rows(dim: usize) -> impl Strategy<Value = Vec<Vec<i64>>> {
        proptest::collection::btree_set(proptest::collection::vec(0i64..5, dim), 1..12)
            .prop_map(|rows| rows.into_iter().collect())
    }

    // Polynomial input: coefficients plus distinct exponent rows
    fn poly_input() -> impl Strategy<Value = (Vec<f64>, Vec<Vec<i64>>)> {
        (1usize..4).prop_flat_map(|dim| {
            exponent_rows(dim).prop_flat_map(|rows| {
                let n = rows.len();
                (proptest::collection::vec(-10.0f64..10.0, n), Just(rows))
            })
        })
    }

    fn orders() -> impl Strategy<Value = MonomialOrder> {
        prop_oneof![
            Just(MonomialOrder::Lex),
            Just(MonomialOrder::Grlex),
            Just(MonomialOrder::Grevlex),
        ]
    }

    proptest! {
        #[test]
        fn rectify_preserves_value(
            (coeffs, rows) in poly_input(),
            order in orders(),
            seed in proptest::collection::vec(-2.0f64..2.0, 3),
        ) {
            let raw = MultivarPoly::new(&coeffs, &rows, PolyOptions::default()).unwrap();
            let sorted =
                MultivarPoly::new(&coeffs, &rows, PolyOptions::strict().with_order(order)).unwrap();
            let x = &seed[..raw.dim()];

            let a = raw.eval(x).unwrap();
            let b = sorted.eval(x).unwrap();
            prop_assert!((a - b).abs() <= 1e-9 * (1.0 + a.abs()));
            prop_assert_eq!(raw.num_ops(), sorted.num_ops());
        }

        #[test]
        fn rectified_terms_are_sorted((coeffs, rows) in poly_input(), order in orders()) {
            let p = MultivarPoly::new(&coeffs, &rows, PolyOptions::strict().with_order(order)).unwrap();
            for pair in p.monomials().windows(2) {
                prop_assert!(order.compare(&pair[0].exponents, &pair[1].exponents).is_lt());
            }
        }

        #[test]
        fn any_repeated_row_is_rejected((coeffs, rows) in poly_input(), pick in any::<prop::sample::Index>()) {
            let i = pick.index(rows.len());
            let mut rows = rows;
            let mut coeffs = coeffs;
            rows.push(rows[i].clone());
            coeffs.push(1.0);
            prop_assert!(MultivarPoly::new(&coeffs, &rows, PolyOptions::default()).is_err());
        }

        #[test]
        fn encoding_matches_exponent_divisibility(
            exps in proptest::collection::vec(0u32..6, 4),
            d in 0usize..4,
            k in 1u32..6,
        ) {
            let enc = MonomialEncoder::new(4);
            let id = enc.encode(&exps).unwrap();
            prop_assert_eq!(enc.is_divisible(id, d, k), exps[d] >= k);
        }
    }
}
