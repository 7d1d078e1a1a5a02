//! Serde serialization/deserialization tests
//!
//! Run with: cargo test -p horner-factor --features serde --test serde_tests

#![cfg(feature = "serde")]

use horner_factor::{FactorTree, HornerPoly};
use horner_poly::PolyOptions;

fn sample() -> HornerPoly {
    // x_1^3 x_2 + 2 x_1^2 x_3 + 3 x_1 x_2 x_3
    HornerPoly::new(
        &[1.0, 2.0, 3.0],
        &[vec![3i64, 1, 0], vec![2, 0, 1], vec![1, 1, 1]],
        PolyOptions::default(),
    )
    .unwrap()
}

#[test]
fn tree_roundtrip() {
    let h = sample();
    let json = serde_json::to_string(h.tree()).unwrap();
    let back: FactorTree = serde_json::from_str(&json).unwrap();
    assert_eq!(&back, h.tree());
    assert_eq!(back.eval(&[-2.0, 3.0, 1.0]), -34.0);
}

#[test]
fn recipe_roundtrip_skips_refactorization() {
    let h = sample();
    let json = serde_json::to_string(&h).unwrap();
    let back: HornerPoly = serde_json::from_str(&json).unwrap();

    assert_eq!(h, back);
    assert_eq!(back.to_string(), h.to_string());
    assert_eq!(back.num_ops(), h.num_ops());
    assert_eq!(back.eval(&[-2.0, 3.0, 1.0]).unwrap(), -34.0);
}

#[test]
fn recipe_keeps_validation_flag() {
    let h = sample();
    let back: HornerPoly = serde_json::from_str(&serde_json::to_string(&h).unwrap()).unwrap();
    assert!(back.eval(&[-2.0, 3.0]).is_err());
}

#[test]
fn operation_count_is_not_stored() {
    let json = serde_json::to_value(sample()).unwrap();
    assert!(json.get("ops").is_none());
    assert!(json.get("tree").is_some());
}

#[test]
fn unknown_node_kind_fails() {
    let result: Result<FactorTree, _> = serde_json::from_str(r#"[{"Branch":{}}]"#);
    assert!(result.is_err());
}

#[test]
fn malformed_tree_fails() {
    // The root refers to itself instead of an earlier node.
    let json = r#"[{"Factor":{"variable":0,"power":1,"factored":0,"rest":null}}]"#;
    let err = serde_json::from_str::<FactorTree>(json).unwrap_err();
    assert!(err.to_string().contains("child does not precede its parent"));

    assert!(serde_json::from_str::<FactorTree>("[]").is_err());
}

#[test]
fn recipe_with_too_small_dimension_fails() {
    let mut json = serde_json::to_value(sample()).unwrap();
    json["dim"] = serde_json::json!(2);
    let err = serde_json::from_value::<HornerPoly>(json).unwrap_err();
    assert!(err.to_string().contains("variable 2 is out of range for dimension 2"));
}
