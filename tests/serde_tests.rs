//! Serde serialization/deserialization tests
//!
//! Run with: cargo test --features serde --test serde_tests

#![cfg(feature = "serde")]

use sparsepoly::{Poly, Term};

#[test]
fn term_roundtrip() {
    let t = Term::new(3, -2.5);
    let json = serde_json::to_string(&t).unwrap();
    assert_eq!(json, "[3,-2.5]");
    let u: Term = serde_json::from_str(&json).unwrap();
    assert_eq!(t, u);
}

#[test]
fn poly_roundtrip() {
    // 6 + 5x^3
    let p = Poly::new(vec![6.0, 0.0, 0.0, 5.0]);
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[[0,6.0],[3,5.0]]");
    let q: Poly = serde_json::from_str(&json).unwrap();
    assert_eq!(p, q);
}

#[test]
fn poly_zero_roundtrip() {
    let p = Poly::zero();
    let json = serde_json::to_string(&p).unwrap();
    assert_eq!(json, "[[0,0.0]]");
    let q: Poly = serde_json::from_str(&json).unwrap();
    assert!(q.is_zero());
}

#[test]
fn empty_sequence_is_zero() {
    let q: Poly = serde_json::from_str("[]").unwrap();
    assert_eq!(q, Poly::zero());
}

#[test]
fn deserialize_canonicalizes() {
    // Unsorted, duplicated and zero terms are normalized on the way in
    let q: Poly = serde_json::from_str("[[4,1],[0,2],[4,-3],[2,0]]").unwrap();
    assert_eq!(q, Poly::from_terms([(0, 2.0), (4, -2.0)]));
}

#[test]
fn deserialize_rejects_negative_exponent() {
    let result: Result<Poly, _> = serde_json::from_str("[[-1,2.0]]");
    assert!(result.is_err());
}

#[test]
fn deserialize_rejects_wrong_shape() {
    let result: Result<Poly, _> = serde_json::from_str("[[1,2.0,3.0]]");
    assert!(result.is_err());
}
