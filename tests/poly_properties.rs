use proptest::prelude::*;

use sparsepoly::{Poly, Term};

// Small integer coefficients keep every sum and product exact in f64, so
// algebraic laws can be checked with exact equality.
fn arb_int_coeff() -> impl Strategy<Value = f64> {
    (-20i32..=20).prop_map(f64::from)
}

fn arb_poly() -> impl Strategy<Value = Poly> {
    proptest::collection::vec((0u32..12, arb_int_coeff()), 0..8).prop_map(Poly::from_terms)
}

fn arb_dense() -> impl Strategy<Value = Vec<f64>> {
    proptest::collection::vec(arb_int_coeff(), 0..10)
}

fn arb_real_poly() -> impl Strategy<Value = Poly> {
    proptest::collection::vec((0u32..40, -1.0e6f64..1.0e6), 0..8).prop_map(Poly::from_terms)
}

fn assert_canonical(p: &Poly) -> Result<(), TestCaseError> {
    let terms: &[Term] = p.terms();
    prop_assert!(!terms.is_empty());
    if p.is_zero() {
        prop_assert_eq!(terms, &[Term::new(0, 0.0)][..]);
    } else {
        prop_assert!(terms.iter().all(|t| t.coefficient != 0.0));
        prop_assert!(terms.windows(2).all(|w| w[0].exponent < w[1].exponent));
    }
    Ok(())
}

const SAMPLE_POINTS: [f64; 6] = [-2.0, -1.0, -0.5, 0.0, 1.0, 2.0];

// ===== Invariant preservation =====

proptest! {
    #[test]
    fn dense_construction_is_canonical(coeffs in arb_dense()) {
        assert_canonical(&Poly::new(coeffs))?;
    }
}

proptest! {
    #[test]
    fn arithmetic_results_are_canonical(a in arb_poly(), b in arb_poly()) {
        assert_canonical(&(&a + &b))?;
        assert_canonical(&(&a * &b))?;
        assert_canonical(&(&a - &b))?;
        assert_canonical(&a.derivative())?;
    }
}

proptest! {
    #[test]
    fn parse_result_is_canonical(a in arb_poly(), b in arb_poly()) {
        // Concatenating two encodings gives unsorted input with duplicates
        let mut text = a.to_string();
        let tail = b.to_string();
        if !tail.starts_with('-') {
            text.push('+');
        }
        text.push_str(&tail);
        let parsed: Poly = text.parse().unwrap();
        assert_canonical(&parsed)?;
        prop_assert_eq!(parsed, &a + &b);
    }
}

// ===== Addition =====

proptest! {
    #[test]
    fn additive_identity(a in arb_poly()) {
        prop_assert_eq!(&a + &Poly::zero(), a.clone());
        prop_assert_eq!(&Poly::zero() + &a, a);
    }
}

proptest! {
    #[test]
    fn addition_commutative(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(&a + &b, &b + &a);
    }
}

proptest! {
    #[test]
    fn addition_associative(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert_eq!(&(&a + &b) + &c, &a + &(&b + &c));
    }
}

proptest! {
    #[test]
    fn additive_inverse(a in arb_poly()) {
        prop_assert!((&a + &(-&a)).is_zero());
        prop_assert!((&a - &a).is_zero());
    }
}

// ===== Multiplication =====

proptest! {
    #[test]
    fn multiplicative_identity(a in arb_poly()) {
        prop_assert_eq!(&a * &Poly::one(), a.clone());
        prop_assert_eq!(&Poly::one() * &a, a);
    }
}

proptest! {
    #[test]
    fn multiplicative_zero(a in arb_poly()) {
        prop_assert!((&a * &Poly::zero()).is_zero());
        prop_assert!((&Poly::zero() * &a).is_zero());
    }
}

proptest! {
    #[test]
    fn multiplication_commutative(a in arb_poly(), b in arb_poly()) {
        prop_assert_eq!(&a * &b, &b * &a);
    }
}

proptest! {
    #[test]
    fn multiplication_degree_sum(a in arb_poly(), b in arb_poly()) {
        let product = &a * &b;
        match (a.degree(), b.degree()) {
            (Some(da), Some(db)) => prop_assert_eq!(product.degree(), Some(da + db)),
            _ => prop_assert!(product.is_zero()),
        }
    }
}

// ===== Distributivity =====

proptest! {
    #[test]
    fn left_distributive(a in arb_poly(), b in arb_poly(), c in arb_poly()) {
        prop_assert_eq!(&a * &(&b + &c), &(&a * &b) + &(&a * &c));
    }
}

// ===== Evaluation =====

proptest! {
    #[test]
    fn eval_is_a_homomorphism(a in arb_poly(), b in arb_poly()) {
        for x in SAMPLE_POINTS {
            prop_assert_eq!((&a + &b).eval(x), a.eval(x) + b.eval(x));
            prop_assert_eq!((&a * &b).eval(x), a.eval(x) * b.eval(x));
        }
    }
}

proptest! {
    #[test]
    fn dense_eval_matches_power_sum(coeffs in arb_dense(), x in -3i32..=3) {
        let x = f64::from(x);
        let p = Poly::from_dense(&coeffs);
        let expected: f64 = coeffs
            .iter()
            .enumerate()
            .map(|(i, c)| c * x.powi(i as i32))
            .sum();
        prop_assert_eq!(p.eval(x), expected);
    }
}

// ===== Text round-trip =====

proptest! {
    #[test]
    fn dense_round_trip(coeffs in arb_dense()) {
        let p = Poly::new(coeffs);
        let q: Poly = p.to_string().parse().unwrap();
        for x in [0.0, 1.0, -1.0, 2.5] {
            prop_assert_eq!(q.eval(x), p.eval(x));
        }
        prop_assert_eq!(q, p);
    }
}

proptest! {
    #[test]
    fn real_coefficient_round_trip(p in arb_real_poly()) {
        let q: Poly = sparsepoly::parse(&sparsepoly::format(&p)).unwrap();
        prop_assert_eq!(q, p);
    }
}

proptest! {
    #[test]
    fn dense_round_trip_through_to_dense(a in arb_poly()) {
        prop_assert_eq!(Poly::new(a.to_dense()), a);
    }
}
