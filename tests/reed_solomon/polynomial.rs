//! Polynomial Tests
//!
//! Tests for the immutable GF(256) polynomial used by the decoder.

use rsdecode::{Gf256, Polynomial};

#[test]
fn test_codeword_polynomial_order() {
    // Index 0 of the codeword is the highest-degree coefficient
    let p = Polynomial::from_bytes(&[7, 0, 3]);
    assert_eq!(p.degree(), 2);
    assert_eq!(p.coefficient(2), Gf256::new(7));
    assert_eq!(p.coefficient(0), Gf256::new(3));
}

#[test]
fn test_operations_do_not_mutate_operands() {
    let a = Polynomial::from_bytes(&[1, 2, 3]);
    let b = Polynomial::from_bytes(&[4, 5]);
    let a_before = a.clone();
    let b_before = b.clone();

    let _ = a.add(&b);
    let _ = a.multiply(&b);
    let _ = a.scale(Gf256::new(9));
    let _ = a.multiply_by_monomial(3, Gf256::new(2));
    let _ = a.div_rem(&b).unwrap();

    assert_eq!(a, a_before);
    assert_eq!(b, b_before);
}

#[test]
fn test_evaluate_matches_term_sum() {
    let p = Polynomial::from_bytes(&[17, 0, 200, 3, 99]);
    for x in [2u8, 3, 100, 255] {
        let x = Gf256::new(x);
        let expected: Gf256 = (0..=p.degree())
            .map(|d| p.coefficient(d) * std::iter::repeat(x).take(d).product::<Gf256>())
            .sum();
        assert_eq!(p.evaluate(x), expected);
    }
}

#[test]
fn test_root_of_linear_factor() {
    // (x + α^5) vanishes at α^5
    let root = Gf256::exp(5);
    let p = Polynomial::new(vec![Gf256::ONE, root]);
    assert!(p.evaluate(root).is_zero());
}

#[test]
fn test_div_rem_exact_division() {
    let a = Polynomial::from_bytes(&[3, 1, 4]);
    let b = Polynomial::from_bytes(&[1, 5, 9, 2]);
    let product = a.multiply(&b);

    let (q, r) = product.div_rem(&b).unwrap();
    assert_eq!(q, a);
    assert!(r.is_zero());
}
