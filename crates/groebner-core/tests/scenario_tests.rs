//! End-to-end scenarios over the rationals and a prime field
//!
//! Lexicographic order with x_0 > x_1 > x_2 throughout. Canonical bases
//! print sorted ascending by leading monomial.

use groebner_core::prelude::*;

fn system(sources: &[&str]) -> Vec<Polynomial<Rational>> {
    sources
        .iter()
        .map(|s| parse_polynomial(s).unwrap())
        .collect()
}

fn ideal_of(sources: &[&str]) -> Ideal<Rational> {
    Ideal::from_polynomials(system(sources)).unwrap()
}

fn cyclic_3() -> Vec<&'static str> {
    vec!["x_0+x_1+x_2", "x_0*x_1+x_1*x_2+x_2*x_0", "x_0*x_1*x_2-1"]
}

#[test]
fn cyclic_3_has_finitely_many_solutions() {
    let polynomials = system(&cyclic_3());
    assert!(solutions_exist(&polynomials).unwrap());
    assert!(solutions_finite(&polynomials, 3).unwrap());
    assert!(solutions_finite(&polynomials, 0).unwrap());
}

#[test]
fn cyclic_3_canonical_basis() {
    let mut ideal = ideal_of(&cyclic_3());
    ideal.canonicalize().unwrap();
    assert_eq!(
        ideal.to_string(),
        "{x_2^3+-1, x_1^2+x_1*x_2+x_2^2, x_0+x_1+x_2}"
    );
}

#[test]
fn inconsistent_system_collapses_to_one() {
    let mut ideal = ideal_of(&["x_0-1", "x_0-2"]);
    ideal.canonicalize().unwrap();
    assert_eq!(ideal.to_string(), "{1}");
    assert!(!solutions_exist(&system(&["x_0-1", "x_0-2"])).unwrap());
}

#[test]
fn radical_membership_by_rabinowitsch() {
    let ideal = ideal_of(&["x_0^2"]);
    assert!(radical_contains(&parse_polynomial("x_0").unwrap(), &ideal).unwrap());
    assert!(!radical_contains(&parse_polynomial("x_1").unwrap(), &ideal).unwrap());
}

#[test]
fn equivalent_systems_cut_the_same_variety() {
    let first = system(&[
        "x_0*x_1-x_2^2-x_2",
        "x_0*x_2-x_1^2-x_1",
        "x_1*x_2-x_0^2-x_0",
    ]);
    let second = system(&[
        "x_0*x_1-x_2^2-x_2",
        "x_1*x_2-x_0^2-x_0",
        "x_0*x_2+x_1*x_2+x_2^2+x_2",
        "x_1^2+x_1+x_1*x_2+x_2^2+x_2",
    ]);
    assert!(systems_equivalent(&first, &second).unwrap());
    assert!(!systems_equivalent(&first, &system(&["x_0-1"])).unwrap());
}

#[test]
fn cyclic_3_contains_cube_roots_of_unity() {
    let mut ideal = ideal_of(&cyclic_3());
    assert!(ideal
        .contains(&parse_polynomial("x_0^3-1").unwrap())
        .unwrap());
    assert!(!ideal.contains(&parse_polynomial("x_0-1").unwrap()).unwrap());
}

#[test]
fn prime_field_parity() {
    let f1 = parse_polynomial::<Modular<19>>("x_0^2-x_1").unwrap();
    let f2 = parse_polynomial::<Modular<19>>("x_0^2-x_2").unwrap();
    let mut ideal = Ideal::from_polynomials(vec![f1, f2]).unwrap();
    ideal.canonicalize().unwrap();
    // -1 is 18 modulo 19; the tail x_1 of the first input rewrites to x_2
    // during autoreduction
    assert_eq!(
        ideal.to_string(),
        "{x_1+[18 (modulo 19)]*x_2, x_0^2+[18 (modulo 19)]*x_2}"
    );
}

#[test]
fn stream_protocol_shape() {
    // The driver protocol: a count followed by that many polynomials
    let input = "3\nx_0+x_1+x_2 x_0*x_1+x_1*x_2+x_2*x_0 x_0*x_1*x_2-1";
    let mut tokens = input.split_whitespace();
    let count: usize = tokens.next().unwrap().parse().unwrap();
    let mut ideal: Ideal<Rational> = Ideal::new();
    for _ in 0..count {
        ideal
            .add(parse_polynomial(tokens.next().unwrap()).unwrap())
            .unwrap();
    }
    ideal.canonicalize().unwrap();
    assert_eq!(
        ideal.to_string(),
        "{x_2^3+-1, x_1^2+x_1*x_2+x_2^2, x_0+x_1+x_2}"
    );
}
