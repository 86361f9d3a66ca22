//! Gröbner basis walkthrough over the prime field Z_19

use groebner::prelude::*;

fn main() {
    let f1 = Polynomial::from_terms(vec![
        (Monomial::new(vec![2]), Modular::<19>::from_integer(1)),
        (Monomial::new(vec![0, 1]), Modular::<19>::from_integer(18)),
    ]);
    let f2 = Polynomial::from_terms(vec![
        (Monomial::new(vec![2]), Modular::<19>::from_integer(1)),
        (Monomial::new(vec![0, 0, 1]), Modular::<19>::from_integer(18)),
    ]);

    let mut ideal = Ideal::from_polynomials(vec![f1.clone(), f2.clone()]).expect("non-zero inputs");
    println!("{}", ideal);
    ideal.make_groebner().expect("completion on valid generators");
    println!("{}", ideal);
    ideal.canonicalize().expect("canonicalization on valid generators");
    println!("{}", ideal);

    // Reduce a combination of the generators plus 1: the remainder is 1
    let one = Polynomial::constant(Modular::<19>::from_integer(1));
    let mut probe = f1
        .mul_monomial(&Monomial::new(vec![1, 2, 3]))
        .add(&f2.mul(&f2).scalar_mul(&Modular::<19>::from_integer(5)))
        .add(&one);
    ideal.reduce(&mut probe).expect("reduction on valid generators");
    println!("{}", probe.to_string_with_order(&ideal.order()));
}
