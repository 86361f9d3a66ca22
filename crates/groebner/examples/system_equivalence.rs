//! Decide whether two polynomial systems cut the same variety

use groebner::prelude::*;

fn main() {
    let first: Vec<Polynomial<Rational>> = [
        "x_0*x_1-x_2^2-x_2",
        "x_0*x_2-x_1^2-x_1",
        "x_1*x_2-x_0^2-x_0",
    ]
    .iter()
    .map(|s| parse_polynomial(s).expect("well-formed polynomial"))
    .collect();
    let second: Vec<Polynomial<Rational>> = [
        "x_0*x_1-x_2^2-x_2",
        "x_1*x_2-x_0^2-x_0",
        "x_0*x_2+x_1*x_2+x_2^2+x_2",
        "x_1^2+x_1+x_1*x_2+x_2^2+x_2",
    ]
    .iter()
    .map(|s| parse_polynomial(s).expect("well-formed polynomial"))
    .collect();

    let equivalent = systems_equivalent(&first, &second).expect("valid systems");
    println!("{}", equivalent);
}
