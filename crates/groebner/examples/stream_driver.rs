//! Stream protocol driver
//!
//! Reads a count `n` followed by `n` whitespace-separated polynomials
//! from stdin, builds the ideal, and prints its canonical reduced
//! Gröbner basis. Malformed input is reported on stderr with a non-zero
//! exit code.
//!
//! ```text
//! echo '2 x_0-1 x_0-2' | cargo run --example stream_driver
//! ```

use groebner::prelude::*;
use std::io::Read;

fn main() {
    let mut input = String::new();
    std::io::stdin()
        .read_to_string(&mut input)
        .expect("failed to read stdin");
    let mut tokens = input.split_whitespace();
    let count: usize = tokens
        .next()
        .and_then(|t| t.parse().ok())
        .unwrap_or_else(|| {
            eprintln!("expected a polynomial count");
            std::process::exit(1)
        });
    let mut ideal: Ideal<Rational> = Ideal::new();
    for _ in 0..count {
        let Some(token) = tokens.next() else {
            eprintln!("expected {} polynomials", count);
            std::process::exit(1);
        };
        match parse_polynomial(token) {
            Ok(polynomial) => ideal.add(polynomial).expect("non-zero leading coefficient"),
            Err(error) => {
                eprintln!("{}", error);
                std::process::exit(1);
            }
        }
    }
    ideal.canonicalize().expect("canonicalization on valid generators");
    println!("{}", ideal);
}
