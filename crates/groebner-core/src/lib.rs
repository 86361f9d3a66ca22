//! Core engine for Gröbner bases of polynomial ideals
//!
//! This crate computes Gröbner bases of multivariate polynomial ideals
//! over exact fields with Buchberger's algorithm, and answers decision
//! questions about the corresponding systems of polynomial equations:
//! consistency, finiteness of the variety, radical membership and system
//! equivalence.
//!
//! # Architecture
//!
//! - [`field`]: exact coefficient arithmetic — arbitrary-precision
//!   rationals and prime fields
//! - [`monomial`]: dynamic-arity exponent vectors with pluggable monomial
//!   orders (lexicographic by default)
//! - [`polynomial`]: sparse polynomials with reduction by leading term
//! - [`ideal`]: the Buchberger core — completion, minimization,
//!   autoreduction and the canonical reduced basis
//! - [`decision`]: ideal-theoretic decision procedures on top
//! - [`parser`]: the textual polynomial form
//!
//! The whole crate is single-threaded and synchronous; no operation
//! blocks, suspends or touches global state.
//!
//! # Quick Start
//!
//! ```rust
//! use groebner_core::prelude::*;
//!
//! let mut ideal: Ideal<Rational> = Ideal::new();
//! ideal.add(parse_polynomial("x_0-x_1").unwrap()).unwrap();
//! ideal.add(parse_polynomial("x_1^2-1").unwrap()).unwrap();
//! ideal.canonicalize().unwrap();
//! assert_eq!(ideal.to_string(), "{x_1^2+-1, x_0+-1*x_1}");
//! assert!(ideal.contains(&parse_polynomial("x_0^2-1").unwrap()).unwrap());
//! ```

pub mod decision;
pub mod error;
pub mod field;
pub mod ideal;
pub mod monomial;
pub mod parser;
pub mod polynomial;

pub use decision::{
    radical_contains, solutions_exist, solutions_finite, system_in_radical, systems_equivalent,
};
pub use error::{AlgebraError, AlgebraResult};
pub use field::{Field, Modular, Rational};
pub use ideal::{BasisState, Ideal};
pub use monomial::{Monomial, MonomialOrder};
pub use parser::{parse_monomial, parse_polynomial, ParseError};
pub use polynomial::Polynomial;

/// Convenience prelude for common imports
pub mod prelude {
    pub use crate::decision::{
        radical_contains, solutions_exist, solutions_finite, system_in_radical,
        systems_equivalent,
    };
    pub use crate::error::{AlgebraError, AlgebraResult};
    pub use crate::field::{Field, Modular, Rational};
    pub use crate::ideal::{BasisState, Ideal};
    pub use crate::monomial::{Monomial, MonomialOrder};
    pub use crate::parser::{parse_monomial, parse_polynomial, ParseError};
    pub use crate::polynomial::Polynomial;
}
