//! Gröbner bases for polynomial ideals over exact fields
//!
//! This crate re-exports the [`groebner_core`] engine: Buchberger
//! completion with minimization and autoreduction, the canonical reduced
//! basis, and the decision procedures built on top (consistency of a
//! polynomial system, finiteness of its variety, radical membership,
//! system equivalence).
//!
//! # Quick Start
//!
//! ```rust
//! use groebner::prelude::*;
//!
//! let mut ideal: Ideal<Rational> = Ideal::new();
//! ideal.add(parse_polynomial("x_0-1").unwrap()).unwrap();
//! ideal.add(parse_polynomial("x_0-2").unwrap()).unwrap();
//! ideal.canonicalize().unwrap();
//! assert_eq!(ideal.to_string(), "{1}");
//! ```

pub use groebner_core as core;

pub use groebner_core::{
    parse_monomial, parse_polynomial, radical_contains, solutions_exist, solutions_finite,
    system_in_radical, systems_equivalent, AlgebraError, AlgebraResult, BasisState, Field, Ideal,
    Modular, Monomial, MonomialOrder, ParseError, Polynomial, Rational,
};

pub use num_bigint;
pub use num_rational;

/// Convenience prelude for common imports
///
/// # Examples
///
/// ```rust
/// use groebner::prelude::*;
///
/// let p: Polynomial<Rational> = parse_polynomial("x_0^2-x_1").unwrap();
/// assert!(!p.is_zero());
/// ```
pub mod prelude {
    pub use groebner_core::prelude::*;
}
