//! Field abstraction for polynomial coefficients
//!
//! A field is a capability (a set of exact arithmetic operations), not a
//! hierarchy: any value type with total `+`, `-`, `*` and a checked `/`
//! can carry polynomial coefficients. Two instances are provided:
//!
//! - [`Rational`]: arbitrary-precision exact rationals
//! - [`Modular<P>`]: the prime field of integers modulo a small prime `P`

mod modular;
mod rational;

pub use modular::Modular;
pub use rational::Rational;

use crate::error::AlgebraResult;
use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

/// Exact field arithmetic for polynomial coefficients
///
/// All operations are total except [`Field::div`], which fails with
/// [`AlgebraError::DivisionByZero`](crate::AlgebraError::DivisionByZero)
/// when the divisor is zero. Equality is an equivalence over the abstract
/// value, not the representation.
pub trait Field:
    Clone
    + PartialEq
    + fmt::Debug
    + fmt::Display
    + Add<Output = Self>
    + Sub<Output = Self>
    + Mul<Output = Self>
    + Neg<Output = Self>
{
    /// The additive identity
    fn zero() -> Self;

    /// The multiplicative identity
    fn one() -> Self;

    /// Whether this element is the additive identity
    fn is_zero(&self) -> bool;

    /// Whether this element is the multiplicative identity
    fn is_one(&self) -> bool;

    /// Embed a small signed integer into the field
    ///
    /// Negative values map to their canonical representative, e.g. `-1`
    /// becomes `p - 1` in a prime field.
    fn from_integer(value: i64) -> Self;

    /// Exact division
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DivisionByZero` when `other` is zero.
    fn div(&self, other: &Self) -> AlgebraResult<Self>;
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_laws<F: Field>(a: F, b: F, c: F) {
        assert_eq!(a.clone() + b.clone(), b.clone() + a.clone());
        assert_eq!(
            (a.clone() + b.clone()) + c.clone(),
            a.clone() + (b.clone() + c.clone())
        );
        assert_eq!(
            a.clone() * (b.clone() + c.clone()),
            a.clone() * b.clone() + a.clone() * c.clone()
        );
        assert_eq!(a.clone() + (-a.clone()), F::zero());
        if !a.is_zero() {
            let inv = F::one().div(&a).unwrap();
            assert!((a.clone() * inv).is_one());
        }
    }

    #[test]
    fn test_rational_laws() {
        field_laws(
            Rational::from_integer(3),
            Rational::from_integer(-7),
            Rational::from_integer(2).div(&Rational::from_integer(5)).unwrap(),
        );
    }

    #[test]
    fn test_modular_laws() {
        field_laws(
            Modular::<19>::from_integer(3),
            Modular::<19>::from_integer(-7),
            Modular::<19>::from_integer(11),
        );
    }
}
