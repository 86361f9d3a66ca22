//! Exact rational coefficients
//!
//! [`Rational`] wraps `num_rational::BigRational`; the bignum engine keeps
//! every value in reduced form, so equality on the representation is
//! equality of the abstract value.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Zero};

use super::Field;
use crate::error::{AlgebraError, AlgebraResult};

/// Arbitrary-precision exact rational number
///
/// # Examples
///
/// ```rust
/// use groebner_core::field::{Field, Rational};
///
/// let a = Rational::new(3, 5).unwrap();
/// let b = Rational::new(2, 5).unwrap();
/// assert!((a + b).is_one());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rational(BigRational);

impl Rational {
    /// The fraction `numerator / denominator`, reduced
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DivisionByZero` when `denominator` is zero.
    pub fn new(numerator: i64, denominator: i64) -> AlgebraResult<Self> {
        if denominator == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self(BigRational::new(
            BigInt::from(numerator),
            BigInt::from(denominator),
        )))
    }

    /// Borrow the underlying reduced big rational
    pub fn as_ratio(&self) -> &BigRational {
        &self.0
    }
}

impl From<BigRational> for Rational {
    fn from(value: BigRational) -> Self {
        Self(value)
    }
}

impl From<Rational> for BigRational {
    fn from(value: Rational) -> Self {
        value.0
    }
}

impl Add for Rational {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self(self.0 + other.0)
    }
}

impl Sub for Rational {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self(self.0 - other.0)
    }
}

impl Mul for Rational {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self(self.0 * other.0)
    }
}

impl Neg for Rational {
    type Output = Self;

    fn neg(self) -> Self {
        Self(-self.0)
    }
}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Field for Rational {
    fn zero() -> Self {
        Self(Zero::zero())
    }

    fn one() -> Self {
        Self(One::one())
    }

    fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    fn is_one(&self) -> bool {
        self.0.is_one()
    }

    fn from_integer(value: i64) -> Self {
        Self(BigRational::from_integer(BigInt::from(value)))
    }

    fn div(&self, other: &Self) -> AlgebraResult<Self> {
        if other.0.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        Ok(Self(&self.0 / &other.0))
    }
}
