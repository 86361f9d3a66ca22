//! Prime-field arithmetic
//!
//! `Modular<P>` is the field of integers modulo a small prime `P`. Every
//! element is stored as its canonical representative in `[0, P)`.
//! Division multiplies by the Fermat inverse `b^(P-2)`, computed with
//! binary exponentiation, so all operations stay in `u64`/`u128`
//! arithmetic.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};

use super::Field;
use crate::error::{AlgebraError, AlgebraResult};

/// Element of the prime field of integers modulo `P`
///
/// `P` must be prime; the inverse computation relies on Fermat's little
/// theorem.
///
/// # Examples
///
/// ```rust
/// use groebner_core::field::{Field, Modular};
///
/// let a = Modular::<19>::new(7).unwrap();
/// let b = Modular::<19>::new(15).unwrap();
/// assert_eq!(a + b, Modular::<19>::new(3).unwrap());
/// assert_eq!((a.div(&b).unwrap() * b), a);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Modular<const P: u64> {
    value: u64,
}

impl<const P: u64> Modular<P> {
    /// Create an element from its canonical representative
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::OutOfRange` when `value >= P`. Use
    /// [`Field::from_integer`] to reduce arbitrary integers instead.
    pub fn new(value: u64) -> AlgebraResult<Self> {
        if value >= P {
            return Err(AlgebraError::OutOfRange { value, limit: P });
        }
        Ok(Self { value })
    }

    /// The canonical representative in `[0, P)`
    pub fn value(&self) -> u64 {
        self.value
    }

    /// The multiplicative inverse by Fermat's little theorem
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DivisionByZero` for the zero element.
    pub fn inverse(&self) -> AlgebraResult<Self> {
        if self.value == 0 {
            return Err(AlgebraError::DivisionByZero);
        }
        let mut result = Self { value: 1 };
        let mut power = *self;
        let mut degree = P - 2;
        while degree > 0 {
            if degree & 1 == 1 {
                result = result * power;
            }
            power = power * power;
            degree >>= 1;
        }
        Ok(result)
    }
}

impl<const P: u64> Add for Modular<P> {
    type Output = Self;

    fn add(self, other: Self) -> Self {
        Self {
            value: (self.value + other.value) % P,
        }
    }
}

impl<const P: u64> Sub for Modular<P> {
    type Output = Self;

    fn sub(self, other: Self) -> Self {
        Self {
            value: (self.value + P - other.value) % P,
        }
    }
}

impl<const P: u64> Mul for Modular<P> {
    type Output = Self;

    fn mul(self, other: Self) -> Self {
        Self {
            value: (u128::from(self.value) * u128::from(other.value) % u128::from(P)) as u64,
        }
    }
}

impl<const P: u64> Neg for Modular<P> {
    type Output = Self;

    fn neg(self) -> Self {
        Self {
            value: if self.value == 0 { 0 } else { P - self.value },
        }
    }
}

impl<const P: u64> fmt::Display for Modular<P> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "[{} (modulo {})]", self.value, P)
    }
}

impl<const P: u64> Field for Modular<P> {
    fn zero() -> Self {
        Self { value: 0 }
    }

    fn one() -> Self {
        Self { value: 1 % P }
    }

    fn is_zero(&self) -> bool {
        self.value == 0
    }

    fn is_one(&self) -> bool {
        self.value == 1 % P
    }

    fn from_integer(value: i64) -> Self {
        Self {
            value: (i128::from(value).rem_euclid(i128::from(P))) as u64,
        }
    }

    fn div(&self, other: &Self) -> AlgebraResult<Self> {
        Ok(*self * other.inverse()?)
    }
}
