//! Monomial representation
//!
//! A monomial is a product of indeterminates `x_0^e0 * x_1^e1 * ...` stored
//! as its exponent vector. The vector is dynamic-arity and canonical:
//! trailing zeros are stripped by every constructor and mutating operation,
//! so the empty vector is the constant monomial `1` and equality is
//! structural.

mod ordering;

pub use ordering::MonomialOrder;

use crate::error::{AlgebraError, AlgebraResult};
use std::fmt;

/// Exponent of a single indeterminate
pub type Exponent = u32;

/// Product of indeterminates with non-negative integer exponents
///
/// # Examples
///
/// ```rust
/// use groebner_core::monomial::Monomial;
///
/// let m = Monomial::new(vec![2, 0, 1]);
/// assert_eq!(m.to_string(), "x_0^2*x_2");
/// assert_eq!(m.degree(1), 0);
/// assert_eq!(m.degree(7), 0);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct Monomial {
    exponents: Vec<Exponent>,
}

impl Monomial {
    /// Create a monomial from an exponent vector
    ///
    /// Trailing zeros are stripped so the stored vector is canonical.
    pub fn new(mut exponents: Vec<Exponent>) -> Self {
        while exponents.last() == Some(&0) {
            exponents.pop();
        }
        Self { exponents }
    }

    /// The constant monomial `1`
    pub fn one() -> Self {
        Self::default()
    }

    /// The monomial `x_index^degree`
    pub fn variable(index: usize, degree: Exponent) -> Self {
        if degree == 0 {
            return Self::one();
        }
        let mut exponents = vec![0; index + 1];
        exponents[index] = degree;
        Self { exponents }
    }

    /// Whether this is the constant monomial `1`
    pub fn is_one(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Length of the canonical exponent vector
    ///
    /// One past the highest variable index with a non-zero exponent, or 0
    /// for the constant monomial.
    pub fn len(&self) -> usize {
        self.exponents.len()
    }

    /// Whether the exponent vector is empty
    pub fn is_empty(&self) -> bool {
        self.exponents.is_empty()
    }

    /// Exponent of the variable with the given index
    ///
    /// Returns 0 for every index past the end of the canonical vector.
    pub fn degree(&self, index: usize) -> Exponent {
        self.exponents.get(index).copied().unwrap_or(0)
    }

    /// Sum of all exponents
    pub fn total_degree(&self) -> u64 {
        self.exponents.iter().map(|&e| u64::from(e)).sum()
    }

    /// Multiply two monomials (componentwise exponent addition)
    pub fn mul(&self, other: &Self) -> Self {
        let len = self.len().max(other.len());
        let mut exponents = Vec::with_capacity(len);
        for i in 0..len {
            exponents.push(self.degree(i) + other.degree(i));
        }
        // Exponents only grow, so the result is canonical already.
        Self { exponents }
    }

    /// Exact division (componentwise exponent subtraction)
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::NotDivisible` unless `other` divides `self`
    /// componentwise.
    pub fn div_exact(&self, other: &Self) -> AlgebraResult<Self> {
        if !self.is_divisible_by(other) {
            return Err(AlgebraError::NotDivisible);
        }
        let mut exponents = Vec::with_capacity(self.len());
        for i in 0..self.len() {
            exponents.push(self.degree(i) - other.degree(i));
        }
        Ok(Self::new(exponents))
    }

    /// Whether `other` divides `self`
    ///
    /// True iff every exponent of `other` is at most the corresponding
    /// exponent of `self`, missing exponents counting as 0.
    pub fn is_divisible_by(&self, other: &Self) -> bool {
        if other.len() > self.len() {
            return false;
        }
        self.exponents
            .iter()
            .zip(&other.exponents)
            .all(|(a, b)| a >= b)
    }

    /// Componentwise minimum (the gcd of the two monomials)
    pub fn meet(&self, other: &Self) -> Self {
        let len = self.len().min(other.len());
        let mut exponents = Vec::with_capacity(len);
        for i in 0..len {
            exponents.push(self.degree(i).min(other.degree(i)));
        }
        Self::new(exponents)
    }
}

impl fmt::Display for Monomial {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        if self.is_one() {
            return write!(f, "1");
        }
        let mut separate = false;
        for (i, &e) in self.exponents.iter().enumerate() {
            if e == 0 {
                continue;
            }
            if separate {
                write!(f, "*")?;
            }
            separate = true;
            write!(f, "x_{}", i)?;
            if e > 1 {
                write!(f, "^{}", e)?;
            }
        }
        Ok(())
    }
}
