//! Sparse multivariate polynomials
//!
//! A polynomial is a finite formal sum of `(monomial, coefficient)` pairs
//! over a [`Field`], stored as a hash map from monomial to non-zero
//! coefficient. Every operation deletes entries whose coefficient becomes
//! zero, so the empty map is the zero polynomial and equality is equality
//! of the maps.
//!
//! Operations that depend on the term order (leading term, reduction,
//! printing) take the [`MonomialOrder`] as an argument.

use std::collections::HashMap;
use std::fmt;

use crate::error::{AlgebraError, AlgebraResult};
use crate::field::Field;
use crate::monomial::{Monomial, MonomialOrder};

/// Sparse polynomial over the field `F`
///
/// # Examples
///
/// ```rust
/// use groebner_core::field::Rational;
/// use groebner_core::monomial::{Monomial, MonomialOrder};
/// use groebner_core::polynomial::Polynomial;
/// use groebner_core::Field;
///
/// // x_0*x_1 - x_2^2
/// let p = Polynomial::from_terms(vec![
///     (Monomial::new(vec![1, 1]), Rational::from_integer(1)),
///     (Monomial::new(vec![0, 0, 2]), Rational::from_integer(-1)),
/// ]);
/// let order = MonomialOrder::Lex;
/// assert_eq!(p.leading_monomial(&order).unwrap(), &Monomial::new(vec![1, 1]));
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Polynomial<F: Field> {
    terms: HashMap<Monomial, F>,
}

impl<F: Field> Polynomial<F> {
    /// The zero polynomial
    pub fn zero() -> Self {
        Self { terms: HashMap::new() }
    }

    /// Polynomial with a single term
    ///
    /// A zero coefficient yields the zero polynomial.
    pub fn from_term(monomial: Monomial, coefficient: F) -> Self {
        let mut terms = HashMap::new();
        if !coefficient.is_zero() {
            terms.insert(monomial, coefficient);
        }
        Self { terms }
    }

    /// Constant polynomial
    pub fn constant(value: F) -> Self {
        Self::from_term(Monomial::one(), value)
    }

    /// Accumulate a polynomial from `(monomial, coefficient)` pairs
    ///
    /// Repeated monomials are summed; terms that cancel disappear.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (Monomial, F)>,
    {
        let mut result = Self::zero();
        for (monomial, coefficient) in terms {
            result.add_term(monomial, coefficient);
        }
        result
    }

    /// Whether this is the zero polynomial
    pub fn is_zero(&self) -> bool {
        self.terms.is_empty()
    }

    /// Whether this is a constant (zero or a single term with the
    /// constant monomial)
    pub fn is_constant(&self) -> bool {
        match self.terms.len() {
            0 => true,
            1 => self.terms.keys().next().map(Monomial::is_one) == Some(true),
            _ => false,
        }
    }

    /// Number of stored terms
    pub fn term_count(&self) -> usize {
        self.terms.len()
    }

    /// Number of variables spanned by the terms
    ///
    /// One past the highest variable index with a non-zero exponent in any
    /// term.
    pub fn num_variables(&self) -> usize {
        self.terms.keys().map(Monomial::len).max().unwrap_or(0)
    }

    /// Iterate over the terms in unspecified order
    pub fn terms(&self) -> impl Iterator<Item = (&Monomial, &F)> {
        self.terms.iter()
    }

    /// Add a single term in place
    pub fn add_term(&mut self, monomial: Monomial, coefficient: F) {
        if coefficient.is_zero() {
            return;
        }
        match self.terms.remove(&monomial) {
            Some(existing) => {
                let sum = existing + coefficient;
                if !sum.is_zero() {
                    self.terms.insert(monomial, sum);
                }
            }
            None => {
                self.terms.insert(monomial, coefficient);
            }
        }
    }

    /// Subtract a single term in place
    pub fn sub_term(&mut self, monomial: Monomial, coefficient: F) {
        self.add_term(monomial, -coefficient);
    }

    /// Add another polynomial in place
    pub fn add_assign(&mut self, other: &Self) {
        for (monomial, coefficient) in &other.terms {
            self.add_term(monomial.clone(), coefficient.clone());
        }
    }

    /// Subtract another polynomial in place
    pub fn sub_assign(&mut self, other: &Self) {
        for (monomial, coefficient) in &other.terms {
            self.sub_term(monomial.clone(), coefficient.clone());
        }
    }

    /// Sum of two polynomials
    pub fn add(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.add_assign(other);
        result
    }

    /// Difference of two polynomials
    pub fn sub(&self, other: &Self) -> Self {
        let mut result = self.clone();
        result.sub_assign(other);
        result
    }

    /// Additive inverse
    pub fn neg(&self) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), -c.clone()))
                .collect(),
        }
    }

    /// Product of two polynomials
    pub fn mul(&self, other: &Self) -> Self {
        let mut result = Self::zero();
        for (m1, c1) in &self.terms {
            for (m2, c2) in &other.terms {
                result.add_term(m1.mul(m2), c1.clone() * c2.clone());
            }
        }
        result
    }

    /// Multiply every coefficient by a field element
    pub fn scalar_mul(&self, scalar: &F) -> Self {
        if scalar.is_zero() {
            return Self::zero();
        }
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.clone(), c.clone() * scalar.clone()))
                .collect(),
        }
    }

    /// Divide every coefficient by a field element
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DivisionByZero` when `scalar` is zero.
    pub fn scalar_div(&self, scalar: &F) -> AlgebraResult<Self> {
        if scalar.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let mut terms = HashMap::with_capacity(self.terms.len());
        for (m, c) in &self.terms {
            terms.insert(m.clone(), c.div(scalar)?);
        }
        Ok(Self { terms })
    }

    /// Multiply every term by a monomial
    pub fn mul_monomial(&self, monomial: &Monomial) -> Self {
        Self {
            terms: self
                .terms
                .iter()
                .map(|(m, c)| (m.mul(monomial), c.clone()))
                .collect(),
        }
    }

    /// Partial quotient by a monomial
    ///
    /// Keeps only the terms divisible by `monomial`, each divided by it;
    /// the rest are dropped.
    pub fn div_monomial(&self, monomial: &Monomial) -> Self {
        let mut result = Self::zero();
        for (m, c) in &self.terms {
            if m.is_divisible_by(monomial) {
                // Divisibility was just checked, so the division is exact.
                if let Ok(quotient) = m.div_exact(monomial) {
                    result.add_term(quotient, c.clone());
                }
            }
        }
        result
    }

    /// The greatest monomial under the given order
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::LeadingTermOfZero` for the zero polynomial.
    pub fn leading_monomial(&self, order: &MonomialOrder) -> AlgebraResult<&Monomial> {
        self.terms
            .keys()
            .reduce(|a, b| order.max(a, b))
            .ok_or(AlgebraError::LeadingTermOfZero)
    }

    /// The coefficient of the leading monomial
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::LeadingTermOfZero` for the zero polynomial.
    pub fn leading_coefficient(&self, order: &MonomialOrder) -> AlgebraResult<&F> {
        let monomial = self.leading_monomial(order)?;
        Ok(&self.terms[monomial])
    }

    /// The leading term as a single-term polynomial
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::LeadingTermOfZero` for the zero polynomial.
    pub fn leading_term(&self, order: &MonomialOrder) -> AlgebraResult<Self> {
        let monomial = self.leading_monomial(order)?.clone();
        let coefficient = self.terms[&monomial].clone();
        Ok(Self::from_term(monomial, coefficient))
    }

    /// Leading-term reduction by a single polynomial
    ///
    /// While the leading monomial of `reducer` divides the leading
    /// monomial of `self`, subtracts the multiple of `reducer` that
    /// cancels the leading term. Stops as soon as the divisibility fails.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DivisionByZero` when `reducer` is zero.
    pub fn reduce_by(&mut self, reducer: &Self, order: &MonomialOrder) -> AlgebraResult<()> {
        if reducer.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let reducer_monomial = reducer.leading_monomial(order)?.clone();
        let reducer_coefficient = reducer.leading_coefficient(order)?.clone();
        while !self.is_zero() {
            let monomial = self.leading_monomial(order)?.clone();
            if !monomial.is_divisible_by(&reducer_monomial) {
                break;
            }
            let quotient = monomial.div_exact(&reducer_monomial)?;
            let coefficient = self
                .leading_coefficient(order)?
                .div(&reducer_coefficient)?;
            for (m, c) in &reducer.terms {
                self.sub_term(m.mul(&quotient), c.clone() * coefficient.clone());
            }
        }
        Ok(())
    }

    /// Full reduction by a single polynomial
    ///
    /// Like [`Polynomial::reduce_by`], but cancels every term divisible by
    /// the reducer's leading monomial, not only the leading one. Stops
    /// when no term of `self` is divisible.
    ///
    /// # Errors
    ///
    /// Returns `AlgebraError::DivisionByZero` when `reducer` is zero.
    pub fn full_reduce_by(&mut self, reducer: &Self, order: &MonomialOrder) -> AlgebraResult<()> {
        if reducer.is_zero() {
            return Err(AlgebraError::DivisionByZero);
        }
        let reducer_monomial = reducer.leading_monomial(order)?.clone();
        let reducer_coefficient = reducer.leading_coefficient(order)?.clone();
        while !self.is_zero() {
            let quotient = self.div_monomial(&reducer_monomial);
            if quotient.is_zero() {
                break;
            }
            let quotient = quotient.scalar_div(&reducer_coefficient)?;
            self.sub_assign(&reducer.mul(&quotient));
        }
        Ok(())
    }

    /// Render the polynomial with terms in decreasing monomial order
    ///
    /// Terms are separated by `+`; negative terms carry the sign in their
    /// coefficient. A unit coefficient is printed only for the constant
    /// monomial. The zero polynomial renders as `0`.
    pub fn to_string_with_order(&self, order: &MonomialOrder) -> String {
        if self.is_zero() {
            return "0".to_string();
        }
        let mut monomials: Vec<&Monomial> = self.terms.keys().collect();
        monomials.sort_by(|a, b| order.cmp(b, a));
        let mut out = String::new();
        for (i, monomial) in monomials.iter().enumerate() {
            if i > 0 {
                out.push('+');
            }
            let coefficient = &self.terms[*monomial];
            if monomial.is_one() {
                out.push_str(&coefficient.to_string());
            } else {
                if !coefficient.is_one() {
                    out.push_str(&coefficient.to_string());
                    out.push('*');
                }
                out.push_str(&monomial.to_string());
            }
        }
        out
    }
}

impl<F: Field> Default for Polynomial<F> {
    fn default() -> Self {
        Self::zero()
    }
}

impl<F: Field> fmt::Display for Polynomial<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.to_string_with_order(&MonomialOrder::Lex))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Modular, Rational};

    fn rational(value: i64) -> Rational {
        Rational::from_integer(value)
    }

    // 2*x_0 + 3*x_1
    fn sample() -> Polynomial<Rational> {
        Polynomial::from_terms(vec![
            (Monomial::new(vec![1]), rational(2)),
            (Monomial::new(vec![0, 1]), rational(3)),
        ])
    }

    #[test]
    fn test_cancellation_deletes_terms() {
        let p = sample();
        let difference = p.sub(&p);
        assert!(difference.is_zero());
        assert_eq!(difference.term_count(), 0);
    }

    #[test]
    fn test_add_term_accumulates() {
        let mut p = Polynomial::zero();
        p.add_term(Monomial::new(vec![1]), rational(2));
        p.add_term(Monomial::new(vec![1]), rational(-2));
        assert!(p.is_zero());
        p.add_term(Monomial::new(vec![1]), rational(0));
        assert!(p.is_zero());
    }

    #[test]
    fn test_ring_laws() {
        let p = sample();
        let q = Polynomial::from_term(Monomial::new(vec![1, 1]), rational(5));
        let r = Polynomial::constant(rational(-7));
        assert_eq!(p.add(&q), q.add(&p));
        assert_eq!(p.add(&q).add(&r), p.add(&q.add(&r)));
        assert_eq!(p.mul(&q.add(&r)), p.mul(&q).add(&p.mul(&r)));
        assert_eq!(p.add(&p.neg()), Polynomial::zero());
        assert_eq!(p.mul(&Polynomial::constant(rational(1))), p);
        assert!(p.mul(&Polynomial::zero()).is_zero());
    }

    #[test]
    fn test_mul_squares() {
        // (2x + 3y)^2 = 4x^2 + 12xy + 9y^2
        let square = sample().mul(&sample());
        let expected = Polynomial::from_terms(vec![
            (Monomial::new(vec![2]), rational(4)),
            (Monomial::new(vec![1, 1]), rational(12)),
            (Monomial::new(vec![0, 2]), rational(9)),
        ]);
        assert_eq!(square, expected);
    }

    #[test]
    fn test_leading_term() {
        let order = MonomialOrder::Lex;
        let p = sample();
        assert_eq!(p.leading_monomial(&order).unwrap(), &Monomial::new(vec![1]));
        assert_eq!(p.leading_coefficient(&order).unwrap(), &rational(2));

        let mut tail = p.clone();
        tail.sub_assign(&p.leading_term(&order).unwrap());
        assert_eq!(
            tail,
            Polynomial::from_term(Monomial::new(vec![0, 1]), rational(3))
        );
    }

    #[test]
    fn test_leading_of_zero() {
        let p: Polynomial<Rational> = Polynomial::zero();
        assert_eq!(
            p.leading_monomial(&MonomialOrder::Lex),
            Err(AlgebraError::LeadingTermOfZero)
        );
    }

    #[test]
    fn test_div_monomial_keeps_divisible_terms() {
        // (x^2 + xy + y^2) / x = x + y
        let p = Polynomial::from_terms(vec![
            (Monomial::new(vec![2]), rational(1)),
            (Monomial::new(vec![1, 1]), rational(1)),
            (Monomial::new(vec![0, 2]), rational(1)),
        ]);
        let quotient = p.div_monomial(&Monomial::new(vec![1]));
        let expected = Polynomial::from_terms(vec![
            (Monomial::new(vec![1]), rational(1)),
            (Monomial::new(vec![0, 1]), rational(1)),
        ]);
        assert_eq!(quotient, expected);
    }

    #[test]
    fn test_scalar_div_by_zero() {
        assert_eq!(
            sample().scalar_div(&rational(0)),
            Err(AlgebraError::DivisionByZero)
        );
    }

    #[test]
    fn test_reduce_by_chain() {
        // x^2 reduced by x - y ends at y^2
        let order = MonomialOrder::Lex;
        let mut p = Polynomial::from_term(Monomial::new(vec![2]), rational(1));
        let reducer = Polynomial::from_terms(vec![
            (Monomial::new(vec![1]), rational(1)),
            (Monomial::new(vec![0, 1]), rational(-1)),
        ]);
        p.reduce_by(&reducer, &order).unwrap();
        assert_eq!(p, Polynomial::from_term(Monomial::new(vec![0, 2]), rational(1)));
    }

    #[test]
    fn test_reduce_by_zero_reducer() {
        let mut p = sample();
        assert_eq!(
            p.reduce_by(&Polynomial::zero(), &MonomialOrder::Lex),
            Err(AlgebraError::DivisionByZero)
        );
    }

    #[test]
    fn test_full_reduce_by() {
        // x^2 + xy + 1 fully reduced by x leaves 1
        let order = MonomialOrder::Lex;
        let mut p = Polynomial::from_terms(vec![
            (Monomial::new(vec![2]), rational(1)),
            (Monomial::new(vec![1, 1]), rational(1)),
            (Monomial::one(), rational(1)),
        ]);
        let reducer = Polynomial::from_term(Monomial::new(vec![1]), rational(1));
        p.full_reduce_by(&reducer, &order).unwrap();
        assert_eq!(p, Polynomial::constant(rational(1)));
    }

    #[test]
    fn test_modular_coefficients() {
        // (2x + 3y)^2 over Z_11
        let p = Polynomial::from_terms(vec![
            (Monomial::new(vec![1]), Modular::<11>::from_integer(2)),
            (Monomial::new(vec![0, 1]), Modular::<11>::from_integer(3)),
        ]);
        let square = p.mul(&p);
        let expected = Polynomial::from_terms(vec![
            (Monomial::new(vec![2]), Modular::<11>::from_integer(4)),
            (Monomial::new(vec![1, 1]), Modular::<11>::from_integer(1)),
            (Monomial::new(vec![0, 2]), Modular::<11>::from_integer(9)),
        ]);
        assert_eq!(square, expected);
    }

    #[test]
    fn test_display() {
        let order = MonomialOrder::Lex;
        let p = Polynomial::from_terms(vec![
            (Monomial::new(vec![1, 1]), rational(1)),
            (Monomial::new(vec![0, 0, 2]), rational(-1)),
            (Monomial::one(), rational(3)),
        ]);
        assert_eq!(p.to_string_with_order(&order), "x_0*x_1+-1*x_2^2+3");
        assert_eq!(Polynomial::<Rational>::zero().to_string(), "0");
    }
}
