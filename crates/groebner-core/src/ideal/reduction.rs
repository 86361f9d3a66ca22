//! Multi-reducer reduction against an ideal's generating set
//!
//! Both loops scan the generator list in order and restart after every
//! hit. The generators are monic, so the subtraction multiplier collapses
//! to the reduced polynomial's own leading coefficient; no coefficient
//! division happens here.

use super::Ideal;
use crate::error::AlgebraResult;
use crate::field::Field;
use crate::polynomial::Polynomial;

impl<F: Field> Ideal<F> {
    /// Leading-term reduction against the generating set
    ///
    /// While the polynomial is non-zero, finds the first generator whose
    /// leading monomial divides the polynomial's leading monomial and
    /// subtracts the multiple cancelling that leading term. Stops when no
    /// generator applies. The result depends on the generator order, which
    /// is acceptable: against a Gröbner basis, membership is detected by
    /// reduction to zero regardless of pick order.
    pub fn reduce(&self, polynomial: &mut Polynomial<F>) -> AlgebraResult<()> {
        let order = self.order();
        while !polynomial.is_zero() {
            let monomial = polynomial.leading_monomial(&order)?.clone();
            let mut reduced = false;
            for generator in self.generators() {
                let leading = generator.leading_monomial(&order)?;
                if !monomial.is_divisible_by(leading) {
                    continue;
                }
                let quotient = monomial.div_exact(leading)?;
                let coefficient = polynomial.leading_coefficient(&order)?.clone();
                for (m, c) in generator.terms() {
                    let subtracted = c.clone() * coefficient.clone();
                    polynomial.sub_term(m.mul(&quotient), subtracted);
                }
                reduced = true;
                break;
            }
            if !reduced {
                break;
            }
        }
        Ok(())
    }

    /// Full reduction against the generating set
    ///
    /// Cancels every term divisible by some generator's leading monomial,
    /// not only the leading one, restarting the scan after each pass that
    /// changed the polynomial. Stops when no generator produces a non-zero
    /// partial quotient.
    pub fn full_reduce(&self, polynomial: &mut Polynomial<F>) -> AlgebraResult<()> {
        let order = self.order();
        while !polynomial.is_zero() {
            let mut reduced = false;
            for generator in self.generators() {
                let quotient = polynomial.div_monomial(generator.leading_monomial(&order)?);
                if quotient.is_zero() {
                    continue;
                }
                reduced = true;
                polynomial.sub_assign(&generator.mul(&quotient));
            }
            if !reduced {
                break;
            }
        }
        Ok(())
    }
}
