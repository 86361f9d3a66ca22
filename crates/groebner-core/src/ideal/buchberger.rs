//! Buchberger completion and basis normalization
//!
//! The completion loop processes every unordered pair of generators,
//! including pairs involving generators born during the run: the outer
//! bound is re-read from the growing list, so a new remainder is paired
//! with everything before it. Termination follows from Dickson's lemma.

use super::{BasisState, Ideal};
use crate::error::AlgebraResult;
use crate::field::Field;
use crate::monomial::{Monomial, MonomialOrder};
use crate::polynomial::Polynomial;

impl<F: Field> Ideal<F> {
    /// Complete the generating set into a Gröbner basis
    ///
    /// For each pair, the leading-monomial meet decides: a trivial meet
    /// means disjoint leading supports and the S-polynomial reduces to
    /// zero by Buchberger's first criterion; otherwise the S-polynomial is
    /// reduced against the current list and appended (monic) when the
    /// remainder is non-zero. No-op unless the state is `Any`.
    pub fn make_groebner(&mut self) -> AlgebraResult<()> {
        if self.state >= BasisState::Groebner {
            return Ok(());
        }
        let order = self.order;
        let mut i = 0;
        while i < self.generators.len() {
            for j in 0..i {
                let first = self.generators[i].leading_monomial(&order)?;
                let second = self.generators[j].leading_monomial(&order)?;
                let meet = first.meet(second);
                if meet.is_one() {
                    continue;
                }
                let mut s_poly =
                    s_polynomial(&self.generators[i], &self.generators[j], &meet, &order)?;
                self.reduce(&mut s_poly)?;
                self.push_normalized(s_poly)?;
            }
            i += 1;
        }
        self.state = BasisState::Groebner;
        Ok(())
    }

    /// Drop redundant generators
    ///
    /// A generator goes when another generator's leading monomial divides
    /// its own; among generators with equal leading monomials the earliest
    /// index survives. No-op when already minimized.
    pub fn minimize(&mut self) -> AlgebraResult<()> {
        if self.state >= BasisState::Minimized {
            return Ok(());
        }
        let order = self.order;
        let mut leading = Vec::with_capacity(self.generators.len());
        for generator in &self.generators {
            leading.push(generator.leading_monomial(&order)?.clone());
        }
        let mut removed = vec![false; leading.len()];
        for i in 0..leading.len() {
            for j in 0..leading.len() {
                if i == j {
                    continue;
                }
                let tie = leading[i] == leading[j];
                if leading[i].is_divisible_by(&leading[j]) && (!tie || j < i) {
                    removed[i] = true;
                    break;
                }
            }
        }
        let mut index = 0;
        self.generators.retain(|_| {
            let keep = !removed[index];
            index += 1;
            keep
        });
        self.state = BasisState::Minimized;
        Ok(())
    }

    /// Inter-reduce the generator tails
    ///
    /// Each generator is split into its leading term and tail; the tail is
    /// fully reduced against the basis and glued back. During the tail's
    /// reduction the generator itself is present only as its leading term,
    /// which cannot divide any tail monomial (those are strictly smaller).
    /// No-op when already autoreduced.
    pub fn autoreduce(&mut self) -> AlgebraResult<()> {
        if self.state >= BasisState::Autoreduced {
            return Ok(());
        }
        let order = self.order;
        for i in 0..self.generators.len() {
            let leading = self.generators[i].leading_term(&order)?;
            let mut tail = self.generators[i].sub(&leading);
            self.generators[i] = leading;
            self.full_reduce(&mut tail)?;
            self.generators[i].add_assign(&tail);
        }
        self.state = BasisState::Autoreduced;
        Ok(())
    }

    /// Compute the unique reduced Gröbner basis
    ///
    /// Chains completion, minimization and autoreduction, then sorts the
    /// generators ascending by leading monomial. The result is uniquely
    /// determined by the ideal and the order; two ideals are equal iff
    /// their canonical sequences are equal.
    pub fn canonicalize(&mut self) -> AlgebraResult<()> {
        if self.state == BasisState::Canonical {
            return Ok(());
        }
        self.make_groebner()?;
        self.minimize()?;
        self.autoreduce()?;
        let order = self.order;
        let mut keyed = Vec::with_capacity(self.generators.len());
        for generator in std::mem::take(&mut self.generators) {
            let leading = generator.leading_monomial(&order)?.clone();
            keyed.push((leading, generator));
        }
        keyed.sort_by(|(a, _), (b, _)| order.cmp(a, b));
        debug_assert!(
            keyed.windows(2).all(|w| w[0].0 != w[1].0),
            "equal leading monomials survived minimization"
        );
        self.generators = keyed.into_iter().map(|(_, g)| g).collect();
        self.state = BasisState::Canonical;
        Ok(())
    }
}

/// S-polynomial of two monic generators with leading-monomial meet `meet`
///
/// `S(f, g) = f * (lm(g)/meet) - g * (lm(f)/meet)`; the scaled leading
/// terms are equal (both are the leading-monomial join) and cancel.
fn s_polynomial<F: Field>(
    first: &Polynomial<F>,
    second: &Polynomial<F>,
    meet: &Monomial,
    order: &MonomialOrder,
) -> AlgebraResult<Polynomial<F>> {
    let first_leading = first.leading_monomial(order)?;
    let second_leading = second.leading_monomial(order)?;
    let result = first
        .mul_monomial(&second_leading.div_exact(meet)?)
        .sub(&second.mul_monomial(&first_leading.div_exact(meet)?));
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::field::{Modular, Rational};
    use crate::parser::parse_polynomial;

    fn ideal_of(sources: &[&str]) -> Ideal<Rational> {
        let mut ideal = Ideal::new();
        for source in sources {
            ideal.add(parse_polynomial(source).unwrap()).unwrap();
        }
        ideal
    }

    #[test]
    fn test_make_groebner_closes_under_s_polynomials() {
        let mut ideal = ideal_of(&["x_0-x_1", "x_1^2-1"]);
        ideal.make_groebner().unwrap();
        assert_eq!(ideal.state(), BasisState::Groebner);
        // x_0^2 - 1 = (x_0 + x_1)(x_0 - x_1) + (x_1^2 - 1)
        assert!(ideal
            .contains(&parse_polynomial("x_0^2-1").unwrap())
            .unwrap());
        assert!(!ideal.contains(&parse_polynomial("x_0").unwrap()).unwrap());
    }

    #[test]
    fn test_make_groebner_idempotent() {
        let mut ideal = ideal_of(&["x_0*x_1-1", "x_1^2-1"]);
        ideal.make_groebner().unwrap();
        let snapshot = ideal.clone();
        ideal.make_groebner().unwrap();
        assert_eq!(ideal, snapshot);
    }

    #[test]
    fn test_minimize_drops_divisible_leading_monomials() {
        let mut ideal = ideal_of(&["x_0", "x_0^2", "x_0*x_1"]);
        ideal.make_groebner().unwrap();
        ideal.minimize().unwrap();
        assert_eq!(ideal.generators().len(), 1);
        assert_eq!(ideal.to_string(), "{x_0}");
    }

    #[test]
    fn test_minimize_keeps_earliest_on_tie() {
        let mut ideal = ideal_of(&["x_0+x_1", "2*x_0+x_2"]);
        // Both leading monomials are x_0; the first generator survives.
        ideal.minimize().unwrap();
        assert_eq!(ideal.generators().len(), 1);
        assert_eq!(ideal.to_string(), "{x_0+x_1}");
    }

    #[test]
    fn test_autoreduce_reduces_tails() {
        // x_0^2 + x_1 keeps its leading term; the tail x_1 rewrites to x_2
        let mut ideal = ideal_of(&["x_0^2+x_1", "x_1-x_2"]);
        ideal.autoreduce().unwrap();
        assert_eq!(ideal.to_string(), "{x_0^2+x_2, x_1+-1*x_2}");
    }

    #[test]
    fn test_canonicalize_inconsistent_system() {
        let mut ideal = ideal_of(&["x_0-1", "x_0-2"]);
        ideal.canonicalize().unwrap();
        assert_eq!(ideal.to_string(), "{1}");
        assert_eq!(ideal.state(), BasisState::Canonical);
    }

    #[test]
    fn test_canonicalize_sorts_by_leading_monomial() {
        let mut ideal = ideal_of(&["x_0-x_1", "x_1^2-1"]);
        ideal.canonicalize().unwrap();
        assert_eq!(ideal.to_string(), "{x_1^2+-1, x_0+-1*x_1}");
    }

    #[test]
    fn test_canonical_equal_under_scaling_and_order() {
        let mut first = ideal_of(&["x_0-x_1", "x_1^2-1"]);
        let mut second = ideal_of(&["3*x_1^2-3", "-5*x_0+5*x_1"]);
        assert!(first.same_ideal(&mut second).unwrap());
    }

    #[test]
    fn test_canonicalize_idempotent() {
        let mut ideal = ideal_of(&["x_0*x_1-x_2^2-x_2", "x_0*x_2-x_1^2-x_1"]);
        ideal.canonicalize().unwrap();
        let snapshot = ideal.clone();
        ideal.canonicalize().unwrap();
        assert_eq!(ideal, snapshot);
    }

    #[test]
    fn test_prime_field_basis() {
        // { x_0^2 - x_1, x_0^2 - x_2 } over Z_19
        let f1 = Polynomial::from_terms(vec![
            (Monomial::new(vec![2]), Modular::<19>::from_integer(1)),
            (Monomial::new(vec![0, 1]), Modular::<19>::from_integer(18)),
        ]);
        let f2 = Polynomial::from_terms(vec![
            (Monomial::new(vec![2]), Modular::<19>::from_integer(1)),
            (Monomial::new(vec![0, 0, 1]), Modular::<19>::from_integer(18)),
        ]);
        let mut ideal = Ideal::from_polynomials(vec![f1, f2]).unwrap();
        ideal.canonicalize().unwrap();
        assert_eq!(
            ideal.to_string(),
            "{x_1+[18 (modulo 19)]*x_2, x_0^2+[18 (modulo 19)]*x_2}"
        );
    }

    #[test]
    fn test_is_full() {
        let mut ideal = ideal_of(&["x_0-1", "x_0-2"]);
        assert!(ideal.is_full().unwrap());
        let mut ideal = ideal_of(&["x_0-1"]);
        assert!(!ideal.is_full().unwrap());
    }

    #[test]
    fn test_all_pure_powers_present() {
        let mut ideal = ideal_of(&["x_0^2-1", "x_1^3-x_1"]);
        assert!(ideal.all_pure_powers_present().unwrap());
        let mut ideal = ideal_of(&["x_0*x_1-1"]);
        assert!(!ideal.all_pure_powers_present().unwrap());
    }

    #[test]
    fn test_membership_in_cyclic_system() {
        let mut ideal = ideal_of(&["x_0+x_1+x_2", "x_0*x_1+x_1*x_2+x_2*x_0", "x_0*x_1*x_2-1"]);
        ideal.make_groebner().unwrap();
        assert!(ideal
            .contains(&parse_polynomial("x_0^3-1").unwrap())
            .unwrap());
    }
}
