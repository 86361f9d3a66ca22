//! Decision questions about systems of polynomial equations
//!
//! Every routine builds an ideal from the given system and delegates to
//! the Gröbner-basis queries: consistency is `I != (1)`, finiteness of the
//! variety is the pure-power criterion, radical membership goes through
//! the Rabinowitsch trick, and system equivalence is mutual radical
//! containment.

use crate::error::{AlgebraError, AlgebraResult};
use crate::field::Field;
use crate::ideal::Ideal;
use crate::monomial::Monomial;
use crate::polynomial::Polynomial;

/// Whether the system has a common zero over the algebraic closure
///
/// By the weak Nullstellensatz the variety is empty iff the ideal is the
/// whole ring.
pub fn solutions_exist<F: Field>(polynomials: &[Polynomial<F>]) -> AlgebraResult<bool> {
    let mut ideal = Ideal::from_polynomials(polynomials.iter().cloned())?;
    Ok(!ideal.is_full()?)
}

/// Whether the system has finitely many common zeros
///
/// `num_variables` is the ambient variable count; 0 means "use the number
/// of variables appearing in the system". With more ambient variables
/// than appear in the system at least one variable is unconstrained, so
/// the variety is finite only when it is empty. Otherwise the variety is
/// finite iff every variable has a pure-power leading monomial in the
/// Gröbner basis.
///
/// # Errors
///
/// Returns `AlgebraError::OutOfRange` when `num_variables` is non-zero
/// and smaller than the number of variables the system actually uses.
pub fn solutions_finite<F: Field>(
    polynomials: &[Polynomial<F>],
    num_variables: usize,
) -> AlgebraResult<bool> {
    let mut ideal = Ideal::from_polynomials(polynomials.iter().cloned())?;
    let used = ideal.num_variables();
    let ambient = if num_variables == 0 { used } else { num_variables };
    if ambient < used {
        return Err(AlgebraError::OutOfRange {
            value: ambient as u64,
            limit: used as u64,
        });
    }
    if ambient > used {
        return ideal.is_full();
    }
    ideal.all_pure_powers_present()
}

/// Whether `polynomial` lies in the radical of `ideal`
///
/// Rabinowitsch: `f` is in the radical of `I` iff `1` lies in
/// `I + (1 - t*f)` where `t` is a fresh indeterminate, here the one past
/// the highest index used by either the ideal or `polynomial`.
pub fn radical_contains<F: Field>(
    polynomial: &Polynomial<F>,
    ideal: &Ideal<F>,
) -> AlgebraResult<bool> {
    let mut extended = ideal.clone();
    let fresh = extended.num_variables().max(polynomial.num_variables());
    let mut witness = Polynomial::constant(F::one());
    witness.sub_assign(&polynomial.mul_monomial(&Monomial::variable(fresh, 1)));
    extended.add(witness)?;
    extended.is_full()
}

/// Whether every polynomial of `system` vanishes on the variety of `of`
///
/// Tests each polynomial of `system` for membership in the radical of the
/// ideal generated by `of`.
pub fn system_in_radical<F: Field>(
    system: &[Polynomial<F>],
    of: &[Polynomial<F>],
) -> AlgebraResult<bool> {
    let ideal = Ideal::from_polynomials(of.iter().cloned())?;
    for polynomial in system {
        if !radical_contains(polynomial, &ideal)? {
            return Ok(false);
        }
    }
    Ok(true)
}

/// Whether two systems have the same variety
///
/// Mutual radical containment: `P ⊆ √(Q)` and `Q ⊆ √(P)`.
pub fn systems_equivalent<F: Field>(
    first: &[Polynomial<F>],
    second: &[Polynomial<F>],
) -> AlgebraResult<bool> {
    Ok(system_in_radical(first, second)? && system_in_radical(second, first)?)
}
