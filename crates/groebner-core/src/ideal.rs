//! Polynomial ideals and their Gröbner bases
//!
//! An [`Ideal`] is an ordered sequence of non-zero monic generator
//! polynomials together with the monomial order and a normalization state
//! tag. The tag records which normalization phases have already run so
//! each is applied at most once; adding an unprocessed generator resets it.
//!
//! Multi-reducer reduction lives in the `reduction` submodule; completion,
//! minimization, autoreduction and the canonical basis in `buchberger`.

mod buchberger;
mod reduction;

use std::fmt;

use crate::error::AlgebraResult;
use crate::field::Field;
use crate::monomial::MonomialOrder;
use crate::polynomial::Polynomial;

/// Normalization state of an ideal's generating set
///
/// States are linearly ordered by how much normalization has been applied;
/// the tag never overstates the current state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum BasisState {
    /// No structure guaranteed
    Any,
    /// The generators form a Gröbner basis
    Groebner,
    /// Gröbner basis with redundant generators removed
    Minimized,
    /// Minimized basis with inter-reduced tails
    Autoreduced,
    /// The unique reduced Gröbner basis, sorted by leading monomial
    Canonical,
}

/// Ideal of a multivariate polynomial ring over the field `F`
///
/// # Examples
///
/// ```rust
/// use groebner_core::field::Rational;
/// use groebner_core::ideal::Ideal;
/// use groebner_core::parser::parse_polynomial;
///
/// let mut ideal: Ideal<Rational> = Ideal::new();
/// ideal.add(parse_polynomial("x_0-1").unwrap()).unwrap();
/// ideal.add(parse_polynomial("x_0-2").unwrap()).unwrap();
/// ideal.canonicalize().unwrap();
/// assert_eq!(ideal.to_string(), "{1}");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct Ideal<F: Field> {
    generators: Vec<Polynomial<F>>,
    state: BasisState,
    order: MonomialOrder,
}

impl<F: Field> Ideal<F> {
    /// Empty ideal with the default lexicographic order
    pub fn new() -> Self {
        Self::with_order(MonomialOrder::Lex)
    }

    /// Empty ideal with an explicit monomial order
    pub fn with_order(order: MonomialOrder) -> Self {
        Self {
            generators: Vec::new(),
            state: BasisState::Any,
            order,
        }
    }

    /// Build an ideal from a sequence of generators
    pub fn from_polynomials<I>(polynomials: I) -> AlgebraResult<Self>
    where
        I: IntoIterator<Item = Polynomial<F>>,
    {
        let mut ideal = Self::new();
        ideal.add_all(polynomials)?;
        Ok(ideal)
    }

    /// Append a generator
    ///
    /// The zero polynomial is ignored; anything else is stored divided by
    /// its leading coefficient, so every generator is monic. Resets the
    /// state tag.
    pub fn add(&mut self, polynomial: Polynomial<F>) -> AlgebraResult<()> {
        self.state = BasisState::Any;
        self.push_normalized(polynomial)
    }

    /// Append every polynomial of an iterator
    pub fn add_all<I>(&mut self, polynomials: I) -> AlgebraResult<()>
    where
        I: IntoIterator<Item = Polynomial<F>>,
    {
        for polynomial in polynomials {
            self.add(polynomial)?;
        }
        Ok(())
    }

    /// Append a generator monic-normalized without touching the state tag
    ///
    /// Completion appends S-polynomial remainders through this: they are
    /// paired against every earlier generator before the pass ends, so the
    /// tag transition happens once at the end of the pass.
    fn push_normalized(&mut self, polynomial: Polynomial<F>) -> AlgebraResult<()> {
        if polynomial.is_zero() {
            return Ok(());
        }
        let leading = polynomial.leading_coefficient(&self.order)?.clone();
        self.generators.push(polynomial.scalar_div(&leading)?);
        Ok(())
    }

    /// The current generator sequence
    pub fn generators(&self) -> &[Polynomial<F>] {
        &self.generators
    }

    /// The monomial order the ideal was built with
    pub fn order(&self) -> MonomialOrder {
        self.order
    }

    /// The current normalization state tag
    pub fn state(&self) -> BasisState {
        self.state
    }

    /// Whether the ideal has no generators
    pub fn is_empty(&self) -> bool {
        self.generators.is_empty()
    }

    /// Number of variables spanned by the generators
    ///
    /// One past the highest variable index occurring in any generator.
    pub fn num_variables(&self) -> usize {
        self.generators
            .iter()
            .map(Polynomial::num_variables)
            .max()
            .unwrap_or(0)
    }

    /// Whether the ideal is the whole ring, i.e. `I = (1)`
    ///
    /// Forces Gröbner state; the ideal is full iff the basis contains a
    /// non-zero constant.
    pub fn is_full(&mut self) -> AlgebraResult<bool> {
        self.make_groebner()?;
        Ok(self
            .generators
            .iter()
            .any(|g| !g.is_zero() && g.is_constant()))
    }

    /// Whether every variable has a pure-power leading monomial in the basis
    ///
    /// Forces Gröbner state. The ideal is zero-dimensional (its variety is
    /// finite) iff for every variable index below
    /// [`Ideal::num_variables`] some generator's leading monomial is a
    /// power of that variable alone. A constant generator makes the
    /// variety empty, hence trivially finite.
    pub fn all_pure_powers_present(&mut self) -> AlgebraResult<bool> {
        self.make_groebner()?;
        let mut present = vec![false; self.num_variables()];
        for generator in &self.generators {
            if generator.is_constant() {
                return Ok(true);
            }
            let monomial = generator.leading_monomial(&self.order)?;
            let mut index = 0;
            let mut count = 0;
            for i in 0..monomial.len() {
                if monomial.degree(i) > 0 {
                    index = i;
                    count += 1;
                }
            }
            if count == 1 {
                present[index] = true;
            }
        }
        Ok(present.iter().all(|&p| p))
    }

    /// Ideal membership test
    ///
    /// Forces Gröbner state and reduces a copy of `polynomial` against the
    /// basis; membership is reduction to zero.
    pub fn contains(&mut self, polynomial: &Polynomial<F>) -> AlgebraResult<bool> {
        self.make_groebner()?;
        let mut remainder = polynomial.clone();
        self.reduce(&mut remainder)?;
        Ok(remainder.is_zero())
    }

    /// Whether two ideals generate the same set of polynomials
    ///
    /// Canonicalizes both sides; two ideals over the same order are equal
    /// iff their canonical generator sequences are equal.
    pub fn same_ideal(&mut self, other: &mut Self) -> AlgebraResult<bool> {
        self.canonicalize()?;
        other.canonicalize()?;
        Ok(self.order == other.order && self.generators == other.generators)
    }
}

impl<F: Field> Default for Ideal<F> {
    fn default() -> Self {
        Self::new()
    }
}

impl<F: Field> fmt::Display for Ideal<F> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{{")?;
        for (i, generator) in self.generators.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", generator.to_string_with_order(&self.order))?;
        }
        write!(f, "}}")
    }
}
