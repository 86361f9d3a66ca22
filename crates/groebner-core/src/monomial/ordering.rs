//! Monomial orderings
//!
//! A monomial order is total, well-founded and compatible with
//! multiplication (`a < b` implies `a*c < b*c`). The Buchberger engine
//! takes the order as a value, so graded orders can be substituted without
//! touching polynomial or ideal code. The default is pure lexicographic.
//!
//! All comparisons pad the shorter exponent vector with zeros on the
//! right, matching the dynamic-arity monomial representation.

use super::Monomial;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;

/// Monomial ordering types
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub enum MonomialOrder {
    /// Lexicographic: first differing exponent decides, left to right
    #[default]
    Lex,

    /// Graded lexicographic: total degree first, lex for ties
    GrLex,

    /// Graded reverse lexicographic: total degree first, reverse
    /// comparison of the last differing exponent for ties
    GrevLex,
}

impl MonomialOrder {
    /// Compare two monomials under this ordering
    pub fn cmp(&self, first: &Monomial, second: &Monomial) -> Ordering {
        match self {
            MonomialOrder::Lex => lex_cmp(first, second),
            MonomialOrder::GrLex => match first.total_degree().cmp(&second.total_degree()) {
                Ordering::Equal => lex_cmp(first, second),
                other => other,
            },
            MonomialOrder::GrevLex => match first.total_degree().cmp(&second.total_degree()) {
                Ordering::Equal => grevlex_tie(first, second),
                other => other,
            },
        }
    }

    /// The greater of two monomials under this ordering
    pub fn max<'a>(&self, first: &'a Monomial, second: &'a Monomial) -> &'a Monomial {
        if self.cmp(first, second) == Ordering::Less {
            second
        } else {
            first
        }
    }
}

fn lex_cmp(first: &Monomial, second: &Monomial) -> Ordering {
    let len = first.len().max(second.len());
    for i in 0..len {
        match first.degree(i).cmp(&second.degree(i)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}

fn grevlex_tie(first: &Monomial, second: &Monomial) -> Ordering {
    let len = first.len().max(second.len());
    for i in (0..len).rev() {
        match second.degree(i).cmp(&first.degree(i)) {
            Ordering::Equal => continue,
            other => return other,
        }
    }
    Ordering::Equal
}
