//! Textual polynomial form
//!
//! A polynomial is a `+`/`-`-separated sequence of terms; each term is a
//! `*`-separated sequence of atoms; each atom is either a coefficient (an
//! optionally signed integer or fraction `p/q`) or a variable power `x_i`
//! or `x_i^d`. No whitespace is allowed inside a polynomial; a leading
//! `-` on the first term is fine. Empty segments between consecutive
//! signs contribute zero, so printed forms such as `x_0+-1*x_1` parse
//! back to the polynomial that produced them.
//!
//! Coefficients are built generically through [`Field::from_integer`] and
//! checked division, so the same grammar serves the rationals and the
//! prime fields.

mod error;

pub use error::ParseError;

use crate::field::Field;
use crate::monomial::{Exponent, Monomial};
use crate::polynomial::Polynomial;

/// Parse the textual polynomial form
///
/// # Examples
///
/// ```rust
/// use groebner_core::field::Rational;
/// use groebner_core::parser::parse_polynomial;
///
/// let p = parse_polynomial::<Rational>("3/5*x_0^2+x_1").unwrap();
/// assert_eq!(p.to_string(), "3/5*x_0^2+x_1");
/// ```
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending substring and its byte
/// range.
pub fn parse_polynomial<F: Field>(source: &str) -> Result<Polynomial<F>, ParseError> {
    if source.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let mut result = Polynomial::zero();
    let mut positive = true;
    let mut from = 0;
    for (i, byte) in source.bytes().enumerate() {
        if byte == b'+' || byte == b'-' {
            accumulate_term(&mut result, source, from, i, positive)?;
            positive = byte == b'+';
            from = i + 1;
        }
    }
    accumulate_term(&mut result, source, from, source.len(), positive)?;
    Ok(result)
}

/// Parse a product of variable powers, e.g. `x_0^2*x_3`
///
/// # Errors
///
/// Returns a [`ParseError`] naming the offending substring and its byte
/// range.
pub fn parse_monomial(source: &str) -> Result<Monomial, ParseError> {
    if source.is_empty() {
        return Err(ParseError::EmptyInput);
    }
    let mut result = Monomial::one();
    let mut from = 0;
    for (i, byte) in source.bytes().enumerate() {
        if byte == b'*' {
            result = result.mul(&parse_variable_power(source, from, i)?);
            from = i + 1;
        }
    }
    result = result.mul(&parse_variable_power(source, from, source.len())?);
    Ok(result)
}

fn accumulate_term<F: Field>(
    result: &mut Polynomial<F>,
    source: &str,
    from: usize,
    to: usize,
    positive: bool,
) -> Result<(), ParseError> {
    if from == to {
        return Ok(());
    }
    let term = parse_term(source, from, to)?;
    if positive {
        result.add_assign(&term);
    } else {
        result.sub_assign(&term);
    }
    Ok(())
}

fn parse_term<F: Field>(
    source: &str,
    from: usize,
    to: usize,
) -> Result<Polynomial<F>, ParseError> {
    let mut result = Polynomial::constant(F::one());
    let mut start = from;
    for i in from..to {
        if source.as_bytes()[i] == b'*' {
            result = result.mul(&parse_atom(source, start, i)?);
            start = i + 1;
        }
    }
    result = result.mul(&parse_atom(source, start, to)?);
    Ok(result)
}

fn parse_atom<F: Field>(
    source: &str,
    from: usize,
    to: usize,
) -> Result<Polynomial<F>, ParseError> {
    if source.as_bytes().get(from) == Some(&b'x') {
        let monomial = parse_variable_power(source, from, to)?;
        return Ok(Polynomial::from_term(monomial, F::one()));
    }
    Ok(Polynomial::constant(parse_coefficient(source, from, to)?))
}

fn parse_variable_power(
    source: &str,
    from: usize,
    to: usize,
) -> Result<Monomial, ParseError> {
    let text = &source[from..to];
    let invalid_variable = || ParseError::InvalidVariable {
        text: text.to_string(),
        span: (from, to),
    };
    let rest = text.strip_prefix("x_").ok_or_else(invalid_variable)?;
    let (index_text, degree_text) = match rest.find('^') {
        Some(caret) => (&rest[..caret], Some(&rest[caret + 1..])),
        None => (rest, None),
    };
    let index: usize = index_text.parse().map_err(|_| invalid_variable())?;
    let degree: Exponent = match degree_text {
        Some(text) => text.parse().map_err(|_| ParseError::InvalidExponent {
            text: text.to_string(),
            span: (to - text.len(), to),
        })?,
        None => 1,
    };
    Ok(Monomial::variable(index, degree))
}

fn parse_coefficient<F: Field>(
    source: &str,
    from: usize,
    to: usize,
) -> Result<F, ParseError> {
    let text = &source[from..to];
    let invalid = || ParseError::InvalidCoefficient {
        text: text.to_string(),
        span: (from, to),
    };
    let (numerator_text, denominator_text) = match text.find('/') {
        Some(slash) => (&text[..slash], Some(&text[slash + 1..])),
        None => (text, None),
    };
    let numerator: i64 = numerator_text.parse().map_err(|_| invalid())?;
    let value = F::from_integer(numerator);
    match denominator_text {
        Some(text) => {
            let denominator: i64 = text.parse().map_err(|_| invalid())?;
            value
                .div(&F::from_integer(denominator))
                .map_err(|_| invalid())
        }
        None => Ok(value),
    }
}
