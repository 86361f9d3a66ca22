//! Parsing error types

use serde::{Deserialize, Serialize};

/// Error raised on malformed polynomial text
///
/// Each variant carries the offending substring and its byte range in the
/// input. Unlike [`crate::AlgebraError`], these are user-input errors, not
/// API misuse.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ParseError {
    /// The input contains no terms at all
    EmptyInput,
    /// A coefficient atom that is not an integer or a fraction `p/q`
    /// with a non-vanishing denominator
    InvalidCoefficient { text: String, span: (usize, usize) },
    /// A variable atom that is not of the form `x_i`
    InvalidVariable { text: String, span: (usize, usize) },
    /// A variable power whose exponent is not a non-negative integer
    InvalidExponent { text: String, span: (usize, usize) },
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ParseError::EmptyInput => write!(f, "Empty input"),
            ParseError::InvalidCoefficient { text, span } => {
                write!(f, "Invalid coefficient '{}' at bytes {}..{}", text, span.0, span.1)
            }
            ParseError::InvalidVariable { text, span } => {
                write!(f, "Invalid variable '{}' at bytes {}..{}", text, span.0, span.1)
            }
            ParseError::InvalidExponent { text, span } => {
                write!(f, "Invalid exponent '{}' at bytes {}..{}", text, span.0, span.1)
            }
        }
    }
}

impl std::error::Error for ParseError {}
