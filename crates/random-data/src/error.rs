//! Error types for the random-data crate.
//!
//! Draws only fail when a caller breaks a precondition, and the lexicon only
//! fails when its JSON is malformed. Both are modelled as semantic enums with
//! `thiserror`. Unknown postal country codes and inverted digit ranges are
//! deliberately absent: they have defined, non-error results.

use thiserror::Error;

/// Errors raised by random draws whose arguments cannot produce a value.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RandomError {
    /// `intn` (or `number`) was asked for a value below a non-positive bound.
    #[error("upper bound must be positive, got {bound}")]
    NonPositiveBound {
        /// The rejected exclusive upper bound.
        bound: i64,
    },

    /// A half-open range with no members was supplied.
    #[error("range {low}..{high} is empty")]
    EmptyRange {
        /// Inclusive lower bound.
        low: i64,
        /// Exclusive upper bound.
        high: i64,
    },

    /// A date string did not match `YYYY-MM-DD`.
    #[error("invalid date '{value}': expected YYYY-MM-DD")]
    InvalidDate {
        /// The rejected input.
        value: String,
    },

    /// A calendar year cannot be represented.
    #[error("year {year} is outside the supported calendar range")]
    YearOutOfRange {
        /// The rejected year.
        year: i32,
    },
}

/// Errors raised while loading a lexicon.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LexiconError {
    /// The lexicon JSON is malformed or missing required lists.
    #[error("invalid lexicon JSON: {message}")]
    ParseError {
        /// Description of the parse error.
        message: String,
    },

    /// A required word list contains no entries.
    #[error("lexicon list '{list}' is empty")]
    EmptyList {
        /// JSON key of the empty list.
        list: &'static str,
    },
}
