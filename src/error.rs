/// Syntax errors.
///
/// Defines the positioned error raised while tokenizing and parsing a
/// statement. A syntax error carries the byte position at which the parser's
/// expectation failed, so a caller can point a caret at the offending column.
pub mod parse_error;
/// Value and shape errors.
///
/// Contains the unpositioned errors raised while resolving variables and
/// applying arithmetic: undefined names, out-of-bounds indices, invalid
/// dimension descent, slice misuse and shape mismatches.
pub mod runtime_error;

pub use parse_error::{Expected, SyntaxError};
pub use runtime_error::ValueError;
use thiserror::Error;

/// Any failure produced while evaluating one statement.
///
/// Both classes abort only the current statement; the [`Session`] stays
/// usable once its transient state has been reset.
///
/// [`Session`]: crate::interpreter::evaluator::core::Session
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// The statement text did not match the grammar.
    #[error(transparent)]
    Syntax(#[from] SyntaxError),
    /// The statement parsed but could not be evaluated.
    #[error(transparent)]
    Value(#[from] ValueError),
}

impl Error {
    /// Returns the byte position of a syntax error, or `None` for value
    /// errors, which are not tied to a place in the source text.
    ///
    /// # Example
    /// ```
    /// use matlang::{Session, error::Error};
    ///
    /// let mut session = Session::new();
    /// let err = session.evaluate(0, "a = 1 +;").unwrap_err();
    /// assert_eq!(err.position(), Some(7));
    ///
    /// let err = session.evaluate(0, "b;").unwrap_err();
    /// assert_eq!(err.position(), None);
    /// ```
    #[must_use]
    pub const fn position(&self) -> Option<usize> {
        match self {
            Self::Syntax(e) => Some(e.position),
            Self::Value(_) => None,
        }
    }
}
