use std::fmt;

use thiserror::Error;

/// Represents a failed expectation while parsing a statement.
///
/// The position is a byte offset into the buffer handed to
/// [`Session::evaluate`], not into the statement, so it can be used directly
/// to place a caret under the input line.
///
/// [`Session::evaluate`]: crate::interpreter::evaluator::core::Session::evaluate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
#[error("{expected} expected at position {position}")]
pub struct SyntaxError {
    /// Byte offset at which the parser gave up.
    pub position: usize,
    /// What the parser was looking for at that offset.
    pub expected: Expected,
}

impl SyntaxError {
    #[must_use]
    pub const fn new(position: usize, expected: Expected) -> Self {
        Self { position, expected }
    }
}

/// The grammar element the parser was looking for when it failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expected {
    /// A non-negative integer inside an index group.
    Index,
    /// A variable name.
    Identifier,
    /// A variable reference, an array literal or a number.
    Operand,
    /// `+`, `-`, `*` or `)` after a complete operand.
    Operator,
    /// A well-formed expression: balanced parentheses and a single result.
    Expression,
    /// `]` closing an index group or an array literal.
    ClosingBracket,
    /// `)` closing a parenthesized group.
    ClosingParen,
    /// `;` terminating a statement.
    Semicolon,
    /// A valid starting offset inside the buffer.
    Statement,
}

impl fmt::Display for Expected {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let what = match self {
            Self::Index => "index",
            Self::Identifier => "identifier",
            Self::Operand => "operand",
            Self::Operator => "operator",
            Self::Expression => "expression",
            Self::ClosingBracket => "']'",
            Self::ClosingParen => "')'",
            Self::Semicolon => "';'",
            Self::Statement => "statement",
        };
        f.write_str(what)
    }
}
