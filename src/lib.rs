//! # matlang
//!
//! matlang is an interactive evaluator for nested numeric arrays written in
//! Rust. It reads statements such as `a = [1, 2, 3] * 2;` or `a[0, 2];`, one
//! at a time, and evaluates them against a persistent set of variables, with
//! broadcast arithmetic and slice-based reads and writes.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

/// Defines the operators and operands of the expression language.
///
/// Expressions are evaluated while they are parsed, so there is no syntax
/// tree; this module holds the small vocabulary the parser and evaluator
/// share instead.
///
/// # Responsibilities
/// - Defines the closed set of operators with their precedence.
/// - Describes variable references with their index groups.
/// - Describes operand stack entries: references, literals and transient
///   results.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines the two failure classes of a statement: positioned
/// syntax errors, which a caller can underline in the input, and unpositioned
/// value errors raised while resolving variables or applying arithmetic.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (syntax, value).
/// - Attaches byte positions to syntax errors for caret reporting.
/// - Integrates with `std::error::Error` through `thiserror`.
pub mod error;
/// Orchestrates the evaluation of statements.
///
/// This module ties together lexing, parsing, evaluation and the value
/// representations to provide the statement-at-a-time entry point used by the
/// command line.
///
/// # Responsibilities
/// - Coordinates the lexer, parser, evaluator and value types.
/// - Provides entry points for evaluating one statement or a whole script.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;

pub use crate::{
    error::{Error, Expected, SyntaxError, ValueError},
    interpreter::{
        evaluator::core::Session,
        value::{Slice, Tensor, TensorView},
    },
};

/// Evaluates every statement of `source` in a fresh session and returns the
/// value of each one.
///
/// # Errors
/// Returns the first syntax or value error; nothing after it is evaluated.
///
/// # Examples
/// ```
/// use matlang::get_results;
///
/// let results = get_results("a = [1, 2] * 3; a[1] = 0; a;").unwrap();
/// let printed: Vec<String> = results.iter().map(ToString::to_string).collect();
/// assert_eq!(printed, ["[3, 6]", "0", "[3, 0]"]);
///
/// // 'x' is not defined
/// assert!(get_results("y = x + 1;").is_err());
/// ```
pub fn get_results(source: &str) -> Result<Vec<Tensor>, Error> {
    Session::new().evaluate_all(source)
}
