/// The evaluator module holds interpreter state and computes values.
///
/// It owns the variable environment and the per-statement transient arena,
/// implements broadcast arithmetic over tensors and views, and resolves
/// indexed variable references for reading and writing.
///
/// # Responsibilities
/// - Applies unary and binary operators with the language's shape rules.
/// - Resolves `name[...][...]` chains to copies or to writable views.
/// - Reports value errors such as size mismatches or bad indices.
pub mod evaluator;
/// The lexer module tokenizes statement text.
///
/// Produces numbers, identifiers and punctuation with their byte positions,
/// lazily, starting from any offset in a buffer.
pub mod lexer;
/// The parser module reads statements and expressions.
///
/// Parsing and evaluation are interleaved: expressions are reduced with an
/// operator-precedence scan while they are read, and statements dispatch to
/// reads or assignments as soon as their shape is known.
///
/// # Responsibilities
/// - Distinguishes unary from binary operators by parser state.
/// - Reports positioned syntax errors naming what was expected.
pub mod parser;
/// The value module defines tensors, slices and views.
pub mod value;
