/// Operator-precedence expression evaluation.
///
/// Scans an expression token by token, keeping an operand stack and an
/// operator stack, and reduces them by precedence as it goes. The expression
/// is evaluated while it is parsed; no tree is built.
pub mod expression;

/// Operand parsing.
///
/// Parses variable references with their index groups, array literals and
/// numbers.
pub mod operand;

/// Statement evaluation.
///
/// Implements the entry point that evaluates one `target = expression;` or
/// `target;` statement and reports where the next statement starts.
pub mod statement;

/// Shared parsing helpers.
pub mod utils;
