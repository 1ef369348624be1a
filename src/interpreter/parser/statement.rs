use tracing::debug;

use crate::{
    error::Expected,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        lexer::{Token, TokenStream},
        parser::{operand::parse_variable_ref, utils::syntax_error},
        value::core::Tensor,
    },
};

impl Session {
    /// Evaluates one statement starting at byte `position` of `buffer`.
    ///
    /// A statement is either an assignment or a read:
    ///
    /// ```text
    ///     target = expression;
    ///     target;
    /// ```
    ///
    /// where `target` is a variable name with optional index groups, e.g.
    /// `a`, `a[1]` or `a[0][0, 2]`.
    ///
    /// - A read returns the addressed value.
    /// - An assignment evaluates the right-hand side first, then stores it:
    ///   a whole variable is created or replaced, a single position is
    ///   overwritten, and a wider selection receives the value by broadcast
    ///   assignment. The returned value is the right-hand side, not the
    ///   updated variable.
    ///
    /// The caller must call [`Session::reset_transient_state`] afterwards,
    /// whatever the outcome.
    ///
    /// # Returns
    /// The position just past the terminating `;`, and the statement's value.
    ///
    /// # Errors
    /// - A positioned syntax error if the statement is malformed.
    /// - A value error if a name is undefined, an index is out of range or
    ///   the shapes involved do not fit.
    ///
    /// A failed broadcast assignment is not rolled back.
    ///
    /// # Example
    /// ```
    /// use matlang::Session;
    ///
    /// let mut session = Session::new();
    /// let line = "a = [10, 20, 30]; a[0, 2];";
    ///
    /// let (next, _) = session.evaluate(0, line).unwrap();
    /// session.reset_transient_state();
    /// assert_eq!(next, 17);
    ///
    /// let (next, value) = session.evaluate(next, line).unwrap();
    /// session.reset_transient_state();
    /// assert_eq!(next, line.len());
    /// assert_eq!(value.to_string(), "[10, 30]");
    /// ```
    pub fn evaluate(&mut self, position: usize, buffer: &str) -> EvalResult<(usize, Tensor)> {
        let mut tokens = TokenStream::new(buffer, position)?;

        let Some(target) = parse_variable_ref(&mut tokens)? else {
            return syntax_error(tokens.position(), Expected::Identifier);
        };

        if tokens.at(&Token::Equals) {
            tokens.next();
            let value = self.eval_expression(&mut tokens)?;
            tokens.expect(&Token::Semicolon, Expected::Semicolon)?;

            self.assign(&target, &value)?;
            debug!(name = %target.name, %value, "evaluated assignment");
            return Ok((tokens.consumed(), value));
        }

        tokens.expect(&Token::Semicolon, Expected::Semicolon)?;

        let value = self.get(&target)?;
        debug!(name = %target.name, %value, "evaluated read");
        Ok((tokens.consumed(), value))
    }
}
