use crate::{
    ast::{Operand, OperatorKind},
    error::Expected,
    interpreter::{
        evaluator::{
            binary::eval_binary,
            core::{EvalResult, Session},
        },
        lexer::{Token, TokenStream},
        parser::utils::syntax_error,
        value::core::Tensor,
    },
};

/// What the expression scanner accepts next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum State {
    /// An operand, `(`, or a prefix `+`/`-`.
    ExpectOperand,
    /// `)`, or a binary `+`, `-`, `*`.
    ExpectOperator,
}

/// The operand and operator stacks of one expression.
struct Stacks {
    operands:  Vec<Operand>,
    operators: Vec<OperatorKind>,
}

impl Session {
    /// Evaluates one expression and returns its value.
    ///
    /// The expression ends before the first `;`, `,` or `]` at nesting level
    /// zero, or at the end of the input; the terminator is not consumed.
    ///
    /// Operators are applied as soon as precedence allows: before a binary
    /// operator is pushed, every pending operator binding at least as tightly
    /// is applied first, which makes binary operators left-associative. A `)`
    /// applies everything back to its `(`. Two prefix operators in a row are
    /// rejected, so `--2` is a syntax error.
    ///
    /// Precedence, from loosest to tightest: binary `+` `-`, then `*`, then
    /// prefix `+` `-`.
    ///
    /// # Errors
    /// - A syntax error for an operator in the wrong place, a missing
    ///   operand, an unmatched parenthesis or an empty expression.
    /// - A value error from resolving operands or applying operators.
    ///
    /// # Example
    /// ```
    /// use matlang::Session;
    ///
    /// let mut session = Session::new();
    /// let (_, value) = session.evaluate(0, "x = (2 + 3) * -4;").unwrap();
    /// assert_eq!(value.to_string(), "-20");
    /// ```
    pub(crate) fn eval_expression(&mut self, tokens: &mut TokenStream<'_>) -> EvalResult<Tensor> {
        let mut stacks = Stacks { operands:  Vec::new(),
                                  operators: vec![OperatorKind::Group], };
        let mut state = State::ExpectOperand;

        loop {
            let position = tokens.position();
            let Some(token) = tokens.peek().cloned() else {
                if state == State::ExpectOperator && !tokens.is_at_end() {
                    return syntax_error(position, Expected::Operator);
                }
                break;
            };

            let op = match (state, &token) {
                (_, Token::Semicolon | Token::Comma | Token::RBracket) => break,

                (State::ExpectOperand, Token::LParen) => {
                    tokens.next();
                    stacks.operators.push(OperatorKind::Group);
                    continue;
                },
                (State::ExpectOperand, Token::Minus | Token::Plus) => {
                    // Prefix operators reduce nothing; a second one in a row leaves the first
                    // without an operand.
                    if stacks.operators.last().is_some_and(|op| op.is_unary()) {
                        return syntax_error(position, Expected::Operand);
                    }

                    tokens.next();
                    stacks.operators.push(if token == Token::Minus {
                                              OperatorKind::UnaryNegate
                                          } else {
                                              OperatorKind::UnaryIdentity
                                          });
                    continue;
                },
                (State::ExpectOperand, Token::RParen | Token::Star) => {
                    return syntax_error(position, Expected::Operand);
                },
                (State::ExpectOperand, _) => {
                    let operand = self.parse_operand(tokens)?;
                    stacks.operands.push(operand);
                    state = State::ExpectOperator;
                    continue;
                },

                (State::ExpectOperator, Token::RParen) => {
                    tokens.next();
                    self.close_group(&mut stacks, position)?;
                    continue;
                },
                (State::ExpectOperator, Token::Plus) => OperatorKind::Add,
                (State::ExpectOperator, Token::Minus) => OperatorKind::Subtract,
                (State::ExpectOperator, Token::Star) => OperatorKind::Multiply,
                (State::ExpectOperator, _) => return syntax_error(position, Expected::Operator),
            };

            tokens.next();
            self.reduce(&mut stacks, op.precedence(), position)?;
            stacks.operators.push(op);
            state = State::ExpectOperand;
        }

        let position = tokens.position();
        if state == State::ExpectOperand {
            return syntax_error(position, Expected::Operand);
        }

        self.reduce(&mut stacks, 0, position)?;
        match (stacks.operators.pop(), stacks.operators.is_empty()) {
            (Some(OperatorKind::Group), true) => {},
            (Some(OperatorKind::Group), false) => {
                return syntax_error(position, Expected::ClosingParen);
            },
            _ => return syntax_error(position, Expected::Expression),
        }

        let Some(result) = stacks.operands.pop() else {
            return syntax_error(position, Expected::Expression);
        };
        if !stacks.operands.is_empty() {
            return syntax_error(position, Expected::Expression);
        }

        Ok(self.resolve(result)?)
    }

    /// Applies pending operators down to the nearest `(`, then discards it.
    ///
    /// Reaching the bottom of the stack means the `)` has no partner.
    fn close_group(&mut self, stacks: &mut Stacks, position: usize) -> EvalResult<()> {
        self.reduce(stacks, 0, position)?;
        stacks.operators.pop();

        if stacks.operators.is_empty() {
            return syntax_error(position, Expected::Expression);
        }

        Ok(())
    }

    /// Applies pending operators while their precedence is at least
    /// `min_precedence`, stopping at a `(`.
    fn reduce(&mut self, stacks: &mut Stacks, min_precedence: u8, position: usize) -> EvalResult<()> {
        while let Some(&op) = stacks.operators.last() {
            if op == OperatorKind::Group || op.precedence() < min_precedence {
                break;
            }

            stacks.operators.pop();
            self.apply(stacks, op, position)?;
        }

        Ok(())
    }

    /// Pops the operands of `op`, applies it and pushes the result.
    ///
    /// For a binary operator the operand popped second is the left-hand side.
    fn apply(&mut self, stacks: &mut Stacks, op: OperatorKind, position: usize) -> EvalResult<()> {
        let Some(rhs) = stacks.operands.pop() else {
            return syntax_error(position, Expected::Operand);
        };

        let slot = if op.is_unary() {
            self.eval_unary(op, rhs)?
        } else {
            let Some(lhs) = stacks.operands.pop() else {
                return syntax_error(position, Expected::Operand);
            };

            let lhs = self.resolve(lhs)?;
            let rhs = self.resolve(rhs)?;
            let result = eval_binary(op, &lhs, &rhs)?;
            self.transient.alloc(result)
        };

        stacks.operands.push(Operand::Transient(slot));
        Ok(())
    }
}
