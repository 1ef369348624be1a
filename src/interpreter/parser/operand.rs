use crate::{
    ast::{Operand, VariableRef},
    error::Expected,
    interpreter::{
        evaluator::core::{EvalResult, Session},
        lexer::{Token, TokenStream},
        parser::utils::{parse_bracketed_list, syntax_error},
        value::{core::Tensor, slice::Slice},
    },
};

/// Longest index accepted inside an index group, in decimal digits.
pub const MAX_INDEX_DIGITS: usize = 9;

/// Parses a variable reference: a name followed by zero or more index groups.
///
/// Grammar: `reference := identifier ("[" index ("," index)* "]")*`
///
/// Returns `Ok(None)` without consuming anything when the next token is not
/// an identifier, so callers can fall back to another alternative.
///
/// # Errors
/// Returns a syntax error for a malformed index group.
pub fn parse_variable_ref(tokens: &mut TokenStream<'_>) -> EvalResult<Option<VariableRef>> {
    let Some(Token::Identifier(name)) = tokens.peek() else {
        return Ok(None);
    };
    let name = name.clone();
    tokens.next();

    let mut slices = Vec::new();
    while tokens.at(&Token::LBracket) {
        tokens.next();
        slices.push(Slice::new(parse_bracketed_list(tokens, parse_index)?));
    }

    Ok(Some(VariableRef::new(name, slices)))
}

/// Parses one index: a digit-only number of at most [`MAX_INDEX_DIGITS`]
/// digits.
fn parse_index(tokens: &mut TokenStream<'_>) -> EvalResult<usize> {
    let position = tokens.position();
    let text = tokens.text();

    let well_formed = matches!(tokens.peek(), Some(Token::Number(_)))
                      && text.len() <= MAX_INDEX_DIGITS
                      && text.bytes().all(|b| b.is_ascii_digit());
    if !well_formed {
        return syntax_error(position, Expected::Index);
    }

    let Ok(index) = text.parse() else {
        return syntax_error(position, Expected::Index);
    };
    tokens.next();

    Ok(index)
}

impl Session {
    /// Parses one operand.
    ///
    /// A variable reference is tried first; if the next token does not start
    /// one, a literal is parsed instead.
    ///
    /// # Errors
    /// Returns a syntax error when neither alternative matches, or the error
    /// of a malformed reference or literal.
    pub(crate) fn parse_operand(&mut self, tokens: &mut TokenStream<'_>) -> EvalResult<Operand> {
        match parse_variable_ref(tokens)? {
            Some(target) => Ok(Operand::Reference(target)),
            None => Ok(Operand::Literal(self.parse_literal(tokens)?)),
        }
    }

    /// Parses a number or an array literal.
    ///
    /// Grammar: `literal := number | "[" expression ("," expression)* "]"`
    ///
    /// Array elements are full expressions and are evaluated as they are
    /// parsed.
    fn parse_literal(&mut self, tokens: &mut TokenStream<'_>) -> EvalResult<Tensor> {
        let position = tokens.position();

        match tokens.peek() {
            Some(Token::Number(x)) => {
                let value = Tensor::Scalar(*x);
                tokens.next();
                Ok(value)
            },
            Some(Token::LBracket) => {
                tokens.next();
                let items = parse_bracketed_list(tokens, |tokens| self.eval_expression(tokens))?;
                Ok(Tensor::Container(items))
            },
            _ => syntax_error(position, Expected::Operand),
        }
    }
}
