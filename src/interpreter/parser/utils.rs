use crate::{
    error::{Expected, SyntaxError},
    interpreter::{
        evaluator::core::EvalResult,
        lexer::{Token, TokenStream},
    },
};

/// Parses a comma-separated list of items up to and including the closing
/// `]`. The opening `[` must already be consumed.
///
/// Grammar: `list := item ("," item)* "]"`
///
/// Lists are never empty: the first item is parsed unconditionally.
///
/// # Errors
/// Returns the error of the first item that fails to parse, or a syntax
/// error if the list is not closed by `]`.
pub(in crate::interpreter::parser) fn parse_bracketed_list<'src, T>(
    tokens: &mut TokenStream<'src>,
    mut parse_item: impl FnMut(&mut TokenStream<'src>) -> EvalResult<T>)
    -> EvalResult<Vec<T>> {
    let mut items = vec![parse_item(tokens)?];

    while tokens.at(&Token::Comma) {
        tokens.next();
        items.push(parse_item(tokens)?);
    }

    tokens.expect(&Token::RBracket, Expected::ClosingBracket)?;
    Ok(items)
}

/// Builds a positioned syntax error for the evaluator's error type.
pub(in crate::interpreter::parser) fn syntax_error<T>(position: usize,
                                                      expected: Expected)
                                                      -> EvalResult<T> {
    Err(SyntaxError::new(position, expected).into())
}
