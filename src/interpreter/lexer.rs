use std::ops::Range;

use logos::Logos;

use crate::error::{Expected, SyntaxError};

/// Represents a lexical token of a statement.
#[derive(Logos, Debug, PartialEq, Clone)]
#[logos(skip r"[ \t\r\n\f]+")]
pub enum Token {
    /// Numeric literal tokens, such as `0`, `42`, `3.25` or `7.`.
    ///
    /// A number is either a single `0` or starts with a non-zero digit, so
    /// `012` lexes as `0` followed by `12`.
    #[regex(r"(0|[1-9][0-9]*)(\.[0-9]*)?", parse_number)]
    Number(f64),
    /// Identifier tokens; variable names such as `a` or `row_2`.
    #[regex(r"[a-zA-Z_][a-zA-Z0-9_]*", |lex| lex.slice().to_string())]
    Identifier(String),
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
    /// `[`
    #[token("[")]
    LBracket,
    /// `]`
    #[token("]")]
    RBracket,
    /// `,`
    #[token(",")]
    Comma,
    /// `;`
    #[token(";")]
    Semicolon,
    /// `=`
    #[token("=")]
    Equals,
}

/// Parses a numeric literal from the current token slice.
///
/// # Returns
/// - `Some(f64)`: The parsed value if successful.
/// - `None`: If the token slice is not a valid float.
fn parse_number(lex: &logos::Lexer<Token>) -> Option<f64> {
    lex.slice().parse().ok()
}

/// The next lexeme of a [`TokenStream`].
///
/// `token` is `None` for text the lexer does not recognize; the parser then
/// reports whatever it expected at that position.
#[derive(Debug, Clone)]
struct Lookahead {
    token: Option<Token>,
    span:  Range<usize>,
}

/// A lazily lexed token stream over a buffer, starting at a byte position.
///
/// Positions reported by the stream are absolute offsets into the whole
/// buffer, so errors can point at the right column of the input line.
pub struct TokenStream<'src> {
    lexer:    logos::Lexer<'src, Token>,
    source:   &'src str,
    base:     usize,
    peeked:   Option<Option<Lookahead>>,
    consumed: usize,
}

impl<'src> TokenStream<'src> {
    /// Starts lexing `buffer` at byte offset `position`.
    ///
    /// # Errors
    /// Returns a syntax error if `position` is past the end of the buffer or
    /// not on a character boundary.
    pub fn new(buffer: &'src str, position: usize) -> Result<Self, SyntaxError> {
        let source = buffer.get(position..)
                           .ok_or(SyntaxError::new(position, Expected::Statement))?;

        Ok(Self { lexer: Token::lexer(source),
                  source,
                  base: position,
                  peeked: None,
                  consumed: position })
    }

    fn lookahead(&mut self) -> Option<&Lookahead> {
        if self.peeked.is_none() {
            let next = self.lexer.next().map(|result| Lookahead { token: result.ok(),
                                                                   span:  self.lexer.span(), });
            self.peeked = Some(next);
        }

        self.peeked.as_ref().and_then(Option::as_ref)
    }

    /// Returns the next token without consuming it.
    ///
    /// `None` means either the end of the input or unrecognized text.
    pub fn peek(&mut self) -> Option<&Token> {
        self.lookahead().and_then(|lookahead| lookahead.token.as_ref())
    }

    /// Returns `true` if the next token is `token`.
    pub fn at(&mut self, token: &Token) -> bool {
        self.peek() == Some(token)
    }

    /// Returns `true` once every token has been consumed.
    ///
    /// Unrecognized text is not the end of the input.
    pub fn is_at_end(&mut self) -> bool {
        self.lookahead().is_none()
    }

    /// Absolute position of the next token, or of the end of the buffer.
    pub fn position(&mut self) -> usize {
        let base = self.base;
        let end = base + self.source.len();
        self.lookahead().map_or(end, |lookahead| base + lookahead.span.start)
    }

    /// Source text of the next token, or `""` at the end of the input.
    pub fn text(&mut self) -> &'src str {
        let source = self.source;
        self.lookahead()
            .map_or("", |lookahead| source.get(lookahead.span.clone()).unwrap_or(""))
    }

    /// Absolute position just past the last consumed token.
    #[must_use]
    pub const fn consumed(&self) -> usize {
        self.consumed
    }

    /// Consumes and returns the next token.
    ///
    /// Unrecognized text is never consumed; `None` is returned instead.
    pub fn next(&mut self) -> Option<Token> {
        self.lookahead()?;
        let lookahead = self.peeked.take().flatten()?;

        match lookahead.token {
            Some(token) => {
                self.consumed = self.base + lookahead.span.end;
                Some(token)
            },
            None => {
                self.peeked = Some(Some(lookahead));
                None
            },
        }
    }

    /// Consumes the next token if it is `token`, otherwise reports `expected`
    /// at the current position.
    ///
    /// # Errors
    /// Returns a syntax error when the next token differs.
    pub fn expect(&mut self, token: &Token, expected: Expected) -> Result<(), SyntaxError> {
        if self.at(token) {
            self.next();
            return Ok(());
        }

        Err(SyntaxError::new(self.position(), expected))
    }
}
