use std::iter::Peekable;

use crate::{
    ast::ValueType,
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::core::ParseResult,
    },
};

/// Token kinds that can start an expression, used in error messages.
pub(in crate::interpreter::parser) const EXPRESSION_START: &[TokenKind] =
    &[TokenKind::Identifier,
      TokenKind::Numbr,
      TokenKind::Numbar,
      TokenKind::Yarn,
      TokenKind::Troof];

/// Returns the kind of the next token without consuming it.
pub(in crate::interpreter::parser) fn peek_kind<'a, I>(tokens: &mut Peekable<I>)
                                                       -> Option<TokenKind>
    where I: Iterator<Item = &'a Token>
{
    tokens.peek().map(|t| t.kind)
}

/// Consumes the next token if it has the given kind.
pub(in crate::interpreter::parser) fn next_if_kind<'a, I>(tokens: &mut Peekable<I>,
                                                          kind: TokenKind)
                                                          -> Option<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    tokens.next_if(|t| t.kind == kind)
}

/// Builds an `UnexpectedToken` error for `token`.
pub(in crate::interpreter::parser) fn unexpected(token: &Token,
                                                 expected: &[TokenKind])
                                                 -> ParseError {
    let found = match token.kind {
        TokenKind::Yarn => format!("{} {}", token.kind.describe(), token.lexeme),
        TokenKind::Identifier
        | TokenKind::Numbr
        | TokenKind::Numbar
        | TokenKind::Troof
        | TokenKind::Type => format!("{} '{}'", token.kind.describe(), token.lexeme),
        kind => kind.describe().to_string(),
    };
    ParseError::UnexpectedToken { expected: expected.to_vec(),
                                  found,
                                  line: token.line,
                                  col: token.col }
}

/// Consumes a token of the given kind.
///
/// # Parameters
/// - `tokens`: Token iterator.
/// - `kind`: The required token kind.
/// - `line`: Line reported if the input ends here.
///
/// # Returns
/// The consumed token.
///
/// # Errors
/// - `UnexpectedToken` if the next token has a different kind.
/// - `UnexpectedEndOfInput` if there are no tokens left.
pub(in crate::interpreter::parser) fn expect<'a, I>(tokens: &mut Peekable<I>,
                                                    kind: TokenKind,
                                                    line: usize)
                                                    -> ParseResult<&'a Token>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == kind => Ok(token),
        Some(token) => Err(unexpected(token, &[kind])),
        None => Err(ParseError::UnexpectedEndOfInput { expected: vec![kind],
                                                       line }),
    }
}

/// Parses a plain identifier and returns its name.
pub(in crate::interpreter::parser) fn expect_identifier<'a, I>(tokens: &mut Peekable<I>,
                                                               line: usize)
                                                               -> ParseResult<String>
    where I: Iterator<Item = &'a Token>
{
    expect(tokens, TokenKind::Identifier, line).map(|t| t.lexeme.clone())
}

/// Parses one of the five type keywords.
pub(in crate::interpreter::parser) fn expect_type<'a, I>(tokens: &mut Peekable<I>,
                                                         line: usize)
                                                         -> ParseResult<ValueType>
    where I: Iterator<Item = &'a Token>
{
    let token = expect(tokens, TokenKind::Type, line)?;
    ValueType::from_keyword(&token.lexeme).ok_or_else(|| unexpected(token, &[TokenKind::Type]))
}

/// Returns `true` for the `A` that introduces a type name.
pub(in crate::interpreter::parser) fn is_article(token: &Token) -> bool {
    token.kind == TokenKind::Identifier && token.lexeme == "A"
}

/// Returns `true` if the next two tokens are `A <type>`.
pub(in crate::interpreter::parser) fn at_typed_article<'a, I>(tokens: &Peekable<I>) -> bool
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut lookahead = tokens.clone();
    matches!(lookahead.next(), Some(t) if is_article(t))
    && matches!(lookahead.next(), Some(t) if t.kind == TokenKind::Type)
}

/// Skips any run of newlines and commas.
pub(in crate::interpreter::parser) fn skip_separators<'a, I>(tokens: &mut Peekable<I>)
    where I: Iterator<Item = &'a Token>
{
    while tokens.next_if(|t| matches!(t.kind, TokenKind::NewLine | TokenKind::Comma))
                .is_some()
    {}
}

/// Consumes the newline or comma that ends a statement.
///
/// # Errors
/// - `UnexpectedToken` if anything else follows the statement.
/// - `UnexpectedEndOfInput` if the input ends instead.
pub(in crate::interpreter::parser) fn expect_line_end<'a, I>(tokens: &mut Peekable<I>,
                                                             line: usize)
                                                             -> ParseResult<()>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if matches!(token.kind, TokenKind::NewLine | TokenKind::Comma) => Ok(()),
        Some(token) => Err(unexpected(token, &[TokenKind::NewLine])),
        None => Err(ParseError::UnexpectedEndOfInput { expected: vec![TokenKind::NewLine],
                                                       line }),
    }
}

/// Strips the quotes from a YARN lexeme and decodes its escapes.
///
/// `\n`, `\t`, `\r`, `\0`, `\"`, `\'` and `\\` are recognized. Any other
/// backslash sequence is kept as written.
pub(in crate::interpreter::parser) fn decode_yarn(lexeme: &str) -> String {
    let inner = lexeme.strip_prefix('"')
                      .and_then(|s| s.strip_suffix('"'))
                      .unwrap_or(lexeme);
    let mut decoded = String::with_capacity(inner.len());
    let mut chars = inner.chars();

    while let Some(c) = chars.next() {
        if c != '\\' {
            decoded.push(c);
            continue;
        }
        match chars.next() {
            Some('n') => decoded.push('\n'),
            Some('t') => decoded.push('\t'),
            Some('r') => decoded.push('\r'),
            Some('0') => decoded.push('\0'),
            Some(c @ ('"' | '\'' | '\\')) => decoded.push(c),
            Some(other) => {
                decoded.push('\\');
                decoded.push(other);
            },
            None => decoded.push('\\'),
        }
    }
    decoded
}

#[cfg(test)]
mod tests {
    use super::decode_yarn;

    #[test]
    fn escapes_are_decoded() {
        assert_eq!(decode_yarn(r#""A\tB\n""#), "A\tB\n");
        assert_eq!(decode_yarn(r#""SAY \"HAI\"""#), "SAY \"HAI\"");
        assert_eq!(decode_yarn(r#""C:\\LOL""#), "C:\\LOL");
    }

    #[test]
    fn unknown_escapes_are_kept() {
        assert_eq!(decode_yarn(r#""\q""#), "\\q");
    }
}
