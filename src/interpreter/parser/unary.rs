use std::iter::Peekable;

use crate::{
    ast::{Expr, LiteralValue},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{EXPRESSION_START, decode_yarn, expect, expect_type, is_article, unexpected},
        },
    },
};

/// Parses `NOT <expression>`.
pub fn parse_not<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::Not, 0)?.line;
    let expr = parse_expression(tokens)?;

    Ok(Expr::Not { expr: Box::new(expr),
                   line })
}

/// Parses an explicit cast expression.
///
/// Grammar: `cast := MAEK expression [A] type`
///
/// The article is optional, and is only taken as one when a type name
/// follows, so `MAEK A A NUMBR` casts the variable `A`.
pub fn parse_cast<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::Maek, 0)?.line;
    let expr = parse_expression(tokens)?;
    tokens.next_if(|t| is_article(t));
    let target = expect_type(tokens, line)?;

    Ok(Expr::Cast { expr: Box::new(expr),
                    target,
                    line })
}

/// Parses a literal or a variable reference.
///
/// # Errors
/// - `InvalidLiteral` for numbers that do not fit their type.
/// - `UnexpectedToken` for anything that cannot start an expression.
pub fn parse_primary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token>
{
    match tokens.next() {
        Some(token) if token.kind == TokenKind::Identifier => {
            Ok(Expr::Variable { name: token.lexeme.clone(),
                                line: token.line, })
        },
        Some(token) => {
            let value = parse_literal(token).map_err(|e| match e {
                                                ParseError::UnexpectedToken { .. } => {
                                                    unexpected(token, EXPRESSION_START)
                                                },
                                                other => other,
                                            })?;
            Ok(Expr::Literal { value,
                               line: token.line })
        },
        None => Err(ParseError::UnexpectedEndOfInput { expected: EXPRESSION_START.to_vec(),
                                                       line:     0, }),
    }
}

/// Converts a literal token into its value.
///
/// The `NOOB` type keyword doubles as the NOOB literal.
///
/// # Errors
/// - `InvalidLiteral` for numbers outside their type's range.
/// - `UnexpectedToken` for tokens that are not literals.
pub fn parse_literal(token: &Token) -> ParseResult<LiteralValue> {
    let invalid = || ParseError::InvalidLiteral { lexeme: token.lexeme.clone(),
                                                  line:   token.line, };
    match token.kind {
        TokenKind::Numbr => token.lexeme.parse().map(LiteralValue::Numbr).map_err(|_| invalid()),
        TokenKind::Numbar => token.lexeme
                                  .parse::<f64>()
                                  .ok()
                                  .filter(|n| n.is_finite())
                                  .map(LiteralValue::Numbar)
                                  .ok_or_else(invalid),
        TokenKind::Troof => Ok(LiteralValue::Troof(token.lexeme == "WIN")),
        TokenKind::Yarn => Ok(LiteralValue::Yarn(decode_yarn(&token.lexeme))),
        TokenKind::Type if token.lexeme == "NOOB" => Ok(LiteralValue::Noob),
        _ => Err(unexpected(token,
                            &[TokenKind::Numbr,
                              TokenKind::Numbar,
                              TokenKind::Yarn,
                              TokenKind::Troof])),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::lexer::tokenize;

    fn literal(source: &str) -> ParseResult<LiteralValue> {
        let tokens = tokenize(source).unwrap();
        parse_literal(&tokens[0])
    }

    #[test]
    fn literals() {
        assert_eq!(literal("42").unwrap(), LiteralValue::Numbr(42));
        assert_eq!(literal("-2.5").unwrap(), LiteralValue::Numbar(-2.5));
        assert_eq!(literal("WIN").unwrap(), LiteralValue::Troof(true));
        assert_eq!(literal("NOOB").unwrap(), LiteralValue::Noob);
        assert_eq!(literal(r#""O HAI""#).unwrap(), LiteralValue::Yarn("O HAI".into()));
    }

    #[test]
    fn oversized_integer_is_invalid() {
        assert!(matches!(literal("99999999999999999999"),
                         Err(ParseError::InvalidLiteral { .. })));
    }

    #[test]
    fn type_names_other_than_noob_are_not_literals() {
        assert!(matches!(literal("NUMBR"), Err(ParseError::UnexpectedToken { .. })));
    }
}
