use std::iter::Peekable;

use crate::{
    ast::{BinaryOperator, Expr, VariadicOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            core::{ParseResult, parse_expression},
            utils::{expect, next_if_kind, peek_kind, unexpected},
        },
    },
};

/// Maps an operator keyword to its binary operator.
const fn binary_operator(kind: TokenKind) -> Option<BinaryOperator> {
    Some(match kind {
        TokenKind::SumOf => BinaryOperator::Sum,
        TokenKind::DiffOf => BinaryOperator::Diff,
        TokenKind::ProduktOf => BinaryOperator::Produkt,
        TokenKind::QuoshuntOf => BinaryOperator::Quoshunt,
        TokenKind::ModOf => BinaryOperator::Mod,
        TokenKind::BiggrOf => BinaryOperator::Biggr,
        TokenKind::SmallrOf => BinaryOperator::Smallr,
        TokenKind::BothOf => BinaryOperator::BothOf,
        TokenKind::EitherOf => BinaryOperator::EitherOf,
        TokenKind::WonOf => BinaryOperator::WonOf,
        TokenKind::BothSaem => BinaryOperator::BothSaem,
        TokenKind::Diffrint => BinaryOperator::Diffrint,
        _ => return None,
    })
}

/// Parses a two-operand operation.
///
/// Grammar: `binary := op expression AN expression`
///
/// Operands are full expressions, so `SUM OF PRODUKT OF 2 AN 3 AN 4` reads as
/// `(2 * 3) + 4`.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the operator keyword.
///
/// # Returns
/// An `Expr::BinaryOp` node.
pub fn parse_binary<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: Vec::new(),
                                                      line:     0, });
    };
    let Some(op) = binary_operator(token.kind) else {
        return Err(unexpected(token, &[TokenKind::SumOf]));
    };
    let line = token.line;

    let left = parse_expression(tokens)?;
    expect(tokens, TokenKind::An, line)?;
    let right = parse_expression(tokens)?;

    Ok(Expr::BinaryOp { left: Box::new(left),
                        op,
                        right: Box::new(right),
                        line })
}

/// Parses `ALL OF`, `ANY OF` or `SMOOSH`.
///
/// Grammar: `variadic := op expression (AN expression)* [MKAY]`
///
/// The operand list ends at `MKAY`, which is consumed, or at the first token
/// that is neither `AN` nor `MKAY`, such as the end of the line.
///
/// # Returns
/// An `Expr::Variadic` node.
pub fn parse_variadic<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.next() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: Vec::new(),
                                                      line:     0, });
    };
    let op = match token.kind {
        TokenKind::AllOf => VariadicOperator::AllOf,
        TokenKind::AnyOf => VariadicOperator::AnyOf,
        TokenKind::Smoosh => VariadicOperator::Smoosh,
        _ => return Err(unexpected(token, &[TokenKind::AllOf, TokenKind::AnyOf, TokenKind::Smoosh])),
    };
    let line = token.line;

    let mut operands = vec![parse_expression(tokens)?];
    loop {
        match peek_kind(tokens) {
            Some(TokenKind::An) => {
                tokens.next();
                operands.push(parse_expression(tokens)?);
            },
            Some(TokenKind::Mkay) => {
                next_if_kind(tokens, TokenKind::Mkay);
                break;
            },
            _ => break,
        }
    }

    Ok(Expr::Variadic { op,
                        operands,
                        line })
}
