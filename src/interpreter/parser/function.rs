use std::{iter::Peekable, rc::Rc};

use crate::{
    ast::{BreakScope, Expr, FunctionDef, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{BlockContext, ParseResult, parse_expression},
            utils::{expect, expect_identifier, expect_line_end, next_if_kind},
        },
    },
};

/// Parses a function definition.
///
/// Syntax:
/// ```text
///     HOW IZ I <name> [YR <param> (AN YR <param>)*]
///       <statements>
///     IF U SAY SO
/// ```
///
/// # Parameters
/// - `tokens`: Token stream positioned at `HOW IZ I`.
/// - `context`: Where the definition sits; the body is parsed as a function
///   body regardless.
///
/// # Returns
/// A `Statement::Function` node.
///
/// # Errors
/// - `DuplicateParameter` if a parameter name repeats.
/// - Propagates any errors from the body.
pub fn parse_function_definition<'a, I>(tokens: &mut Peekable<I>,
                                        context: BlockContext)
                                        -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::HowIzI, 0)?.line;
    let name = expect_identifier(tokens, line)?;

    let mut params: Vec<String> = Vec::new();
    if next_if_kind(tokens, TokenKind::Yr).is_some() {
        loop {
            let param = expect_identifier(tokens, line)?;
            if params.contains(&param) {
                return Err(ParseError::DuplicateParameter { name: param,
                                                            line });
            }
            params.push(param);

            if next_if_kind(tokens, TokenKind::An).is_none() {
                break;
            }
            expect(tokens, TokenKind::Yr, line)?;
        }
    }

    expect_line_end(tokens, line)?;
    let body = parse_block(tokens,
                           context.entering(BreakScope::Function),
                           &[TokenKind::IfUSaySo],
                           line)?;
    expect(tokens, TokenKind::IfUSaySo, line)?;

    log::debug!("parsed function {name} with {} parameter(s)", params.len());
    Ok(Statement::Function(Rc::new(FunctionDef { name,
                                                  params,
                                                  body,
                                                  line })))
}

/// Parses a function call expression.
///
/// Syntax: `I IZ <name> [YR <expr> (AN YR <expr>)*] MKAY`
///
/// # Returns
/// An `Expr::FunctionCall` node.
pub fn parse_call<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::IIz, 0)?.line;
    let name = expect_identifier(tokens, line)?;

    let mut arguments = Vec::new();
    if next_if_kind(tokens, TokenKind::Yr).is_some() {
        loop {
            arguments.push(parse_expression(tokens)?);
            if next_if_kind(tokens, TokenKind::An).is_none() {
                break;
            }
            expect(tokens, TokenKind::Yr, line)?;
        }
    }
    expect(tokens, TokenKind::Mkay, line)?;

    Ok(Expr::FunctionCall { name,
                            arguments,
                            line })
}
