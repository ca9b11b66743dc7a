use std::iter::Peekable;

use crate::{
    ast::{Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            control::{parse_conditional, parse_loop, parse_switch},
            core::{BlockContext, ParseResult, parse_expression},
            function::parse_function_definition,
            utils::{
                at_typed_article, expect, expect_identifier, expect_line_end, expect_type,
                next_if_kind, peek_kind,
            },
        },
    },
};

/// Parses a single statement, including the newline or comma ending it.
///
/// The first token picks the construct. An identifier needs one more token
/// of lookahead: `R` makes an assignment, `IS NOW A` a cast, and anything
/// else leaves the identifier as the start of an expression statement.
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the statement.
/// - `context`: Where the statement sits.
///
/// # Returns
/// A parsed [`Statement`] node.
pub fn parse_statement<'a, I>(tokens: &mut Peekable<I>,
                              context: BlockContext)
                              -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: Vec::new(),
                                                      line:     0, });
    };
    let line = token.line;

    let statement = match token.kind {
        TokenKind::Visible => parse_print(tokens)?,
        TokenKind::Gimmeh => {
            tokens.next();
            Statement::Input { name: expect_identifier(tokens, line)?,
                               line }
        },
        TokenKind::IHasA => {
            tokens.next();
            let (name, value) = parse_declaration_tail(tokens, line)?;
            Statement::Declaration { name, value, line }
        },
        TokenKind::ORly => parse_conditional(tokens, context)?,
        TokenKind::Wtf => parse_switch(tokens, context)?,
        TokenKind::ImInYr => parse_loop(tokens, context)?,
        TokenKind::HowIzI => parse_function_definition(tokens, context)?,
        TokenKind::FoundYr => {
            tokens.next();
            if !context.in_function {
                return Err(ParseError::ReturnOutsideFunction { line });
            }
            Statement::Return { value: parse_expression(tokens)?,
                                line }
        },
        TokenKind::Gtfo => {
            tokens.next();
            Statement::Break { scope: context.innermost,
                               line }
        },
        TokenKind::Identifier => parse_identifier_statement(tokens, token)?,
        _ => Statement::Expression { expr: parse_expression(tokens)?,
                                     line },
    };

    log::trace!("parsed statement on line {line}");
    expect_line_end(tokens, line)?;
    Ok(statement)
}

/// Parses the rest of a declaration after `I HAS A`.
///
/// Grammar: `declaration := I_HAS_A identifier [ITZ (A type | expression)]`
///
/// `ITZ A <type>` is turned into a literal holding the type's zero value.
///
/// # Returns
/// The variable name and its initializer, if any.
pub fn parse_declaration_tail<'a, I>(tokens: &mut Peekable<I>,
                                     line: usize)
                                     -> ParseResult<(String, Option<Expr>)>
    where I: Iterator<Item = &'a Token> + Clone
{
    let name = expect_identifier(tokens, line)?;
    if next_if_kind(tokens, TokenKind::Itz).is_none() {
        return Ok((name, None));
    }

    let value = if at_typed_article(tokens) {
        tokens.next();
        let target = expect_type(tokens, line)?;
        Expr::Literal { value: target.zero(),
                        line }
    } else {
        parse_expression(tokens)?
    };
    Ok((name, Some(value)))
}

/// Parses `VISIBLE expr ((AN)? expr)* [!]`.
///
/// Operands may be separated by `AN` or simply written one after another. A
/// trailing `!` suppresses the line break.
fn parse_print<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::Visible, 0)?.line;
    let mut operands = vec![parse_expression(tokens)?];
    let mut newline = true;

    loop {
        match peek_kind(tokens) {
            Some(TokenKind::An) => {
                tokens.next();
                operands.push(parse_expression(tokens)?);
            },
            Some(TokenKind::Bang) => {
                tokens.next();
                newline = false;
                break;
            },
            None | Some(TokenKind::NewLine | TokenKind::Comma) => break,
            Some(_) => operands.push(parse_expression(tokens)?),
        }
    }

    Ok(Statement::Print { operands,
                          newline,
                          line })
}

/// Parses a statement that starts with an identifier.
///
/// ```text
///     identifier R expression      assignment
///     identifier IS_NOW_A type     in-place cast
///     expression                   anything else, stored in IT
/// ```
fn parse_identifier_statement<'a, I>(tokens: &mut Peekable<I>,
                                     first: &Token)
                                     -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = first.line;
    let mut lookahead = tokens.clone();
    lookahead.next();

    match lookahead.peek().map(|t| t.kind) {
        Some(TokenKind::R) => {
            let name = expect_identifier(tokens, line)?;
            tokens.next();
            Ok(Statement::Assignment { name,
                                       value: parse_expression(tokens)?,
                                       line })
        },
        Some(TokenKind::IsNowA) => {
            let name = expect_identifier(tokens, line)?;
            tokens.next();
            Ok(Statement::Cast { name,
                                 target: expect_type(tokens, line)?,
                                 line })
        },
        _ => Ok(Statement::Expression { expr: parse_expression(tokens)?,
                                        line }),
    }
}
