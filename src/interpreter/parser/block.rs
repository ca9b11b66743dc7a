use std::iter::Peekable;

use crate::{
    ast::Statement,
    error::ParseError,
    interpreter::{
        evaluator::constant::fold,
        lexer::{Token, TokenKind},
        parser::{
            core::{BlockContext, ParseResult},
            statement::{parse_declaration_tail, parse_statement},
            utils::{expect, expect_line_end, skip_separators, unexpected},
        },
        value::{core::Value, symbols::SymbolTable},
    },
};

/// Parses statements until one of `terminators` is next.
///
/// The terminator itself is left in the stream so the caller can decide what
/// it means (`MEBBE`, `NO WAI` and `OIC` all close a `YA RLY` arm, for
/// instance).
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first statement.
/// - `context`: Where the block sits.
/// - `terminators`: Token kinds that end the block.
/// - `line`: Line of the construct that opened the block.
///
/// # Returns
/// The statements of the block.
///
/// # Errors
/// `UnexpectedEndOfInput` naming the terminators when the input runs out,
/// plus any error from the statements themselves.
pub fn parse_block<'a, I>(tokens: &mut Peekable<I>,
                          context: BlockContext,
                          terminators: &[TokenKind],
                          line: usize)
                          -> ParseResult<Vec<Statement>>
    where I: Iterator<Item = &'a Token> + Clone
{
    let mut statements = Vec::new();
    loop {
        skip_separators(tokens);
        match tokens.peek() {
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: terminators.to_vec(),
                                                              line });
            },
            Some(token) if terminators.contains(&token.kind) => return Ok(statements),
            Some(_) => statements.push(parse_statement(tokens, context)?),
        }
    }
}

/// Parses the `WAZZUP ... BUHBYE` block into a ready symbol table.
///
/// Each initializer is folded to a concrete value right away, in order, so a
/// declaration can use the variables declared above it.
///
/// # Errors
/// - `InvalidDeclaration` when an initializer calls a function or refers to
///   a variable not yet declared.
/// - `UnexpectedToken` for anything other than `I HAS A` inside the block.
pub fn parse_declaration_block<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<SymbolTable>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::Wazzup, 0)?.line;
    expect_line_end(tokens, line)?;

    let mut symbols = SymbolTable::new();
    loop {
        skip_separators(tokens);
        match tokens.next() {
            Some(token) if token.kind == TokenKind::Buhbye => {
                expect_line_end(tokens, token.line)?;
                return Ok(symbols);
            },
            Some(token) if token.kind == TokenKind::IHasA => {
                let (name, initializer) = parse_declaration_tail(tokens, token.line)?;
                let value = match initializer {
                    Some(expr) => fold(&expr, &symbols).map_err(|reason| {
                                                           ParseError::InvalidDeclaration {
                                                               name: name.clone(),
                                                               reason,
                                                               line: token.line,
                                                           }
                                                       })?,
                    None => Value::Noob,
                };
                log::trace!("declared {name} = {value}");
                symbols.declare(&name, value);
                expect_line_end(tokens, token.line)?;
            },
            Some(token) => return Err(unexpected(token, &[TokenKind::IHasA, TokenKind::Buhbye])),
            None => {
                return Err(ParseError::UnexpectedEndOfInput { expected: vec![TokenKind::Buhbye],
                                                              line });
            },
        }
    }
}
