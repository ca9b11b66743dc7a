use std::iter::Peekable;

use crate::{
    ast::{BreakScope, Case, Expr, GuardedBranch, LiteralValue, LoopCondition, LoopOperation,
          Statement, ValueType, VariadicOperator},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            block::parse_block,
            core::{BlockContext, ParseResult, parse_expression},
            unary::parse_literal,
            utils::{expect, expect_identifier, expect_line_end, next_if_kind, skip_separators},
        },
    },
};

/// Parses an `O RLY?` conditional.
///
/// Syntax:
/// ```text
///     O RLY?
///       YA RLY
///         <statements>
///       MEBBE <guard>
///         <statements>
///       NO WAI
///         <statements>
///     OIC
/// ```
/// Any number of `MEBBE` arms may appear; `NO WAI` is optional.
///
/// # Errors
/// - `NonBooleanGuard` if a `MEBBE` guard can never produce a TROOF.
/// - `UnexpectedToken` / `UnexpectedEndOfInput` for malformed structure.
pub fn parse_conditional<'a, I>(tokens: &mut Peekable<I>,
                                context: BlockContext)
                                -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    const ARM_END: &[TokenKind] = &[TokenKind::Mebbe, TokenKind::NoWai, TokenKind::Oic];

    let line = expect(tokens, TokenKind::ORly, 0)?.line;
    expect_line_end(tokens, line)?;
    skip_separators(tokens);

    let ya_rly = expect(tokens, TokenKind::YaRly, line)?;
    expect_line_end(tokens, ya_rly.line)?;
    let then_branch = parse_block(tokens, context, ARM_END, ya_rly.line)?;

    let mut guards = Vec::new();
    while let Some(mebbe) = next_if_kind(tokens, TokenKind::Mebbe) {
        let condition = parse_expression(tokens)?;
        if !is_boolean_guard(&condition) {
            return Err(ParseError::NonBooleanGuard { line: mebbe.line });
        }
        expect_line_end(tokens, mebbe.line)?;
        let body = parse_block(tokens, context, ARM_END, mebbe.line)?;
        guards.push(GuardedBranch { condition,
                                    body,
                                    line: mebbe.line });
    }

    let else_branch = match next_if_kind(tokens, TokenKind::NoWai) {
        Some(no_wai) => {
            expect_line_end(tokens, no_wai.line)?;
            Some(parse_block(tokens, context, &[TokenKind::Oic], no_wai.line)?)
        },
        None => None,
    };

    expect(tokens, TokenKind::Oic, line)?;
    Ok(Statement::Conditional { then_branch,
                                guards,
                                else_branch,
                                line })
}

/// Returns `true` if `expr` can evaluate to a TROOF.
///
/// Comparisons, boolean operators, `NOT`, TROOF literals and casts to TROOF
/// always do. Variables and calls might, so they are accepted too.
fn is_boolean_guard(expr: &Expr) -> bool {
    match expr {
        Expr::BinaryOp { op, .. } => op.is_boolean(),
        Expr::Variadic { op, .. } => {
            matches!(op, VariadicOperator::AllOf | VariadicOperator::AnyOf)
        },
        Expr::Cast { target, .. } => *target == ValueType::Troof,
        Expr::Literal { value, .. } => matches!(value, LiteralValue::Troof(_)),
        Expr::Not { .. } | Expr::Variable { .. } | Expr::FunctionCall { .. } => true,
    }
}

/// Parses a `WTF?` switch.
///
/// Syntax:
/// ```text
///     WTF?
///       OMG <literal>
///         <statements>
///       OMGWTF
///         <statements>
///     OIC
/// ```
///
/// # Errors
/// - `DuplicateCase` if two `OMG` arms use the same literal.
/// - `UnexpectedToken` if an `OMG` is not followed by a literal.
pub fn parse_switch<'a, I>(tokens: &mut Peekable<I>,
                           context: BlockContext)
                           -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    const CASE_END: &[TokenKind] = &[TokenKind::Omg, TokenKind::Omgwtf, TokenKind::Oic];

    let line = expect(tokens, TokenKind::Wtf, 0)?.line;
    expect_line_end(tokens, line)?;
    skip_separators(tokens);

    let body_context = context.entering(BreakScope::Switch);
    let mut cases: Vec<Case> = Vec::new();
    while let Some(omg) = next_if_kind(tokens, TokenKind::Omg) {
        let Some(label) = tokens.next() else {
            return Err(ParseError::UnexpectedEndOfInput { expected: vec![TokenKind::Numbr,
                                                                         TokenKind::Numbar,
                                                                         TokenKind::Yarn,
                                                                         TokenKind::Troof],
                                                          line:     omg.line, });
        };
        let literal = parse_literal(label)?;
        if cases.iter().any(|c| c.literal == literal) {
            return Err(ParseError::DuplicateCase { literal: literal.to_string(),
                                                   line:    omg.line, });
        }
        expect_line_end(tokens, omg.line)?;
        let body = parse_block(tokens, body_context, CASE_END, omg.line)?;
        cases.push(Case { literal,
                          body,
                          line: omg.line });
    }

    let default = match next_if_kind(tokens, TokenKind::Omgwtf) {
        Some(omgwtf) => {
            expect_line_end(tokens, omgwtf.line)?;
            Some(parse_block(tokens, body_context, &[TokenKind::Oic], omgwtf.line)?)
        },
        None => None,
    };

    expect(tokens, TokenKind::Oic, line)?;
    Ok(Statement::Switch { cases,
                           default,
                           line })
}

/// Parses a labeled loop.
///
/// Syntax:
/// ```text
///     IM IN YR <label> [UPPIN|NERFIN YR <variable>] [TIL|WILE <expression>]
///       <statements>
///     IM OUTTA YR <label>
/// ```
///
/// # Errors
/// `MismatchedLoopLabel` if the closing label differs from the opening one.
pub fn parse_loop<'a, I>(tokens: &mut Peekable<I>, context: BlockContext) -> ParseResult<Statement>
    where I: Iterator<Item = &'a Token> + Clone
{
    let line = expect(tokens, TokenKind::ImInYr, 0)?.line;
    let label = expect_identifier(tokens, line)?;

    let operation = if next_if_kind(tokens, TokenKind::Uppin).is_some() {
        Some(LoopOperation::Uppin)
    } else if next_if_kind(tokens, TokenKind::Nerfin).is_some() {
        Some(LoopOperation::Nerfin)
    } else {
        None
    };
    let step = match operation {
        Some(operation) => {
            expect(tokens, TokenKind::Yr, line)?;
            Some((operation, expect_identifier(tokens, line)?))
        },
        None => None,
    };

    let condition = if next_if_kind(tokens, TokenKind::Til).is_some() {
        Some(LoopCondition::Til(parse_expression(tokens)?))
    } else if next_if_kind(tokens, TokenKind::Wile).is_some() {
        Some(LoopCondition::Wile(parse_expression(tokens)?))
    } else {
        None
    };

    expect_line_end(tokens, line)?;
    let body = parse_block(tokens,
                           context.entering(BreakScope::Loop),
                           &[TokenKind::ImOuttaYr],
                           line)?;

    let close = expect(tokens, TokenKind::ImOuttaYr, line)?;
    let closing = expect_identifier(tokens, close.line)?;
    if closing != label {
        return Err(ParseError::MismatchedLoopLabel { opening: label,
                                                     closing,
                                                     line: close.line });
    }

    Ok(Statement::Loop { label,
                         step,
                         condition,
                         body,
                         line })
}
