use std::iter::Peekable;

use crate::{
    ast::{BreakScope, Expr, Statement},
    error::ParseError,
    interpreter::{
        lexer::{Token, TokenKind},
        parser::{
            binary::{parse_binary, parse_variadic},
            block::{parse_block, parse_declaration_block},
            function::parse_call,
            unary::{parse_cast, parse_not, parse_primary},
            utils::{
                EXPRESSION_START, expect, expect_line_end, peek_kind, skip_separators, unexpected,
            },
        },
        value::symbols::SymbolTable,
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// The output of a successful parse.
///
/// The symbol table holds the declaration block already folded to concrete
/// values. The evaluator takes ownership of it as its starting state.
#[derive(Debug, Clone, PartialEq)]
pub struct Program {
    /// Variables declared between `WAZZUP` and `BUHBYE`, plus `IT`.
    pub symbols: SymbolTable,
    /// The main statement list.
    pub body:    Vec<Statement>,
}

/// Where a statement sits, which decides how `GTFO` and `FOUND YR` read.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockContext {
    /// Whether any enclosing block is a function body.
    pub in_function: bool,
    /// The construct a `GTFO` here would leave.
    pub innermost:   BreakScope,
}

impl BlockContext {
    /// The context of the main statement list.
    pub const TOP_LEVEL: Self = Self { in_function: false,
                                       innermost:   BreakScope::Program, };

    /// The context for the body of a nested construct.
    #[must_use]
    pub const fn entering(self, scope: BreakScope) -> Self {
        Self { in_function: self.in_function || matches!(scope, BreakScope::Function),
               innermost:   scope, }
    }
}

/// Parses a complete program.
///
/// Grammar:
/// ```text
///     program := NL* HAI [version] NL [WAZZUP NL decl* BUHBYE NL] stmt* KTHXBYE NL*
/// ```
///
/// # Parameters
/// - `tokens`: The full token sequence, newlines included.
///
/// # Returns
/// The statement list and the folded declaration table.
///
/// # Errors
/// Any syntax error, including tokens after `KTHXBYE`.
///
/// # Example
/// ```
/// use lolterpreter::interpreter::{
///     lexer::tokenize,
///     parser::core::parse_program,
///     value::core::Value,
/// };
///
/// let source = "HAI 1.2\nWAZZUP\nI HAS A X ITZ SUM OF 4 AN 6\nBUHBYE\nVISIBLE X\nKTHXBYE\n";
/// let program = parse_program(&tokenize(source).unwrap()).unwrap();
///
/// assert_eq!(program.symbols.get("X"), Some(&Value::Numbr(10)));
/// assert_eq!(program.body.len(), 1);
/// ```
pub fn parse_program(tokens: &[Token]) -> ParseResult<Program> {
    let mut tokens = tokens.iter().peekable();

    skip_separators(&mut tokens);
    let line = expect(&mut tokens, TokenKind::Hai, 1)?.line;
    // Version numbers are accepted and ignored.
    tokens.next_if(|t| matches!(t.kind, TokenKind::Numbar | TokenKind::Numbr));
    expect_line_end(&mut tokens, line)?;
    skip_separators(&mut tokens);

    let symbols = if peek_kind(&mut tokens) == Some(TokenKind::Wazzup) {
        parse_declaration_block(&mut tokens)?
    } else {
        SymbolTable::new()
    };

    let body = parse_block(&mut tokens, BlockContext::TOP_LEVEL, &[TokenKind::Kthxbye], line)?;
    expect(&mut tokens, TokenKind::Kthxbye, line)?;

    skip_separators(&mut tokens);
    if let Some(token) = tokens.next() {
        return Err(unexpected(token, &[]));
    }

    log::debug!("parsed {} statements and {} declarations",
                body.len(),
                symbols.len().saturating_sub(1));
    Ok(Program { symbols, body })
}

/// Parses a full expression.
///
/// All operators are prefix operators, so the first token alone decides
/// which construct follows.
///
/// Grammar:
/// ```text
///     expression := literal | identifier | call
///                 | binary_op expression AN expression
///                 | NOT expression
///                 | variadic_op expression (AN expression)* [MKAY]
///                 | MAEK expression [A] type
/// ```
///
/// # Parameters
/// - `tokens`: Token iterator positioned at the first token of the
///   expression.
///
/// # Returns
/// The parsed expression node.
pub fn parse_expression<'a, I>(tokens: &mut Peekable<I>) -> ParseResult<Expr>
    where I: Iterator<Item = &'a Token> + Clone
{
    let Some(token) = tokens.peek().copied() else {
        return Err(ParseError::UnexpectedEndOfInput { expected: EXPRESSION_START.to_vec(),
                                                      line:     0, });
    };

    match token.kind {
        TokenKind::SumOf
        | TokenKind::DiffOf
        | TokenKind::ProduktOf
        | TokenKind::QuoshuntOf
        | TokenKind::ModOf
        | TokenKind::BiggrOf
        | TokenKind::SmallrOf
        | TokenKind::BothOf
        | TokenKind::EitherOf
        | TokenKind::WonOf
        | TokenKind::BothSaem
        | TokenKind::Diffrint => parse_binary(tokens),
        TokenKind::AllOf | TokenKind::AnyOf | TokenKind::Smoosh => parse_variadic(tokens),
        TokenKind::Not => parse_not(tokens),
        TokenKind::Maek => parse_cast(tokens),
        TokenKind::IIz => parse_call(tokens),
        _ => parse_primary(tokens),
    }
}
