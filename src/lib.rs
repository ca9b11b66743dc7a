//! # lolterpreter
//!
//! lolterpreter is a LOLCODE interpreter written in Rust.
//! It tokenizes, parses and evaluates LOLCODE programs with support for
//! dynamic typing, the implicit `IT` register, conditionals, switches,
//! labeled loops and user-defined functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        evaluator::core::Context,
        io::{InputSource, OutputSink},
        lexer::Token,
        parser::core::{Program, parse_program},
        value::symbols::SymbolTable,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Statement` and `Expr` enums and the related
/// types that represent a LOLCODE program as a tree. The AST is built by the
/// parser and traversed by the evaluator.
///
/// # Responsibilities
/// - Defines one variant per statement and operator.
/// - Attaches source lines to every node for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// This module defines all errors that can be raised while running a
/// program. Each carries the source position of the failure.
///
/// # Responsibilities
/// - Defines one error enum per phase and an aggregate `Error`.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and I/O collaborators.
///
/// # Responsibilities
/// - Coordinates the lexer, parser and evaluator.
/// - Defines the runtime values and symbol tables.
/// - Defines how programs print and read.
pub mod interpreter;
/// General utilities for numeric text and conversions.
///
/// # Responsibilities
/// - Read numbers out of YARN text.
/// - Convert between `i64` and `f64` without silent saturation.
pub mod util;

/// Everything a run produced.
///
/// The tokens and the final symbol table are kept even when the run fails,
/// so a front end can still show them.
#[derive(Debug)]
pub struct Execution {
    /// The token sequence, empty if lexing failed.
    pub tokens:  Vec<Token>,
    /// The top-level variables after the run, or only `IT` if the program
    /// never started.
    pub symbols: SymbolTable,
    /// The first error of any phase.
    pub result:  Result<(), Error>,
}

/// Tokenizes `source`.
///
/// # Example
/// ```
/// use lolterpreter::{interpreter::lexer::TokenKind, tokenize};
///
/// let tokens = tokenize("I HAS A X ITZ 3").unwrap();
/// assert_eq!(tokens[0].kind, TokenKind::IHasA);
/// assert_eq!(tokens[0].lexeme, "I HAS A");
/// ```
pub fn tokenize(source: &str) -> Result<Vec<Token>, Error> {
    Ok(interpreter::lexer::tokenize(source)?)
}

/// Tokenizes and parses `source`.
///
/// # Returns
/// The tokens and the parsed program.
pub fn parse(source: &str) -> Result<(Vec<Token>, Program), Error> {
    let tokens = tokenize(source)?;
    let program = parse_program(&tokens)?;
    Ok((tokens, program))
}

/// Runs a program from source to completion.
///
/// Lexical and syntax errors stop the run before any statement executes. A
/// runtime error stops it at the failing statement; the symbol table keeps
/// every change made up to that point.
///
/// # Parameters
/// - `source`: LOLCODE source text.
/// - `output`: Receives everything the program prints.
/// - `input`: Supplies lines for `GIMMEH`.
///
/// # Examples
/// ```
/// use std::collections::VecDeque;
///
/// use lolterpreter::{execute, interpreter::value::core::Value};
///
/// let source = "HAI 1.2
/// I HAS A NAME
/// GIMMEH NAME
/// VISIBLE \"O HAI \" NAME \"!\"
/// KTHXBYE
/// ";
/// let mut output = String::new();
/// let mut input = VecDeque::from([String::from("CEILING CAT\n")]);
///
/// let run = execute(source, &mut output, &mut input);
///
/// assert!(run.result.is_ok());
/// assert_eq!(output, "O HAI CEILING CAT!\n");
/// assert_eq!(run.symbols.get("NAME"), Some(&Value::from("CEILING CAT")));
/// ```
pub fn execute(source: &str,
               output: &mut dyn OutputSink,
               input: &mut dyn InputSource)
               -> Execution {
    let (tokens, program) = match interpreter::lexer::tokenize(source) {
        Ok(tokens) => match parse_program(&tokens) {
            Ok(program) => (tokens, program),
            Err(e) => {
                return Execution { tokens,
                                   symbols: SymbolTable::new(),
                                   result: Err(e.into()), };
            },
        },
        Err(e) => {
            return Execution { tokens:  Vec::new(),
                               symbols: SymbolTable::new(),
                               result:  Err(e.into()), };
        },
    };

    let mut context = Context::new(program.symbols, output, input);
    let result = context.run(&program.body).map_err(Error::from);
    if let Err(e) = &result {
        log::debug!("run stopped: {e}");
    }

    Execution { tokens,
                symbols: context.into_symbols(),
                result }
}
