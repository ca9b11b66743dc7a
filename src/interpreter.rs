/// The evaluator module executes the parsed program.
///
/// The evaluator walks the statement list, applies LOLCODE's coercion rules
/// to every operator, maintains the implicit `IT` register, and runs
/// conditionals, switches, loops and function calls.
///
/// # Responsibilities
/// - Evaluates every expression and statement kind.
/// - Manages the top-level symbol table and one frame per function call.
/// - Reports runtime errors such as unknown variables or invalid casts.
pub mod evaluator;
/// Collaborators for program input and output.
///
/// The evaluator never touches stdin or stdout directly. It writes through an
/// `OutputSink` and reads through an `InputSource`, so the same program can
/// run against the terminal or against in-memory buffers.
pub mod io;
/// The lexer module tokenizes source code for further parsing.
///
/// The lexer reads the raw source text and produces the full sequence of
/// tokens, each with its kind, text and position. Comments are dropped;
/// newlines and commas are kept because they end statements.
///
/// # Responsibilities
/// - Recognizes single and multi-word keywords, literals and identifiers.
/// - Tracks line and column for every token.
/// - Reports lexical errors for characters no rule accepts.
pub mod lexer;
/// The parser module builds the abstract syntax tree (AST) from tokens.
///
/// The parser checks the program structure, folds the declaration block into
/// an initial symbol table, and returns it together with the statement list.
///
/// # Responsibilities
/// - Converts tokens into statements and expressions.
/// - Validates loop labels, guards, parameters and case labels before
///   anything runs.
/// - Reports syntax errors with the expected and actual token.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// This module declares the dynamically typed `Value` and the `SymbolTable`
/// that maps names to values.
///
/// # Responsibilities
/// - Defines truthiness, numeric reduction, casts and display form.
/// - Keeps variables in declaration order with `IT` always present.
pub mod value;
