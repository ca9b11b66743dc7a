/// Lexical errors.
///
/// Raised by the tokenizer when no token rule accepts the next character.
/// Carries the position and a short window of surrounding source text.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree,
/// including the structural checks on loop labels and conditional guards.
/// A parse error means no statement of the program was executed.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. A runtime
/// error aborts the remaining statements but leaves the symbol table as it
/// was when the error occurred.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced while running a program, tagged with its phase.
#[derive(Debug)]
pub enum Error {
    /// The source could not be tokenized.
    Lexical(LexError),
    /// The token sequence did not form a valid program.
    Syntax(ParseError),
    /// A statement failed while executing.
    Runtime(RuntimeError),
}

impl From<LexError> for Error {
    fn from(e: LexError) -> Self {
        Self::Lexical(e)
    }
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Syntax(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lexical(e) => write!(f, "Lexical error: {e}"),
            Self::Syntax(e) => write!(f, "Syntax error: {e}"),
            Self::Runtime(e) => write!(f, "Runtime error: {e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lexical(e) => Some(e),
            Self::Syntax(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
