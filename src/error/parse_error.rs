use crate::interpreter::lexer::TokenKind;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur while parsing.
pub enum ParseError {
    /// Found a token that does not fit the grammar at this point.
    UnexpectedToken {
        /// Token kinds that would have been accepted. Empty when only the end
        /// of input was acceptable.
        expected: Vec<TokenKind>,
        /// Description of the token encountered.
        found:    String,
        /// The source line where the error occurred.
        line:     usize,
        /// The source column where the error occurred.
        col:      usize,
    },
    /// Reached the end of input unexpectedly.
    UnexpectedEndOfInput {
        /// Token kinds that would have been accepted.
        expected: Vec<TokenKind>,
        /// The last source line seen.
        line:     usize,
    },
    /// A loop was closed with a label different from the one it opened with.
    MismatchedLoopLabel {
        /// Label given after `IM IN YR`.
        opening: String,
        /// Label given after `IM OUTTA YR`.
        closing: String,
        /// The line of the closing label.
        line:    usize,
    },
    /// A `MEBBE` guard that can never produce a TROOF.
    NonBooleanGuard {
        /// The line of the guard.
        line: usize,
    },
    /// A numeric literal that does not fit its type.
    InvalidLiteral {
        /// The literal text.
        lexeme: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// A declaration block initializer that is not a constant.
    InvalidDeclaration {
        /// The variable being declared.
        name:   String,
        /// Why the initializer could not be folded.
        reason: String,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// `FOUND YR` used outside a function body.
    ReturnOutsideFunction {
        /// The source line where the error occurred.
        line: usize,
    },
    /// A function declares the same parameter twice.
    DuplicateParameter {
        /// The repeated parameter name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Two `OMG` arms of one switch share a literal.
    DuplicateCase {
        /// The repeated literal, as written.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl ParseError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnexpectedToken { line, .. }
            | Self::UnexpectedEndOfInput { line, .. }
            | Self::MismatchedLoopLabel { line, .. }
            | Self::NonBooleanGuard { line }
            | Self::InvalidLiteral { line, .. }
            | Self::InvalidDeclaration { line, .. }
            | Self::ReturnOutsideFunction { line }
            | Self::DuplicateParameter { line, .. }
            | Self::DuplicateCase { line, .. } => *line,
        }
    }
}

fn expected_list(expected: &[TokenKind]) -> String {
    match expected {
        [] => "end of input".to_string(),
        [only] => only.describe().to_string(),
        [init @ .., last] => {
            let init: Vec<_> = init.iter().map(|k| k.describe()).collect();
            format!("{} or {}", init.join(", "), last.describe())
        },
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedToken { expected,
                                    found,
                                    line,
                                    col, } => write!(f,
                                                     "Error on line {line}, column {col}: Expected {}, found {found}.",
                                                     expected_list(expected)),
            Self::UnexpectedEndOfInput { expected, line } => write!(f,
                                                                    "Error on line {line}: Expected {} but reached the end of input.",
                                                                    expected_list(expected)),
            Self::MismatchedLoopLabel { opening,
                                        closing,
                                        line, } => write!(f,
                                                          "Error on line {line}: Loop '{opening}' is closed with label '{closing}'."),
            Self::NonBooleanGuard { line } => write!(f,
                                                     "Error on line {line}: MEBBE condition is not a boolean expression."),
            Self::InvalidLiteral { lexeme, line } => {
                write!(f, "Error on line {line}: Invalid literal {lexeme}.")
            },
            Self::InvalidDeclaration { name, reason, line } => write!(f,
                                                                      "Error on line {line}: Cannot initialize '{name}': {reason}"),
            Self::ReturnOutsideFunction { line } => {
                write!(f, "Error on line {line}: FOUND YR outside of a function.")
            },
            Self::DuplicateParameter { name, line } => {
                write!(f, "Error on line {line}: Parameter '{name}' is declared twice.")
            },
            Self::DuplicateCase { literal, line } => {
                write!(f, "Error on line {line}: Case {literal} appears more than once.")
            },
        }
    }
}

impl std::error::Error for ParseError {}
