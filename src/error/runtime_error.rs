#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// Tried to use or assign an undefined variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// `GIMMEH` into a variable that was never declared.
    UndeclaredInputTarget {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that is not bound at all.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a name that holds a plain value.
    NotAFunction {
        /// The name that was called.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        name:     String,
        /// Number of declared parameters.
        expected: usize,
        /// Number of arguments at the call site.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// `BOTH SAEM` or `DIFFRINT` on an operand that is not numeric.
    NonNumericComparison {
        /// Display form of the offending operand.
        value: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A value could not be converted to the requested type.
    InvalidCast {
        /// Display form of the value.
        value:  String,
        /// The target type name.
        target: &'static str,
        /// The source line where the error occurred.
        line:   usize,
    },
    /// Integer arithmetic overflowed.
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Function calls nested deeper than the interpreter allows.
    RecursionLimit {
        /// The function being entered.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The output sink or input source failed.
    Io {
        /// The underlying failure.
        error: std::io::Error,
        /// The source line where the error occurred.
        line:  usize,
    },
}

impl RuntimeError {
    /// The source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::UnknownVariable { line, .. }
            | Self::UndeclaredInputTarget { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::NotAFunction { line, .. }
            | Self::ArgumentCountMismatch { line, .. }
            | Self::NonNumericComparison { line, .. }
            | Self::InvalidCast { line, .. }
            | Self::Overflow { line }
            | Self::RecursionLimit { line, .. }
            | Self::Io { line, .. } => *line,
        }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Unknown variable '{name}'.")
            },
            Self::UndeclaredInputTarget { name, line } => write!(f,
                                                                 "Error on line {line}: Cannot read input into undeclared variable '{name}'."),
            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },
            Self::NotAFunction { name, line } => {
                write!(f, "Error on line {line}: '{name}' is not a function.")
            },
            Self::ArgumentCountMismatch { name,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{name}' takes {expected} argument(s) but {found} were given."),
            Self::NonNumericComparison { value, line } => write!(f,
                                                                 "Error on line {line}: Cannot compare non-numeric value {value}."),
            Self::InvalidCast { value, target, line } => {
                write!(f, "Error on line {line}: Cannot cast {value} to {target}.")
            },
            Self::Overflow { line } => write!(f,
                                              "Error on line {line}: Integer overflow while trying to compute result."),
            Self::RecursionLimit { name, line } => write!(f,
                                                          "Error on line {line}: Too many nested calls while entering '{name}'."),
            Self::Io { error, line } => write!(f, "Error on line {line}: I/O failure: {error}."),
        }
    }
}

impl std::error::Error for RuntimeError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io { error, .. } => Some(error),
            _ => None,
        }
    }
}
