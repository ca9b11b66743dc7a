/// An unrecognized character sequence in the source.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LexError {
    /// The offending text (at most ten characters).
    pub found:   String,
    /// The source line where the error occurred.
    pub line:    usize,
    /// The source column where the error occurred.
    pub col:     usize,
    /// Source text surrounding the error.
    pub context: String,
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f,
               "Error on line {}, column {}: Unknown token {:?} near {:?}.",
               self.line, self.col, self.found, self.context)
    }
}

impl std::error::Error for LexError {}
