#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a single line.
pub enum TokenizeError {
    /// An opening bracket has no matching closing bracket, or a closing bracket
    /// appears without an opening one.
    UnmatchedBracket {
        /// The offending bracket character.
        bracket:  char,
        /// Byte offset of the bracket within the line.
        position: usize,
    },
    /// A string literal is missing its closing quote.
    UnterminatedString {
        /// Byte offset of the opening quote within the line.
        position: usize,
    },
    /// A `\(` interpolation escape inside a string is never closed.
    MalformedEscape {
        /// Byte offset of the backslash within the line.
        position: usize,
    },
}

impl std::fmt::Display for TokenizeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnmatchedBracket { bracket, position } => write!(f,
                                                                   "Could not find a matching bracket for '{bracket}' at offset {position}"),
            Self::UnterminatedString { position } => write!(f,
                                                            "Missing closing quote for the string starting at offset {position}"),
            Self::MalformedEscape { position } => write!(f,
                                                         "The interpolation at offset {position} is never closed. Use \"\\(expression)\""),
        }
    }
}

impl std::error::Error for TokenizeError {}
