use crate::error::TokenizeError;

#[derive(Debug, Clone, PartialEq)]
/// Represents all errors that can occur during tokenizing or parsing.
pub enum ParseError {
    /// The line could not be tokenized.
    Tokenize {
        /// The underlying tokenizer error.
        error: TokenizeError,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The statement does not start with anything that can begin a statement.
    UnclearStatement {
        /// The first token of the statement.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Found an unexpected token while parsing.
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the parser expected instead.
        expected: String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The assignment syntax was invalid.
    InvalidAssignment {
        /// Details about the malformed assignment.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// The expression syntax was invalid.
    InvalidExpression {
        /// Details about the malformed expression.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A numeric literal was followed by further tokens.
    InvalidNumber {
        /// The literal text.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A string literal was malformed or followed by further tokens.
    InvalidString {
        /// Details about the malformed string.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A call to a function that is not in the registry.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The argument list of a call did not match the function's signature.
    InvalidArguments {
        /// The name of the called function or initializer.
        function: String,
        /// The expected shape of the call, e.g. `line(from: …, to: …)`.
        usage:    String,
        /// Details about the mismatch.
        details:  String,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// The loop header was malformed.
    InvalidLoop {
        /// Details about the malformed header.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to declare a reserved identifier name.
    IdentifierReserved {
        /// The reserved identifier name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A closing brace without an open loop.
    UnexpectedClosingBrace {
        /// The source line where the error occurred.
        line: usize,
    },
    /// The input ended while a loop was still open.
    UnterminatedLoop {
        /// The line of the innermost loop header that was never closed.
        line: usize,
    },
}

impl ParseError {
    /// Returns the source line the error refers to.
    #[must_use]
    pub const fn line(&self) -> usize {
        match self {
            Self::Tokenize { line, .. }
            | Self::UnclearStatement { line, .. }
            | Self::UnexpectedToken { line, .. }
            | Self::InvalidAssignment { line, .. }
            | Self::InvalidExpression { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::InvalidString { line, .. }
            | Self::UnknownFunction { line, .. }
            | Self::InvalidArguments { line, .. }
            | Self::InvalidLoop { line, .. }
            | Self::IdentifierReserved { line, .. }
            | Self::UnexpectedClosingBrace { line }
            | Self::UnterminatedLoop { line } => *line,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Tokenize { error, line } => write!(f, "Error on line {line}: {error}."),

            Self::UnclearStatement { token, line } => write!(f,
                                                             "Error on line {line}: Could not parse line. Type of statement starting with '{token}' is unclear."),

            Self::UnexpectedToken { token,
                                    expected,
                                    line, } => write!(f,
                                                      "Error on line {line}: Unexpected token '{token}', expected {expected}."),

            Self::InvalidAssignment { details, line } => {
                write!(f, "Error on line {line}: Invalid assignment: {details}.")
            },

            Self::InvalidExpression { details, line } => {
                write!(f, "Error on line {line}: Invalid expression: {details}.")
            },

            Self::InvalidNumber { token, line } => write!(f,
                                                          "Error on line {line}: The number '{token}' must stand alone or be joined by operators."),

            Self::InvalidString { details, line } => {
                write!(f, "Error on line {line}: Invalid string: {details}.")
            },

            Self::UnknownFunction { name, line } => {
                write!(f, "Error on line {line}: Unknown function '{name}'.")
            },

            Self::InvalidArguments { function,
                                     usage,
                                     details,
                                     line, } => write!(f,
                                                       "Error on line {line}: Invalid arguments in call to '{function}': {details}. Usage: {usage}"),

            Self::InvalidLoop { details, line } => write!(f,
                                                          "Error on line {line}: Invalid loop: {details}. Example: for i in [0.0, 1.0, 10.0] {{"),

            Self::IdentifierReserved { name, line } => write!(f,
                                                              "Error on line {line}: Identifier '{name}' is reserved. Names starting with '_' cannot be declared."),

            Self::UnexpectedClosingBrace { line } => write!(f,
                                                            "Error on line {line}: Found '}}' without an open loop."),

            Self::UnterminatedLoop { line } => write!(f,
                                                      "Error on line {line}: The loop starting here is never closed with '}}'."),
        }
    }
}

impl std::error::Error for ParseError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Tokenize { error, .. } => Some(error),
            _ => None,
        }
    }
}
