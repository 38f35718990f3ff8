#[derive(Debug)]
/// Represents all errors that can occur during evaluation and runtime.
pub enum RuntimeError {
    /// The statement contains an error node and must not be interpreted.
    InvalidStatement {
        /// The diagnostic stored in the first error node.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Tried to use or reassign an undeclared variable.
    UnknownVariable {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a variable that already exists in the current scope.
    Redeclaration {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Declared a variable whose name is reserved for hidden variables.
    ReservedIdentifier {
        /// The name of the variable.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// An expected value was missing (e.g. the right side of a declaration
    /// yielded nothing).
    MissingValue {
        /// What the value was needed for.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// An operand of an arithmetic expression is not a number.
    NonNumericOperand {
        /// A description of the operand.
        operand: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A value had an unexpected type.
    TypeMismatch {
        /// Details about the mismatch.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Attempted division by zero.
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Called a function without an implementation.
    UnknownFunction {
        /// The name of the function.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Used an initializer without an implementation.
    UnknownInitializer {
        /// The name of the initializer.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// A builtin needed an argument that the call did not supply.
    MissingArgument {
        /// The name of the function.
        function:  String,
        /// The name of the missing parameter.
        parameter: String,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// The wrong number of arguments was supplied to a function.
    ArgumentCountMismatch {
        /// The name of the function.
        function: String,
        /// The number of declared parameters.
        expected: usize,
        /// The number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// An argument was invalid or out of range.
    InvalidArgument {
        /// Details about why the argument is invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// Loop bounds are invalid or nonsensical.
    InvalidLoopBounds {
        /// Details describing why the bounds are invalid.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A node that cannot be interpreted on its own.
    UnexpectedNode {
        /// The kind of the node.
        kind: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// Tried to close the global scope.
    ScopeUnderflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Writing a drawing to disk failed.
    Io {
        /// The file that was written.
        path:    String,
        /// The underlying I/O error.
        details: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidStatement { details, line } => write!(f,
                                                               "Error on line {line}: The statement is invalid and was not executed: {details}"),
            Self::UnknownVariable { name, line } => {
                write!(f, "Error on line {line}: Use of undeclared variable '{name}'.")
            },
            Self::Redeclaration { name, line } => write!(f,
                                                         "Error on line {line}: Redefinition of variable '{name}' in the same scope."),
            Self::ReservedIdentifier { name, line } => write!(f,
                                                              "Error on line {line}: Variables starting with '_' are reserved: '{name}'."),
            Self::MissingValue { details, line } => {
                write!(f, "Error on line {line}: Value missing: {details}.")
            },
            Self::NonNumericOperand { operand, line } => write!(f,
                                                                "Error on line {line}: The operand '{operand}' does not evaluate to a number."),
            Self::TypeMismatch { details, line } => {
                write!(f, "Error on line {line}: Type error: {details}.")
            },
            Self::DivisionByZero { line } => write!(f, "Error on line {line}: Division by zero."),
            Self::UnknownFunction { name, line } => write!(f,
                                                           "Error on line {line}: No function definition found for '{name}'."),
            Self::UnknownInitializer { name, line } => write!(f,
                                                              "Error on line {line}: No initializer definition found for '{name}'."),
            Self::MissingArgument { function,
                                    parameter,
                                    line, } => write!(f,
                                                      "Error on line {line}: Missing argument '{parameter}' in call to '{function}'."),
            Self::ArgumentCountMismatch { function,
                                          expected,
                                          found,
                                          line, } => write!(f,
                                                            "Error on line {line}: '{function}' takes {expected} arguments, but {found} were supplied."),
            Self::InvalidArgument { details, line } => {
                write!(f, "Error on line {line}: Invalid argument: {details}.")
            },
            Self::InvalidLoopBounds { details, line } => {
                write!(f, "Error on line {line}: Invalid loop bounds: {details}.")
            },
            Self::UnexpectedNode { kind, line } => write!(f,
                                                          "Error on line {line}: A node of kind '{kind}' cannot be interpreted here."),
            Self::ScopeUnderflow { line } => write!(f,
                                                    "Error on line {line}: Attempted to close the global scope."),
            Self::Io { path,
                       details,
                       line, } => {
                write!(f, "Error on line {line}: Could not write '{path}': {details}.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
