/// The registry of keywords, builtins and initializers.
///
/// One registry is created per context. It tells the tokenizer which words
/// are keywords and gives the parser the ordered parameter list of every
/// builtin and initializer.
///
/// # Responsibilities
/// - Maps keywords to the node kind they introduce.
/// - Stores the signature of every builtin function and initializer.
pub mod registry;
/// The evaluator module executes parse trees and computes results.
///
/// The evaluator walks the parse tree of every statement, maintains the
/// scope stack, evaluates expressions, dispatches calls to the builtins and
/// runs loops. It is the core execution engine of the interpreter.
///
/// # Responsibilities
/// - Rejects statements that contain error nodes before running them.
/// - Evaluates every kind of statement and expression.
/// - Reports runtime errors such as undeclared variables or non-numeric
///   operands.
pub mod evaluator;
/// The lexer module tokenizes source lines for further parsing.
///
/// The lexer reads one line of source text and produces a tree of tokens:
/// bracketed groups and quoted strings are tokenized recursively into the
/// children of a token. This is the first stage of interpretation.
///
/// # Responsibilities
/// - Strips comments and classifies words as keywords, numbers or variables.
/// - Matches brackets and quotes and resolves string interpolation.
/// - Reports unmatched brackets, unterminated strings and malformed escapes.
pub mod lexer;
/// The parser module builds parse trees from token trees.
///
/// The parser classifies the tokens of a line, applies the rule for that kind
/// of statement and produces a `ParseNode`. The program driver nests the
/// statements of loop bodies into their loops.
///
/// # Responsibilities
/// - Validates the structure of every statement, reporting errors with their
///   line.
/// - Checks argument lists against the registered signatures.
/// - Pairs loop headers with their closing braces across lines.
pub mod parser;
/// The value module defines the runtime data types for evaluation.
///
/// Values are numbers, strings and coordinates of the hyperbolic plane. This
/// module provides the typed accessors used by the evaluator and the
/// geometry of coordinates used by the canvas.
///
/// # Responsibilities
/// - Defines the `Value` enum and its textual representation.
/// - Defines the `Pol` coordinate type and its isometries.
pub mod value;
