/// Tokenizer errors.
///
/// Raised while a single source line is split into its token tree: unmatched
/// brackets, unterminated string literals and broken interpolation escapes.
/// These carry a character position but no line number; the parser attaches
/// the line when it wraps them in [`ParseError::Tokenize`].
pub mod tokenize_error;
/// Parsing errors.
///
/// Defines all error types that can occur while a token tree is turned into a
/// parse tree, and while consecutive lines are stitched into loop bodies.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised while a parse tree is
/// interpreted: unknown variables, redeclarations, non-numeric operands,
/// failing builtins and I/O problems when saving a drawing.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;
pub use tokenize_error::TokenizeError;
