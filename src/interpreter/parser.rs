/// Core parsing entry points.
///
/// Defines the `LineParser`, the statement classification and the dispatch
/// from a line's token tree to the specialised parse rules.
pub mod core;

/// Assignment parsing.
///
/// Handles declarations (`var a = …`) and reassignments (`a = …`).
pub mod assignment;

/// Arithmetic expression parsing.
///
/// Checks that operands and operators alternate and parses parenthesised
/// groups recursively.
pub mod expression;

/// Function calls and initializers.
///
/// Validates named argument lists against the registry's signatures.
pub mod call;

/// Loops and literal statements.
///
/// Parses loop headers, numbers, strings, variable references and closing
/// braces.
pub mod statement;

/// Multi-line programs.
///
/// Parses every line of a source text and nests loop bodies into their loop
/// nodes.
pub mod program;
