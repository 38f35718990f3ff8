/// Core evaluation logic and context management.
///
/// Contains the runtime `Context`, the validity gate and the dispatch from a
/// node kind to its evaluation rule.
pub mod core;

/// The scope stack.
///
/// Stores variable bindings in nested scopes and provides the guard that
/// pairs every opened scope with its closing.
pub mod scope;

/// Evaluation of declarations and reassignments.
pub mod assignment;

/// Arithmetic expressions.
///
/// Evaluates `*` and `/` before `+` and `-`, each from left to right.
pub mod expression;

/// Evaluation of loops.
///
/// Manages the loop variable and the loop scope the body runs in.
pub mod for_loop;

/// Utility functions for evaluation.
///
/// Provides helpers shared by the evaluation rules and the builtins, such as
/// evaluating a node that must produce a value and reading named arguments.
pub mod utils;

/// Function and initializer calls.
///
/// Holds the builtin table, the argument evaluation and the builtin
/// implementations.
pub mod function;
