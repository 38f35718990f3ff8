//! # hydra
//!
//! hydra is a small language for geometric constructions in the hyperbolic
//! plane. Programs declare numbers, strings and polar coordinates, draw
//! lines, circles, arcs and curves onto a canvas, and save the drawing as SVG
//! or Ipe.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

use crate::interpreter::{evaluator::core::Context, value::core::Value};

/// Defines the structure of parsed code.
///
/// This module declares the `NodeKind` enum shared by tokens and parse-tree
/// nodes, the `Token` tree produced by the lexer and the `ParseNode` tree
/// produced by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines the closed set of syntactic categories.
/// - Attaches line numbers to parse-tree nodes for error reporting.
/// - Tracks error nodes so invalid statements are never executed.
pub mod ast;
/// The drawing surface programs paint on.
///
/// This module defines the `Canvas` trait the interpreter draws through, the
/// in-memory `Drawing` implementation, the sampling of lines, circles and
/// arcs into paths, and the Ipe and SVG writers.
///
/// # Responsibilities
/// - Collects paths and marks in the order they are drawn.
/// - Samples hyperbolic geometry into polylines.
/// - Saves the drawing to disk.
pub mod canvas;
/// Provides unified error types for tokenizing, parsing and evaluation.
///
/// This module defines all errors that can be raised while reading or running
/// a program. Every error carries the source line and the offending name or
/// token so it can be rendered as a readable diagnostic.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, parser, evaluator).
/// - Attaches line numbers and detailed messages for context.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together the registry, lexing, parsing, evaluation and
/// value representations to provide a complete runtime for hydra programs.
///
/// # Responsibilities
/// - Coordinates all core components: registry, lexer, parser, evaluator
///   and value types.
/// - Provides entry points for parsing and evaluating programs.
/// - Manages the flow of data and errors between phases.
pub mod interpreter;
/// General numeric helpers.
///
/// # Responsibilities
/// - Convert sampling densities into bounded segment counts.
pub mod util;

/// Runs a program in an existing context.
///
/// The whole source is parsed first, so a program with a parse error on any
/// line does not run at all. Statements are then interpreted in order until
/// the first runtime error.
///
/// # Returns
/// The value of the last statement that produced one.
///
/// # Examples
/// ```
/// use hydra::{interpreter::evaluator::core::Context, run_program};
///
/// let mut ctx = Context::new();
/// run_program("var r = 1.5\nvar p = Pol(r: r, phi: 0.0)", &mut ctx).unwrap();
///
/// let value = run_program("r * 2", &mut ctx).unwrap().unwrap();
/// assert_eq!(value.to_string(), "3.000000");
/// ```
pub fn run_program(source: &str,
                   context: &mut Context)
                   -> Result<Option<Value>, Box<dyn std::error::Error>> {
    debug!(lines = source.lines().count(), "running program");
    context.run(source)
}

/// Runs a program in a fresh context.
///
/// This function parses and executes all statements in the provided source
/// string. If execution succeeds, it returns `Ok(())`; otherwise, it returns
/// an error with details about the failure.
///
/// # Errors
/// Returns an error if parsing or evaluation fails.
///
/// # Examples
/// ```
/// use hydra::get_result;
///
/// // Simple declaration: no error should occur.
/// let source = "var result = 2 + 2";
/// let res = get_result(source, false);
/// assert!(res.is_ok());
///
/// // Example with an intentional error (unknown variable).
/// let source = "var y = x + 1"; // 'x' is not defined
/// let res = get_result(source, false);
/// assert!(res.is_err());
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut context = Context::new();

    let result = run_program(source, &mut context)?;

    if auto_print && let Some(v) = result {
        println!("{v}");
    }

    Ok(())
}
