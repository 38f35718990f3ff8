/// The builtin table and the dispatch of calls.
///
/// Looks up the implementation of a called builtin, checks the argument
/// count against its signature and evaluates the arguments it needs.
pub mod core;
/// Numeric builtins.
///
/// `sin`, `cos`, `sinh`, `cosh`, `exp`, `log`, `theta` and `random`.
pub mod math;
/// The `print` and `show` builtins.
///
/// Write to the output of the context.
pub mod output;
/// Drawing builtins.
///
/// Add lines, circles, arcs and marks to the canvas, clear it and save it.
pub mod draw;
/// Curves given by an expression.
///
/// `curve_angle` and `curve_distance` evaluate one of their arguments once per
/// sample, with hidden variables describing the sample.
pub mod curve;
/// Initializers of coordinate values.
pub mod initializer;
