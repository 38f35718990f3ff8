/// Coordinates in the hyperbolic plane.
///
/// Defines the `Pol` type, a point given by its hyperbolic distance from the
/// origin and its angle, together with the isometries and distance formulas
/// used to sample lines, circles and arcs.
pub mod pol;

/// The `Value` enum and its conversions.
///
/// Values are numbers, strings or coordinates. This module provides the typed
/// accessors the evaluator uses and the textual representation used by
/// `print` and string interpolation.
pub mod core;
