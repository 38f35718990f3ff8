/// Numeric conversion helpers.
///
/// Sampling a curve turns a floating-point resolution into a whole number of
/// samples and sample indices back into fractions. These helpers keep the
/// casts in one place and clamp them to a safe range.
pub mod num;
