/// Upper bound on the number of samples of a single path.
pub const MAX_SAMPLES: usize = 100_000;

/// Converts a sampling density into a number of segments.
///
/// `resolution` is the number of segments used for a full turn (or a full
/// segment) and `fraction` the share of it that is actually drawn. The result
/// is rounded up, at least 1 and at most [`MAX_SAMPLES`]. Non-finite inputs
/// yield a single segment.
///
/// # Example
/// ```
/// use hydra::util::num::segment_count;
///
/// assert_eq!(segment_count(100.0, 1.0), 100);
/// assert_eq!(segment_count(100.0, 0.25), 25);
/// assert_eq!(segment_count(100.0, 0.001), 1);
/// assert_eq!(segment_count(f64::NAN, 1.0), 1);
/// ```
#[must_use]
#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
pub fn segment_count(resolution: f64, fraction: f64) -> usize {
    let segments = (resolution * fraction.abs()).ceil();
    if !segments.is_finite() || segments < 1.0 {
        return 1;
    }
    if segments >= MAX_SAMPLES as f64 {
        return MAX_SAMPLES;
    }
    segments as usize
}

/// The position of sample `index` out of `segments` as a fraction in
/// `[0, 1]`.
///
/// # Example
/// ```
/// use hydra::util::num::sample_fraction;
///
/// assert_eq!(sample_fraction(0, 4), 0.0);
/// assert_eq!(sample_fraction(2, 4), 0.5);
/// assert_eq!(sample_fraction(4, 4), 1.0);
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)]
pub fn sample_fraction(index: usize, segments: usize) -> f64 {
    if segments == 0 {
        return 0.0;
    }
    index.min(segments) as f64 / segments as f64
}
