use std::f64::consts::TAU;

use crate::{
    interpreter::value::pol::Pol,
    util::num::{sample_fraction, segment_count},
};

/// A polyline through points of the hyperbolic plane.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Path {
    /// The points of the path in drawing order.
    pub points:    Vec<Pol>,
    /// Whether the last point connects back to the first.
    pub is_closed: bool,
}

/// A small circle marking a point, drawn in output units rather than
/// hyperbolic lengths.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Mark {
    /// The marked point.
    pub center:    Pol,
    /// The radius of the mark.
    pub radius:    f64,
    /// Whether the mark is filled.
    pub is_filled: bool,
}

impl Path {
    /// Creates an open path through the given points.
    #[must_use]
    pub const fn open(points: Vec<Pol>) -> Self {
        Self { points,
               is_closed: false }
    }

    /// Returns `true` if the path has no points.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

/// Samples the geodesic segment between two points.
///
/// The segment is moved so that `from` lies in the origin, where geodesics
/// through the origin are straight rays, sampled there and moved back.
///
/// # Example
/// ```
/// use hydra::{canvas::path::line, interpreter::value::pol::Pol};
///
/// let path = line(Pol::new(1.0, 0.0), Pol::new(1.0, 1.0), 10.0);
/// assert_eq!(path.points.len(), 11);
/// assert!(!path.is_closed);
///
/// let last = path.points[10];
/// assert!((last.r - 1.0).abs() < 1e-9 && (last.phi - 1.0).abs() < 1e-9);
/// ```
#[must_use]
pub fn line(from: Pol, to: Pol, resolution: f64) -> Path {
    let target = to.rotated_by(-from.phi).translated_horizontally_by(-from.r);
    let segments = segment_count(resolution, 1.0);

    let points = (0..=segments).map(|index| {
                                   let t = sample_fraction(index, segments);
                                   Pol::new(t * target.r, target.phi).translated_horizontally_by(from.r)
                                                                     .rotated_by(from.phi)
                               })
                               .collect();

    Path::open(points)
}

/// Samples the circle with the given center and hyperbolic radius.
#[must_use]
pub fn circle(center: Pol, radius: f64, resolution: f64) -> Path {
    let segments = segment_count(resolution, 1.0);
    let points = (0..segments).map(|index| {
                                  point_around(center,
                                               radius,
                                               TAU * sample_fraction(index, segments))
                              })
                              .collect();

    Path { points,
           is_closed: true }
}

/// Samples the part of a circle between two angles, measured at its center.
///
/// The arc runs counter-clockwise from `from` to `to`; if `to` is smaller
/// than `from` it runs clockwise.
#[must_use]
pub fn arc(center: Pol, radius: f64, from: f64, to: f64, resolution: f64) -> Path {
    let sweep = to - from;
    let segments = segment_count(resolution, sweep / TAU);
    let points = (0..=segments).map(|index| {
                                   point_around(center,
                                                radius,
                                                from + sweep * sample_fraction(index, segments))
                               })
                               .collect();

    Path::open(points)
}

/// The point at distance `radius` from `center` in direction `angle`.
fn point_around(center: Pol, radius: f64, angle: f64) -> Pol {
    Pol::new(radius, angle).translated_horizontally_by(center.r)
                           .rotated_by(center.phi)
}
