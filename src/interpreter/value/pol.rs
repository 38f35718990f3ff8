use std::{f64::consts::TAU, fmt};

/// Normalizes an angle to `[0, 2π)`.
///
/// # Example
/// ```
/// use std::f64::consts::PI;
///
/// use hydra::interpreter::value::pol::normalize_angle;
///
/// assert!((normalize_angle(-PI / 2.0) - 3.0 * PI / 2.0).abs() < 1e-12);
/// assert!((normalize_angle(5.0 * PI) - PI).abs() < 1e-12);
/// ```
#[must_use]
pub fn normalize_angle(phi: f64) -> f64 {
    let normalized = phi.rem_euclid(TAU);
    if normalized >= TAU { 0.0 } else { normalized }
}

/// A point of the hyperbolic plane in polar coordinates.
///
/// `r` is the hyperbolic distance to the origin and `phi` the angle, kept in
/// `[0, 2π)` by every constructor.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Pol {
    /// Distance to the origin.
    pub r:   f64,
    /// Angle in radians.
    pub phi: f64,
}

impl Pol {
    /// The origin of the plane.
    pub const ORIGIN: Self = Self { r: 0.0, phi: 0.0 };

    /// Creates a point, normalizing its angle.
    #[must_use]
    pub fn new(r: f64, phi: f64) -> Self {
        Self { r,
               phi: normalize_angle(phi) }
    }

    /// Creates the point whose native-disk projection is `(x, y)`.
    #[must_use]
    pub fn from_euclidean(x: f64, y: f64) -> Self {
        Self::new(x.hypot(y), y.atan2(x))
    }

    /// Projects the point into the plane, scaling its distance by `scale`.
    #[must_use]
    pub fn to_euclidean(self, scale: f64) -> (f64, f64) {
        (scale * self.r * self.phi.cos(), scale * self.r * self.phi.sin())
    }

    /// Rotates the point around the origin.
    #[must_use]
    pub fn rotated_by(self, angle: f64) -> Self {
        Self::new(self.r, self.phi + angle)
    }

    /// Applies the translation along the horizontal axis that moves the
    /// origin to `Pol(distance, 0)`. Negative distances move it towards
    /// angle π.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::value::pol::Pol;
    ///
    /// let moved = Pol::ORIGIN.translated_horizontally_by(2.0);
    /// assert!((moved.r - 2.0).abs() < 1e-12);
    /// assert!(moved.phi.abs() < 1e-12);
    ///
    /// let back = moved.translated_horizontally_by(-2.0);
    /// assert!(back.r.abs() < 1e-6);
    /// ```
    #[must_use]
    pub fn translated_horizontally_by(self, distance: f64) -> Self {
        let (x0, x1, x2) = self.hyperboloid();
        let (sinh_d, cosh_d) = (distance.sinh(), distance.cosh());

        let y0 = cosh_d * x0 + sinh_d * x1;
        let y1 = sinh_d * x0 + cosh_d * x1;

        Self::from_hyperboloid(y0, y1, x2)
    }

    /// Hyperbolic distance between two points.
    ///
    /// # Example
    /// ```
    /// use std::f64::consts::PI;
    ///
    /// use hydra::interpreter::value::pol::Pol;
    ///
    /// let a = Pol::new(1.0, 0.0);
    /// let b = Pol::new(1.0, PI);
    /// assert!((a.distance_to(b) - 2.0).abs() < 1e-9);
    /// ```
    #[must_use]
    pub fn distance_to(self, other: Self) -> f64 {
        let delta = other.phi - self.phi;
        let argument = self.r.cosh() * other.r.cosh()
                       - self.r.sinh() * other.r.sinh() * delta.cos();
        argument.max(1.0).acosh()
    }

    /// The angle at the origin of a triangle whose sides adjacent to the
    /// origin have lengths `r1` and `r2` and whose opposite side has length
    /// `big_r`.
    ///
    /// Returns `-1.0` when no such triangle exists.
    #[must_use]
    pub fn theta(r1: f64, r2: f64, big_r: f64) -> f64 {
        let cosine = (r1.cosh() * r2.cosh() - big_r.cosh()) / (r1.sinh() * r2.sinh());
        let angle = cosine.acos();
        if angle.is_nan() { -1.0 } else { angle }
    }

    fn hyperboloid(self) -> (f64, f64, f64) {
        let sinh_r = self.r.sinh();
        (self.r.cosh(), sinh_r * self.phi.cos(), sinh_r * self.phi.sin())
    }

    fn from_hyperboloid(x0: f64, x1: f64, x2: f64) -> Self {
        let r = x0.max(1.0).acosh();
        if r <= 0.0 {
            return Self::ORIGIN;
        }
        Self::new(r, x2.atan2(x1))
    }
}

impl fmt::Display for Pol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Pol({:.6}, {:.6})", self.r, self.phi)
    }
}
