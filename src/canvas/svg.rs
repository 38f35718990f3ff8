use std::{fmt::Write, io};

use ::svg::{
    Document,
    node::element::{Circle, Path as SvgPath},
};

use crate::canvas::path::{Mark, Path};

/// Margin around the drawing, in output units.
const MARGIN: f64 = 10.0;

/// Bounding box in output units, with the y axis already flipped.
struct Bounds {
    min_x: f64,
    min_y: f64,
    max_x: f64,
    max_y: f64,
}

impl Bounds {
    const fn empty() -> Self {
        Self { min_x: f64::INFINITY,
               min_y: f64::INFINITY,
               max_x: f64::NEG_INFINITY,
               max_y: f64::NEG_INFINITY, }
    }

    fn include(&mut self, x: f64, y: f64, margin: f64) {
        self.min_x = self.min_x.min(x - margin);
        self.min_y = self.min_y.min(y - margin);
        self.max_x = self.max_x.max(x + margin);
        self.max_y = self.max_y.max(y + margin);
    }

    fn view_box(&self) -> String {
        if self.min_x > self.max_x {
            return "0 0 100 100".to_string();
        }
        format!("{} {} {} {}",
                fmt_scalar(self.min_x - MARGIN),
                fmt_scalar(self.min_y - MARGIN),
                fmt_scalar(2.0f64.mul_add(MARGIN, self.max_x - self.min_x)),
                fmt_scalar(2.0f64.mul_add(MARGIN, self.max_y - self.min_y)))
    }
}

/// Renders marks and paths as an SVG document.
///
/// Points are projected like in the Ipe output, with the y axis flipped so
/// that angles grow counter-clockwise on screen.
///
/// # Example
/// ```
/// use hydra::{canvas::{path::Path, svg}, interpreter::value::pol::Pol};
///
/// let path = Path::open(vec![Pol::ORIGIN, Pol::new(1.0, 0.0)]);
/// let document = svg::document(&[path], &[], 10.0).to_string();
///
/// assert!(document.contains("M0 0 L10 0"));
/// ```
#[must_use]
pub fn document(paths: &[Path], marks: &[Mark], scale: f64) -> Document {
    let mut bounds = Bounds::empty();
    let mut document = Document::new();

    for path in paths.iter().filter(|path| !path.is_empty()) {
        let mut data = String::new();
        for (index, point) in path.points.iter().enumerate() {
            let (x, y) = point.to_euclidean(scale);
            bounds.include(x, -y, 0.0);

            let command = if index == 0 { 'M' } else { 'L' };
            let separator = if index == 0 { "" } else { " " };
            let _ = write!(data, "{separator}{command}{} {}", fmt_scalar(x), fmt_scalar(-y));
        }
        if path.is_closed {
            data.push_str(" Z");
        }

        document = document.add(SvgPath::new().set("d", data)
                                              .set("fill", "none")
                                              .set("stroke", "black")
                                              .set("stroke-width", "0.5"));
    }

    for mark in marks {
        let (x, y) = mark.center.to_euclidean(scale);
        bounds.include(x, -y, mark.radius);

        let fill = if mark.is_filled { "black" } else { "none" };
        document = document.add(Circle::new().set("cx", fmt_scalar(x))
                                             .set("cy", fmt_scalar(-y))
                                             .set("r", fmt_scalar(mark.radius))
                                             .set("fill", fill)
                                             .set("stroke", "black"));
    }

    document.set("xmlns", "http://www.w3.org/2000/svg")
            .set("viewBox", bounds.view_box())
}

/// Writes marks and paths to an SVG file.
///
/// # Errors
/// Returns any I/O error raised while writing.
pub fn save(paths: &[Path], marks: &[Mark], scale: f64, file: &std::path::Path) -> io::Result<()> {
    ::svg::save(file, &document(paths, marks, scale))
}

fn fmt_scalar(value: f64) -> String {
    let formatted = format!("{value:.4}");
    let trimmed = formatted.trim_end_matches('0').trim_end_matches('.');
    if trimmed == "-0" { "0".to_string() } else { trimmed.to_string() }
}
