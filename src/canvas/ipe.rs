use std::fmt::Write;

use crate::canvas::path::{Mark, Path};

const HEADER: &str = "<?xml version=\"1.0\"?>\n<!DOCTYPE ipe SYSTEM \"ipe.dtd\">\n<ipe version=\"70206\" creator=\"Ipe 7.2.7\">\n<info created=\"D:20170719160807\" modified=\"D:20170719160807\"/>\n<ipestyle name=\"basic\">\n</ipestyle>\n<page>\n<layer name=\"alpha\"/>\n<view layers=\"alpha\" active=\"alpha\"/>\n";

const FOOTER: &str = "</page>\n</ipe>";

/// Renders marks and paths as an Ipe document.
///
/// # Example
/// ```
/// use hydra::{canvas::{ipe, path::Path}, interpreter::value::pol::Pol};
///
/// let path = Path::open(vec![Pol::ORIGIN, Pol::new(1.0, 0.0)]);
/// let document = ipe::document(&[path], &[], 10.0);
///
/// assert!(document.contains("0.000000 0.000000 m\n10.000000 0.000000 l\n"));
/// assert!(document.ends_with("</ipe>"));
/// ```
#[must_use]
pub fn document(paths: &[Path], marks: &[Mark], scale: f64) -> String {
    let mut document = String::from(HEADER);

    for mark in marks {
        write_mark(&mut document, mark, scale);
    }
    for path in paths.iter().filter(|path| !path.is_empty()) {
        write_path(&mut document, path, scale);
    }

    document.push_str(FOOTER);
    document
}

fn write_path(out: &mut String, path: &Path, scale: f64) {
    out.push_str("<path stroke=\"black\">\n");

    for (index, point) in path.points.iter().enumerate() {
        let (x, y) = point.to_euclidean(scale);
        let operator = if index == 0 { "m" } else { "l" };
        let _ = writeln!(out, "{x:.6} {y:.6} {operator}");
    }

    if path.is_closed {
        out.push_str("h\n");
    }
    out.push_str("</path>\n");
}

fn write_mark(out: &mut String, mark: &Mark, scale: f64) {
    let (x, y) = mark.center.to_euclidean(scale);
    let fill = if mark.is_filled { " fill=\"black\"" } else { "" };
    let radius = mark.radius;

    let _ = write!(out,
                   "<path stroke=\"black\"{fill}>\n{radius:.6} 0 0 {radius:.6} {x:.6} {y:.6} e\n</path>\n");
}
