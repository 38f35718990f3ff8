use std::io;

/// Paths, marks and the sampling of lines, circles and arcs.
pub mod path;
/// Serialization to the Ipe XML format.
pub mod ipe;
/// Serialization to SVG.
pub mod svg;

pub use path::{Mark, Path};

/// Default number of segments used to sample a full circle or a line.
pub const DEFAULT_RESOLUTION: f64 = 100.0;
/// Default factor between hyperbolic lengths and output units.
pub const DEFAULT_SCALE: f64 = 15.0;

/// Receives the geometry produced by a program.
///
/// The interpreter only appends paths and marks, empties the canvas and asks
/// it to save itself; how the geometry is stored and written is up to the
/// implementation.
pub trait Canvas {
    /// Appends a path.
    fn add_path(&mut self, path: Path);
    /// Appends a mark.
    fn add_mark(&mut self, mark: Mark);
    /// Removes all paths and marks.
    fn clear(&mut self);
    /// All paths in insertion order.
    fn paths(&self) -> &[Path];
    /// All marks in insertion order.
    fn marks(&self) -> &[Mark];
    /// Number of segments used to sample a full circle or a line.
    fn resolution(&self) -> f64 {
        DEFAULT_RESOLUTION
    }
    /// Writes the canvas to `file`.
    ///
    /// # Errors
    /// Returns any I/O error raised while writing.
    fn save(&self, file: &std::path::Path) -> io::Result<()>;
}

/// An in-memory canvas that saves itself as SVG or Ipe.
#[derive(Debug, Clone)]
pub struct Drawing {
    paths:          Vec<Path>,
    marks:          Vec<Mark>,
    /// Number of segments used to sample a full circle or a line.
    pub resolution: f64,
    /// Factor between hyperbolic lengths and output units.
    pub scale:      f64,
}

impl Default for Drawing {
    fn default() -> Self {
        Self::new()
    }
}

impl Drawing {
    /// Creates an empty drawing with the default resolution and scale.
    #[must_use]
    pub const fn new() -> Self {
        Self { paths:      Vec::new(),
               marks:      Vec::new(),
               resolution: DEFAULT_RESOLUTION,
               scale:      DEFAULT_SCALE, }
    }
}

impl Canvas for Drawing {
    fn add_path(&mut self, path: Path) {
        self.paths.push(path);
    }

    fn add_mark(&mut self, mark: Mark) {
        self.marks.push(mark);
    }

    fn clear(&mut self) {
        self.paths.clear();
        self.marks.clear();
    }

    fn paths(&self) -> &[Path] {
        &self.paths
    }

    fn marks(&self) -> &[Mark] {
        &self.marks
    }

    fn resolution(&self) -> f64 {
        self.resolution
    }

    /// Files ending in `.svg` are written as SVG, everything else as Ipe.
    fn save(&self, file: &std::path::Path) -> io::Result<()> {
        let is_svg = file.extension()
                         .is_some_and(|extension| extension.eq_ignore_ascii_case("svg"));

        if is_svg {
            self::svg::save(&self.paths, &self.marks, self.scale, file)
        } else {
            std::fs::write(file, ipe::document(&self.paths, &self.marks, self.scale))
        }
    }
}
