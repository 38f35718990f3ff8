use std::fmt;

use crate::{
    error::RuntimeError,
    interpreter::{evaluator::core::EvalResult, value::pol::Pol},
};

/// Represents a runtime value in the interpreter.
///
/// Values have no identity beyond their content and are copied on
/// assignment.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A double precision floating-point number.
    Number(f64),
    /// A UTF-8 string.
    Text(String),
    /// A point of the hyperbolic plane in polar coordinates.
    Coord(Pol),
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Number(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<Pol> for Value {
    fn from(v: Pol) -> Self {
        Self::Coord(v)
    }
}

impl Value {
    /// The name of the value's type, as used in diagnostics.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Text(_) => "string",
            Self::Coord(_) => "coordinate",
        }
    }

    /// Returns the number, or a `TypeMismatch` error for other values.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Number(2.5).as_number(1).unwrap(), 2.5);
    /// assert!(Value::from("2.5").as_number(1).is_err());
    /// ```
    pub fn as_number(&self, line: usize) -> EvalResult<f64> {
        match self {
            Self::Number(n) => Ok(*n),
            _ => Err(self.mismatch("number", line)),
        }
    }

    /// Returns the coordinate, or a `TypeMismatch` error for other values.
    pub fn as_pol(&self, line: usize) -> EvalResult<Pol> {
        match self {
            Self::Coord(p) => Ok(*p),
            _ => Err(self.mismatch("coordinate", line)),
        }
    }

    /// Returns the string, or a `TypeMismatch` error for other values.
    pub fn as_text(&self, line: usize) -> EvalResult<&str> {
        match self {
            Self::Text(s) => Ok(s),
            _ => Err(self.mismatch("string", line)),
        }
    }

    fn mismatch(&self, expected: &str, line: usize) -> RuntimeError {
        RuntimeError::TypeMismatch { details: format!("expected a {expected}, found the {} '{self}'",
                                                      self.type_name()),
                                     line }
    }
}

/// Numbers are written with six decimals, strings verbatim and coordinates in
/// constructor form.
///
/// # Example
/// ```
/// use hydra::interpreter::value::{core::Value, pol::Pol};
///
/// assert_eq!(Value::Number(2.0).to_string(), "2.000000");
/// assert_eq!(Value::from("hi").to_string(), "hi");
/// assert_eq!(Value::Coord(Pol::new(1.0, 0.5)).to_string(), "Pol(1.000000, 0.500000)");
/// ```
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n:.6}"),
            Self::Text(s) => write!(f, "{s}"),
            Self::Coord(p) => write!(f, "{p}"),
        }
    }
}
