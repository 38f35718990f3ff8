use tracing::info;

use crate::{
    ast::ParseNode,
    canvas::{Mark, path},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::Arguments,
        },
        value::core::Value,
    },
};

/// Adds the geodesic segment between `from` and `to`.
///
/// # Example
/// ```
/// use hydra::interpreter::evaluator::core::Context;
///
/// let mut ctx = Context::new();
/// ctx.run("line(from: Pol(r: 0.0, phi: 0.0), to: Pol(r: 1.0, phi: 0.0))").unwrap();
///
/// assert_eq!(ctx.canvas().paths().len(), 1);
/// assert!(!ctx.canvas().paths()[0].is_closed);
/// ```
pub fn line(context: &mut Context, _: &ParseNode, arguments: &Arguments) -> EvalResult<Option<Value>> {
    let segment = path::line(arguments.pol("from")?,
                             arguments.pol("to")?,
                             context.canvas.resolution());
    context.canvas.add_path(segment);
    Ok(None)
}

/// Adds the circle of hyperbolic radius `radius` around `center`.
pub fn circle(context: &mut Context,
              call: &ParseNode,
              arguments: &Arguments)
              -> EvalResult<Option<Value>> {
    let radius = radius(arguments, call.line)?;
    let outline = path::circle(arguments.pol("center")?, radius, context.canvas.resolution());
    context.canvas.add_path(outline);
    Ok(None)
}

/// Adds the part of a circle between the angles `from` and `to`, measured
/// at its center.
pub fn arc(context: &mut Context, call: &ParseNode, arguments: &Arguments) -> EvalResult<Option<Value>> {
    let radius = radius(arguments, call.line)?;
    let outline = path::arc(arguments.pol("center")?,
                            radius,
                            arguments.number("from")?,
                            arguments.number("to")?,
                            context.canvas.resolution());
    context.canvas.add_path(outline);
    Ok(None)
}

/// Adds a filled mark at `center`.
pub fn mark(context: &mut Context, call: &ParseNode, arguments: &Arguments) -> EvalResult<Option<Value>> {
    context.canvas.add_mark(Mark { center:    arguments.pol("center")?,
                                   radius:    radius(arguments, call.line)?,
                                   is_filled: true, });
    Ok(None)
}

/// Removes everything drawn so far.
pub fn clear(context: &mut Context, _: &ParseNode, _: &Arguments) -> EvalResult<Option<Value>> {
    context.canvas.clear();
    Ok(None)
}

/// Writes the canvas to the file named by `file`.
///
/// # Errors
/// `Io` if the file cannot be written.
pub fn save(context: &mut Context, call: &ParseNode, arguments: &Arguments) -> EvalResult<Option<Value>> {
    let file = arguments.text("file")?;

    context.canvas
           .save(std::path::Path::new(file))
           .map_err(|error| RuntimeError::Io { path:    file.to_string(),
                                               details: error.to_string(),
                                               line:    call.line, })?;

    info!(file,
          paths = context.canvas.paths().len(),
          marks = context.canvas.marks().len(),
          "saved drawing");
    Ok(None)
}

fn radius(arguments: &Arguments, line: usize) -> EvalResult<f64> {
    let radius = arguments.number("radius")?;
    if !radius.is_finite() || radius < 0.0 {
        return Err(RuntimeError::InvalidArgument { details: format!("the radius must be a non-negative number, found {radius}"),
                                                   line });
    }
    Ok(radius)
}
