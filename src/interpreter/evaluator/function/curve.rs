use crate::{
    ast::ParseNode,
    canvas::Path,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::{Arguments, argument_expression},
        },
        value::{core::Value, pol::Pol},
    },
    util::num::{sample_fraction, segment_count},
};

/// Draws a curve whose distance to the origin runs linearly from `from.r` to
/// `to.r` while `angle` gives the angle of every sample.
///
/// `angle` is evaluated once per sample with the hidden variables `_t` (the
/// position of the sample in `[0, 1]`) and `_r` (its distance) bound.
///
/// # Example
/// ```
/// use hydra::interpreter::evaluator::core::Context;
///
/// let mut ctx = Context::new();
/// ctx.run("curve_angle(from: Pol(r: 0.0, phi: 0.0), to: Pol(r: 2.0, phi: 0.0), angle: _t * M_PI)")
///    .unwrap();
///
/// let spiral = &ctx.canvas().paths()[0];
/// let last = spiral.points[spiral.points.len() - 1];
/// assert!((last.r - 2.0).abs() < 1e-9);
/// assert!((last.phi - std::f64::consts::PI).abs() < 1e-9);
/// assert!(ctx.scopes().lookup("_t").is_none());
/// ```
pub fn curve_angle(context: &mut Context,
                   call: &ParseNode,
                   arguments: &Arguments)
                   -> EvalResult<Option<Value>> {
    let (from, to) = (arguments.pol("from")?, arguments.pol("to")?);
    let angle = argument_expression(call, "angle")?;

    let points = sample(context, call.line, |context, t| {
                     let r = interpolate(from.r, to.r, t);
                     context.define_hidden("_r", Value::Number(r));
                     Ok(Pol::new(r, context.eval_number(angle, "the angle")?))
                 })?;

    context.canvas.add_path(Path::open(points));
    Ok(None)
}

/// Draws a curve whose angle runs linearly from `from.phi` to `to.phi` while
/// `distance` gives the distance to the origin of every sample.
///
/// `distance` is evaluated once per sample with the hidden variables `_t` and
/// `_phi` (the angle of the sample) bound.
pub fn curve_distance(context: &mut Context,
                      call: &ParseNode,
                      arguments: &Arguments)
                      -> EvalResult<Option<Value>> {
    let (from, to) = (arguments.pol("from")?, arguments.pol("to")?);
    let distance = argument_expression(call, "distance")?;

    let points = sample(context, call.line, |context, t| {
                     let phi = interpolate(from.phi, to.phi, t);
                     context.define_hidden("_phi", Value::Number(phi));
                     Ok(Pol::new(context.eval_number(distance, "the distance")?, phi))
                 })?;

    context.canvas.add_path(Path::open(points));
    Ok(None)
}

/// Computes the points of a curve, one per sample, each in a scope of its
/// own binding `_t`.
fn sample(context: &mut Context,
          line: usize,
          mut point_at: impl FnMut(&mut Context, f64) -> EvalResult<Pol>)
          -> EvalResult<Vec<Pol>> {
    let segments = segment_count(context.canvas.resolution(), 1.0);

    (0..=segments).map(|index| {
                      let t = sample_fraction(index, segments);
                      context.scoped(line, |context| {
                                 context.define_hidden("_t", Value::Number(t));
                                 point_at(context, t)
                             })
                  })
                  .collect()
}

fn interpolate(from: f64, to: f64, t: f64) -> f64 {
    (to - from).mul_add(t, from)
}
