use rand::Rng;

use crate::{
    ast::ParseNode,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            utils::Arguments,
        },
        value::{core::Value, pol::Pol},
    },
};

/// Applies a real function to the argument `x`.
///
/// Out-of-domain arguments are not an error; they yield whatever the real
/// function yields, such as NaN for the logarithm of a negative number.
///
/// # Example
/// ```
/// use hydra::{
///     ast::{NodeKind, ParseNode},
///     interpreter::{
///         evaluator::{core::Context, function::math::sin, utils::Arguments},
///         value::core::Value,
///     },
/// };
///
/// let mut ctx = Context::new();
/// let call = ParseNode::new(NodeKind::Function, "sin", 1);
/// let arguments = Arguments::new("sin", 1).with("x", std::f64::consts::FRAC_PI_2);
///
/// assert_eq!(sin(&mut ctx, &call, &arguments).unwrap(), Some(Value::Number(1.0)));
/// ```
macro_rules! real_builtin {
    ($fname:ident, $real_fn:ident) => {
        pub fn $fname(_: &mut Context, _: &ParseNode, arguments: &Arguments) -> EvalResult<Option<Value>> {
            Ok(Some(Value::Number(arguments.number("x")?.$real_fn())))
        }
    };
}

real_builtin!(sin, sin);
real_builtin!(cos, cos);
real_builtin!(sinh, sinh);
real_builtin!(cosh, cosh);
real_builtin!(exp, exp);
real_builtin!(log, ln);

/// The angle at the origin of a triangle with the sides `r1`, `r2` and `R`,
/// where `R` is opposite of the angle.
///
/// Returns `-1` if no such triangle exists.
pub fn theta(_: &mut Context, _: &ParseNode, arguments: &Arguments) -> EvalResult<Option<Value>> {
    let angle = Pol::theta(arguments.number("r1")?,
                           arguments.number("r2")?,
                           arguments.number("R")?);
    Ok(Some(Value::Number(angle)))
}

/// Draws a number uniformly from `[from, to]`.
///
/// # Errors
/// `InvalidArgument` if a bound is not finite or `to` is smaller than
/// `from`.
///
/// # Example
/// ```
/// use hydra::interpreter::evaluator::core::Context;
///
/// let mut ctx = Context::new().with_seed(42);
/// let value = ctx.run("random(from: 1.0, to: 2.0)").unwrap().unwrap();
/// let drawn = value.as_number(1).unwrap();
///
/// assert!((1.0..=2.0).contains(&drawn));
/// assert!(ctx.run("random(from: 2.0, to: 1.0)").is_err());
/// ```
pub fn random(context: &mut Context,
              call: &ParseNode,
              arguments: &Arguments)
              -> EvalResult<Option<Value>> {
    let (from, to) = (arguments.number("from")?, arguments.number("to")?);

    if !from.is_finite() || !to.is_finite() || to < from {
        return Err(RuntimeError::InvalidArgument { details: format!("cannot draw a random number between {from} and {to}"),
                                                   line:    call.line, });
    }

    Ok(Some(Value::Number(context.rng.gen_range(from..=to))))
}
