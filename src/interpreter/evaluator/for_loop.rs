use tracing::debug;

use crate::{
    ast::ParseNode,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// The bounds of a loop after evaluation.
#[derive(Debug, Clone, Copy, PartialEq)]
struct Bounds {
    lower: f64,
    step:  f64,
    upper: f64,
}

impl Context {
    /// Evaluates a loop.
    ///
    /// The loop variable is bound to the lower bound in a new loop scope, and
    /// the body runs in that same scope. While the loop variable is not
    /// greater than the upper bound, every body statement is interpreted in
    /// order. After each iteration the loop variable is read again from the
    /// loop scope, so the body may rebind it, and the step is added.
    ///
    /// Declarations in the body live in the loop scope: they are visible to
    /// later iterations, and declaring the same name twice, or declaring the
    /// loop variable, is a redeclaration.
    ///
    /// The first failing statement aborts the loop. Iterations that already
    /// ran keep their effects.
    ///
    /// # Errors
    /// - `NonNumericOperand` or `TypeMismatch` if a bound is not a number.
    /// - `InvalidLoopBounds` if a bound is NaN.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::evaluator::core::Context;
    ///
    /// let mut ctx = Context::new();
    /// ctx.run("var count = 0\nfor i in [0.0, 1.0, 2.0] {\n  count = count + 1\n}").unwrap();
    /// assert_eq!(ctx.scopes().lookup("count").unwrap().to_string(), "3.000000");
    ///
    /// ctx.run("for j in [0.0, 1.0, -1.0] {\n  count = count + 1\n}").unwrap();
    /// assert_eq!(ctx.scopes().lookup("count").unwrap().to_string(), "3.000000");
    ///
    /// // A zero step terminates when the body advances the loop variable.
    /// ctx.run("for k in [0.0, 0.0, 3.0] {\n  k = k + 1\n  count = count + 1\n}").unwrap();
    /// assert_eq!(ctx.scopes().lookup("count").unwrap().to_string(), "7.000000");
    /// ```
    pub fn eval_loop(&mut self, node: &ParseNode) -> EvalResult<Option<Value>> {
        let [variable, range, body @ ..] = node.children.as_slice() else {
            return Err(Self::unexpected(node));
        };
        let name = variable.text.as_str();
        let bounds = self.eval_bounds(range)?;

        if bounds.lower.is_nan() || bounds.upper.is_nan() || bounds.step.is_nan() {
            return Err(RuntimeError::InvalidLoopBounds { details: "a bound is not a number".to_string(),
                                                         line:    node.line, });
        }

        self.scoped(node.line, |ctx| {
                ctx.define_hidden(name, Value::Number(bounds.lower));
                let mut iteration = 0_usize;

                loop {
                    let current = ctx.loop_variable(name, node.line)?;
                    if current > bounds.upper {
                        break;
                    }

                    debug!(line = node.line, name, iteration, value = current, "loop iteration");
                    for statement in body {
                        ctx.interpret(statement)?;
                    }

                    let current = ctx.loop_variable(name, node.line)?;
                    ctx.define_hidden(name, Value::Number(current + bounds.step));
                    iteration += 1;
                }

                Ok(None)
            })
    }

    fn eval_bounds(&mut self, range: &ParseNode) -> EvalResult<Bounds> {
        let [lower, step, upper] = range.children.as_slice() else {
            return Err(Self::unexpected(range));
        };

        Ok(Bounds { lower: self.eval_number(lower, "the lower bound")?,
                    step:  self.eval_number(step, "the step")?,
                    upper: self.eval_number(upper, "the upper bound")?, })
    }

    /// The loop variable is read from the loop scope only.
    fn loop_variable(&self, name: &str, line: usize) -> EvalResult<f64> {
        self.scopes
            .lookup_in_current(name)
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })?
            .as_number(line)
    }
}
