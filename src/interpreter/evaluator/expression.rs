use crate::{
    ast::{NodeKind, ParseNode},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic expression.
    ///
    /// The children alternate between terms and operators. Every term is
    /// evaluated exactly once, from left to right. `*` and `/` are applied to
    /// their neighbours immediately; the remaining `+` and `-` are folded from
    /// left to right, starting from zero.
    ///
    /// # Errors
    /// - `NonNumericOperand` naming the first term that is not a number.
    /// - `DivisionByZero` if a divisor is zero.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::evaluator::core::Context;
    ///
    /// let mut ctx = Context::new();
    /// let eval = |ctx: &mut Context, source: &str| ctx.run(source).unwrap().unwrap().to_string();
    ///
    /// assert_eq!(eval(&mut ctx, "2 + 3 * 4"), "14.000000");
    /// assert_eq!(eval(&mut ctx, "(2 + 3) * 4"), "20.000000");
    /// assert_eq!(eval(&mut ctx, "10 / 2 / 5"), "1.000000");
    /// assert_eq!(eval(&mut ctx, "-1 - 2"), "-3.000000");
    /// ```
    pub fn eval_expression(&mut self, node: &ParseNode) -> EvalResult<Option<Value>> {
        let Some((first, rest)) = node.children.split_first() else {
            return Err(Self::unexpected(node));
        };

        let mut sums: Vec<(f64, f64)> = vec![(1.0, self.eval_operand(first)?)];

        for pair in rest.chunks(2) {
            let [operator, term] = pair else {
                return Err(Self::unexpected(node));
            };
            if operator.kind != NodeKind::Operator {
                return Err(Self::unexpected(operator));
            }
            let value = self.eval_operand(term)?;

            match operator.text.as_str() {
                "+" => sums.push((1.0, value)),
                "-" => sums.push((-1.0, value)),
                "*" | "/" => {
                    let Some((_, last)) = sums.last_mut() else {
                        return Err(Self::unexpected(node));
                    };
                    *last = apply_product(*last, &operator.text, value, term.line)?;
                },
                _ => return Err(Self::unexpected(operator)),
            }
        }

        let total = sums.into_iter()
                        .fold(0.0, |total, (sign, value)| sign.mul_add(value, total));
        Ok(Some(Value::Number(total)))
    }

    fn eval_operand(&mut self, term: &ParseNode) -> EvalResult<f64> {
        match self.eval_node(term)? {
            Some(Value::Number(n)) => Ok(n),
            _ => Err(RuntimeError::NonNumericOperand { operand: term.describe(),
                                                       line:    term.line, }),
        }
    }
}

fn apply_product(left: f64, operator: &str, right: f64, line: usize) -> EvalResult<f64> {
    if operator == "*" {
        return Ok(left * right);
    }
    if right == 0.0 {
        return Err(RuntimeError::DivisionByZero { line });
    }
    Ok(left / right)
}
