use crate::{
    ast::ParseNode,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, pol::Pol},
    },
};

impl Context {
    /// Evaluates an initializer.
    ///
    /// - `Pol(r, phi)` builds a coordinate from its distance to the origin and
    ///   its angle.
    /// - `Euc(x, y)` builds the coordinate whose projection into the plane is
    ///   `(x, y)`.
    ///
    /// # Errors
    /// `UnknownInitializer` for other names, or errors from evaluating the
    /// arguments, which must all be numbers.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::evaluator::core::Context;
    ///
    /// let mut ctx = Context::new();
    ///
    /// let pol = ctx.run("Pol(r: 1.0, phi: -M_PI)").unwrap().unwrap();
    /// assert_eq!(pol.to_string(), "Pol(1.000000, 3.141593)");
    ///
    /// let euc = ctx.run("Euc(x: 0.0, y: 2.0)").unwrap().unwrap();
    /// assert_eq!(euc.to_string(), "Pol(2.000000, 1.570796)");
    /// ```
    pub fn eval_initialization(&mut self, node: &ParseNode) -> EvalResult<Option<Value>> {
        if !matches!(node.text.as_str(), "Pol" | "Euc") {
            return Err(RuntimeError::UnknownInitializer { name: node.text.clone(),
                                                          line: node.line, });
        }

        let arguments = self.eval_arguments(node, |_| true)?;

        let coordinate = if node.text == "Pol" {
            Pol::new(arguments.number("r")?, arguments.number("phi")?)
        } else {
            Pol::from_euclidean(arguments.number("x")?, arguments.number("y")?)
        };

        Ok(Some(Value::Coord(coordinate)))
    }
}
