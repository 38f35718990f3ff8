use tracing::debug;

use crate::{
    ast::ParseNode,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a declaration (`var a = …`) or a reassignment (`a = …`).
    ///
    /// Declarations bind the value in the current scope and fail if that
    /// scope already binds the name or the name starts with `_`.
    /// Reassignments overwrite the binding in the scope the name resolves to,
    /// searching from the current scope outwards.
    ///
    /// The right side is evaluated before anything is bound.
    ///
    /// # Returns
    /// The assigned value.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::evaluator::core::Context;
    ///
    /// let mut ctx = Context::new();
    ///
    /// ctx.run("var a = 1.0").unwrap();
    /// ctx.run("a = a + 1").unwrap();
    /// assert_eq!(ctx.scopes().lookup("a").unwrap().to_string(), "2.000000");
    ///
    /// assert!(ctx.run("var a = 3.0").is_err());
    /// assert!(ctx.run("b = 3.0").is_err());
    /// ```
    pub fn eval_assignment(&mut self, node: &ParseNode) -> EvalResult<Option<Value>> {
        let [variable, expression] = node.children.as_slice() else {
            return Err(Self::unexpected(node));
        };
        let name = variable.text.as_str();

        match node.text.as_str() {
            "var" => self.declare(name, expression, node.line),
            "=" => self.reassign(name, expression, node.line),
            _ => Err(Self::unexpected(node)),
        }
    }

    fn declare(&mut self, name: &str, expression: &ParseNode, line: usize) -> EvalResult<Option<Value>> {
        if name.starts_with('_') {
            return Err(RuntimeError::ReservedIdentifier { name: name.to_string(),
                                                          line });
        }

        let value = self.eval_value(expression, &format!("the declaration of '{name}'"))?;

        if !self.scopes.define(name, value.clone()) {
            return Err(RuntimeError::Redeclaration { name: name.to_string(),
                                                     line });
        }
        debug!(line, name, depth = self.scopes.depth(), "declared variable");

        Ok(Some(value))
    }

    fn reassign(&mut self, name: &str, expression: &ParseNode, line: usize) -> EvalResult<Option<Value>> {
        let value = self.eval_value(expression, &format!("the assignment to '{name}'"))?;

        if !self.scopes.assign(name, value.clone()) {
            return Err(RuntimeError::UnknownVariable { name: name.to_string(),
                                                       line });
        }

        Ok(Some(value))
    }
}
