use std::collections::HashMap;

use crate::{
    ast::{NodeKind, ParseNode},
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::{core::Value, pol::Pol},
    },
};

impl Context {
    /// Evaluates a node and ensures that it produces a value.
    ///
    /// # Parameters
    /// - `node`: Node to evaluate.
    /// - `role`: What the value is needed for, used in the error message.
    ///
    /// # Returns
    /// The evaluated `Value`, or a `MissingValue` error if the node yields
    /// nothing.
    ///
    /// # Example
    /// ```
    /// use hydra::{
    ///     ast::{NodeKind, ParseNode},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let mut ctx = Context::new();
    ///
    /// let number = ParseNode::new(NodeKind::Number, "2.5", 1);
    /// assert_eq!(ctx.eval_value(&number, "the test").unwrap(), Value::Number(2.5));
    ///
    /// let empty = ParseNode::new(NodeKind::Empty, "", 1);
    /// assert!(ctx.eval_value(&empty, "the test").is_err());
    /// ```
    pub fn eval_value(&mut self, node: &ParseNode, role: &str) -> EvalResult<Value> {
        self.eval_node(node)?
            .ok_or_else(|| RuntimeError::MissingValue { details: format!("{role} does not produce a value"),
                                                        line:    node.line, })
    }

    /// Evaluates a node that must produce a number.
    pub fn eval_number(&mut self, node: &ParseNode, role: &str) -> EvalResult<f64> {
        self.eval_value(node, role)?.as_number(node.line)
    }

    /// Evaluates the arguments of a call.
    ///
    /// Only the arguments accepted by `is_eager` are evaluated; the others
    /// stay available as expressions through [`argument_expression`].
    pub(crate) fn eval_arguments(&mut self,
                                 call: &ParseNode,
                                 is_eager: impl Fn(&str) -> bool)
                                 -> EvalResult<Arguments> {
        let mut arguments = Arguments::new(&call.text, call.line);

        for argument in argument_nodes(call) {
            if !is_eager(&argument.text) {
                continue;
            }
            let [expression] = argument.children.as_slice() else {
                return Err(Self::unexpected(argument));
            };
            let value = self.eval_value(expression, &format!("the argument '{}'", argument.text))?;
            arguments.values.insert(argument.text.clone(), value);
        }

        Ok(arguments)
    }
}

/// The evaluated named arguments of a call.
#[derive(Debug, Clone, PartialEq)]
pub struct Arguments {
    function: String,
    line:     usize,
    values:   HashMap<String, Value>,
}

impl Arguments {
    /// Creates an empty argument set for a call of `function`.
    #[must_use]
    pub fn new(function: &str, line: usize) -> Self {
        Self { function: function.to_string(),
               line,
               values: HashMap::new() }
    }

    /// Adds an evaluated argument.
    #[must_use]
    pub fn with(mut self, name: &str, value: impl Into<Value>) -> Self {
        self.values.insert(name.to_string(), value.into());
        self
    }

    /// The line of the call.
    #[must_use]
    pub const fn line(&self) -> usize {
        self.line
    }

    /// The value of an argument.
    ///
    /// # Errors
    /// `MissingArgument` if the argument was not supplied or not evaluated.
    pub fn value(&self, name: &str) -> EvalResult<&Value> {
        self.values
            .get(name)
            .ok_or_else(|| RuntimeError::MissingArgument { function:  self.function.clone(),
                                                           parameter: name.to_string(),
                                                           line:      self.line, })
    }

    /// The value of a numeric argument.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::evaluator::utils::Arguments;
    ///
    /// let arguments = Arguments::new("sin", 3).with("x", 0.5);
    ///
    /// assert_eq!(arguments.number("x").unwrap(), 0.5);
    /// assert!(arguments.number("y").is_err());
    /// assert!(Arguments::new("print", 3).with("message", "hi").number("message").is_err());
    /// ```
    pub fn number(&self, name: &str) -> EvalResult<f64> {
        self.value(name)?.as_number(self.line)
    }

    /// The value of a coordinate argument.
    pub fn pol(&self, name: &str) -> EvalResult<Pol> {
        self.value(name)?.as_pol(self.line)
    }

    /// The value of a string argument.
    pub fn text(&self, name: &str) -> EvalResult<&str> {
        self.value(name)?.as_text(self.line)
    }
}

/// The `Argument` nodes of a `Function` or `Initialization` node.
pub fn argument_nodes(call: &ParseNode) -> &[ParseNode] {
    call.children
        .iter()
        .find(|child| child.kind == NodeKind::ArgumentList)
        .map(|list| list.children.as_slice())
        .unwrap_or_default()
}

/// The unevaluated value expression of a named argument.
///
/// # Errors
/// `MissingArgument` if the call has no argument of that name.
pub fn argument_expression<'n>(call: &'n ParseNode, name: &str) -> EvalResult<&'n ParseNode> {
    argument_nodes(call).iter()
                        .find(|argument| argument.text == name)
                        .and_then(|argument| argument.children.first())
                        .ok_or_else(|| RuntimeError::MissingArgument { function:  call.text.clone(),
                                                                       parameter: name.to_string(),
                                                                       line:      call.line, })
}
