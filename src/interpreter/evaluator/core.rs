use std::{f64::consts::PI, io::Write};

use rand::{SeedableRng, rngs::StdRng};
use tracing::{debug, instrument};

use crate::{
    ast::{NodeKind, ParseNode},
    canvas::{Canvas, Drawing},
    error::RuntimeError,
    interpreter::{
        evaluator::scope::ScopeStack,
        lexer::PI_LITERAL,
        parser::program::Program,
        registry::Registry,
        value::core::Value,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Stores the runtime evaluation context.
///
/// This struct holds the interpreter state of one program: the scope stack,
/// the registry of keywords and builtins, the canvas that collects the
/// drawing, the sink that `print` and `show` write to, and the random number
/// generator behind `random`.
///
/// ## Usage
///
/// A `Context` is created once per program and reused for every statement.
/// Its collaborators are replaced with the `with_*` builders:
///
/// ```
/// use hydra::interpreter::evaluator::core::Context;
///
/// let mut ctx = Context::new().with_seed(7)
///                             .with_output(Box::new(std::io::sink()));
///
/// ctx.run("var a = 2 + 3 * 4").unwrap();
/// assert_eq!(ctx.scopes().lookup("a").map(ToString::to_string),
///            Some("14.000000".to_string()));
/// ```
pub struct Context {
    pub(crate) scopes:   ScopeStack,
    pub(crate) registry: Registry,
    pub(crate) canvas:   Box<dyn Canvas>,
    pub(crate) output:   Box<dyn Write>,
    pub(crate) rng:      StdRng,
}

impl Default for Context {
    fn default() -> Self {
        Self::new()
    }
}

impl Context {
    /// Creates a context with an empty global scope, an empty [`Drawing`],
    /// standard output as output sink and an entropy-seeded generator.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes:   ScopeStack::new(),
               registry: Registry::new(),
               canvas:   Box::new(Drawing::new()),
               output:   Box::new(std::io::stdout()),
               rng:      StdRng::from_entropy(), }
    }

    /// Replaces the canvas that drawing builtins add to.
    #[must_use]
    pub fn with_canvas(mut self, canvas: Box<dyn Canvas>) -> Self {
        self.canvas = canvas;
        self
    }

    /// Replaces the sink that `print` and `show` write to.
    #[must_use]
    pub fn with_output(mut self, output: Box<dyn Write>) -> Self {
        self.output = output;
        self
    }

    /// Seeds the generator behind `random`, making its draws reproducible.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.rng = StdRng::seed_from_u64(seed);
        self
    }

    /// The canvas holding everything drawn so far.
    #[must_use]
    pub fn canvas(&self) -> &dyn Canvas {
        self.canvas.as_ref()
    }

    /// The current variable bindings.
    #[must_use]
    pub const fn scopes(&self) -> &ScopeStack {
        &self.scopes
    }

    /// The registry used to tokenize and parse programs for this context.
    #[must_use]
    pub const fn registry(&self) -> &Registry {
        &self.registry
    }

    /// Interprets a single statement.
    ///
    /// Statements containing an error node anywhere in their tree are
    /// rejected before anything is evaluated.
    ///
    /// # Returns
    /// The value of the statement, or `None` for statements without one
    /// (loops, most builtins, empty lines).
    ///
    /// # Errors
    /// `InvalidStatement` for statements with error nodes, otherwise the
    /// first error raised while evaluating.
    pub fn interpret(&mut self, node: &ParseNode) -> EvalResult<Option<Value>> {
        if let Some(error) = node.first_error() {
            return Err(RuntimeError::InvalidStatement { details: error.text.clone(),
                                                        line:    error.line, });
        }
        self.eval_node(node)
    }

    /// Interprets statements in order, stopping at the first error.
    ///
    /// # Returns
    /// The value of the last statement that produced one.
    pub fn interpret_all(&mut self, statements: &[ParseNode]) -> EvalResult<Option<Value>> {
        let mut result = None;

        for statement in statements {
            if let Some(value) = self.interpret(statement)? {
                result = Some(value);
            }
        }

        Ok(result)
    }

    /// Parses and interprets a whole program.
    ///
    /// # Errors
    /// The first parse error, or else the first runtime error.
    pub fn run(&mut self, source: &str) -> Result<Option<Value>, Box<dyn std::error::Error>> {
        let program = Program::parse(source, &self.registry)?;
        Ok(self.interpret_all(&program.statements)?)
    }

    /// Evaluates a node of the parse tree.
    ///
    /// This is the dispatch over node kinds: literals, variables, assignments,
    /// expressions, calls, initializers and loops. Structural nodes such as
    /// operators or argument lists are only evaluated through their parents
    /// and are rejected here.
    #[instrument(level = "trace", skip_all, fields(line = node.line, kind = %node.kind))]
    pub fn eval_node(&mut self, node: &ParseNode) -> EvalResult<Option<Value>> {
        match node.kind {
            NodeKind::Empty => Ok(None),
            NodeKind::Assignment => self.eval_assignment(node),
            NodeKind::Expression => self.eval_expression(node),
            NodeKind::Function => self.eval_function(node),
            NodeKind::Initialization => self.eval_initialization(node),
            NodeKind::Loop => self.eval_loop(node),
            NodeKind::Number => Self::eval_number_literal(node).map(Some),
            NodeKind::StringLit => self.eval_string(node).map(Some),
            NodeKind::StringEscape => {
                let [expression] = node.children.as_slice() else {
                    return Err(Self::unexpected(node));
                };
                self.eval_value(expression, "the interpolation").map(Some)
            },
            NodeKind::Variable if node.children.is_empty() => {
                self.lookup(&node.text, node.line).map(Some)
            },
            _ => Err(Self::unexpected(node)),
        }
    }

    /// Converts a number literal. `M_PI` is π.
    ///
    /// # Example
    /// ```
    /// use hydra::{
    ///     ast::{NodeKind, ParseNode},
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let pi = ParseNode::new(NodeKind::Number, "M_PI", 1);
    /// assert_eq!(Context::eval_number_literal(&pi).unwrap(),
    ///            Value::Number(std::f64::consts::PI));
    /// ```
    pub fn eval_number_literal(node: &ParseNode) -> EvalResult<Value> {
        if node.text == PI_LITERAL {
            return Ok(Value::Number(PI));
        }
        node.text
            .parse::<f64>()
            .map(Value::Number)
            .map_err(|_| RuntimeError::TypeMismatch { details: format!("'{}' is not a valid number",
                                                                       node.text),
                                                      line:    node.line, })
    }

    /// Evaluates a string literal. Interpolated strings concatenate the
    /// textual form of every part.
    fn eval_string(&mut self, node: &ParseNode) -> EvalResult<Value> {
        if node.children.is_empty() {
            return Ok(Value::Text(node.text.clone()));
        }

        let mut text = String::new();
        for part in &node.children {
            let value = self.eval_value(part, "the string")?;
            text.push_str(&value.to_string());
        }
        debug!(line = node.line, parts = node.children.len(), "interpolated string");

        Ok(Value::Text(text))
    }

    pub(crate) fn unexpected(node: &ParseNode) -> RuntimeError {
        RuntimeError::UnexpectedNode { kind: node.kind.to_string(),
                                       line: node.line, }
    }
}
