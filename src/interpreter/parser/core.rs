use tracing::trace;

use crate::{
    ast::{NodeKind, ParseNode, Token},
    error::ParseError,
    interpreter::registry::Registry,
};

pub type ParseResult<T> = Result<T, ParseError>;

/// Determines which kind of statement a line's tokens form.
///
/// - `Empty` if there are no tokens,
/// - `Assignment` if any top-level token is `=`,
/// - `Expression` if any top-level token is an operator,
/// - otherwise the kind of the first token.
///
/// # Example
/// ```
/// use hydra::{
///     ast::NodeKind,
///     interpreter::{lexer::tokenize, parser::core::classify, registry::Registry},
/// };
///
/// let registry = Registry::new();
/// let kind_of = |line: &str| classify(&tokenize(line, &registry).unwrap());
///
/// assert_eq!(kind_of(""), NodeKind::Empty);
/// assert_eq!(kind_of("var a = 1 + 2"), NodeKind::Assignment);
/// assert_eq!(kind_of("sin(x: a) * 2"), NodeKind::Expression);
/// assert_eq!(kind_of("clear()"), NodeKind::Function);
/// ```
#[must_use]
pub fn classify(tokens: &[Token]) -> NodeKind {
    let Some(first) = tokens.first() else {
        return NodeKind::Empty;
    };

    if tokens.iter().any(|token| token.is("=")) {
        NodeKind::Assignment
    } else if tokens.iter().any(|token| token.kind == NodeKind::Operator) {
        NodeKind::Expression
    } else {
        first.kind
    }
}

/// Returns `true` if `name` can name a variable: a letter or `_` followed by
/// letters, digits or `_`.
#[must_use]
pub fn is_identifier(name: &str) -> bool {
    let mut chars = name.chars();
    chars.next()
         .is_some_and(|first| first.is_alphabetic() || first == '_')
    && chars.all(|c| c.is_alphanumeric() || c == '_')
}

/// Parses the token tree of one source line.
///
/// A `LineParser` borrows the registry to look up function signatures and
/// stamps every node it creates with the line number it was made for.
pub struct LineParser<'r> {
    pub(super) registry: &'r Registry,
    pub(super) line:     usize,
}

impl<'r> LineParser<'r> {
    /// Creates a parser for the given source line.
    #[must_use]
    pub const fn new(registry: &'r Registry, line: usize) -> Self {
        Self { registry, line }
    }

    /// Parses a statement.
    ///
    /// The tokens are classified with [`classify`] and handed to the matching
    /// parse rule. Loop headers parse into a `Loop` node without a body; the
    /// body is attached by the program driver.
    ///
    /// # Errors
    /// Returns a `ParseError` describing the first problem found.
    ///
    /// # Example
    /// ```
    /// use hydra::{
    ///     ast::NodeKind,
    ///     interpreter::{lexer::tokenize, parser::core::LineParser, registry::Registry},
    /// };
    ///
    /// let registry = Registry::new();
    /// let tokens = tokenize("var a = 2 + 3 * 4", &registry).unwrap();
    /// let node = LineParser::new(&registry, 1).parse_line(&tokens).unwrap();
    ///
    /// assert_eq!(node.kind, NodeKind::Assignment);
    /// assert_eq!(node.text, "var");
    /// assert_eq!(node.children[1].kind, NodeKind::Expression);
    /// ```
    pub fn parse_line(&self, tokens: &[Token]) -> ParseResult<ParseNode> {
        let kind = classify(tokens);
        trace!(line = self.line, %kind, "classified statement");

        match kind {
            NodeKind::Empty => Ok(ParseNode::new(NodeKind::Empty, "", self.line)),
            NodeKind::Assignment => self.parse_assignment(tokens),
            NodeKind::Expression => self.parse_expression(tokens),
            NodeKind::Function => self.parse_function(tokens),
            NodeKind::Initialization => self.parse_initialization(tokens),
            NodeKind::Loop => self.parse_loop(tokens),
            NodeKind::Number => self.parse_number(tokens),
            NodeKind::StringLit => self.parse_string(tokens),
            NodeKind::Braces => self.parse_braces(tokens),
            NodeKind::Variable => self.parse_variable(tokens),
            _ => Err(ParseError::UnclearStatement { token: tokens.first()
                                                                 .map_or_else(String::new,
                                                                              |t| t.text.clone()),
                                                    line:  self.line, }),
        }
    }

    /// Parses tokens that must produce a value: the right side of an
    /// assignment, an argument, a loop bound, an interpolation or the
    /// contents of parentheses.
    ///
    /// Assignments, loops and braces are rejected here.
    pub(super) fn parse_operand(&self, tokens: &[Token], role: &str) -> ParseResult<ParseNode> {
        match classify(tokens) {
            NodeKind::Empty => Err(ParseError::InvalidExpression { details: format!("missing a value for {role}"),
                                                                   line:    self.line, }),
            NodeKind::Assignment | NodeKind::Loop | NodeKind::Braces => {
                let offending = tokens.iter()
                                      .find(|token| token.is("="))
                                      .unwrap_or(&tokens[0]);
                Err(ParseError::UnexpectedToken { token:    offending.text.clone(),
                                                  expected: format!("a value for {role}"),
                                                  line:     self.line, })
            },
            _ => self.parse_line(tokens),
        }
    }

    pub(super) fn node(&self, kind: NodeKind, text: impl Into<String>) -> ParseNode {
        ParseNode::new(kind, text, self.line)
    }

    pub(super) fn node_with_children(&self,
                                     kind: NodeKind,
                                     text: impl Into<String>,
                                     children: Vec<ParseNode>)
                                     -> ParseNode {
        ParseNode::with_children(kind, text, children, self.line)
    }
}

/// Tokenizes and parses a single source line.
///
/// # Errors
/// Returns a `ParseError` if the line cannot be tokenized or parsed.
pub fn parse_source_line(text: &str, line: usize, registry: &Registry) -> ParseResult<ParseNode> {
    let tokens = crate::interpreter::lexer::tokenize(text, registry).map_err(|error| {
                     ParseError::Tokenize { error, line }
                 })?;
    LineParser::new(registry, line).parse_line(&tokens)
}
