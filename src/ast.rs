use std::fmt;

/// The syntactic category of a token or parse-tree node.
///
/// The same closed set of kinds is shared by the tokenizer, which classifies
/// each word it reads, and by the parser, which tags every node of the parse
/// tree. The interpreter dispatches on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NodeKind {
    /// A single `name: value` pair of a call.
    Argument,
    /// The full argument list of a call.
    ArgumentList,
    /// `var` or `=`, and the statement built from them.
    Assignment,
    /// A blank or comment-only line.
    Empty,
    /// A statement that failed to parse. Its text is the diagnostic.
    Error,
    /// A parenthesised group or an arithmetic expression.
    Expression,
    /// A builtin function call.
    Function,
    /// `for`, and the loop built from it.
    Loop,
    /// A composite-value constructor such as `Pol`.
    Initialization,
    /// A numeric literal.
    Number,
    /// One of `+ - * /`.
    Operator,
    /// `{` or `}`.
    Braces,
    /// `in`, or a bracketed `[lower, step, upper]` triple.
    Range,
    /// A string literal, or a literal run inside an interpolated string.
    StringLit,
    /// An interpolated expression inside a string.
    StringEscape,
    /// An identifier that is not a keyword; a variable reference.
    Variable,
}

impl fmt::Display for NodeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Argument => "Argument",
            Self::ArgumentList => "ArgumentList",
            Self::Assignment => "Assignment",
            Self::Empty => "Empty",
            Self::Error => "Error",
            Self::Expression => "Expression",
            Self::Function => "Function",
            Self::Loop => "Loop",
            Self::Initialization => "Initialization",
            Self::Number => "Number",
            Self::Operator => "Operator",
            Self::Braces => "Braces",
            Self::Range => "Range",
            Self::StringLit => "String",
            Self::StringEscape => "StringEscape",
            Self::Variable => "Variable",
        };
        write!(f, "{name}")
    }
}

/// A token of a single source line.
///
/// Bracketed and quoted parts of the line are tokenized recursively into
/// `children`, so a line becomes a small tree rather than a flat list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    /// The text of the token. Marker tokens for brackets hold the opening
    /// bracket, string tokens hold the literal content without quotes.
    pub text:     String,
    /// The classification of the token.
    pub kind:     NodeKind,
    /// Recursively tokenized contents.
    pub children: Vec<Self>,
}

impl Token {
    /// Creates a token without children.
    #[must_use]
    pub fn new(text: impl Into<String>, kind: NodeKind) -> Self {
        Self { text:     text.into(),
               kind,
               children: Vec::new(), }
    }

    /// Creates a token that owns the given children.
    #[must_use]
    pub fn with_children(text: impl Into<String>, kind: NodeKind, children: Vec<Self>) -> Self {
        Self { text: text.into(),
               kind,
               children }
    }

    /// Returns `true` if the token is the literal text `text` and has no
    /// children.
    #[must_use]
    pub fn is(&self, text: &str) -> bool {
        self.text == text && self.children.is_empty()
    }
}

/// A node of the parse tree.
///
/// Every source line parses into one `ParseNode`. Loops own the statements of
/// their body as trailing children, after the loop variable and the range.
#[derive(Debug, Clone, PartialEq)]
pub struct ParseNode {
    /// The syntactic category of the node.
    pub kind:     NodeKind,
    /// The text of the node: a name, a literal or an operator.
    pub text:     String,
    /// The child nodes.
    pub children: Vec<Self>,
    /// The source line the node was parsed from.
    pub line:     usize,
}

impl ParseNode {
    /// Creates a node without children.
    #[must_use]
    pub fn new(kind: NodeKind, text: impl Into<String>, line: usize) -> Self {
        Self { kind,
               text: text.into(),
               children: Vec::new(),
               line }
    }

    /// Creates a node that owns the given children.
    #[must_use]
    pub fn with_children(kind: NodeKind,
                         text: impl Into<String>,
                         children: Vec<Self>,
                         line: usize)
                         -> Self {
        Self { kind,
               text: text.into(),
               children,
               line }
    }

    /// Creates an error node carrying a diagnostic.
    #[must_use]
    pub fn error(message: impl Into<String>, line: usize) -> Self {
        Self::new(NodeKind::Error, message, line)
    }

    /// Returns the first error node of the tree in depth-first order.
    #[must_use]
    pub fn first_error(&self) -> Option<&Self> {
        if self.kind == NodeKind::Error {
            return Some(self);
        }
        self.children.iter().find_map(Self::first_error)
    }

    /// A statement is valid if no node of its tree is an error node.
    ///
    /// # Example
    /// ```
    /// use hydra::ast::{NodeKind, ParseNode};
    ///
    /// let mut node = ParseNode::new(NodeKind::Expression, "", 1);
    /// node.children.push(ParseNode::new(NodeKind::Number, "1.0", 1));
    /// assert!(node.is_valid());
    ///
    /// node.children.push(ParseNode::error("broken", 1));
    /// assert!(!node.is_valid());
    /// ```
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.first_error().is_none()
    }

    /// A short human-readable description, used in diagnostics.
    #[must_use]
    pub fn describe(&self) -> String {
        match self.kind {
            NodeKind::Function | NodeKind::Initialization => format!("{}(...)", self.text),
            NodeKind::Expression => "(...)".to_string(),
            NodeKind::StringLit => format!("\"{}\"", self.text),
            _ => self.text.clone(),
        }
    }

    fn write_indented(&self, f: &mut fmt::Formatter<'_>, depth: usize) -> fmt::Result {
        let indent = "\t".repeat(depth);
        if self.text.is_empty() {
            writeln!(f, "{indent}{}", self.kind)?;
        } else {
            writeln!(f, "{indent}{}: {}", self.kind, self.text)?;
        }
        for child in &self.children {
            child.write_indented(f, depth + 1)?;
        }
        Ok(())
    }
}

impl fmt::Display for ParseNode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.write_indented(f, 0)
    }
}
