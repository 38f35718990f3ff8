use std::collections::HashMap;

use crate::ast::NodeKind;

/// The name and ordered parameter list of a builtin function or initializer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FunctionSignature {
    /// The name the function is called by.
    pub name:       String,
    /// The parameter names in the order they must be supplied.
    pub parameters: Vec<String>,
}

impl FunctionSignature {
    /// Renders the signature the way it is called, e.g.
    /// `line(from: …, to: …)`.
    #[must_use]
    pub fn usage(&self) -> String {
        let parameters = self.parameters
                             .iter()
                             .map(|p| format!("{p}: …"))
                             .collect::<Vec<_>>()
                             .join(", ");
        format!("{}({parameters})", self.name)
    }
}

/// Keywords that are not function or initializer names.
const KEYWORDS: &[(&str, NodeKind)] = &[("for", NodeKind::Loop),
                                        ("in", NodeKind::Range),
                                        ("var", NodeKind::Assignment),
                                        ("=", NodeKind::Assignment),
                                        ("+", NodeKind::Operator),
                                        ("-", NodeKind::Operator),
                                        ("*", NodeKind::Operator),
                                        ("/", NodeKind::Operator),
                                        ("{", NodeKind::Braces),
                                        ("}", NodeKind::Braces)];

/// Builtin functions with their parameters.
const FUNCTIONS: &[(&str, &[&str])] = &[("arc", &["center", "radius", "from", "to"]),
                                        ("circle", &["center", "radius"]),
                                        ("clear", &[]),
                                        ("cos", &["x"]),
                                        ("cosh", &["x"]),
                                        ("curve_angle", &["from", "to", "angle"]),
                                        ("curve_distance", &["from", "to", "distance"]),
                                        ("exp", &["x"]),
                                        ("line", &["from", "to"]),
                                        ("log", &["x"]),
                                        ("mark", &["center", "radius"]),
                                        ("print", &["message"]),
                                        ("random", &["from", "to"]),
                                        ("save", &["file"]),
                                        ("show", &[]),
                                        ("sin", &["x"]),
                                        ("sinh", &["x"]),
                                        ("theta", &["r1", "r2", "R"])];

/// Initializers of composite values with their parameters.
const INITIALIZERS: &[(&str, &[&str])] = &[("Euc", &["x", "y"]), ("Pol", &["r", "phi"])];

/// Identifies keywords, builtin functions and initializers.
///
/// One registry is owned by each [`Context`](crate::interpreter::evaluator::core::Context)
/// and lent to the tokenizer and parser, which use it to classify words and
/// to validate argument lists.
#[derive(Debug, Clone)]
pub struct Registry {
    keywords:   HashMap<String, NodeKind>,
    signatures: HashMap<String, FunctionSignature>,
}

impl Default for Registry {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry {
    /// Creates a registry containing every keyword, builtin and initializer of
    /// the language.
    #[must_use]
    pub fn new() -> Self {
        let mut registry = Self { keywords:   HashMap::new(),
                                  signatures: HashMap::new(), };

        for (keyword, kind) in KEYWORDS {
            registry.keywords.insert((*keyword).to_string(), *kind);
        }
        for (name, parameters) in FUNCTIONS {
            registry.register(name, NodeKind::Function, parameters);
        }
        for (name, parameters) in INITIALIZERS {
            registry.register(name, NodeKind::Initialization, parameters);
        }

        registry
    }

    fn register(&mut self, name: &str, kind: NodeKind, parameters: &[&str]) {
        self.keywords.insert(name.to_string(), kind);
        self.signatures
            .insert(name.to_string(),
                    FunctionSignature { name:       name.to_string(),
                                        parameters: parameters.iter()
                                                              .map(ToString::to_string)
                                                              .collect(), });
    }

    /// Returns the kind a keyword maps to, or `None` for ordinary words.
    ///
    /// # Example
    /// ```
    /// use hydra::{ast::NodeKind, interpreter::registry::Registry};
    ///
    /// let registry = Registry::new();
    /// assert_eq!(registry.kind_of_keyword("circle"), Some(NodeKind::Function));
    /// assert_eq!(registry.kind_of_keyword("Pol"), Some(NodeKind::Initialization));
    /// assert_eq!(registry.kind_of_keyword("radius"), None);
    /// ```
    #[must_use]
    pub fn kind_of_keyword(&self, word: &str) -> Option<NodeKind> {
        self.keywords.get(word).copied()
    }

    /// The names of all keywords of the given kind, in no particular order.
    ///
    /// # Example
    /// ```
    /// use hydra::{ast::NodeKind, interpreter::registry::Registry};
    ///
    /// let registry = Registry::new();
    /// let mut initializers = registry.names_of(NodeKind::Initialization).collect::<Vec<_>>();
    /// initializers.sort_unstable();
    /// assert_eq!(initializers, ["Euc", "Pol"]);
    /// ```
    pub fn names_of(&self, kind: NodeKind) -> impl Iterator<Item = &str> {
        self.keywords
            .iter()
            .filter(move |(_, k)| **k == kind)
            .map(|(name, _)| name.as_str())
    }

    /// Returns the signature of a function or initializer.
    #[must_use]
    pub fn signature(&self, name: &str) -> Option<&FunctionSignature> {
        self.signatures.get(name)
    }
}
