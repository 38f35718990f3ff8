use crate::{
    ast::{NodeKind, ParseNode, Token},
    error::ParseError,
    interpreter::parser::core::{LineParser, ParseResult, is_identifier},
};

/// The roles of the three parts of a loop range, in order.
const RANGE_PARTS: [&str; 3] = ["the lower bound", "the step", "the upper bound"];

impl LineParser<'_> {
    /// Parses a loop header.
    ///
    /// Grammar: `for name in [lower, step, upper] {`
    ///
    /// Produces a `Loop` node whose children are the loop `Variable` and a
    /// `Range` node holding the three parsed bounds. The statements of the
    /// body are appended later by the program driver.
    ///
    /// # Errors
    /// `InvalidLoop` if the header does not have exactly this shape or the
    /// range does not have exactly three parts.
    pub(super) fn parse_loop(&self, tokens: &[Token]) -> ParseResult<ParseNode> {
        let [keyword, variable, separator, range, brace] = tokens else {
            return Err(self.invalid_loop(format!("expected 5 parts but found {}", tokens.len())));
        };

        if !keyword.is("for") {
            return Err(self.invalid_loop(format!("expected 'for' but found '{}'", keyword.text)));
        }
        if variable.kind != NodeKind::Variable || !is_identifier(&variable.text) {
            return Err(self.invalid_loop(format!("'{}' is not a valid loop variable",
                                                 variable.text)));
        }
        if !separator.is("in") {
            return Err(self.invalid_loop(format!("expected 'in' but found '{}'", separator.text)));
        }
        if range.kind != NodeKind::Range || range.text != "[" {
            return Err(self.invalid_loop(format!("expected a range but found '{}'", range.text)));
        }
        if !brace.is("{") {
            return Err(self.invalid_loop(format!("expected '{{' but found '{}'", brace.text)));
        }

        let parts = range.children
                         .split(|token| token.is(","))
                         .collect::<Vec<_>>();
        if parts.len() != RANGE_PARTS.len() {
            return Err(self.invalid_loop(format!("the range needs a lower bound, a step and an upper bound, but has {} parts",
                                                 parts.len())));
        }

        let bounds = parts.into_iter()
                          .zip(RANGE_PARTS)
                          .map(|(part, role)| self.parse_operand(part, role))
                          .collect::<ParseResult<Vec<_>>>()?;

        Ok(self.node_with_children(NodeKind::Loop,
                                   "for",
                                   vec![self.node(NodeKind::Variable, variable.text.clone()),
                                        self.node_with_children(NodeKind::Range, "[", bounds)]))
    }

    /// Parses a numeric literal. The text is kept verbatim.
    pub(super) fn parse_number(&self, tokens: &[Token]) -> ParseResult<ParseNode> {
        match tokens {
            [number] => Ok(self.node(NodeKind::Number, number.text.clone())),
            _ => Err(ParseError::InvalidNumber { token: tokens[0].text.clone(),
                                                 line:  self.line, }),
        }
    }

    /// Parses a string literal.
    ///
    /// Plain strings become a childless `StringLit` node. Interpolated strings
    /// keep their literal runs as `StringLit` children and turn every
    /// interpolation into a `StringEscape` node holding the parsed expression.
    pub(super) fn parse_string(&self, tokens: &[Token]) -> ParseResult<ParseNode> {
        let [string] = tokens else {
            return Err(ParseError::InvalidString { details: "a string cannot be followed by further tokens".to_string(),
                                                   line:    self.line, });
        };

        let children = string.children
                             .iter()
                             .map(|part| match part.kind {
                                 NodeKind::StringEscape => self.parse_escape(part),
                                 _ => Ok(self.node(NodeKind::StringLit, part.text.clone())),
                             })
                             .collect::<ParseResult<Vec<_>>>()?;

        Ok(self.node_with_children(NodeKind::StringLit, string.text.clone(), children))
    }

    fn parse_escape(&self, escape: &Token) -> ParseResult<ParseNode> {
        if escape.children.is_empty() {
            return Err(ParseError::InvalidString { details: "the interpolation '\\()' is empty".to_string(),
                                                   line:    self.line, });
        }

        let expression = self.parse_operand(&escape.children, "the interpolation")?;
        Ok(self.node_with_children(NodeKind::StringEscape, escape.text.clone(), vec![expression]))
    }

    /// Parses a line consisting of a closing brace.
    pub(super) fn parse_braces(&self, tokens: &[Token]) -> ParseResult<ParseNode> {
        match tokens {
            [brace] if brace.is("}") => Ok(self.node(NodeKind::Braces, "}")),
            _ => Err(ParseError::UnexpectedToken { token:    tokens[0].text.clone(),
                                                   expected: "'}' on a line of its own".to_string(),
                                                   line:     self.line, }),
        }
    }

    /// Parses a reference to a variable.
    pub(super) fn parse_variable(&self, tokens: &[Token]) -> ParseResult<ParseNode> {
        match tokens {
            [name] if is_identifier(&name.text) => Ok(self.node(NodeKind::Variable, name.text.clone())),
            [name, call, ..] if call.kind == NodeKind::Expression => {
                Err(ParseError::UnknownFunction { name: name.text.clone(),
                                                  line: self.line, })
            },
            [_, extra, ..] => Err(ParseError::UnexpectedToken { token:    extra.text.clone(),
                                                                expected: "an operator or '='".to_string(),
                                                                line:     self.line, }),
            _ => Err(ParseError::UnexpectedToken { token:    tokens[0].text.clone(),
                                                   expected: "a statement".to_string(),
                                                   line:     self.line, }),
        }
    }

    fn invalid_loop(&self, details: String) -> ParseError {
        ParseError::InvalidLoop { details,
                                  line: self.line }
    }
}
