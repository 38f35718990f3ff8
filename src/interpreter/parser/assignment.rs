use crate::{
    ast::{NodeKind, ParseNode, Token},
    error::ParseError,
    interpreter::parser::core::{LineParser, ParseResult, is_identifier},
};

impl LineParser<'_> {
    /// Parses a declaration or a reassignment.
    ///
    /// Grammar:
    /// ```text
    ///     var name = value
    ///     name = value
    /// ```
    /// Declarations produce an `Assignment` node with text `var`, reassignments
    /// one with text `=`. Both have the variable and the parsed value as
    /// children.
    ///
    /// Whether the variable exists is checked when the statement runs; names
    /// starting with `_` are rejected here already.
    ///
    /// # Errors
    /// - `InvalidAssignment` if there is not exactly one `=` or the left side
    ///   is malformed.
    /// - `IdentifierReserved` for declarations of `_`-prefixed names.
    /// - Errors from parsing the right side.
    pub(super) fn parse_assignment(&self, tokens: &[Token]) -> ParseResult<ParseNode> {
        let mut positions = tokens.iter()
                                  .enumerate()
                                  .filter(|(_, token)| token.is("="))
                                  .map(|(index, _)| index);

        let (Some(at), None) = (positions.next(), positions.next()) else {
            let details = if tokens.iter().any(|token| token.is("=")) {
                "only one '=' is allowed per statement"
            } else {
                "missing '='. Use 'var a = 10.0' to declare or 'a = 10.0' to reassign"
            };
            return Err(self.invalid_assignment(details));
        };

        let (lhs, rhs) = (&tokens[..at], &tokens[at + 1..]);

        let (text, name) = match lhs {
            [name] => ("=", name),
            [keyword, name] if keyword.is("var") => ("var", name),
            [] => return Err(self.invalid_assignment("missing the variable name before '='")),
            _ => {
                return Err(self.invalid_assignment("expected 'var name = value' or 'name = value'"));
            },
        };

        if name.kind != NodeKind::Variable || !is_identifier(&name.text) {
            return Err(self.invalid_assignment(&format!("'{}' cannot be assigned to", name.text)));
        }
        if text == "var" && name.text.starts_with('_') {
            return Err(ParseError::IdentifierReserved { name: name.text.clone(),
                                                        line: self.line, });
        }

        let value = self.parse_operand(rhs, "the right side of the assignment")?;

        Ok(self.node_with_children(NodeKind::Assignment,
                                   text,
                                   vec![self.node(NodeKind::Variable, name.text.clone()), value]))
    }

    fn invalid_assignment(&self, details: &str) -> ParseError {
        ParseError::InvalidAssignment { details: details.to_string(),
                                        line:    self.line, }
    }
}
