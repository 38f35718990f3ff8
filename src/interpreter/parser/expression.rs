use std::borrow::Cow;

use crate::{
    ast::{NodeKind, ParseNode, Token},
    error::ParseError,
    interpreter::parser::core::{LineParser, ParseResult},
};

impl LineParser<'_> {
    /// Parses an arithmetic expression.
    ///
    /// Grammar: `expression := term (operator term)*`
    ///
    /// A single term unwraps to that term. Longer expressions become an
    /// `Expression` node whose children alternate between terms and
    /// `Operator` nodes; precedence is resolved when the expression is
    /// evaluated. An expression starting with `+` or `-` is read as if it
    /// started with `0`, so `-1.0` is a valid expression.
    ///
    /// # Errors
    /// `InvalidExpression` if the expression is empty, has an even number of
    /// parts, or operators and terms do not alternate.
    pub(super) fn parse_expression(&self, tokens: &[Token]) -> ParseResult<ParseNode> {
        let tokens = with_leading_zero(tokens);

        match tokens.as_ref() {
            [] => Err(self.invalid_expression("the expression is empty".to_string())),
            [term] => self.parse_term(term),
            parts if parts.len() % 2 == 0 => {
                Err(self.invalid_expression(format!("'{}' is missing an operand",
                                                    parts[parts.len() - 1].text)))
            },
            parts => {
                let mut children = Vec::with_capacity(parts.len());

                for (index, token) in parts.iter().enumerate() {
                    let is_operator = token.kind == NodeKind::Operator;

                    if index % 2 == 1 {
                        if !is_operator {
                            return Err(self.invalid_expression(format!("expected an operator but found '{}'",
                                                                       token.text)));
                        }
                        children.push(self.node(NodeKind::Operator, token.text.clone()));
                    } else {
                        if is_operator {
                            return Err(self.invalid_expression(format!("expected an operand but found '{}'",
                                                                       token.text)));
                        }
                        children.push(self.parse_term(token)?);
                    }
                }

                Ok(self.node_with_children(NodeKind::Expression, "", children))
            },
        }
    }

    /// Parses a single operand of an expression. Parenthesised groups are
    /// parsed from their children.
    fn parse_term(&self, token: &Token) -> ParseResult<ParseNode> {
        if token.kind != NodeKind::Expression {
            return self.parse_line(std::slice::from_ref(token));
        }

        if token.children.is_empty() {
            return Err(self.invalid_expression("the parentheses are empty".to_string()));
        }
        self.parse_operand(&token.children, "the parentheses")
    }

    fn invalid_expression(&self, details: String) -> ParseError {
        ParseError::InvalidExpression { details,
                                        line: self.line }
    }
}

/// Prepends a `0` to expressions starting with a sign.
fn with_leading_zero(tokens: &[Token]) -> Cow<'_, [Token]> {
    match tokens.first() {
        Some(first) if first.kind == NodeKind::Operator && (first.is("-") || first.is("+")) => {
            let mut owned = Vec::with_capacity(tokens.len() + 1);
            owned.push(Token::new("0", NodeKind::Number));
            owned.extend_from_slice(tokens);
            Cow::Owned(owned)
        },
        _ => Cow::Borrowed(tokens),
    }
}
