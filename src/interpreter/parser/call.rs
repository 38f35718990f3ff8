use crate::{
    ast::{NodeKind, ParseNode, Token},
    error::ParseError,
    interpreter::{
        parser::core::{LineParser, ParseResult},
        registry::FunctionSignature,
    },
};

impl LineParser<'_> {
    /// Parses a builtin function call.
    ///
    /// The statement must consist of exactly one function token whose
    /// children hold the argument list. The result is a `Function` node with a
    /// single `ArgumentList` child.
    ///
    /// # Errors
    /// - `UnexpectedToken` if anything follows the call.
    /// - `UnknownFunction` if the registry has no signature for the name.
    /// - `InvalidArguments` if the arguments do not match the signature.
    pub(super) fn parse_function(&self, tokens: &[Token]) -> ParseResult<ParseNode> {
        let call = self.single_call(tokens)?;
        let signature = self.signature_of(call)?;
        let arguments = self.parse_argument_list(&call.children, signature)?;

        Ok(self.node_with_children(NodeKind::Function, call.text.clone(), vec![arguments]))
    }

    /// Parses an initializer such as `Pol(r: 1.0, phi: 0.0)`.
    ///
    /// Same shape as a function call, but the argument list must not be
    /// empty.
    pub(super) fn parse_initialization(&self, tokens: &[Token]) -> ParseResult<ParseNode> {
        let call = self.single_call(tokens)?;
        let signature = self.signature_of(call)?;

        if call.children.is_empty() {
            return Err(self.invalid_arguments(signature, "the argument list is empty".to_string()));
        }
        let arguments = self.parse_argument_list(&call.children, signature)?;

        Ok(self.node_with_children(NodeKind::Initialization, call.text.clone(), vec![arguments]))
    }

    fn single_call<'t>(&self, tokens: &'t [Token]) -> ParseResult<&'t Token> {
        match tokens {
            [call] => Ok(call),
            [_, extra, ..] => Err(ParseError::UnexpectedToken { token:    extra.text.clone(),
                                                                expected: "a single call per statement".to_string(),
                                                                line:     self.line, }),
            [] => Err(ParseError::UnclearStatement { token: String::new(),
                                                     line:  self.line, }),
        }
    }

    fn signature_of(&self, call: &Token) -> ParseResult<&FunctionSignature> {
        self.registry
            .signature(&call.text)
            .ok_or_else(|| ParseError::UnknownFunction { name: call.text.clone(),
                                                         line: self.line, })
    }

    /// Parses `name: value, name: value, …` against a signature.
    ///
    /// Arguments must be named and appear in exactly the declared order. Each
    /// value runs up to the next top-level comma and is parsed on its own.
    ///
    /// # Errors
    /// `InvalidArguments` naming the expected usage if a name does not match,
    /// a colon or value is missing, a comma trails, or there are too many or
    /// too few arguments.
    pub(super) fn parse_argument_list(&self,
                                      tokens: &[Token],
                                      signature: &FunctionSignature)
                                      -> ParseResult<ParseNode> {
        let mut expected = signature.parameters.iter();
        let mut arguments = Vec::new();
        let mut remaining = (!tokens.is_empty()).then_some(tokens);

        while let Some(current) = remaining.take() {
            let Some((name, after_name)) = current.split_first() else {
                return Err(self.invalid_arguments(signature,
                                                  "expected another argument after ','".to_string()));
            };
            let Some(parameter) = expected.next() else {
                return Err(self.invalid_arguments(signature,
                                                  format!("unexpected extra argument '{}'",
                                                          name.text)));
            };
            if name.text != *parameter || !name.children.is_empty() {
                return Err(self.invalid_arguments(signature,
                                                  format!("expected argument '{parameter}' but found '{}'",
                                                          name.text)));
            }

            let rest = match after_name.split_first() {
                Some((colon, after_colon)) if colon.is(":") => after_colon,
                _ => {
                    return Err(self.invalid_arguments(signature,
                                                      format!("missing ':' after '{parameter}'")));
                },
            };

            let end = rest.iter().position(|token| token.is(",")).unwrap_or(rest.len());
            let value_tokens = &rest[..end];

            if value_tokens.is_empty() {
                return Err(self.invalid_arguments(signature,
                                                  format!("missing value for '{parameter}'")));
            }
            if value_tokens.iter().any(|token| token.is(":")) {
                return Err(self.invalid_arguments(signature,
                                                  format!("unexpected ':' in the value of '{parameter}'")));
            }

            let value = self.parse_operand(value_tokens, &format!("'{parameter}'"))?;
            arguments.push(self.node_with_children(NodeKind::Argument,
                                                   parameter.clone(),
                                                   vec![value]));

            if end < rest.len() {
                remaining = Some(&rest[end + 1..]);
            }
        }

        if let Some(missing) = expected.next() {
            return Err(self.invalid_arguments(signature, format!("missing argument '{missing}'")));
        }

        Ok(self.node_with_children(NodeKind::ArgumentList, signature.name.clone(), arguments))
    }

    fn invalid_arguments(&self, signature: &FunctionSignature, details: String) -> ParseError {
        ParseError::InvalidArguments { function: signature.name.clone(),
                                       usage: signature.usage(),
                                       details,
                                       line: self.line }
    }
}
