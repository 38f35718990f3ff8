use tracing::debug;

use crate::{
    ast::{NodeKind, ParseNode},
    error::ParseError,
    interpreter::{
        lexer::clean_line,
        parser::core::{ParseResult, parse_source_line},
        registry::Registry,
    },
};

/// A parsed program: one statement per non-empty line, with loop bodies
/// nested into their loops.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Program {
    /// The top-level statements in source order.
    pub statements: Vec<ParseNode>,
}

/// Collects statements while lines are parsed.
///
/// Open loops form a stack; statements go to the innermost open loop, or to
/// the program if none is open.
#[derive(Default)]
struct Builder {
    statements: Vec<ParseNode>,
    open_loops: Vec<ParseNode>,
}

impl Builder {
    fn push(&mut self, node: ParseNode) -> ParseResult<()> {
        match node.kind {
            NodeKind::Empty => Ok(()),
            NodeKind::Loop => {
                debug!(line = node.line, depth = self.open_loops.len() + 1, "opened loop");
                self.open_loops.push(node);
                Ok(())
            },
            NodeKind::Braces => self.close(node.line),
            _ => {
                self.append(node);
                Ok(())
            },
        }
    }

    fn append(&mut self, node: ParseNode) {
        match self.open_loops.last_mut() {
            Some(open) => open.children.push(node),
            None => self.statements.push(node),
        }
    }

    fn close(&mut self, line: usize) -> ParseResult<()> {
        let finished = self.open_loops
                           .pop()
                           .ok_or(ParseError::UnexpectedClosingBrace { line })?;
        debug!(line, opened = finished.line, "closed loop");
        self.append(finished);
        Ok(())
    }

    fn innermost_open_line(&self) -> Option<usize> {
        self.open_loops.last().map(|open| open.line)
    }

    fn finish(self) -> ParseResult<Program> {
        if let Some(line) = self.innermost_open_line() {
            return Err(ParseError::UnterminatedLoop { line });
        }
        Ok(Program { statements: self.statements })
    }
}

impl Program {
    /// Parses a whole source text, stopping at the first error.
    ///
    /// Lines are numbered from 1. A loop header opens a new frame that
    /// collects every following statement until a line holding only `}`.
    ///
    /// # Errors
    /// The first `ParseError` of any line, `UnexpectedClosingBrace` for a `}`
    /// without an open loop, or `UnterminatedLoop` naming the innermost loop
    /// still open at the end of the input.
    ///
    /// # Example
    /// ```
    /// use hydra::{ast::NodeKind, interpreter::{parser::program::Program, registry::Registry}};
    ///
    /// let source = "var a = 0.0\nfor i in [0.0, 1.0, 2.0] {\n  a = a + i\n}";
    /// let program = Program::parse(source, &Registry::new()).unwrap();
    ///
    /// assert_eq!(program.statements.len(), 2);
    /// assert_eq!(program.statements[1].kind, NodeKind::Loop);
    /// // Loop variable, range and one body statement.
    /// assert_eq!(program.statements[1].children.len(), 3);
    ///
    /// let unterminated = Program::parse("for i in [0, 1, 2] {\nvar b = i", &Registry::new());
    /// assert!(unterminated.is_err());
    /// ```
    pub fn parse(source: &str, registry: &Registry) -> ParseResult<Self> {
        let mut builder = Builder::default();

        for (index, text) in source.lines().enumerate() {
            builder.push(parse_source_line(text, index + 1, registry)?)?;
        }

        builder.finish()
    }

    /// Parses a whole source text, collecting every error instead of stopping
    /// at the first one.
    ///
    /// Lines that fail to parse are kept as `Error` nodes carrying the
    /// diagnostic, so the returned program refuses to run those statements. A
    /// failing line that ends in `{` still opens a frame, which keeps the
    /// following braces balanced.
    #[must_use]
    pub fn parse_all(source: &str, registry: &Registry) -> (Self, Vec<ParseError>) {
        let mut builder = Builder::default();
        let mut errors = Vec::new();

        for (index, text) in source.lines().enumerate() {
            let line = index + 1;

            match parse_source_line(text, line, registry) {
                Ok(node) => {
                    if let Err(error) = builder.push(node) {
                        errors.push(error);
                    }
                },
                Err(error) => {
                    let node = ParseNode::error(error.to_string(), line);
                    if clean_line(text).ends_with('{') {
                        builder.open_loops.push(node);
                    } else {
                        builder.append(node);
                    }
                    errors.push(error);
                },
            }
        }

        while let Some(line) = builder.innermost_open_line() {
            errors.push(ParseError::UnterminatedLoop { line });
            let _ = builder.close(line);
        }

        (Self { statements: builder.statements }, errors)
    }
}
