use hydra::{
    ast::{NodeKind, ParseNode, Token},
    error::{ParseError, TokenizeError},
    interpreter::{
        lexer::tokenize,
        parser::{core::parse_source_line, program::Program},
        registry::Registry,
    },
};
use pretty_assertions::assert_eq;

fn tokens(line: &str) -> Vec<Token> {
    tokenize(line, &Registry::new()).unwrap_or_else(|e| panic!("Failed to tokenize {line:?}: {e}"))
}

fn parse(line: &str) -> ParseNode {
    parse_source_line(line, 1, &Registry::new()).unwrap_or_else(|e| panic!("Failed to parse {line:?}: {e}"))
}

fn parse_err(line: &str) -> ParseError {
    parse_source_line(line, 1, &Registry::new()).expect_err("the line was expected to fail")
}

#[test]
fn brackets_become_children() {
    assert_eq!(tokens("var a = (1 + b) * 2"),
               vec![Token::new("var", NodeKind::Assignment),
                    Token::new("a", NodeKind::Variable),
                    Token::new("=", NodeKind::Assignment),
                    Token::with_children("(",
                                         NodeKind::Expression,
                                         vec![Token::new("1", NodeKind::Number),
                                              Token::new("+", NodeKind::Operator),
                                              Token::new("b", NodeKind::Variable)]),
                    Token::new("*", NodeKind::Operator),
                    Token::new("2", NodeKind::Number)]);
}

#[test]
fn calls_absorb_their_arguments() {
    assert_eq!(tokens("sin(x: (1))"),
               vec![Token::with_children("sin",
                                         NodeKind::Function,
                                         vec![Token::new("x", NodeKind::Variable),
                                              Token::new(":", NodeKind::Variable),
                                              Token::with_children("(",
                                                                   NodeKind::Expression,
                                                                   vec![Token::new("1",
                                                                                   NodeKind::Number)])])]);

    let range = tokens("for i in [0, 1, 2] {");
    assert_eq!(range[3].kind, NodeKind::Range);
    assert_eq!(range[3].children.len(), 5);
    assert_eq!(range[4], Token::new("{", NodeKind::Braces));
}

#[test]
fn strings_split_into_interpolations() {
    let string = &tokens("\"r = \\(p) (\\(2 * a))\"")[0];

    assert_eq!(string.kind, NodeKind::StringLit);
    assert_eq!(string.children,
               vec![Token::new("r = ", NodeKind::StringLit),
                    Token::with_children("p",
                                         NodeKind::StringEscape,
                                         vec![Token::new("p", NodeKind::Variable)]),
                    Token::new(" (", NodeKind::StringLit),
                    Token::with_children("2 * a",
                                         NodeKind::StringEscape,
                                         vec![Token::new("2", NodeKind::Number),
                                              Token::new("*", NodeKind::Operator),
                                              Token::new("a", NodeKind::Variable)]),
                    Token::new(")", NodeKind::StringLit)]);

    assert_eq!(tokens("\"(unbalanced\""), vec![Token::new("(unbalanced", NodeKind::StringLit)]);
}

#[test]
fn tokenize_errors() {
    let registry = Registry::new();

    assert_eq!(tokenize("var a = [1, 2", &registry),
               Err(TokenizeError::UnmatchedBracket { bracket:  '[',
                                                     position: 8, }));
    assert_eq!(tokenize("  ]", &registry),
               Err(TokenizeError::UnmatchedBracket { bracket:  ']',
                                                     position: 2, }));
    assert_eq!(tokenize("print(message: \"\\(a\")", &registry),
               Err(TokenizeError::MalformedEscape { position: 16 }));
    assert!(matches!(tokenize("print(message: \"abc)", &registry),
                     Err(TokenizeError::UnterminatedString { .. })));
}

#[test]
fn parse_tree_of_a_declaration() {
    let node = parse("var b = 1 + 2 * a");

    assert_eq!(node.to_string(),
               "Assignment: var
\tVariable: b
\tExpression
\t\tNumber: 1
\t\tOperator: +
\t\tNumber: 2
\t\tOperator: *
\t\tVariable: a
");
}

#[test]
fn parse_tree_of_a_call() {
    let node = parse("line(from: Pol(r: 1, phi: -M_PI), to: p)");

    assert_eq!(node.to_string(),
               "Function: line
\tArgumentList: line
\t\tArgument: from
\t\t\tInitialization: Pol
\t\t\t\tArgumentList: Pol
\t\t\t\t\tArgument: r
\t\t\t\t\t\tNumber: 1
\t\t\t\t\tArgument: phi
\t\t\t\t\t\tExpression
\t\t\t\t\t\t\tNumber: 0
\t\t\t\t\t\t\tOperator: -
\t\t\t\t\t\t\tNumber: M_PI
\t\tArgument: to
\t\t\tVariable: p
");
}

#[test]
fn parse_tree_of_strings_and_loops() {
    let string = parse("\"x=\\(x)\"");
    assert_eq!(string.kind, NodeKind::StringLit);
    assert_eq!(string.children[1].kind, NodeKind::StringEscape);
    assert_eq!(string.children[1].children[0], ParseNode::new(NodeKind::Variable, "x", 1));

    let header = parse("for k in [0, 0.5, n] {");
    assert_eq!(header.to_string(),
               "Loop: for
\tVariable: k
\tRange: [
\t\tNumber: 0
\t\tNumber: 0.5
\t\tVariable: n
");
}

#[test]
fn statement_classification_errors() {
    assert!(matches!(parse_err("var a = 1 = 2"), ParseError::InvalidAssignment { .. }));
    assert!(matches!(parse_err("var = 2"), ParseError::InvalidAssignment { .. }));
    assert!(matches!(parse_err("var 2 = 2"), ParseError::InvalidAssignment { .. }));
    assert!(matches!(parse_err("1 +"), ParseError::InvalidExpression { .. }));
    assert!(matches!(parse_err("1 + * 2"), ParseError::InvalidExpression { .. }));
    assert!(matches!(parse_err("var a = ()"), ParseError::InvalidExpression { .. }));
    assert!(matches!(parse_err("var a = (b = 1)"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("1 2"), ParseError::InvalidNumber { .. }));
    assert!(matches!(parse_err("a b"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("{"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("in"), ParseError::UnclearStatement { .. }));
    assert!(matches!(parse_err("sin(x: 1) cos(x: 1)"), ParseError::UnexpectedToken { .. }));
    assert!(matches!(parse_err("[1, 2, 3]"), ParseError::UnclearStatement { .. }));
}

#[test]
fn error_lines_are_reported() {
    let error = parse_source_line("var a = (", 7, &Registry::new()).unwrap_err();
    assert_eq!(error.line(), 7);
    assert!(error.to_string().starts_with("Error on line 7:"));
    assert!(std::error::Error::source(&error).is_some());
}

#[test]
fn programs_nest_loop_bodies() {
    let program = Program::parse("var n = 2

for i in [0, 1, n] {
  // comment
  for j in [0, 1, i] {
    print(message: j)
  }
  var done = i
}
show()",
                                 &Registry::new()).unwrap();

    let kinds = program.statements.iter().map(|s| s.kind).collect::<Vec<_>>();
    assert_eq!(kinds, vec![NodeKind::Assignment, NodeKind::Loop, NodeKind::Function]);

    let outer = &program.statements[1];
    assert_eq!(outer.line, 3);
    assert_eq!(outer.children.iter().map(|c| c.kind).collect::<Vec<_>>(),
               vec![NodeKind::Variable, NodeKind::Range, NodeKind::Loop, NodeKind::Assignment]);

    let inner = &outer.children[2];
    assert_eq!(inner.line, 5);
    assert_eq!(inner.children[2].kind, NodeKind::Function);
    assert_eq!(inner.children[2].line, 6);
}
