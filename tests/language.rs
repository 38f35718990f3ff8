use std::{
    cell::RefCell,
    fs,
    io::{self, Write},
    rc::Rc,
};

use hydra::{
    ast::NodeKind,
    error::{ParseError, RuntimeError, TokenizeError},
    get_result,
    interpreter::{
        evaluator::core::Context,
        parser::program::Program,
        registry::Registry,
        value::core::Value,
    },
    run_program,
};
use pretty_assertions::assert_eq;
use walkdir::WalkDir;

#[test]
fn demo_scripts_work() {
    let mut count = 0;

    for entry in
        WalkDir::new("demos").into_iter()
                             .filter_map(Result::ok)
                             .filter(|e| e.path().extension().is_some_and(|ext| ext == "hyd"))
    {
        let path = entry.path();
        let code =
            fs::read_to_string(path).unwrap_or_else(|e| panic!("Failed to read {path:?}: {e}"));

        count += 1;
        let mut context = Context::new().with_output(Box::new(io::sink()));
        if let Err(e) = run_program(&code, &mut context) {
            panic!("Demo script {path:?} failed:\n{code}\nError: {e}");
        }
    }

    assert!(count > 0, "No demo scripts found in demos");
}

/// An output sink that can still be read after it was handed to a context.
#[derive(Clone, Default)]
struct SharedBuffer(Rc<RefCell<Vec<u8>>>);

impl SharedBuffer {
    fn contents(&self) -> String {
        String::from_utf8(self.0.borrow().clone()).unwrap()
    }
}

impl Write for SharedBuffer {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.0.borrow_mut().extend_from_slice(buf);
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

fn assert_success(src: &str) {
    if let Err(e) = get_result(src, false) {
        panic!("Script failed: {e}");
    }
}

fn assert_failure(src: &str) {
    if get_result(src, false).is_ok() {
        panic!("Script succeeded but was expected to fail")
    }
}

/// Runs a script and returns everything it printed.
fn printed(src: &str) -> String {
    let buffer = SharedBuffer::default();
    let mut context = Context::new().with_output(Box::new(buffer.clone()));
    if let Err(e) = run_program(src, &mut context) {
        panic!("Script failed: {e}");
    }
    buffer.contents()
}

/// Runs a script and returns the value of its last statement.
fn value_of(src: &str) -> Value {
    let mut context = Context::new();
    run_program(src, &mut context).unwrap_or_else(|e| panic!("Script failed: {e}"))
                                  .expect("the script has no value")
}

fn parse_error(src: &str) -> ParseError {
    let error = get_result(src, false).expect_err("the script was expected to fail");
    match error.downcast::<ParseError>() {
        Ok(error) => *error,
        Err(other) => panic!("Expected a parse error, found: {other}"),
    }
}

fn runtime_error(src: &str) -> RuntimeError {
    let error = get_result(src, false).expect_err("the script was expected to fail");
    match error.downcast::<RuntimeError>() {
        Ok(error) => *error,
        Err(other) => panic!("Expected a runtime error, found: {other}"),
    }
}

#[test]
fn declarations_can_be_read_back() {
    for number in ["0.0", "1.5", "42", "3.25", ".5", "1e3"] {
        let mut context = Context::new();
        run_program(&format!("var x = {number}"), &mut context).unwrap();

        let expected = number.parse::<f64>().unwrap();
        assert_eq!(context.scopes().lookup("x"), Some(&Value::Number(expected)));
    }
}

#[test]
fn arithmetic_precedence() {
    assert_eq!(value_of("2 + 3 * 4"), Value::Number(14.0));
    assert_eq!(value_of("(2 + 3) * 4"), Value::Number(20.0));
    assert_eq!(value_of("10 / 2 / 5"), Value::Number(1.0));
    assert_eq!(value_of("8 - 2 - 1"), Value::Number(5.0));
    assert_eq!(value_of("-2 * 3 + 1"), Value::Number(-5.0));
    assert_eq!(value_of("var a = 2\nvar b = a * (a + 1) / 3\nb"), Value::Number(2.0));
}

#[test]
fn pi_constant() {
    assert_eq!(value_of("M_PI / 2"), Value::Number(std::f64::consts::FRAC_PI_2));
}

#[test]
fn arithmetic_errors() {
    assert!(matches!(runtime_error("var a = 1 / 0"), RuntimeError::DivisionByZero { line: 1 }));
    assert!(matches!(runtime_error("var s = \"a\"\nvar t = s + 1"),
                     RuntimeError::NonNumericOperand { ref operand, line: 2 } if operand == "s"));
    assert!(matches!(runtime_error("var p = Pol(r: 1.0, phi: 0.0) * 2"),
                     RuntimeError::NonNumericOperand { line: 1, .. }));
}

#[test]
fn string_interpolation() {
    assert_eq!(value_of("var s = \"a=\\(1.0 + 1.0)\"\ns"), Value::from("a=2.000000"));
    assert_eq!(value_of("var n = 3\n\"\\(n) times \\(Pol(r: n, phi: 0.0))\""),
               Value::from("3.000000 times Pol(3.000000, 0.000000)"));
    assert_eq!(value_of("\"line\\nbreak\""), Value::from("line\nbreak"));
    assert_failure("var s = \"\\(undefined)\"");
    assert_failure("var s = \"empty \\()\"");
}

#[test]
fn redeclaration_and_reassignment() {
    assert!(matches!(runtime_error("var a = 1.0\nvar a = 2.0"),
                     RuntimeError::Redeclaration { ref name, line: 2 } if name == "a"));

    let mut context = Context::new();
    run_program("var a = 1.0\na = 2.0", &mut context).unwrap();
    assert_eq!(context.scopes().lookup("a"), Some(&Value::Number(2.0)));
}

#[test]
fn self_assignment_keeps_the_value() {
    let mut context = Context::new();
    run_program("var x = 4.5\nx = x", &mut context).unwrap();
    assert_eq!(context.scopes().lookup("x"), Some(&Value::Number(4.5)));
}

#[test]
fn unknown_variables() {
    let error = runtime_error("var y = x + 1");
    assert!(matches!(error, RuntimeError::UnknownVariable { ref name, line: 1 } if name == "x"));
    assert!(error.to_string().contains("undeclared variable 'x'"));

    assert!(matches!(runtime_error("z = 1"), RuntimeError::UnknownVariable { .. }));
}

#[test]
fn reserved_identifiers() {
    assert!(matches!(parse_error("var _hidden = 1"),
                     ParseError::IdentifierReserved { ref name, line: 1 } if name == "_hidden"));
}

#[test]
fn loop_runs_over_the_range() {
    let output = printed("for i in [0.0, 1.0, 2.0] {\n  print(message: \"\\(i) \")\n}");
    assert_eq!(output, "0.000000 1.000000 2.000000 ");

    assert_eq!(printed("for i in [0.0, 1.0, -1.0] {\n  print(message: \"never\")\n}"), "");
}

#[test]
fn loop_counts_and_nesting() {
    let mut context = Context::new();
    run_program("var count = 0
for i in [1, 1, 3] {
  for j in [1, 1, i] {
    count = count + 1
  }
}",
                &mut context).unwrap();

    assert_eq!(context.scopes().lookup("count"), Some(&Value::Number(6.0)));
    assert_eq!(context.scopes().depth(), 1);
}

#[test]
fn loop_body_may_rebind_the_loop_variable() {
    let mut context = Context::new();
    run_program("var count = 0
for i in [0, 1, 10] {
  i = i + 4
  count = count + 1
}",
                &mut context).unwrap();

    assert_eq!(context.scopes().lookup("count"), Some(&Value::Number(3.0)));
}

#[test]
fn loop_scope_ends_with_the_loop() {
    assert_success("for i in [0, 1, 0] {\n  var inner = i * 2\n}");
    assert!(matches!(runtime_error("for i in [0, 1, 0] {\n  var inner = i\n}\nvar outer = inner"),
                     RuntimeError::UnknownVariable { ref name, line: 4 } if name == "inner"));
    assert!(matches!(runtime_error("for i in [0, 1, 2] {\n}\nvar after = i"),
                     RuntimeError::UnknownVariable { ref name, .. } if name == "i"));
}

#[test]
fn loop_body_shares_the_loop_scope() {
    assert!(matches!(runtime_error("for i in [0, 1, 2] {\n  var i = 5\n}"),
                     RuntimeError::Redeclaration { ref name, line: 2 } if name == "i"));
    assert!(matches!(runtime_error("for i in [0, 1, 2] {\n  var inner = i\n}"),
                     RuntimeError::Redeclaration { ref name, line: 2 } if name == "inner"));

    let output = printed("for i in [0, 1, 0] {\n  var twice = i * 2\n}\nfor i in [3, 1, 3] {\n  var twice = i * 2\n  print(message: twice)\n}");
    assert_eq!(output, "6.000000");
}

#[test]
fn reassignment_writes_to_the_innermost_binding() {
    let output = printed("var a = 1
for i in [0, 1, 0] {
  var a = 10
  a = a + 5
  print(message: \"inner \\(a) \")
}
print(message: \"outer \\(a)\")");
    assert_eq!(output, "inner 15.000000 outer 1.000000");

    let mut context = Context::new();
    run_program("var a = 1\nfor i in [0, 1, 1] {\n  a = a + i\n}", &mut context).unwrap();
    assert_eq!(context.scopes().lookup("a"), Some(&Value::Number(2.0)));
}

#[test]
fn failing_loop_keeps_earlier_iterations_and_closes_its_scopes() {
    let mut context = Context::new();
    let result = run_program("var total = 0
var broken = 0
for i in [0, 1, 5] {
  total = total + 1
  broken = 1 / (2 - i)
}",
                             &mut context);

    assert!(result.is_err());
    assert_eq!(context.scopes().lookup("total"), Some(&Value::Number(3.0)));
    assert_eq!(context.scopes().depth(), 1);
}

#[test]
fn loop_body_may_drive_a_zero_step() {
    let mut context = Context::new();
    run_program("var n = 0
for i in [0, 0, 3] {
  i = i + 1
  n = n + 1
}
for j in [2, -1, 0] {
  j = j + 2
  n = n + 10
}",
                &mut context).unwrap();

    // The first loop runs for i = 0, 1, 2, 3; the second loop does not run.
    assert_eq!(context.scopes().lookup("n"), Some(&Value::Number(4.0)));
}

#[test]
fn invalid_loop_bounds() {
    assert!(matches!(runtime_error("for i in [0, 1, log(x: -1)] {\n}"),
                     RuntimeError::InvalidLoopBounds { line: 1, .. }));
    assert!(matches!(runtime_error("var nan = log(x: -1)\nfor i in [nan, 1, 1] {\n}"),
                     RuntimeError::InvalidLoopBounds { line: 2, .. }));
    assert!(matches!(runtime_error("for i in [0, 1, \"x\"] {\n}"),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn loop_structure_errors() {
    assert!(matches!(parse_error("for i in [0, 1, 2] {\nvar a = i"),
                     ParseError::UnterminatedLoop { line: 1 }));
    assert!(matches!(parse_error("var a = 1\nfor i in [0, 1, 2] {\nfor j in [0, 1, 2] {\n}"),
                     ParseError::UnterminatedLoop { line: 2 }));
    assert!(matches!(parse_error("var a = 1\n}"), ParseError::UnexpectedClosingBrace { line: 2 }));
    assert!(matches!(parse_error("for i in [0, 1] {\n}"), ParseError::InvalidLoop { .. }));
    assert!(matches!(parse_error("for i in [0, 1, 2]\n}"), ParseError::InvalidLoop { .. }));
    assert!(matches!(parse_error("for i in [0.0, 1.0, 2.0] { }"), ParseError::InvalidLoop { .. }));
    assert_success("for i in [0.0, 1.0, 2.0] {\n}");
}

#[test]
fn unmatched_bracket_is_reported() {
    let error = parse_error("line(from: Pol(r: 0, phi: 0)");
    assert_eq!(error,
               ParseError::Tokenize { error: TokenizeError::UnmatchedBracket { bracket:  '(',
                                                                               position: 4, },
                                      line:  1, });
    assert!(error.to_string().contains("'('"));

    assert!(matches!(parse_error("var a = (1 + 2))"),
                     ParseError::Tokenize { error: TokenizeError::UnmatchedBracket { bracket: ')', .. },
                                            .. }));
    assert!(matches!(parse_error("print(message: \"open)"),
                     ParseError::Tokenize { error: TokenizeError::UnmatchedBracket { .. } | TokenizeError::UnterminatedString { .. },
                                            .. }));
}

#[test]
fn argument_lists_are_checked() {
    let swapped = parse_error("line(to: Pol(r: 1, phi: 0), from: Pol(r: 0, phi: 0))");
    assert!(matches!(swapped, ParseError::InvalidArguments { ref function, .. } if function == "line"));
    assert!(swapped.to_string().contains("line(from: …, to: …)"));

    assert_failure("line(from: Pol(r: 1, phi: 0))");
    assert_failure("line(from: Pol(r: 1, phi: 0), to: Pol(r: 0, phi: 0),)");
    assert_failure("sin(x 1.0)");
    assert_failure("sin(x:)");
    assert_failure("Pol()");
    assert_success("clear()");
}

#[test]
fn unknown_functions() {
    assert!(matches!(parse_error("frobnicate(x: 1)"),
                     ParseError::UnknownFunction { ref name, .. } if name == "frobnicate"));
}

#[test]
fn math_builtins() {
    assert_eq!(value_of("exp(x: 0)"), Value::Number(1.0));
    assert_eq!(value_of("cos(x: 0) + sin(x: 0)"), Value::Number(1.0));
    assert_eq!(value_of("cosh(x: 0) - sinh(x: 0)"), Value::Number(1.0));
    assert_eq!(value_of("log(x: 1)"), Value::Number(0.0));
    assert_eq!(value_of("theta(r1: 1, r2: 1, R: 5)"), Value::Number(-1.0));

    let Value::Number(angle) = value_of("theta(r1: 1, r2: 1, R: 1)") else {
        panic!("theta did not return a number");
    };
    assert!(angle > 0.0 && angle < std::f64::consts::PI);

    assert!(matches!(runtime_error("sin(x: \"a\")"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn random_is_bounded_and_reproducible() {
    let draw = |seed| {
        let mut context = Context::new().with_seed(seed);
        run_program("random(from: -1.0, to: 1.0)", &mut context).unwrap().unwrap()
    };

    let first = draw(3);
    assert_eq!(first, draw(3));
    let Value::Number(number) = first else {
        panic!("random did not return a number");
    };
    assert!((-1.0..=1.0).contains(&number));

    assert!(matches!(runtime_error("random(from: 1.0, to: 0.0)"),
                     RuntimeError::InvalidArgument { .. }));
}

#[test]
fn print_and_show_write_to_the_output() {
    assert_eq!(printed("var a = 1.5\nprint(message: a)\nprint(message: \" and \\(a * 2)\")"),
               "1.500000 and 3.000000");

    let shown = printed("var b = \"text\"\nvar a = Pol(r: 1, phi: 0)\nfor i in [0, 1, 0] {\n  show()\n}");
    assert_eq!(shown,
               "Scope 1: (1 variables)
  [0] i = '0.000000'
Scope 0: (2 variables)
  [0] a = 'Pol(1.000000, 0.000000)'
  [1] b = 'text'
");
}

#[test]
fn coordinates() {
    assert_eq!(value_of("Pol(r: 2, phi: 2 * M_PI + 1)").to_string(), "Pol(2.000000, 1.000000)");
    assert_eq!(value_of("Euc(x: -1, y: 0)").to_string(), "Pol(1.000000, 3.141593)");
    assert!(matches!(runtime_error("Pol(r: \"1\", phi: 0)"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn drawing_builtins_fill_the_canvas() {
    let mut context = Context::new();
    run_program("var o = Pol(r: 0, phi: 0)
var p = Pol(r: 1, phi: M_PI / 2)
line(from: o, to: p)
circle(center: p, radius: 0.5)
arc(center: o, radius: 1, from: 0, to: M_PI)
mark(center: p, radius: 2)",
                &mut context).unwrap();

    let canvas = context.canvas();
    assert_eq!(canvas.paths().len(), 3);
    assert_eq!(canvas.marks().len(), 1);
    assert!(!canvas.paths()[0].is_closed);
    assert!(canvas.paths()[1].is_closed);
    assert!(canvas.marks()[0].is_filled);

    run_program("clear()", &mut context).unwrap();
    assert!(context.canvas().paths().is_empty());
    assert!(context.canvas().marks().is_empty());

    assert!(matches!(runtime_error("circle(center: Pol(r: 0, phi: 0), radius: -1)"),
                     RuntimeError::InvalidArgument { .. }));
    assert!(matches!(runtime_error("line(from: 1, to: 2)"), RuntimeError::TypeMismatch { .. }));
}

#[test]
fn curves_use_hidden_variables() {
    let mut context = Context::new();
    run_program("var turns = 2
curve_angle(from: Pol(r: 0, phi: 0), to: Pol(r: 3, phi: 0), angle: _t * turns * M_PI)
curve_distance(from: Pol(r: 1, phi: 0), to: Pol(r: 1, phi: M_PI), distance: 1 + _phi)",
                &mut context).unwrap();

    let paths = context.canvas().paths();
    assert_eq!(paths.len(), 2);

    let spiral = &paths[0];
    let middle = spiral.points[spiral.points.len() / 2];
    assert!((middle.r - 1.5).abs() < 1e-9);
    assert!((middle.phi - std::f64::consts::PI).abs() < 1e-9);

    let last = paths[1].points[paths[1].points.len() - 1];
    assert!((last.r - (1.0 + std::f64::consts::PI)).abs() < 1e-9);

    assert_eq!(context.scopes().lookup("_t"), None);
    assert_eq!(context.scopes().depth(), 1);

    assert!(matches!(runtime_error("curve_angle(from: Pol(r: 0, phi: 0), to: Pol(r: 1, phi: 0), angle: \"x\")"),
                     RuntimeError::TypeMismatch { .. }));
}

#[test]
fn save_writes_svg_and_ipe() {
    let dir = tempfile::tempdir().unwrap();
    let svg = dir.path().join("drawing.svg");
    let ipe = dir.path().join("drawing.ipe");

    assert_success(&format!("circle(center: Pol(r: 0, phi: 0), radius: 1)
mark(center: Pol(r: 1, phi: 0), radius: 1)
save(file: \"{}\")
save(file: \"{}\")",
                            svg.display(),
                            ipe.display()));

    let svg = fs::read_to_string(svg).unwrap();
    assert!(svg.contains("<svg"));
    assert!(svg.contains("<path"));
    assert!(svg.contains("<circle"));

    let ipe = fs::read_to_string(ipe).unwrap();
    assert!(ipe.starts_with("<?xml"));
    assert!(ipe.contains(" e\n"));
    assert!(ipe.ends_with("</ipe>"));

    let missing = dir.path().join("missing").join("drawing.svg");
    assert!(matches!(runtime_error(&format!("save(file: \"{}\")", missing.display())),
                     RuntimeError::Io { line: 1, .. }));
}

#[test]
fn lossy_parsing_collects_every_error() {
    let source = "var a = 1
var b = (2
for i in [0, 1] {
  var c = i
}
frobnicate(x: 1)
var d = a + 1";
    let (program, errors) = Program::parse_all(source, &Registry::new());

    assert_eq!(errors.len(), 3);
    assert_eq!(errors.iter().map(ParseError::line).collect::<Vec<_>>(), vec![2, 3, 6]);

    let kinds = program.statements.iter().map(|s| s.kind).collect::<Vec<_>>();
    assert_eq!(kinds,
               vec![NodeKind::Assignment,
                    NodeKind::Error,
                    NodeKind::Error,
                    NodeKind::Error,
                    NodeKind::Assignment]);
    assert_eq!(program.statements[2].children.len(), 1);

    let mut context = Context::new();
    assert!(context.interpret(&program.statements[4]).is_err());
    assert!(context.interpret(&program.statements[0]).is_ok());
    assert!(context.interpret(&program.statements[4]).is_ok());

    let mut fresh = Context::new();
    assert!(matches!(fresh.interpret_all(&program.statements),
                     Err(RuntimeError::InvalidStatement { line: 2, .. })));
}

#[test]
fn lossy_parsing_reports_unterminated_loops() {
    let (program, errors) = Program::parse_all("for i in [0, 1, 2] {\nvar a = i", &Registry::new());

    assert_eq!(errors, vec![ParseError::UnterminatedLoop { line: 1 }]);
    assert_eq!(program.statements.len(), 1);
    assert_eq!(program.statements[0].kind, NodeKind::Loop);
}

#[test]
fn comments_and_blank_lines_are_ignored() {
    assert_eq!(value_of("// a comment\n\nvar a = 2 // trailing\n   \na"), Value::Number(2.0));
    assert_eq!(value_of("\"not // a comment\""), Value::from("not // a comment"));
}
