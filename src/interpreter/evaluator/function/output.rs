use std::io::{self, Write};

use crate::{
    ast::ParseNode,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            scope::ScopeStack,
            utils::Arguments,
        },
        value::core::Value,
    },
};

/// Writes the textual form of `message` to the output of the context. No
/// newline is added.
///
/// # Example
/// ```
/// use hydra::interpreter::evaluator::core::Context;
///
/// // Printing goes to the configured output; the call itself has no value.
/// let mut ctx = Context::new().with_output(Box::new(std::io::sink()));
/// assert_eq!(ctx.run("print(message: \"a=\\(1.0 + 1.0)\")").unwrap(), None);
/// ```
pub fn print(context: &mut Context,
             call: &ParseNode,
             arguments: &Arguments)
             -> EvalResult<Option<Value>> {
    let message = arguments.value("message")?;

    write!(context.output, "{message}").and_then(|()| context.output.flush())
                                        .map_err(|error| output_error(&error, call.line))?;
    Ok(None)
}

/// Writes every scope, innermost first, with its variables sorted by name.
///
/// # Example
/// ```
/// use hydra::interpreter::{evaluator::{function::output::describe_scopes, scope::ScopeStack},
///                          value::core::Value};
///
/// let mut scopes = ScopeStack::new();
/// scopes.define("b", Value::Number(2.0));
/// scopes.define("a", Value::from("x"));
/// scopes.push();
///
/// assert_eq!(describe_scopes(&scopes),
///            "Scope 1: (0 variables)\nScope 0: (2 variables)\n  [0] a = 'x'\n  [1] b = '2.000000'\n");
/// ```
pub fn show(context: &mut Context, call: &ParseNode, _: &Arguments) -> EvalResult<Option<Value>> {
    let report = describe_scopes(&context.scopes);

    context.output
           .write_all(report.as_bytes())
           .and_then(|()| context.output.flush())
           .map_err(|error| output_error(&error, call.line))?;
    Ok(None)
}

/// Renders the scopes the way `show` prints them.
#[must_use]
pub fn describe_scopes(scopes: &ScopeStack) -> String {
    let mut report = String::new();

    for (index, scope) in scopes.iter().enumerate().rev() {
        report.push_str(&format!("Scope {index}: ({} variables)\n", scope.len()));

        let mut names = scope.keys().collect::<Vec<_>>();
        names.sort();

        for (position, name) in names.into_iter().enumerate() {
            report.push_str(&format!("  [{position}] {name} = '{}'\n", scope[name]));
        }
    }

    report
}

fn output_error(error: &io::Error, line: usize) -> RuntimeError {
    RuntimeError::Io { path: "<output>".to_string(),
                       details: error.to_string(),
                       line }
}
