use tracing::debug;

use crate::{
    ast::ParseNode,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{Context, EvalResult},
            function::{curve, draw, math, output},
            utils::{Arguments, argument_nodes},
        },
        value::core::Value,
    },
};

/// Type alias for builtin function handlers.
///
/// A builtin receives the context, the call node (for its line and for
/// arguments it evaluates itself) and the eagerly evaluated arguments. It
/// returns an optional value wrapped in `EvalResult`.
pub type BuiltinFn = fn(&mut Context, &ParseNode, &Arguments) -> EvalResult<Option<Value>>;

/// Specifies which arguments are evaluated before a builtin runs.
///
/// - `All` evaluates every argument once.
/// - `Only(names)` evaluates the listed arguments; the builtin evaluates the
///   others itself, as often as it needs.
#[derive(Clone, Copy)]
enum Eager {
    All,
    Only(&'static [&'static str]),
}

impl Eager {
    fn accepts(self, name: &str) -> bool {
        match self {
            Self::All => true,
            Self::Only(names) => names.contains(&name),
        }
    }
}

/// Defines builtin functions by generating a lookup table.
///
/// Each entry provides:
/// - a string name,
/// - which arguments are evaluated eagerly,
/// - a function pointer implementing the builtin.
///
/// The macro produces:
/// - `BuiltinDef` (internal metadata),
/// - `BUILTIN_TABLE` (static table for lookup).
///
/// Parameter lists live in the registry; every builtin registered there must
/// have an entry here.
macro_rules! builtin_functions {
    (
        $(
            $name:literal => {
                eager: $eager:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        struct BuiltinDef {
            name:  &'static str,
            eager: Eager,
            func:  BuiltinFn,
        }
        static BUILTIN_TABLE: &[BuiltinDef] = &[
            $(
                BuiltinDef { name: $name, eager: $eager, func: $func },
            )*
        ];
    };
}

builtin_functions! {
    "arc"            => { eager: Eager::All, func: draw::arc },
    "circle"         => { eager: Eager::All, func: draw::circle },
    "clear"          => { eager: Eager::All, func: draw::clear },
    "cos"            => { eager: Eager::All, func: math::cos },
    "cosh"           => { eager: Eager::All, func: math::cosh },
    "curve_angle"    => { eager: Eager::Only(&["from", "to"]), func: curve::curve_angle },
    "curve_distance" => { eager: Eager::Only(&["from", "to"]), func: curve::curve_distance },
    "exp"            => { eager: Eager::All, func: math::exp },
    "line"           => { eager: Eager::All, func: draw::line },
    "log"            => { eager: Eager::All, func: math::log },
    "mark"           => { eager: Eager::All, func: draw::mark },
    "print"          => { eager: Eager::All, func: output::print },
    "random"         => { eager: Eager::All, func: math::random },
    "save"           => { eager: Eager::All, func: draw::save },
    "show"           => { eager: Eager::All, func: output::show },
    "sin"            => { eager: Eager::All, func: math::sin },
    "sinh"           => { eager: Eager::All, func: math::sinh },
    "theta"          => { eager: Eager::All, func: math::theta },
}

impl Context {
    /// Evaluates a builtin function call.
    ///
    /// The evaluator looks up the implementation by name, checks the number
    /// of supplied arguments against the registered signature, evaluates the
    /// arguments the builtin asks for and runs it.
    ///
    /// # Returns
    /// The value of the builtin; drawing and output builtins return `None`.
    ///
    /// # Errors
    /// - `UnknownFunction` if no builtin of that name exists.
    /// - `ArgumentCountMismatch` if the argument count does not match.
    /// - Errors from evaluating the arguments or from the builtin itself.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::evaluator::core::Context;
    ///
    /// let mut ctx = Context::new();
    /// let value = ctx.run("exp(x: 0.0)").unwrap().unwrap();
    /// assert_eq!(value.to_string(), "1.000000");
    /// ```
    pub fn eval_function(&mut self, node: &ParseNode) -> EvalResult<Option<Value>> {
        let builtin = BUILTIN_TABLE.iter()
                                   .find(|builtin| builtin.name == node.text)
                                   .ok_or_else(|| RuntimeError::UnknownFunction { name: node.text.clone(),
                                                                                  line: node.line, })?;

        let supplied = argument_nodes(node).len();
        if let Some(signature) = self.registry.signature(&node.text)
           && signature.parameters.len() != supplied
        {
            return Err(RuntimeError::ArgumentCountMismatch { function: node.text.clone(),
                                                             expected: signature.parameters.len(),
                                                             found:    supplied,
                                                             line:     node.line, });
        }

        let arguments = self.eval_arguments(node, |name| builtin.eager.accepts(name))?;

        debug!(function = builtin.name, line = node.line, "invoking builtin");
        (builtin.func)(self, node, &arguments)
    }
}

#[cfg(test)]
mod tests {
    use super::BUILTIN_TABLE;
    use crate::{ast::NodeKind, interpreter::registry::Registry};

    #[test]
    fn every_registered_function_has_a_builtin() {
        let registry = Registry::new();
        let mut registered = registry.names_of(NodeKind::Function).collect::<Vec<_>>();
        let mut implemented = BUILTIN_TABLE.iter().map(|b| b.name).collect::<Vec<_>>();

        registered.sort_unstable();
        implemented.sort_unstable();
        assert_eq!(registered, implemented);
    }
}
