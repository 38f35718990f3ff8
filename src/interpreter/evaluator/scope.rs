use std::collections::HashMap;

use tracing::trace;

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

/// A single level of variable bindings.
pub type Scope = HashMap<String, Value>;

/// The stack of scopes of a running program.
///
/// The first scope is the global scope and is never removed. New variables
/// are always defined in the last (current) scope; lookups search from the
/// current scope outwards.
#[derive(Debug, Clone)]
pub struct ScopeStack {
    scopes: Vec<Scope>,
}

impl Default for ScopeStack {
    fn default() -> Self {
        Self::new()
    }
}

impl ScopeStack {
    /// Creates a stack holding only the empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::new()] }
    }

    /// The number of scopes, including the global scope.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.scopes.len()
    }

    /// Opens a new, empty scope.
    pub fn push(&mut self) {
        self.scopes.push(Scope::new());
    }

    /// Closes the current scope. Returns `false`, and keeps the scope, if
    /// only the global scope is left.
    pub fn pop(&mut self) -> bool {
        if self.scopes.len() <= 1 {
            return false;
        }
        self.scopes.pop();
        true
    }

    /// Looks up a variable from the current scope outwards.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::{evaluator::scope::ScopeStack, value::core::Value};
    ///
    /// let mut scopes = ScopeStack::new();
    /// scopes.define("a", Value::Number(1.0));
    /// scopes.push();
    /// scopes.define("b", Value::Number(2.0));
    ///
    /// assert_eq!(scopes.lookup("a"), Some(&Value::Number(1.0)));
    /// assert_eq!(scopes.lookup_in_current("a"), None);
    ///
    /// scopes.pop();
    /// assert_eq!(scopes.lookup("b"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Value> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Looks up a variable in the current scope only.
    #[must_use]
    pub fn lookup_in_current(&self, name: &str) -> Option<&Value> {
        self.scopes.last().and_then(|scope| scope.get(name))
    }

    /// The index of the innermost scope that binds `name`.
    #[must_use]
    pub fn resolve_index(&self, name: &str) -> Option<usize> {
        self.scopes.iter().rposition(|scope| scope.contains_key(name))
    }

    /// Binds a new variable in the current scope.
    ///
    /// Returns `false`, leaving the existing binding untouched, if the current
    /// scope already binds `name`. Outer bindings may be shadowed.
    pub fn define(&mut self, name: &str, value: Value) -> bool {
        let Some(current) = self.scopes.last_mut() else {
            return false;
        };
        if current.contains_key(name) {
            return false;
        }
        current.insert(name.to_string(), value);
        true
    }

    /// Overwrites an existing variable in the scope it resolves to. Returns
    /// `false` if `name` is not bound anywhere.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::{evaluator::scope::ScopeStack, value::core::Value};
    ///
    /// let mut scopes = ScopeStack::new();
    /// scopes.define("a", Value::Number(1.0));
    /// scopes.push();
    ///
    /// assert!(scopes.assign("a", Value::Number(5.0)));
    /// assert!(!scopes.assign("b", Value::Number(5.0)));
    ///
    /// scopes.pop();
    /// assert_eq!(scopes.lookup("a"), Some(&Value::Number(5.0)));
    /// ```
    pub fn assign(&mut self, name: &str, value: Value) -> bool {
        let Some(index) = self.resolve_index(name) else {
            return false;
        };
        self.scopes[index].insert(name.to_string(), value);
        true
    }

    /// Overwrites a variable of the current scope. Returns `false` if the
    /// current scope does not bind `name`.
    pub fn assign_in_current(&mut self, name: &str, value: Value) -> bool {
        match self.scopes.last_mut().and_then(|scope| scope.get_mut(name)) {
            Some(slot) => {
                *slot = value;
                true
            },
            None => false,
        }
    }

    /// Iterates over the scopes, starting with the global scope.
    pub fn iter(&self) -> impl DoubleEndedIterator<Item = &Scope> + ExactSizeIterator {
        self.scopes.iter()
    }
}

impl Context {
    /// Opens a scope, runs `body` in it and closes the scope again.
    ///
    /// The scope is closed on every path out of `body`, including errors, so
    /// a failing loop iteration or curve sample never leaves an extra scope
    /// behind.
    ///
    /// # Errors
    /// Any error of `body`, or `ScopeUnderflow` if `body` closed more scopes
    /// than it opened.
    ///
    /// # Example
    /// ```
    /// use hydra::interpreter::{evaluator::core::Context, value::core::Value};
    ///
    /// let mut ctx = Context::new();
    /// let depth = ctx.scopes().depth();
    ///
    /// let result = ctx.scoped(1, |ctx| {
    ///                     ctx.define_hidden("_t", Value::Number(0.5));
    ///                     ctx.lookup("missing", 1)
    ///                 });
    ///
    /// assert!(result.is_err());
    /// assert_eq!(ctx.scopes().depth(), depth);
    /// assert_eq!(ctx.scopes().lookup("_t"), None);
    /// ```
    pub fn scoped<T>(&mut self,
                     line: usize,
                     body: impl FnOnce(&mut Self) -> EvalResult<T>)
                     -> EvalResult<T> {
        self.scopes.push();
        trace!(depth = self.scopes.depth(), line, "opened scope");

        let result = body(self);
        let closed = self.close_scope(line);

        let value = result?;
        closed?;
        Ok(value)
    }

    fn close_scope(&mut self, line: usize) -> EvalResult<()> {
        if !self.scopes.pop() {
            return Err(RuntimeError::ScopeUnderflow { line });
        }
        trace!(depth = self.scopes.depth(), line, "closed scope");
        Ok(())
    }

    /// Reads a variable from the current scope outwards.
    ///
    /// # Errors
    /// `UnknownVariable` if no scope binds `name`.
    pub fn lookup(&self, name: &str, line: usize) -> EvalResult<Value> {
        self.scopes
            .lookup(name)
            .cloned()
            .ok_or_else(|| RuntimeError::UnknownVariable { name: name.to_string(),
                                                           line })
    }

    /// Binds an interpreter-internal variable in the current scope, bypassing
    /// the check for the reserved `_` prefix. An existing binding of the
    /// current scope is overwritten.
    pub fn define_hidden(&mut self, name: &str, value: Value) {
        if !self.scopes.assign_in_current(name, value.clone()) {
            self.scopes.define(name, value);
        }
    }
}
