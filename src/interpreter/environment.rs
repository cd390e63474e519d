use std::collections::HashMap;

use tracing::{debug, trace};

use crate::{
    error::RuntimeError,
    interpreter::{
        evaluator::core::EvalResult,
        value::core::{Value, Variable},
    },
};

/// One level of bindings.
pub type Scope = HashMap<String, Variable>;

/// A stack of scopes searched innermost first.
///
/// The outermost scope holds top-level definitions and the built-in
/// functions. Function calls and conditional branches push a scope on entry
/// and pop it on exit, so bindings made inside them never outlive the
/// construct.
#[derive(Debug, Clone)]
pub struct Environment {
    scopes: Vec<Scope>,
}

impl Default for Environment {
    fn default() -> Self {
        Self::new()
    }
}

impl Environment {
    /// Creates an environment holding one empty global scope.
    #[must_use]
    pub fn new() -> Self {
        Self { scopes: vec![Scope::new()] }
    }

    /// Creates an environment whose global scope starts out as `globals`.
    #[must_use]
    pub fn with_globals(globals: Scope) -> Self {
        Self { scopes: vec![globals] }
    }

    /// Pushes a new local scope.
    ///
    /// # Example
    /// ```
    /// use lispy::interpreter::environment::Environment;
    ///
    /// let mut env = Environment::new();
    /// env.push_scope();
    ///
    /// assert_eq!(env.depth(), 2);
    /// ```
    pub fn push_scope(&mut self) {
        self.scopes.push(Scope::new());
        trace!(depth = self.scopes.len(), "pushed scope");
    }

    /// Removes the innermost scope and returns its bindings.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` if there is no scope left.
    pub fn pop_scope(&mut self) -> EvalResult<Scope> {
        let scope = self.scopes
                        .pop()
                        .ok_or_else(|| RuntimeError::StackUnderflow { details:
                                                                          "no scope to pop".to_string(), })?;
        trace!(depth = self.scopes.len(), "popped scope");
        Ok(scope)
    }

    /// Binds `name` to `value` in the innermost scope, replacing any binding
    /// of the same name in that scope only.
    ///
    /// # Returns
    /// A copy of the new binding.
    ///
    /// # Errors
    /// Returns `RuntimeError::StackUnderflow` if every scope has been popped.
    ///
    /// # Example
    /// ```
    /// use lispy::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let mut env = Environment::new();
    /// env.bind("x", Value::Integer(5)).unwrap();
    ///
    /// env.push_scope();
    /// env.bind("x", Value::Integer(6)).unwrap();
    /// assert_eq!(env.lookup("x").unwrap().value, Value::Integer(6));
    ///
    /// env.pop_scope().unwrap();
    /// assert_eq!(env.lookup("x").unwrap().value, Value::Integer(5));
    /// ```
    pub fn bind(&mut self, name: &str, value: Value) -> EvalResult<Variable> {
        let depth = self.scopes.len();
        let scope = self.scopes
                        .last_mut()
                        .ok_or_else(|| RuntimeError::StackUnderflow { details:
                                                                          "no scope to bind into".to_string(), })?;
        let variable = Variable::new(name, value);

        debug!(name, kind = %variable.kind(), depth, "bound variable");
        scope.insert(name.to_string(), variable.clone());
        Ok(variable)
    }

    /// Looks `name` up from the innermost scope outwards.
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<&Variable> {
        self.scopes.iter().rev().find_map(|scope| scope.get(name))
    }

    /// Returns the number of live scopes.
    #[must_use]
    pub fn depth(&self) -> usize {
        self.scopes.len()
    }
}
