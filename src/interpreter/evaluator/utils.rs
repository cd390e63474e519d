use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::core::Runtime,
        },
        value::core::{FromValue, Kind},
    },
};

/// Extracts a typed value from an argument node.
///
/// Literal nodes are read directly; identifiers are looked up and their
/// bound value is read. A value of any other kind is reported as a kind
/// mismatch instead of being reinterpreted.
///
/// # Errors
/// - `UnboundSymbol` if an identifier has no binding.
/// - `KindMismatch` if the node or the bound value is not of kind `T::KIND`.
///
/// # Example
/// ```
/// use lispy::{
///     ast::Node,
///     interpreter::evaluator::{core::Interpreter, utils::coerce},
/// };
///
/// let mut interpreter = Interpreter::new();
/// interpreter.eval_line("(def x 5)").unwrap();
///
/// let x = coerce::<i64>(&interpreter, &Node::Identifier("x".into())).unwrap();
/// assert_eq!(x, 5);
///
/// assert!(coerce::<bool>(&interpreter, &Node::Identifier("x".into())).is_err());
/// ```
pub fn coerce<T: FromValue>(runtime: &dyn Runtime, node: &Node) -> EvalResult<T> {
    match node {
        Node::Identifier(name) => {
            let variable = runtime.lookup(name)
                                  .ok_or_else(|| RuntimeError::UnboundSymbol { name: name.clone() })?;
            T::from_value(&variable.value).ok_or_else(|| {
                RuntimeError::kind_mismatch(T::KIND, format!("'{name}' bound to a {}", variable.kind()))
            })
        },
        Node::Symbol(variable) => T::from_value(&variable.value).ok_or_else(|| {
                                                                    RuntimeError::kind_mismatch(T::KIND, node.describe())
                                                                }),
        other => T::from_node(other).ok_or_else(|| RuntimeError::kind_mismatch(T::KIND, other.describe())),
    }
}

/// Checks that `callee` is an identifier naming a function.
///
/// # Errors
/// - `KindMismatch` if `callee` is not an identifier.
/// - `UnboundSymbol` if the name has no binding.
/// - `NotCallable` if the name is bound to a plain value.
pub fn expect_callable(runtime: &dyn Runtime, callee: &Node) -> EvalResult<()> {
    let Node::Identifier(name) = callee else {
        return Err(RuntimeError::kind_mismatch(Kind::Function, callee.describe()));
    };

    match runtime.lookup(name) {
        Some(variable) if variable.is_callable() => Ok(()),
        Some(_) => Err(RuntimeError::NotCallable { name: name.clone() }),
        None => Err(RuntimeError::UnboundSymbol { name: name.clone() }),
    }
}

/// Checks that a callee received exactly `expected` arguments.
///
/// # Errors
/// Returns `ArgumentCountMismatch` naming the callee otherwise.
///
/// # Example
/// ```
/// use lispy::{ast::Node, interpreter::evaluator::utils::check_arity};
///
/// let args = vec![Node::Number(2), Node::Number(1)];
///
/// assert!(check_arity("rem", &args, 2).is_ok());
/// assert!(check_arity("sqrt", &args, 1).is_err());
/// ```
pub fn check_arity<T>(callee: &str, args: &[T], expected: usize) -> EvalResult<()> {
    if args.len() == expected {
        Ok(())
    } else {
        Err(RuntimeError::ArgumentCountMismatch { callee: callee.to_string(),
                                                  expected,
                                                  found: args.len() })
    }
}

impl Interpreter {
    /// Runs `body` inside a fresh scope.
    ///
    /// The scope is popped whether or not `body` succeeds, so no binding made
    /// inside it is visible afterwards.
    pub(crate) fn with_scope<T>(&mut self,
                                body: impl FnOnce(&mut Self) -> EvalResult<T>)
                                -> EvalResult<T> {
        self.environment_mut().push_scope();
        let result = body(self);
        self.environment_mut().pop_scope().and(result)
    }
}
