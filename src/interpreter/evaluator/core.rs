use tracing::trace;

use crate::{
    ast::Node,
    error::{Error, RuntimeError},
    interpreter::{
        builder::core::compile,
        environment::Environment,
        evaluator::function::core::{self as native, Runtime},
        value::core::Variable,
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// The default limit on nested function calls.
///
/// Every call level costs several native stack frames, so the limit stays
/// well below what an 8 MiB main thread can hold.
pub const MAX_CALL_DEPTH: usize = 200;

/// Stores the runtime evaluation state.
///
/// The interpreter owns exactly one [`Environment`]. It is created once and
/// reused for every line, so definitions persist from one line to the next.
///
/// ## Usage
/// ```
/// use lispy::{ast::Node, interpreter::evaluator::core::Interpreter};
///
/// let mut interpreter = Interpreter::new();
///
/// interpreter.eval_line("(def x 5)").unwrap();
/// assert_eq!(interpreter.eval_line("(* x x)").unwrap(), Node::Number(25));
/// ```
#[derive(Debug)]
pub struct Interpreter {
    environment:    Environment,
    /// Function calls currently in progress.
    call_depth:     usize,
    /// Maximum number of nested function calls.
    max_call_depth: usize,
}

impl Default for Interpreter {
    fn default() -> Self {
        Self::new()
    }
}

impl Interpreter {
    /// Creates an interpreter whose global scope holds the built-in
    /// functions.
    #[must_use]
    pub fn new() -> Self {
        Self { environment:    Environment::with_globals(native::globals()),
               call_depth:     0,
               max_call_depth: MAX_CALL_DEPTH, }
    }

    /// Replaces the limit on nested function calls.
    ///
    /// # Example
    /// ```
    /// use lispy::{Interpreter, error::RuntimeError};
    ///
    /// let mut interpreter = Interpreter::new().with_max_call_depth(3);
    /// interpreter.eval_line("(defn down [n] (if (< n 1) (0) (down (- n 1))))").unwrap();
    ///
    /// assert!(interpreter.eval_line("(down 2)").is_ok());
    /// assert_eq!(interpreter.eval_line("(down 3)").unwrap_err().to_string(),
    ///            "Maximum call depth of 3 exceeded.");
    /// ```
    #[must_use]
    pub fn with_max_call_depth(mut self, limit: usize) -> Self {
        self.max_call_depth = limit;
        self
    }

    /// Returns the interpreter's environment.
    #[must_use]
    pub const fn environment(&self) -> &Environment {
        &self.environment
    }

    pub(crate) const fn environment_mut(&mut self) -> &mut Environment {
        &mut self.environment
    }

    /// Runs `body` as one function call level, in a fresh scope.
    ///
    /// # Errors
    /// `RecursionLimit` if the call would nest deeper than the limit, plus
    /// whatever `body` reports. The depth is restored either way.
    pub(crate) fn with_call_frame<T>(&mut self,
                                     body: impl FnOnce(&mut Self) -> EvalResult<T>)
                                     -> EvalResult<T> {
        if self.call_depth >= self.max_call_depth {
            return Err(RuntimeError::RecursionLimit { limit: self.max_call_depth });
        }

        self.call_depth += 1;
        let result = self.with_scope(body);
        self.call_depth -= 1;
        result
    }

    /// Compiles and runs one line of source text.
    ///
    /// Bindings made before a failure are kept.
    ///
    /// # Errors
    /// Returns `Error::Parse` if the line cannot be compiled and
    /// `Error::Runtime` if evaluation fails.
    pub fn eval_line(&mut self, line: &str) -> Result<Node, Error> {
        let program = compile(line)?;
        Ok(self.run(&program)?)
    }

    /// Runs a compiled node sequence and returns its single result.
    ///
    /// Nodes are pushed onto an operand stack; every closing parenthesis
    /// reduces the group it closes to one node. A result that is an
    /// identifier is resolved through the environment.
    ///
    /// # Errors
    /// - `StackUnderflow` for an empty program or a closing parenthesis with
    ///   no matching opening one.
    /// - `UnreducedValues` if more than one node is left.
    /// - `NotAValue` if the leftover node is a piece of syntax.
    /// - Any error raised while dispatching a group.
    pub fn run(&mut self, program: &[Node]) -> EvalResult<Node> {
        let mut stack = Vec::with_capacity(program.len());

        for node in program {
            if let Node::Paren(')') = node {
                let reduced = self.reduce(&mut stack)?;
                stack.push(reduced);
            } else {
                stack.push(node.clone());
            }
        }

        if stack.len() > 1 {
            return Err(RuntimeError::UnreducedValues { count: stack.len() });
        }
        let result = stack.pop().ok_or_else(|| RuntimeError::StackUnderflow { details:
                                                                                   "nothing to evaluate".to_string(), })?;

        self.settle(result)
    }

    /// Pops one group off the stack and dispatches it.
    ///
    /// Nodes are popped down to the nearest opening parenthesis, which is
    /// discarded. The popped nodes come off in reverse; they are reversed
    /// once so the action and its arguments are in source order.
    fn reduce(&mut self, stack: &mut Vec<Node>) -> EvalResult<Node> {
        let mut group = Vec::new();

        loop {
            match stack.pop() {
                Some(Node::Paren('(')) => break,
                Some(node) => group.push(node),
                None => {
                    return Err(RuntimeError::StackUnderflow { details:
                                                                  "')' has no matching '('".to_string(), });
                },
            }
        }
        group.reverse();

        let mut nodes = group.into_iter();
        let action = nodes.next().ok_or_else(|| RuntimeError::StackUnderflow { details:
                                                                                     "empty group '()'".to_string(), })?;
        let args: Vec<Node> = nodes.collect();

        trace!(action = %action, args = args.len(), "reducing group");
        self.collapse(&action, args)
    }

    /// Turns the last node of a program into a value node.
    fn settle(&self, node: Node) -> EvalResult<Node> {
        match node {
            Node::Identifier(name) => self.environment
                                          .lookup(&name)
                                          .map(Variable::to_node)
                                          .ok_or(RuntimeError::UnboundSymbol { name }),
            Node::Paren(_) | Node::Operator(_) | Node::Keyword(_) | Node::Body(_) => {
                Err(RuntimeError::NotAValue { found: node.describe() })
            },
            value => Ok(value),
        }
    }
}

impl Runtime for Interpreter {
    fn lookup(&self, name: &str) -> Option<&Variable> {
        self.environment.lookup(name)
    }

    fn call(&mut self, callee: &Node, args: Vec<Node>) -> EvalResult<Node> {
        self.collapse(callee, args)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(source: &str) -> EvalResult<Node> {
        let program = compile(source).unwrap();
        Interpreter::new().run(&program)
    }

    #[test]
    fn literal_lines_evaluate_to_themselves() {
        assert_eq!(run("5"), Ok(Node::Number(5)));
        assert_eq!(run("false"), Ok(Node::Bool(false)));
        assert_eq!(run("[1 2]").unwrap().to_string(), "[1 2]");
    }

    #[test]
    fn empty_program_underflows() {
        assert!(matches!(run(""), Err(RuntimeError::StackUnderflow { .. })));
        assert!(matches!(run("()"), Err(RuntimeError::StackUnderflow { .. })));
        assert!(matches!(run("1)"), Err(RuntimeError::StackUnderflow { .. })));
    }

    #[test]
    fn leftover_values_are_reported() {
        assert_eq!(run("1 2 3"), Err(RuntimeError::UnreducedValues { count: 3 }));
        assert_eq!(run("(+ 1 2"), Err(RuntimeError::UnreducedValues { count: 4 }));
    }

    #[test]
    fn syntax_is_not_a_value() {
        assert!(matches!(run("+"), Err(RuntimeError::NotAValue { .. })));
    }

    #[test]
    fn bare_identifier_resolves() {
        assert_eq!(run("x"), Err(RuntimeError::UnboundSymbol { name: "x".into() }));
        assert_eq!(run("sqrt").unwrap().to_string(), "#sqrt");
    }

    #[test]
    fn scopes_are_balanced_after_errors() {
        let mut interpreter = Interpreter::new();
        let depth = interpreter.environment().depth();

        assert!(interpreter.eval_line("(if (1) (2) (3))").is_err());
        assert!(interpreter.eval_line("(sqrt (- 1))").is_err());
        assert_eq!(interpreter.environment().depth(), depth);
    }
}
