use tracing::trace;

use crate::{
    ast::{Keyword, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            function::{arithmetic, core::NativeFunction},
            utils::{check_arity, coerce},
        },
        value::core::{Function, Value, Variable},
    },
};

impl Interpreter {
    /// Reduces an action node and its arguments to a single node.
    ///
    /// Arguments arrive in source order.
    ///
    /// - Operators go to the arithmetic primitives.
    /// - `def`, `defn` and `if` go to their special forms.
    /// - Identifiers are looked up: functions and natives are called, a plain
    ///   value with no arguments is returned as is.
    /// - A number or bool passes through unchanged, ignoring any arguments.
    /// - A sequence, list or symbol passes through only without arguments.
    ///
    /// # Errors
    /// `UnknownDispatchTarget` for anything else, plus whatever the dispatch
    /// target reports.
    pub fn collapse(&mut self, action: &Node, args: Vec<Node>) -> EvalResult<Node> {
        match action {
            Node::Operator(op) => arithmetic::apply(&*self, *op, &args),
            Node::Keyword(Keyword::Def) => self.define(&args),
            Node::Keyword(Keyword::Defn) => self.define_function(&args),
            Node::Keyword(Keyword::If) => self.branch(&args),
            Node::Identifier(name) => self.call_identifier(name, args),
            Node::Number(_) | Node::Bool(_) => Ok(action.clone()),
            Node::Sequence(_) | Node::List(_) | Node::Symbol(_) if args.is_empty() => {
                Ok(action.clone())
            },
            other => Err(RuntimeError::UnknownDispatchTarget { found: other.describe() }),
        }
    }

    fn call_identifier(&mut self, name: &str, args: Vec<Node>) -> EvalResult<Node> {
        let variable = self.environment()
                           .lookup(name)
                           .cloned()
                           .ok_or_else(|| RuntimeError::UnboundSymbol { name: name.to_string() })?;

        match &variable.value {
            Value::Function(function) => self.call_function(name, function, &args),
            Value::Native(native) => self.call_native(*native, &args),
            _ if args.is_empty() => Ok(variable.to_node()),
            _ => Err(RuntimeError::NotCallable { name: name.to_string() }),
        }
    }

    /// Calls a user-defined function.
    ///
    /// Every argument is coerced to a number before the call scope is
    /// pushed; the parameters are then bound in that scope and the body is
    /// run. A returned sequence has its identifiers resolved before the
    /// scope is popped.
    fn call_function(&mut self, name: &str, function: &Function, args: &[Node]) -> EvalResult<Node> {
        check_arity(name, args, function.params.len())?;

        let values = args.iter()
                         .map(|arg| coerce::<i64>(&*self, arg))
                         .collect::<EvalResult<Vec<_>>>()?;

        trace!(name, args = ?values, "calling function");
        self.with_call_frame(|interpreter| {
                for (param, value) in function.params.iter().zip(values) {
                    interpreter.environment_mut().bind(param, Value::Integer(value))?;
                }
                let result = interpreter.run(&function.body)?;
                Ok(interpreter.capture(result))
            })
    }

    fn call_native(&mut self, native: NativeFunction, args: &[Node]) -> EvalResult<Node> {
        check_arity(native.name, args, native.arity)?;

        trace!(name = native.name, args = args.len(), "calling native");
        self.with_call_frame(|interpreter| (native.func)(interpreter, args))
    }

    /// Replaces the identifiers of a sequence with the plain values they are
    /// bound to.
    ///
    /// Unbound names and names of callables are left as they are.
    fn capture(&self, node: Node) -> Node {
        let Node::Sequence(sequence) = &node else {
            return node;
        };
        if !sequence.iter().any(|element| matches!(element, Node::Identifier(_))) {
            return node;
        }

        let captured = sequence.iter()
                               .map(|element| match element {
                                   Node::Identifier(name) => self.environment()
                                                                 .lookup(name)
                                                                 .filter(|variable| !variable.is_callable())
                                                                 .map_or_else(|| element.clone(), Variable::to_node),
                                   other => other.clone(),
                               })
                               .collect();
        Node::Sequence(captured)
    }
}
