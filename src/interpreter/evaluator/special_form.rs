use std::rc::Rc;

use crate::{
    ast::{Keyword, Node},
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::{EvalResult, Interpreter},
            utils::{check_arity, coerce},
        },
        value::core::{Function, Value},
    },
};

fn invalid(keyword: Keyword, details: impl Into<String>) -> RuntimeError {
    RuntimeError::InvalidSpecialForm { keyword: keyword.to_string(),
                                       details: details.into(), }
}

impl Interpreter {
    /// Evaluates `(def name value)`.
    ///
    /// Of the two arguments, the identifier is the name and the other one is
    /// the value, so `(def x 5)` and `(def 5 x)` are the same binding. When
    /// both are identifiers the first is the name and the second is looked
    /// up, copying its bound value.
    ///
    /// # Returns
    /// A `Node::Symbol` wrapping the new binding.
    pub(crate) fn define(&mut self, args: &[Node]) -> EvalResult<Node> {
        check_arity("def", args, 2)?;

        let (name, value) = match (&args[0], &args[1]) {
            (Node::Identifier(name), value) | (value, Node::Identifier(name)) => (name, value),
            _ => return Err(invalid(Keyword::Def, "expected an identifier to bind")),
        };

        let value = match value {
            Node::Identifier(other) => {
                self.environment()
                    .lookup(other)
                    .map(|variable| variable.value.clone())
                    .ok_or_else(|| RuntimeError::UnboundSymbol { name: other.clone() })?
            },
            Node::Symbol(variable) => variable.value.clone(),
            literal => Value::from_literal(literal).ok_or_else(|| {
                                                      invalid(Keyword::Def,
                                                              format!("cannot bind {}", literal.describe()))
                                                  })?,
        };

        let variable = self.environment_mut().bind(name, value)?;
        Ok(Node::Symbol(Box::new(variable)))
    }

    /// Evaluates `(defn name [params] (body))`.
    ///
    /// The three arguments are told apart by kind, so they may appear in any
    /// order: one captured body, one sequence of parameter names and one
    /// identifier naming the function.
    ///
    /// # Returns
    /// A `Node::Symbol` wrapping the new function binding.
    pub(crate) fn define_function(&mut self, args: &[Node]) -> EvalResult<Node> {
        check_arity("defn", args, 3)?;

        let mut body = None;
        let mut params = None;
        let mut name = None;

        for arg in args {
            match arg {
                Node::Body(nodes) if body.is_none() => body = Some(Rc::clone(nodes)),
                Node::Sequence(sequence) if params.is_none() => params = Some(sequence),
                Node::Identifier(id) if name.is_none() => name = Some(id),
                other => return Err(invalid(Keyword::Defn, format!("unexpected {}", other.describe()))),
            }
        }

        let (Some(body), Some(params), Some(name)) = (body, params, name) else {
            return Err(invalid(Keyword::Defn, "expected a name, a parameter list and a body"));
        };

        let params = params.iter()
                           .map(|param| match param {
                               Node::Identifier(param) => Ok(param.clone()),
                               other => Err(invalid(Keyword::Defn,
                                                    format!("parameter names must be identifiers, found {}",
                                                            other.describe()))),
                           })
                           .collect::<EvalResult<Vec<_>>>()?;

        let variable = self.environment_mut()
                           .bind(name, Value::Function(Function { params, body }))?;
        Ok(Node::Symbol(Box::new(variable)))
    }

    /// Evaluates `(if (condition) (then) (else))`.
    ///
    /// The condition runs in a fresh scope and must produce a bool; exactly
    /// one branch then runs in another fresh scope.
    pub(crate) fn branch(&mut self, args: &[Node]) -> EvalResult<Node> {
        check_arity("if", args, 3)?;

        let [Node::Body(condition), Node::Body(then_branch), Node::Body(else_branch)] = args else {
            return Err(invalid(Keyword::If, "condition and branches must be parenthesized bodies"));
        };

        let condition = self.with_scope(|interpreter| interpreter.run(condition))?;
        let taken = if coerce::<bool>(&*self, &condition)? {
            then_branch
        } else {
            else_branch
        };

        self.with_scope(|interpreter| interpreter.run(taken))
    }
}
