use std::{fmt, rc::Rc};

use crate::{
    ast::Node,
    interpreter::{
        evaluator::function::core::NativeFunction,
        value::{list::List, sequence::Sequence},
    },
};

/// The kind of a runtime value, used to report kind mismatches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Kind {
    Number,
    Bool,
    Sequence,
    List,
    Function,
    NativeFunction,
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Number => "number",
            Self::Bool => "bool",
            Self::Sequence => "sequence",
            Self::List => "list",
            Self::Function => "function",
            Self::NativeFunction => "native function",
        };
        write!(f, "{name}")
    }
}

/// A user-defined function created by `defn`.
#[derive(Debug, Clone, PartialEq)]
pub struct Function {
    /// Formal parameter names in declaration order.
    pub params: Vec<String>,
    /// The captured body, evaluated on every call.
    pub body:   Rc<[Node]>,
}

/// Represents a value bound in the environment.
///
/// Every variant carries its own payload, so a binding's kind and its
/// contents can never disagree.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A signed 64 bit integer.
    Integer(i64),
    /// A boolean value (`true` or `false`).
    /// Produced by the comparison operators and consumed by `if` conditions
    /// and `filter` predicates.
    Bool(bool),
    /// A sequence of nodes.
    Sequence(Sequence),
    /// A singly linked list of integers.
    List(List),
    /// A user-defined function.
    Function(Function),
    /// A built-in function implemented in Rust.
    Native(NativeFunction),
}

impl Value {
    /// Returns the kind tag of this value.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        match self {
            Self::Integer(_) => Kind::Number,
            Self::Bool(_) => Kind::Bool,
            Self::Sequence(_) => Kind::Sequence,
            Self::List(_) => Kind::List,
            Self::Function(_) => Kind::Function,
            Self::Native(_) => Kind::NativeFunction,
        }
    }

    /// Converts a literal value node into a value.
    ///
    /// Returns `None` for nodes that are not literal values, such as syntax
    /// markers, identifiers and symbols.
    ///
    /// # Example
    /// ```
    /// use lispy::{ast::Node, interpreter::value::core::Value};
    ///
    /// assert_eq!(Value::from_literal(&Node::Number(5)), Some(Value::Integer(5)));
    /// assert_eq!(Value::from_literal(&Node::Paren('(')), None);
    /// ```
    #[must_use]
    pub fn from_literal(node: &Node) -> Option<Self> {
        match node {
            Node::Number(n) => Some(Self::Integer(*n)),
            Node::Bool(b) => Some(Self::Bool(*b)),
            Node::Sequence(s) => Some(Self::Sequence(s.clone())),
            Node::List(l) => Some(Self::List(l.clone())),
            _ => None,
        }
    }
}

/// A named binding stored in a scope.
#[derive(Debug, Clone, PartialEq)]
pub struct Variable {
    /// The identifier the value is bound to.
    pub name:  String,
    /// The bound value.
    pub value: Value,
}

impl Variable {
    #[must_use]
    pub fn new(name: impl Into<String>, value: Value) -> Self {
        Self { name: name.into(),
               value }
    }

    /// Returns `true` for user-defined and native functions.
    #[must_use]
    pub const fn is_callable(&self) -> bool {
        matches!(self.value, Value::Function(_) | Value::Native(_))
    }

    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.value.kind()
    }

    /// Re-wraps the bound value as a node.
    ///
    /// Plain values become the matching literal node; callables become a
    /// `Symbol` so that their name and parameter count stay printable.
    ///
    /// # Example
    /// ```
    /// use lispy::{
    ///     ast::Node,
    ///     interpreter::value::core::{Value, Variable},
    /// };
    ///
    /// let x = Variable::new("x", Value::Integer(5));
    /// assert_eq!(x.to_node(), Node::Number(5));
    /// ```
    #[must_use]
    pub fn to_node(&self) -> Node {
        match &self.value {
            Value::Integer(n) => Node::Number(*n),
            Value::Bool(b) => Node::Bool(*b),
            Value::Sequence(s) => Node::Sequence(s.clone()),
            Value::List(l) => Node::List(l.clone()),
            Value::Function(_) | Value::Native(_) => Node::Symbol(Box::new(self.clone())),
        }
    }
}

impl fmt::Display for Variable {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match &self.value {
            Value::Function(function) => write!(f, "#{}/{}", self.name, function.params.len()),
            _ => write!(f, "#{}", self.name),
        }
    }
}

/// Extraction of a concrete Rust value from a node or a bound value.
///
/// Implemented for every kind a primitive can ask for. Extraction never
/// reinterprets a payload: a value of another kind yields `None`, which the
/// evaluator reports as a kind mismatch against [`FromValue::KIND`].
pub trait FromValue: Sized {
    /// The kind this type is extracted from.
    const KIND: Kind;

    /// Extracts from an already evaluated literal node.
    fn from_node(node: &Node) -> Option<Self>;

    /// Extracts from a value bound in the environment.
    fn from_value(value: &Value) -> Option<Self>;
}

impl FromValue for i64 {
    const KIND: Kind = Kind::Number;

    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Number(n) => Some(*n),
            _ => None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Integer(n) => Some(*n),
            _ => None,
        }
    }
}

impl FromValue for bool {
    const KIND: Kind = Kind::Bool;

    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Bool(b) => Some(*b),
            _ => None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }
}

impl FromValue for Sequence {
    const KIND: Kind = Kind::Sequence;

    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::Sequence(s) => Some(s.clone()),
            _ => None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::Sequence(s) => Some(s.clone()),
            _ => None,
        }
    }
}

impl FromValue for List {
    const KIND: Kind = Kind::List;

    fn from_node(node: &Node) -> Option<Self> {
        match node {
            Node::List(l) => Some(l.clone()),
            _ => None,
        }
    }

    fn from_value(value: &Value) -> Option<Self> {
        match value {
            Value::List(l) => Some(l.clone()),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn functions_display_their_parameter_count() {
        let add2 = Variable::new("add2",
                                 Value::Function(Function { params: vec!["a".into(), "b".into()],
                                                            body:   Rc::from(Vec::<Node>::new()), }));
        assert_eq!(add2.to_string(), "#add2/2");
        assert!(add2.is_callable());
        assert!(matches!(add2.to_node(), Node::Symbol(_)));
    }

    #[test]
    fn extraction_never_crosses_kinds() {
        assert_eq!(i64::from_value(&Value::Bool(true)), None);
        assert_eq!(bool::from_value(&Value::Integer(1)), None);
        assert_eq!(i64::from_node(&Node::Identifier("x".into())), None);
        assert_eq!(List::from_value(&Value::Sequence(Sequence::default())), None);
    }
}
