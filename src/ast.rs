use std::{fmt, rc::Rc};

use crate::interpreter::value::{core::Variable, list::List, sequence::Sequence};

/// The reserved words that introduce special forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Keyword {
    /// `def`: binds a value to a name in the current scope.
    Def,
    /// `defn`: binds a user-defined function.
    Defn,
    /// `if`: evaluates one of two bodies depending on a condition body.
    If,
}

impl Keyword {
    /// Returns how many upcoming parenthesized groups this keyword captures
    /// as unevaluated bodies.
    ///
    /// # Example
    /// ```
    /// use lispy::ast::Keyword;
    ///
    /// assert_eq!(Keyword::Def.captured_bodies(), 0);
    /// assert_eq!(Keyword::Defn.captured_bodies(), 1);
    /// assert_eq!(Keyword::If.captured_bodies(), 3);
    /// ```
    #[must_use]
    pub const fn captured_bodies(self) -> usize {
        match self {
            Self::Def => 0,
            Self::Defn => 1,
            Self::If => 3,
        }
    }
}

impl fmt::Display for Keyword {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Def => write!(f, "def"),
            Self::Defn => write!(f, "defn"),
            Self::If => write!(f, "if"),
        }
    }
}

/// The single-character arithmetic and comparison operators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    /// `+`
    Add,
    /// `*`
    Multiply,
    /// `-`
    Subtract,
    /// `/`
    Divide,
    /// `=`
    Equals,
    /// `<`
    LessThan,
    /// `>`
    GreaterThan,
}

impl Operator {
    /// Returns the source symbol of the operator.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Self::Add => '+',
            Self::Multiply => '*',
            Self::Subtract => '-',
            Self::Divide => '/',
            Self::Equals => '=',
            Self::LessThan => '<',
            Self::GreaterThan => '>',
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A node of the expression tree produced by the builder.
///
/// Before evaluation a node may represent syntax (`Paren`, `Operator`,
/// `Keyword`, `Body`); after a group is reduced, the node left in its place
/// is always a value (`Number`, `Bool`, `Sequence`, `List`, `Symbol`).
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// An opening or closing parenthesis marker.
    Paren(char),
    /// An arithmetic or comparison operator.
    Operator(Operator),
    /// A signed integer.
    Number(i64),
    /// A boolean literal: `true` or `false`.
    Bool(bool),
    /// A special form keyword.
    Keyword(Keyword),
    /// A name, resolved through the environment when needed.
    Identifier(String),
    /// A bracketed sequence literal such as `[1 2 x]`.
    Sequence(Sequence),
    /// A quoted integer list such as `'(9 8 7)`.
    List(List),
    /// A captured sub-program, evaluated only when its special form asks.
    Body(Rc<[Self]>),
    /// The binding produced by `def` or `defn`, or a resolved callable.
    Symbol(Box<Variable>),
}

impl Node {
    /// Returns a short description of the node for error messages.
    ///
    /// # Example
    /// ```
    /// use lispy::ast::Node;
    ///
    /// assert_eq!(Node::Number(3).describe(), "number 3");
    /// assert_eq!(Node::Identifier("x".into()).describe(), "identifier 'x'");
    /// ```
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Paren(c) => format!("parenthesis '{c}'"),
            Self::Operator(op) => format!("operator '{op}'"),
            Self::Number(n) => format!("number {n}"),
            Self::Bool(b) => format!("bool {b}"),
            Self::Keyword(kw) => format!("keyword '{kw}'"),
            Self::Identifier(name) => format!("identifier '{name}'"),
            Self::Sequence(_) => "sequence".to_string(),
            Self::List(_) => "list".to_string(),
            Self::Body(_) => "body".to_string(),
            Self::Symbol(variable) => format!("symbol {variable}"),
        }
    }

    /// Renders an indented debug dump of the node, one node per line.
    ///
    /// Body children are indented two spaces deeper than their body.
    ///
    /// # Example
    /// ```
    /// use lispy::ast::Node;
    ///
    /// assert_eq!(Node::Number(7).dump(0), "NUMBER      7\n");
    /// ```
    #[must_use]
    pub fn dump(&self, depth: usize) -> String {
        let indent = " ".repeat(depth);
        match self {
            Self::Body(nodes) => {
                let mut out = format!("{indent}BODY\n");
                for node in nodes.iter() {
                    out.push_str(&node.dump(depth + 2));
                }
                out
            },
            other => format!("{indent}{:<12}{other}\n", other.tag()),
        }
    }

    const fn tag(&self) -> &'static str {
        match self {
            Self::Paren(_) => "PAREN",
            Self::Operator(_) => "OPER",
            Self::Number(_) => "NUMBER",
            Self::Bool(_) => "BOOL",
            Self::Keyword(_) => "KEYWORD",
            Self::Identifier(_) => "IDENT",
            Self::Sequence(_) => "VECTOR",
            Self::List(_) => "LIST",
            Self::Body(_) => "BODY",
            Self::Symbol(_) => "SYMBOL",
        }
    }
}

/// Renders the debug dump of a whole compiled line.
#[must_use]
pub fn dump_program(nodes: &[Node]) -> String {
    nodes.iter().map(|node| node.dump(0)).collect()
}

impl From<i64> for Node {
    fn from(value: i64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for Node {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

impl From<Sequence> for Node {
    fn from(value: Sequence) -> Self {
        Self::Sequence(value)
    }
}

impl From<List> for Node {
    fn from(value: List) -> Self {
        Self::List(value)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paren(c) => write!(f, "{c}"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Keyword(kw) => write!(f, "{kw}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Sequence(sequence) => write!(f, "{sequence}"),
            Self::List(list) => write!(f, "{list}"),
            Self::Body(nodes) => {
                for (index, node) in nodes.iter().enumerate() {
                    if index > 0 {
                        write!(f, " ")?;
                    }
                    write!(f, "{node}")?;
                }
                Ok(())
            },
            Self::Symbol(variable) => write!(f, "{variable}"),
        }
    }
}
