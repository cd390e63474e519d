use crate::interpreter::value::core::Kind;

/// Broad families of evaluation failures.
///
/// Each [`RuntimeError`] belongs to exactly one category; callers that only
/// care about the family can match on this instead of the full error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    /// An identifier had no binding in any scope.
    UnboundSymbol,
    /// A value's kind disagreed with what an operation expected.
    KindMismatch,
    /// Division or remainder by zero, negative square roots, overflow.
    Arithmetic,
    /// A position outside an aggregate, or an empty aggregate.
    Index,
    /// The operand or scope stack was popped while empty, was left
    /// unbalanced, or calls nested past the depth limit.
    StackUnderflow,
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during evaluation.
pub enum RuntimeError {
    /// An identifier has no binding in any scope.
    UnboundSymbol {
        /// The name that was looked up.
        name: String,
    },
    /// A value's kind does not match what an operation expects.
    KindMismatch {
        /// The kind the operation required.
        expected: Kind,
        /// A description of what was found instead.
        found:    String,
    },
    /// A name that should refer to a function is bound to something else.
    NotCallable {
        /// The name that was used as a callable.
        name: String,
    },
    /// A callable received the wrong number of arguments.
    ArgumentCountMismatch {
        /// The function, operator or special form being applied.
        callee:   String,
        /// The number of arguments it takes.
        expected: usize,
        /// The number of arguments it received.
        found:    usize,
    },
    /// A special form received arguments of the wrong shape.
    InvalidSpecialForm {
        /// The special form keyword.
        keyword: String,
        /// Details about what was wrong.
        details: String,
    },
    /// A group was reduced with something that cannot be dispatched.
    UnknownDispatchTarget {
        /// A description of the action node.
        found: String,
    },
    /// A program finished with a piece of syntax rather than a value.
    NotAValue {
        /// A description of the leftover node.
        found: String,
    },
    /// Attempted division or remainder by zero.
    DivisionByZero,
    /// Attempted to take the square root of a negative number.
    NegativeSquareRoot {
        /// The negative operand.
        value: i64,
    },
    /// Integer arithmetic overflowed.
    Overflow,
    /// Tried to access a list position outside its bounds.
    IndexOutOfBounds {
        /// The index that was requested.
        index:  i64,
        /// The length of the list.
        length: usize,
    },
    /// An operation that needs at least one element got an empty aggregate.
    EmptyAggregate {
        /// The operation that was attempted.
        operation: String,
    },
    /// The evaluator popped a stack that was already empty.
    StackUnderflow {
        /// Details about which stack underflowed.
        details: String,
    },
    /// A program left more than one value on the operand stack.
    UnreducedValues {
        /// The number of values left behind.
        count: usize,
    },
    /// Function calls nested deeper than the interpreter allows.
    RecursionLimit {
        /// The maximum call depth.
        limit: usize,
    },
}

impl RuntimeError {
    /// Returns the family this error belongs to.
    ///
    /// # Example
    /// ```
    /// use lispy::error::{RuntimeError, runtime_error::Category};
    ///
    /// assert_eq!(RuntimeError::DivisionByZero.category(), Category::Arithmetic);
    /// ```
    #[must_use]
    pub const fn category(&self) -> Category {
        match self {
            Self::UnboundSymbol { .. } => Category::UnboundSymbol,
            Self::KindMismatch { .. }
            | Self::NotCallable { .. }
            | Self::ArgumentCountMismatch { .. }
            | Self::InvalidSpecialForm { .. }
            | Self::UnknownDispatchTarget { .. }
            | Self::NotAValue { .. } => Category::KindMismatch,
            Self::DivisionByZero | Self::NegativeSquareRoot { .. } | Self::Overflow => {
                Category::Arithmetic
            },
            Self::IndexOutOfBounds { .. } | Self::EmptyAggregate { .. } => Category::Index,
            Self::StackUnderflow { .. }
            | Self::UnreducedValues { .. }
            | Self::RecursionLimit { .. } => Category::StackUnderflow,
        }
    }

    pub(crate) fn kind_mismatch(expected: Kind, found: impl Into<String>) -> Self {
        Self::KindMismatch { expected,
                             found: found.into() }
    }
}

impl std::fmt::Display for RuntimeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnboundSymbol { name } => write!(f, "Unbound symbol '{name}'."),
            Self::KindMismatch { expected, found } => {
                write!(f, "Kind mismatch: expected {expected}, found {found}.")
            },
            Self::NotCallable { name } => write!(f, "'{name}' is not a function."),
            Self::ArgumentCountMismatch { callee,
                                          expected,
                                          found, } => write!(f,
                                                             "'{callee}' takes {expected} argument(s) but received {found}."),
            Self::InvalidSpecialForm { keyword, details } => {
                write!(f, "Invalid '{keyword}' form: {details}.")
            },
            Self::UnknownDispatchTarget { found } => {
                write!(f, "Cannot apply {found} to arguments.")
            },
            Self::NotAValue { found } => write!(f, "Program evaluated to {found}, not a value."),
            Self::DivisionByZero => write!(f, "Division by zero."),
            Self::NegativeSquareRoot { value } => {
                write!(f, "Cannot take the square root of negative number {value}.")
            },
            Self::Overflow => write!(f, "Integer overflow while trying to compute result."),
            Self::IndexOutOfBounds { index, length } => write!(f,
                                                               "Index out of bounds: index is {index} but length is {length}."),
            Self::EmptyAggregate { operation } => {
                write!(f, "'{operation}' requires a non-empty argument.")
            },
            Self::StackUnderflow { details } => write!(f, "Stack underflow: {details}."),
            Self::UnreducedValues { count } => write!(f,
                                                      "Program left {count} values on the stack; expected exactly one."),
            Self::RecursionLimit { limit } => {
                write!(f, "Maximum call depth of {limit} exceeded.")
            },
        }
    }
}

impl std::error::Error for RuntimeError {}
