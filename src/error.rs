/// Parsing errors.
///
/// Defines all error types that can occur while tokenizing a line and while
/// building its expression tree: unclassifiable characters, unmatched
/// brackets, invalid literal contents and special forms whose bodies are
/// never captured.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unbound symbols, kind mismatches, division by zero, list
/// indices out of range and structural stack failures.
pub mod runtime_error;

pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// A failure while compiling or running a single line.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Error {
    /// The line could not be turned into an expression tree.
    Parse(ParseError),
    /// The expression tree failed during evaluation.
    Runtime(RuntimeError),
}

impl From<ParseError> for Error {
    fn from(e: ParseError) -> Self {
        Self::Parse(e)
    }
}

impl From<RuntimeError> for Error {
    fn from(e: RuntimeError) -> Self {
        Self::Runtime(e)
    }
}

impl std::fmt::Display for Error {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Parse(e) => write!(f, "{e}"),
            Self::Runtime(e) => write!(f, "{e}"),
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Parse(e) => Some(e),
            Self::Runtime(e) => Some(e),
        }
    }
}
