#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while tokenizing a line or building
/// its expression tree.
///
/// Every variant carries the byte column of the token at which the problem
/// was detected.
pub enum ParseError {
    /// A character the lexer could not classify.
    UnexpectedCharacter {
        /// The offending input slice.
        found:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A closing bracket `]` without a matching `[`.
    UnmatchedBracket {
        /// The source column where the error occurred.
        column: usize,
    },
    /// A sequence literal `[` that is never closed.
    UnclosedSequence {
        /// The column of the opening bracket.
        column: usize,
    },
    /// A token other than a number or identifier inside `[ ... ]`.
    InvalidSequenceElement {
        /// The offending token.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A quote mark that is not immediately followed by `(`.
    MalformedQuote {
        /// The source column where the error occurred.
        column: usize,
    },
    /// A quoted list `'(` that is never closed.
    UnclosedList {
        /// The column of the quote mark.
        column: usize,
    },
    /// A token other than a number inside a quoted list.
    InvalidListElement {
        /// The offending token.
        token:  String,
        /// The source column where the error occurred.
        column: usize,
    },
    /// A captured body whose parentheses are never balanced.
    UnclosedBody {
        /// The column of the body's opening parenthesis.
        column: usize,
    },
    /// A special form that was closed before all of its bodies were captured.
    MissingBody {
        /// The special form keyword.
        keyword:  String,
        /// How many more bodies the form was waiting for.
        missing:  usize,
        /// The source column where the error occurred.
        column:   usize,
    },
}

impl ParseError {
    /// Returns the source column at which the error was detected.
    #[must_use]
    pub const fn column(&self) -> usize {
        match self {
            Self::UnexpectedCharacter { column, .. }
            | Self::UnmatchedBracket { column }
            | Self::UnclosedSequence { column }
            | Self::InvalidSequenceElement { column, .. }
            | Self::MalformedQuote { column }
            | Self::UnclosedList { column }
            | Self::InvalidListElement { column, .. }
            | Self::UnclosedBody { column }
            | Self::MissingBody { column, .. } => *column,
        }
    }
}

impl std::fmt::Display for ParseError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnexpectedCharacter { found, column } => {
                write!(f, "Error at column {column}: Unexpected character '{found}'.")
            },
            Self::UnmatchedBracket { column } => {
                write!(f, "Error at column {column}: No matching bracket.")
            },
            Self::UnclosedSequence { column } => write!(f,
                                                        "Error at column {column}: Sequence literal is never closed with ']'."),
            Self::InvalidSequenceElement { token, column } => write!(f,
                                                                     "Error at column {column}: Invalid token '{token}' in sequence literal."),
            Self::MalformedQuote { column } => {
                write!(f, "Error at column {column}: Quote must be followed by '('.")
            },
            Self::UnclosedList { column } => {
                write!(f, "Error at column {column}: Quoted list is never closed with ')'.")
            },
            Self::InvalidListElement { token, column } => write!(f,
                                                                 "Error at column {column}: Quoted lists may only hold numbers, found '{token}'."),
            Self::UnclosedBody { column } => {
                write!(f, "Error at column {column}: Body is never closed with ')'.")
            },
            Self::MissingBody { keyword,
                                missing,
                                column, } => write!(f,
                                                    "Error at column {column}: '{keyword}' is missing {missing} parenthesized body(ies)."),
        }
    }
}

impl std::error::Error for ParseError {}
