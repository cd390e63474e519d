use crate::{
    ast::Node,
    error::ParseError,
    interpreter::{builder::core::ParseResult, lexer::Token},
};

/// Parses a sequence literal such as `[1 2 x]`.
///
/// `tokens` must start at the opening bracket. Only numbers and identifiers
/// may appear inside.
///
/// # Returns
/// The `Node::Sequence` and the number of tokens consumed, closing bracket
/// included.
///
/// # Errors
/// - `InvalidSequenceElement` for any other token inside the brackets.
/// - `UnclosedSequence` if the tokens run out before `]`.
pub fn sequence(tokens: &[(Token, usize)]) -> ParseResult<(Node, usize)> {
    let open_column = tokens.first().map_or(0, |(_, column)| *column);
    let mut elements = Vec::new();

    for (offset, (token, column)) in tokens.iter().enumerate().skip(1) {
        match token {
            Token::Bracket(']') => return Ok((Node::Sequence(elements.into()), offset + 1)),
            Token::Number(n) => elements.push(Node::Number(*n)),
            Token::Identifier(name) => elements.push(Node::Identifier(name.clone())),
            other => {
                return Err(ParseError::InvalidSequenceElement { token:  other.to_string(),
                                                                column: *column, });
            },
        }
    }

    Err(ParseError::UnclosedSequence { column: open_column })
}

/// Parses a quoted integer list such as `'(9 8 7)`.
///
/// `tokens` must start at the quote mark, which has to be followed directly
/// by `(`. `'()` is the empty list.
///
/// # Returns
/// The `Node::List` and the number of tokens consumed, closing parenthesis
/// included.
///
/// # Errors
/// - `MalformedQuote` if the quote is not followed by `(`.
/// - `InvalidListElement` for any non-number token inside.
/// - `UnclosedList` if the tokens run out before `)`.
pub fn quoted_list(tokens: &[(Token, usize)]) -> ParseResult<(Node, usize)> {
    let quote_column = tokens.first().map_or(0, |(_, column)| *column);

    if !matches!(tokens.get(1), Some((Token::Paren('('), _))) {
        return Err(ParseError::MalformedQuote { column: quote_column });
    }

    let mut values = Vec::new();

    for (offset, (token, column)) in tokens.iter().enumerate().skip(2) {
        match token {
            Token::Paren(')') => {
                return Ok((Node::List(values.into_iter().collect()), offset + 1));
            },
            Token::Number(n) => values.push(*n),
            other => {
                return Err(ParseError::InvalidListElement { token:  other.to_string(),
                                                            column: *column, });
            },
        }
    }

    Err(ParseError::UnclosedList { column: quote_column })
}
