use std::fmt;

use logos::Logos;

use crate::{
    ast::{Keyword, Operator},
    error::ParseError,
    util::num::parse_digits_wrapping,
};

/// Represents a lexical token in the source input.
///
/// A word is a maximal run of characters that are neither whitespace,
/// brackets, the quote mark nor an operator symbol. Reserved words and
/// all-digit words win over identifiers; any other word is an identifier.
#[derive(Logos, Debug, PartialEq, Eq, Clone)]
pub enum Token {
    /// `(` or `)`.
    #[token("(", |_| '(')]
    #[token(")", |_| ')')]
    Paren(char),
    /// `[` or `]`.
    #[token("[", |_| '[')]
    #[token("]", |_| ']')]
    Bracket(char),
    /// `'`, introducing a quoted list.
    #[token("'")]
    Quote,
    /// One of `+ * - / = < >`.
    #[token("+", |_| Operator::Add)]
    #[token("*", |_| Operator::Multiply)]
    #[token("-", |_| Operator::Subtract)]
    #[token("/", |_| Operator::Divide)]
    #[token("=", |_| Operator::Equals)]
    #[token("<", |_| Operator::LessThan)]
    #[token(">", |_| Operator::GreaterThan)]
    Operator(Operator),
    /// Unsigned base 10 integer literals such as `42`.
    #[regex(r"[0-9]+", |lex| parse_digits_wrapping(lex.slice()), priority = 3)]
    Number(i64),
    /// `true` or `false`.
    #[token("true", |_| true)]
    #[token("false", |_| false)]
    Bool(bool),
    /// `def`, `defn` or `if`.
    #[token("def", |_| Keyword::Def)]
    #[token("defn", |_| Keyword::Defn)]
    #[token("if", |_| Keyword::If)]
    Keyword(Keyword),
    /// Any other word, such as `x`, `add2` or `a?b`.
    #[regex(r"[^ \t\r\n\f()\[\]'+*/=<>-]+", |lex| lex.slice().to_string(), priority = 1)]
    Identifier(String),
    /// Whitespace.
    #[regex(r"[ \t\r\n\f]+", logos::skip)]
    Ignored,
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Paren(c) | Self::Bracket(c) => write!(f, "{c}"),
            Self::Quote => write!(f, "'"),
            Self::Operator(op) => write!(f, "{op}"),
            Self::Number(n) => write!(f, "{n}"),
            Self::Bool(b) => write!(f, "{b}"),
            Self::Keyword(kw) => write!(f, "{kw}"),
            Self::Identifier(name) => write!(f, "{name}"),
            Self::Ignored => Ok(()),
        }
    }
}

/// Splits a line into tokens paired with the byte column they start at.
///
/// # Errors
/// Returns `ParseError::UnexpectedCharacter` for input the token set cannot
/// classify.
///
/// # Example
/// ```
/// use lispy::{
///     ast::Operator,
///     interpreter::lexer::{Token, tokenize},
/// };
///
/// let tokens = tokenize("(+ 1 x)").unwrap();
///
/// assert_eq!(tokens,
///            vec![(Token::Paren('('), 0),
///                 (Token::Operator(Operator::Add), 1),
///                 (Token::Number(1), 3),
///                 (Token::Identifier("x".into()), 5),
///                 (Token::Paren(')'), 6)]);
/// ```
pub fn tokenize(source: &str) -> Result<Vec<(Token, usize)>, ParseError> {
    let mut lexer = Token::lexer(source);
    let mut tokens = Vec::new();

    while let Some(token) = lexer.next() {
        let column = lexer.span().start;
        match token {
            Ok(tok) => tokens.push((tok, column)),
            Err(()) => {
                return Err(ParseError::UnexpectedCharacter { found: lexer.slice().to_string(),
                                                             column });
            },
        }
    }

    Ok(tokens)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn kinds(source: &str) -> Vec<Token> {
        tokenize(source).unwrap().into_iter().map(|(t, _)| t).collect()
    }

    #[test]
    fn reserved_words_beat_identifiers() {
        assert_eq!(kinds("def defn if true false"),
                   vec![Token::Keyword(Keyword::Def),
                        Token::Keyword(Keyword::Defn),
                        Token::Keyword(Keyword::If),
                        Token::Bool(true),
                        Token::Bool(false)]);
    }

    #[test]
    fn longer_words_are_identifiers() {
        assert_eq!(kinds("define iffy 12ab truest"),
                   vec![Token::Identifier("define".into()),
                        Token::Identifier("iffy".into()),
                        Token::Identifier("12ab".into()),
                        Token::Identifier("truest".into())]);
    }

    #[test]
    fn operators_split_words() {
        assert_eq!(kinds("a-b"),
                   vec![Token::Identifier("a".into()),
                        Token::Operator(Operator::Subtract),
                        Token::Identifier("b".into())]);
    }

    #[test]
    fn quotes_and_brackets_are_single_tokens() {
        assert_eq!(kinds("'(1)[x]"),
                   vec![Token::Quote,
                        Token::Paren('('),
                        Token::Number(1),
                        Token::Paren(')'),
                        Token::Bracket('['),
                        Token::Identifier("x".into()),
                        Token::Bracket(']')]);
    }

    #[test]
    fn oversized_literals_still_lex() {
        assert!(matches!(kinds("99999999999999999999999").as_slice(), [Token::Number(_)]));
    }

    #[test]
    fn whitespace_only_yields_nothing() {
        assert!(kinds(" \t \n").is_empty());
    }
}
