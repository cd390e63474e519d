use std::rc::Rc;

use tracing::debug;

use crate::{
    ast::{Keyword, Node},
    error::ParseError,
    interpreter::{
        builder::literal::{quoted_list, sequence},
        lexer::{Token, tokenize},
    },
};

pub type ParseResult<T> = Result<T, ParseError>;

/// A special form still waiting for its bodies.
struct Pending {
    keyword:   Keyword,
    remaining: usize,
    column:    usize,
}

impl Pending {
    fn into_error(self) -> ParseError {
        ParseError::MissingBody { keyword: self.keyword.to_string(),
                                  missing: self.remaining,
                                  column:  self.column, }
    }
}

/// Compiles one line of source text into a flat node sequence.
///
/// This is the entry point of the front end: it tokenizes the line and builds
/// the top-level node sequence, in which every special form body is already
/// captured as a `Node::Body`.
///
/// # Errors
/// Returns a `ParseError` for unclassifiable characters, malformed literals,
/// stray closing brackets and special forms whose bodies are never captured.
///
/// # Example
/// ```
/// use lispy::{ast::Node, interpreter::builder::core::compile};
///
/// let program = compile("(if (true) (1) (0))").unwrap();
///
/// assert_eq!(program.len(), 6);
/// assert!(matches!(program[2], Node::Body(_)));
/// ```
pub fn compile(source: &str) -> ParseResult<Vec<Node>> {
    let tokens = tokenize(source)?;
    let (program, _) = build(&tokens, 0)?;

    debug!(tokens = tokens.len(), nodes = program.len(), "compiled line");
    Ok(program)
}

/// Builds nodes from a flat token sequence.
///
/// Tokens map one to one onto nodes, except that:
/// - `[` and `'` consume a whole literal and produce one node,
/// - a keyword announces how many following `(` groups are bodies; each such
///   group is built by a recursive call at `depth + 1` and wrapped in a
///   `Node::Body`, parentheses included.
///
/// At `depth > 0` the call starts at a `(` and returns as soon as the
/// matching `)` has been consumed.
///
/// # Parameters
/// - `tokens`: Tokens paired with their source column.
/// - `depth`: Body nesting depth; `0` for a whole line.
///
/// # Returns
/// The built nodes and the number of tokens consumed.
///
/// # Errors
/// - `MissingBody` if a group closes, or the line ends, while a special form
///   still expects bodies.
/// - `UnclosedBody` if a captured body is never closed.
/// - `UnmatchedBracket` for a stray `]`.
/// - Any error from the literal parsers.
pub fn build(tokens: &[(Token, usize)], depth: usize) -> ParseResult<(Vec<Node>, usize)> {
    let mut nodes = Vec::new();
    let mut open_parens = 0_usize;
    let mut pending: Option<Pending> = None;
    let mut index = 0;

    while let Some((token, column)) = tokens.get(index) {
        match token {
            Token::Paren('(') if pending.is_some() => {
                let (body, consumed) = build(&tokens[index..], depth + 1)?;
                nodes.push(Node::Body(Rc::from(body)));
                index += consumed;

                if let Some(form) = pending.as_mut() {
                    form.remaining -= 1;
                    if form.remaining == 0 {
                        pending = None;
                    }
                }
                continue;
            },
            Token::Paren('(') => {
                open_parens += 1;
                nodes.push(Node::Paren('('));
            },
            Token::Paren(_) => {
                if let Some(form) = pending.take() {
                    return Err(form.into_error());
                }
                nodes.push(Node::Paren(')'));
                open_parens = open_parens.saturating_sub(1);

                if depth > 0 && open_parens == 0 {
                    return Ok((nodes, index + 1));
                }
            },
            Token::Bracket('[') => {
                let (node, consumed) = sequence(&tokens[index..])?;
                nodes.push(node);
                index += consumed;
                continue;
            },
            Token::Bracket(_) => return Err(ParseError::UnmatchedBracket { column: *column }),
            Token::Quote => {
                let (node, consumed) = quoted_list(&tokens[index..])?;
                nodes.push(node);
                index += consumed;
                continue;
            },
            Token::Keyword(keyword) => {
                if let Some(form) = pending.take() {
                    return Err(form.into_error());
                }
                let remaining = keyword.captured_bodies();
                if remaining > 0 {
                    pending = Some(Pending { keyword: *keyword,
                                             remaining,
                                             column: *column });
                }
                nodes.push(Node::Keyword(*keyword));
            },
            Token::Operator(op) => nodes.push(Node::Operator(*op)),
            Token::Number(n) => nodes.push(Node::Number(*n)),
            Token::Bool(b) => nodes.push(Node::Bool(*b)),
            Token::Identifier(name) => nodes.push(Node::Identifier(name.clone())),
            Token::Ignored => {},
        }
        index += 1;
    }

    if depth > 0 {
        let column = tokens.first().map_or(0, |(_, column)| *column);
        return Err(ParseError::UnclosedBody { column });
    }
    if let Some(form) = pending {
        return Err(form.into_error());
    }

    Ok((nodes, index))
}
