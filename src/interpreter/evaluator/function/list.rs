use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{core::EvalResult, function::core::Runtime, utils::coerce},
        value::list::List,
    },
    util::num::{i64_to_usize_checked, usize_to_i64_checked},
};

fn empty(operation: &str) -> RuntimeError {
    RuntimeError::EmptyAggregate { operation: operation.to_string() }
}

/// Counts the cells of a list: `(len '(9 8 7))` is `3`.
pub fn len(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    let list = coerce::<List>(&*runtime, &args[0])?;
    Ok(Node::Number(usize_to_i64_checked(list.len())?))
}

/// Returns the first value of a list: `(head '(9 8 7))` is `9`.
///
/// # Errors
/// `EmptyAggregate` for the empty list.
pub fn head(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    let list = coerce::<List>(&*runtime, &args[0])?;
    list.head().map(Node::Number).ok_or_else(|| empty("head"))
}

/// Returns every value but the first, sharing the cells of the argument.
///
/// # Errors
/// `EmptyAggregate` for the empty list.
pub fn tail(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    let list = coerce::<List>(&*runtime, &args[0])?;
    list.tail().map(Node::List).ok_or_else(|| empty("tail"))
}

/// Returns the value at a zero-based position: `(nth 1 '(9 8 7))` is `8`.
///
/// # Errors
/// `IndexOutOfBounds` for negative positions and positions past the end.
pub fn nth(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    let index = coerce::<i64>(&*runtime, &args[0])?;
    let list = coerce::<List>(&*runtime, &args[1])?;
    let out_of_bounds = || RuntimeError::IndexOutOfBounds { index,
                                                            length: list.len() };

    let position = i64_to_usize_checked(index, out_of_bounds())?;
    list.nth(position).map(Node::Number).ok_or_else(out_of_bounds)
}
