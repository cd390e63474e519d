use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::evaluator::{core::EvalResult, function::core::Runtime, utils::coerce},
};

/// Computes the integer square root of a non-negative number.
///
/// The result is the real square root truncated toward zero, so `(sqrt 10)`
/// is `3`.
///
/// # Parameters
/// - `args`: Slice containing one number or an identifier bound to one.
///
/// # Returns
/// A `Node::Number` holding the truncated root.
///
/// # Errors
/// - `NegativeSquareRoot` for negative input.
/// - `KindMismatch` or `UnboundSymbol` if the argument is not a number.
///
/// # Example
/// ```
/// use lispy::{
///     ast::Node,
///     interpreter::evaluator::{core::Interpreter, function::sqrt::sqrt},
/// };
///
/// let mut interpreter = Interpreter::new();
///
/// assert_eq!(sqrt(&mut interpreter, &[Node::Number(16)]), Ok(Node::Number(4)));
/// assert_eq!(sqrt(&mut interpreter, &[Node::Number(10)]), Ok(Node::Number(3)));
/// ```
pub fn sqrt(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    let value = coerce::<i64>(&*runtime, &args[0])?;

    if value < 0 {
        return Err(RuntimeError::NegativeSquareRoot { value });
    }
    Ok(Node::Number(value.isqrt()))
}
