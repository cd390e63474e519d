use crate::{
    ast::{Node, Operator},
    error::RuntimeError,
    interpreter::evaluator::{
        core::EvalResult,
        function::core::Runtime,
        utils::{check_arity, coerce},
    },
};

/// Applies an operator to its arguments.
///
/// Every argument is coerced to a number first. Operands are used in source
/// order: `(- 10 3)` is `7`, `(/ 10 3)` is `3` and `(> 3 2)` is `true`.
///
/// - `+` and `*` take any number of operands; with none they give `0` and
///   `1`.
/// - `-` negates a single operand or subtracts the second from the first.
/// - `/`, `=`, `<` and `>` take exactly two operands.
///
/// # Errors
/// - `KindMismatch` or `UnboundSymbol` if an operand is not a number.
/// - `ArgumentCountMismatch` for a wrong operand count.
/// - `DivisionByZero` and `Overflow` from the checked arithmetic.
///
/// # Example
/// ```
/// use lispy::{
///     ast::{Node, Operator},
///     interpreter::evaluator::{core::Interpreter, function::arithmetic::apply},
/// };
///
/// let interpreter = Interpreter::new();
/// let args = [Node::Number(10), Node::Number(3)];
///
/// assert_eq!(apply(&interpreter, Operator::Subtract, &args), Ok(Node::Number(7)));
/// assert_eq!(apply(&interpreter, Operator::GreaterThan, &args), Ok(Node::Bool(true)));
/// ```
pub fn apply(runtime: &dyn Runtime, op: Operator, args: &[Node]) -> EvalResult<Node> {
    let operands = args.iter()
                       .map(|arg| coerce::<i64>(runtime, arg))
                       .collect::<EvalResult<Vec<_>>>()?;
    let callee = op.symbol().to_string();

    match op {
        Operator::Add => operands.iter()
                                 .try_fold(0_i64, |acc, n| acc.checked_add(*n))
                                 .map(Node::Number)
                                 .ok_or(RuntimeError::Overflow),
        Operator::Multiply => operands.iter()
                                      .try_fold(1_i64, |acc, n| acc.checked_mul(*n))
                                      .map(Node::Number)
                                      .ok_or(RuntimeError::Overflow),
        Operator::Subtract => match operands.as_slice() {
            [a] => a.checked_neg().map(Node::Number).ok_or(RuntimeError::Overflow),
            [a, b] => a.checked_sub(*b).map(Node::Number).ok_or(RuntimeError::Overflow),
            _ => Err(RuntimeError::ArgumentCountMismatch { callee,
                                                           expected: 2,
                                                           found: operands.len() }),
        },
        Operator::Divide => {
            let [a, b] = binary(&callee, &operands)?;
            divide(a, b).map(Node::Number)
        },
        Operator::Equals => {
            let [a, b] = binary(&callee, &operands)?;
            Ok(Node::Bool(a == b))
        },
        Operator::LessThan => {
            let [a, b] = binary(&callee, &operands)?;
            Ok(Node::Bool(a < b))
        },
        Operator::GreaterThan => {
            let [a, b] = binary(&callee, &operands)?;
            Ok(Node::Bool(a > b))
        },
    }
}

/// Computes the remainder of dividing the first argument by the second.
///
/// The sign follows the dividend, matching `/`, so that
/// `(+ (* (/ a b) b) (rem a b))` is always `a`.
///
/// # Errors
/// `DivisionByZero` if the divisor is zero.
pub fn rem(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    let operands = args.iter()
                       .map(|arg| coerce::<i64>(&*runtime, arg))
                       .collect::<EvalResult<Vec<_>>>()?;
    let [a, b] = binary("rem", &operands)?;

    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    a.checked_rem(b).map(Node::Number).ok_or(RuntimeError::Overflow)
}

fn binary(callee: &str, operands: &[i64]) -> EvalResult<[i64; 2]> {
    check_arity(callee, operands, 2)?;
    Ok([operands[0], operands[1]])
}

fn divide(a: i64, b: i64) -> EvalResult<i64> {
    if b == 0 {
        return Err(RuntimeError::DivisionByZero);
    }
    a.checked_div(b).ok_or(RuntimeError::Overflow)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::interpreter::evaluator::core::Interpreter;

    fn numbers(values: &[i64]) -> Vec<Node> {
        values.iter().copied().map(Node::Number).collect()
    }

    #[test]
    fn empty_sum_and_product() {
        let interpreter = Interpreter::new();

        assert_eq!(apply(&interpreter, Operator::Add, &[]), Ok(Node::Number(0)));
        assert_eq!(apply(&interpreter, Operator::Multiply, &[]), Ok(Node::Number(1)));
    }

    #[test]
    fn operands_keep_source_order() {
        let interpreter = Interpreter::new();
        let args = numbers(&[10, 3]);

        assert_eq!(apply(&interpreter, Operator::Subtract, &args), Ok(Node::Number(7)));
        assert_eq!(apply(&interpreter, Operator::Divide, &args), Ok(Node::Number(3)));
        assert_eq!(apply(&interpreter, Operator::LessThan, &args), Ok(Node::Bool(false)));
        assert_eq!(apply(&interpreter, Operator::GreaterThan, &args), Ok(Node::Bool(true)));
    }

    #[test]
    fn negation() {
        let interpreter = Interpreter::new();
        assert_eq!(apply(&interpreter, Operator::Subtract, &numbers(&[4])), Ok(Node::Number(-4)));
    }

    #[test]
    fn checked_failures() {
        let interpreter = Interpreter::new();

        assert_eq!(apply(&interpreter, Operator::Divide, &numbers(&[1, 0])),
                   Err(RuntimeError::DivisionByZero));
        assert_eq!(apply(&interpreter, Operator::Add, &numbers(&[i64::MAX, 1])),
                   Err(RuntimeError::Overflow));
        assert_eq!(apply(&interpreter, Operator::Divide, &numbers(&[i64::MIN, -1])),
                   Err(RuntimeError::Overflow));
    }

    #[test]
    fn booleans_are_not_numbers() {
        let interpreter = Interpreter::new();
        assert!(matches!(apply(&interpreter, Operator::Add, &[Node::Bool(true)]),
                         Err(RuntimeError::KindMismatch { .. })));
    }

    #[test]
    fn comparisons_take_two_operands() {
        let interpreter = Interpreter::new();
        assert!(matches!(apply(&interpreter, Operator::Equals, &numbers(&[1, 1, 1])),
                         Err(RuntimeError::ArgumentCountMismatch { expected: 2, found: 3, .. })));
    }

    #[test]
    fn remainder_follows_the_dividend() {
        let mut interpreter = Interpreter::new();

        assert_eq!(rem(&mut interpreter, &numbers(&[10, 3])), Ok(Node::Number(1)));
        assert_eq!(rem(&mut interpreter, &numbers(&[-7, 2])), Ok(Node::Number(-1)));
        assert_eq!(rem(&mut interpreter, &numbers(&[7, 0])), Err(RuntimeError::DivisionByZero));
    }
}
