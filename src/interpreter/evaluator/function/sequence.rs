use crate::{
    ast::Node,
    error::RuntimeError,
    interpreter::{
        evaluator::{
            core::EvalResult,
            function::core::Runtime,
            utils::{coerce, expect_callable},
        },
        value::sequence::Sequence,
    },
    util::num::usize_to_i64_checked,
};

/// Builds the sequence of integers from the first argument to the second,
/// both inclusive. `(range 1 5)` is `[1 2 3 4 5]`; `(range 5 1)` is `[]`.
pub fn range(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    let start = coerce::<i64>(&*runtime, &args[0])?;
    let end = coerce::<i64>(&*runtime, &args[1])?;

    Ok(Node::Sequence((start..=end).map(Node::Number).collect()))
}

/// Counts the elements of a sequence.
pub fn size(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    let sequence = coerce::<Sequence>(&*runtime, &args[0])?;
    Ok(Node::Number(usize_to_i64_checked(sequence.len())?))
}

/// Applies a function to every element of a sequence.
///
/// `(map f xs)` calls `f` once per element, in order, and collects the
/// results into a new sequence of the same length.
///
/// # Errors
/// - `KindMismatch`, `UnboundSymbol` or `NotCallable` if the first argument
///   does not name a function.
/// - Any error raised by a call.
pub fn map(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    expect_callable(&*runtime, &args[0])?;
    let sequence = coerce::<Sequence>(&*runtime, &args[1])?;

    let mapped = sequence.iter()
                         .map(|element| runtime.call(&args[0], vec![element.clone()]))
                         .collect::<EvalResult<Sequence>>()?;
    Ok(Node::Sequence(mapped))
}

/// Keeps the elements of a sequence for which a predicate returns `true`.
///
/// Kept elements stay in their original relative order.
///
/// # Errors
/// - The same callee errors as [`map`].
/// - `KindMismatch` if the predicate returns anything but a bool.
pub fn filter(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    expect_callable(&*runtime, &args[0])?;
    let sequence = coerce::<Sequence>(&*runtime, &args[1])?;
    let mut kept = Vec::new();

    for element in &sequence {
        let verdict = runtime.call(&args[0], vec![element.clone()])?;
        if coerce::<bool>(&*runtime, &verdict)? {
            kept.push(element.clone());
        }
    }

    Ok(Node::Sequence(kept.into()))
}

/// Folds a sequence from the left with a two-argument function.
///
/// The fold starts from the first element and calls `f(accumulator, next)`
/// for each following element, so `(reduce add2 [1 2 3])` is
/// `(add2 (add2 1 2) 3)`.
///
/// # Errors
/// - The same callee errors as [`map`].
/// - `EmptyAggregate` for an empty sequence.
/// - `KindMismatch` if an element or an intermediate result is not a
///   number.
pub fn reduce(runtime: &mut dyn Runtime, args: &[Node]) -> EvalResult<Node> {
    expect_callable(&*runtime, &args[0])?;
    let sequence = coerce::<Sequence>(&*runtime, &args[1])?;

    let (first, rest) =
        sequence.as_slice()
                .split_first()
                .ok_or_else(|| RuntimeError::EmptyAggregate { operation: "reduce".to_string() })?;

    let mut accumulator = coerce::<i64>(&*runtime, first)?;
    for element in rest {
        let result = runtime.call(&args[0], vec![Node::Number(accumulator), element.clone()])?;
        accumulator = coerce::<i64>(&*runtime, &result)?;
    }

    Ok(Node::Number(accumulator))
}
