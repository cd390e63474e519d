/// Arithmetic and comparison operators, plus `rem`.
///
/// Operands are coerced to numbers; arithmetic is checked so overflow and
/// division by zero are reported instead of wrapping or panicking.
pub mod arithmetic;
/// Linked list functions: `len`, `head`, `tail` and `nth`.
pub mod list;
/// Sequence functions: `range`, `size`, `map`, `filter` and `reduce`.
///
/// `map`, `filter` and `reduce` call back into the evaluator through the
/// `Runtime` capability.
pub mod sequence;
/// The `sqrt` (square root) function implementation.
///
/// Computes the truncated integer square root of a non-negative number.
pub mod sqrt;
/// The native function table and the `Runtime` capability.
///
/// Declares every built-in function with its arity and builds the global
/// scope a new interpreter starts from.
pub mod core;
