/// Core runtime value types.
///
/// Defines `Value`, the `Variable` binding that pairs a value with its name,
/// user-defined `Function`s, the `Kind` tags used in kind mismatch errors and
/// the `FromValue` coercion trait.
pub mod core;
/// Singly linked integer lists.
///
/// Defines `List`, the immutable reference-counted cell chain built from
/// quoted list literals. `tail` shares cells instead of copying them.
pub mod list;
/// Sequence literals.
///
/// Defines `Sequence`, the shared, immutable vector of nodes built from
/// bracketed literals and returned by `range`, `map` and `filter`.
pub mod sequence;
