/// Core evaluation logic and interpreter state.
///
/// Contains the `Interpreter`, the operand stack reduction loop and the
/// line-level entry point.
pub mod core;

/// Dispatch of reduced groups.
///
/// Routes a group's action node to an operator, a special form, a
/// user-defined function or a built-in function.
pub mod dispatch;

/// The `def`, `defn` and `if` special forms.
pub mod special_form;

/// Utility functions for evaluation.
///
/// Provides coercion of nodes to typed values, arity checks and scoped
/// evaluation shared by the dispatcher and the built-in functions.
pub mod utils;

/// Built-in functions.
///
/// Handles the arithmetic operators and the native function library, and
/// defines the `Runtime` capability natives use to call back into the
/// evaluator.
pub mod function;
