use std::fmt;

use crate::{
    ast::Node,
    interpreter::{
        environment::Scope,
        evaluator::{
            core::EvalResult,
            function::{arithmetic, list, sequence, sqrt},
        },
        value::core::{Value, Variable},
    },
};

/// The evaluator capabilities a native function may use.
///
/// Natives receive their arguments unevaluated beyond the group reduction,
/// so they need to resolve identifiers, and the higher-order ones need to
/// call a function by name.
pub trait Runtime {
    /// Looks `name` up from the innermost scope outwards.
    fn lookup(&self, name: &str) -> Option<&Variable>;

    /// Dispatches `callee` against `args`, exactly like a reduced group
    /// `(callee args...)`.
    fn call(&mut self, callee: &Node, args: Vec<Node>) -> EvalResult<Node>;
}

/// Type alias for native function handlers.
///
/// A native receives the runtime and its argument nodes in source order.
pub type NativeFn = fn(&mut dyn Runtime, &[Node]) -> EvalResult<Node>;

/// A built-in function bound in the global scope.
#[derive(Clone, Copy)]
pub struct NativeFunction {
    /// The name it is bound to.
    pub name:  &'static str,
    /// The exact number of arguments it takes.
    pub arity: usize,
    /// The implementation.
    pub func:  NativeFn,
}

impl fmt::Debug for NativeFunction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NativeFunction")
         .field("name", &self.name)
         .field("arity", &self.arity)
         .finish_non_exhaustive()
    }
}

impl PartialEq for NativeFunction {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.arity == other.arity
    }
}

/// Defines native functions by generating a lookup table and a name list.
///
/// Each entry provides:
/// - a string name,
/// - an exact arity,
/// - a function pointer implementing the native.
///
/// The macro produces:
/// - `NATIVE_TABLE` (static table installed into new environments),
/// - `NATIVE_FUNCTIONS` (public list of native names).
macro_rules! native_functions {
    (
        $(
            $name:literal => {
                arity: $arity:expr,
                func: $func:expr $(,)?
            }
        ),* $(,)?
    ) => {
        static NATIVE_TABLE: &[NativeFunction] = &[
            $(
                NativeFunction { name: $name, arity: $arity, func: $func },
            )*
        ];
        pub const NATIVE_FUNCTIONS: &[&str] = &[
            $($name,)*
        ];
    };
}

native_functions! {
    "sqrt"   => { arity: 1, func: sqrt::sqrt },
    "map"    => { arity: 2, func: sequence::map },
    "range"  => { arity: 2, func: sequence::range },
    "size"   => { arity: 1, func: sequence::size },
    "len"    => { arity: 1, func: list::len },
    "head"   => { arity: 1, func: list::head },
    "tail"   => { arity: 1, func: list::tail },
    "nth"    => { arity: 2, func: list::nth },
    "rem"    => { arity: 2, func: arithmetic::rem },
    "filter" => { arity: 2, func: sequence::filter },
    "reduce" => { arity: 2, func: sequence::reduce },
}

/// Builds a scope holding every native function under its name.
///
/// A new interpreter starts from this scope as its global scope; user
/// definitions made later may shadow the natives.
#[must_use]
pub fn globals() -> Scope {
    NATIVE_TABLE.iter()
                .map(|native| {
                    (native.name.to_string(), Variable::new(native.name, Value::Native(*native)))
                })
                .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_native_is_in_the_global_scope() {
        let scope = globals();

        assert_eq!(scope.len(), NATIVE_FUNCTIONS.len());
        for name in NATIVE_FUNCTIONS {
            let variable = &scope[*name];
            assert!(variable.is_callable(), "{name} should be callable");
            assert_eq!(variable.name, *name);
        }
    }

    #[test]
    fn natives_display_without_arity() {
        assert_eq!(globals()["reduce"].to_string(), "#reduce");
    }
}
