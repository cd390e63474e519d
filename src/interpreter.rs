/// The builder module turns tokens into the node sequence the evaluator runs.
///
/// The builder keeps parenthesized groups flat, with explicit parenthesis
/// markers, and only nests where a special form needs an unevaluated body.
/// Sequence and quoted list literals are folded into single nodes.
///
/// # Responsibilities
/// - Maps tokens onto nodes and folds literals.
/// - Captures `defn` and `if` bodies as `Node::Body` subtrees.
/// - Reports build errors with the column they were detected at.
pub mod builder;
/// The environment module holds the stack of lexical scopes.
///
/// Bindings are searched innermost first; function calls and conditional
/// branches push and pop scopes around their bodies.
pub mod environment;
/// The evaluator module reduces node sequences to values.
///
/// The evaluator runs a node sequence on an explicit operand stack. Each
/// closing parenthesis pops its group and dispatches the group's first node
/// against the rest: operators, special forms, user-defined functions or
/// built-in functions.
///
/// # Responsibilities
/// - Reduces groups and dispatches them.
/// - Implements the `def`, `defn` and `if` special forms.
/// - Reports runtime errors such as unbound symbols or division by zero.
pub mod evaluator;
/// The lexer module tokenizes a line of source text.
///
/// The lexer produces parentheses, brackets, the quote mark, operators,
/// numbers, booleans, keywords and identifiers, each paired with its source
/// column. Whitespace separates words and is never emitted.
pub mod lexer;
/// The value module defines the runtime data types bound in the environment.
///
/// # Responsibilities
/// - Defines the `Value` enum and the `Variable` binding.
/// - Provides the shared `Sequence` and linked `List` aggregates.
/// - Extracts typed values from nodes without ever crossing kinds.
pub mod value;
