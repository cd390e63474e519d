/// Core tree building.
///
/// Contains `compile`, the line-level entry point, and the recursive `build`
/// that handles parenthesized groups and the capture of special form bodies.
pub mod core;

/// Literal parsing.
///
/// Parses bracketed sequence literals and quoted integer lists into single
/// nodes.
pub mod literal;
