/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the language's
/// `i64` integers and the `usize` counts and positions used by sequences and
/// lists, plus the digit parser the lexer relies on. Conversions return a
/// `Result` instead of silently truncating.
pub mod num;
