//! # lispy
//!
//! lispy is a small evaluator for a Lisp-like expression language written in
//! Rust. Every line is tokenized, built into a flat node sequence and reduced
//! on an operand stack against a lexically scoped environment of integers,
//! booleans, sequences, linked lists and functions.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use tracing::debug;

pub use crate::{
    ast::Node,
    error::Error,
    interpreter::{builder::core::compile, evaluator::core::Interpreter},
};

/// Defines the nodes of compiled code.
///
/// This module declares the `Node` enum together with the `Operator` and
/// `Keyword` tags. The builder produces nodes, the evaluator reduces them and
/// every result is itself a node.
///
/// # Responsibilities
/// - Defines syntax nodes (parentheses, operators, keywords, bodies) and value
///   nodes (numbers, booleans, sequences, lists, symbols).
/// - Renders nodes for display and as an indented debug dump.
pub mod ast;
/// Provides unified error types for parsing and evaluation.
///
/// This module defines all errors that can be raised during lexing, building
/// or evaluating a line. It standardizes error reporting and carries detailed
/// information about failures, including source columns for build errors.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, builder, evaluator).
/// - Groups runtime errors into broad categories.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, building, evaluation and value
/// representations to provide a complete runtime for source lines.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, builder, environment, evaluator
///   and value types.
/// - Provides entry points for compiling and running lines.
pub mod interpreter;
/// General utilities for safe numeric conversion.
pub mod util;

/// Runs a script, one line at a time, in a single interpreter.
///
/// Every non-blank line is compiled and run against the same environment, so
/// definitions carry over from one line to the next. Execution stops at the
/// first failing line.
///
/// # Parameters
/// - `source`: The script text.
/// - `auto_print`: Print the result of the last line to standard output.
///
/// # Errors
/// Returns an error naming the failing line (counted from 1) if compiling or
/// evaluating any line fails.
///
/// # Examples
/// ```
/// use lispy::get_result;
///
/// let source = "(def x 5)\n(* x x)";
/// assert!(get_result(source, false).is_ok());
///
/// // 'y' is not defined.
/// let res = get_result("(+ y 1)", false);
/// assert_eq!(res.unwrap_err().to_string(), "Error on line 1: Unbound symbol 'y'.");
/// ```
pub fn get_result(source: &str, auto_print: bool) -> Result<(), Box<dyn std::error::Error>> {
    let mut interpreter = Interpreter::new();
    let mut result = None;

    for (index, line) in source.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }

        let number = index + 1;
        debug!(line = number, "evaluating");
        match interpreter.eval_line(line) {
            Ok(node) => result = Some(node),
            Err(e) => return Err(format!("Error on line {number}: {e}").into()),
        }
    }

    if auto_print && let Some(node) = result {
        println!("{node}");
    }

    Ok(())
}
