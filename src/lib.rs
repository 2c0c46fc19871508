//! # arsharp
//!
//! arsharp is an interpreter for ArSharp, a toy scripting language with
//! C++-flavored syntax. Programs are processed one line at a time: each line
//! is classified by the substring it contains (`var{`, `const{`, `g[`,
//! `cout::`) and dispatched to a declaration handler or the print statement.
//! Expressions are reduced by a recursive, first-match evaluator over three
//! named storage classes: variables, constants, and grand values.
//!
//! The language deliberately has no error taxonomy. Every malformed input
//! degrades into a value (a number, infinity, NaN, or the original text
//! returned verbatim); evaluation is total and never fails the run.

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

use std::io;

/// Runs ArSharp programs.
///
/// This module ties together the statement scanner, the expression evaluator,
/// the runtime value type, and the storage context to provide a complete
/// runtime for ArSharp source code. It exposes the public API for executing
/// programs and evaluating individual expressions.
///
/// # Responsibilities
/// - Coordinates the core components: scanner, evaluator, values, context.
/// - Provides entry points for executing programs and evaluating expressions.
/// - Owns the three storage namespaces for the duration of a run.
pub mod interpreter;
/// General text utilities shared by the scanner and the evaluator.
///
/// This module provides the fixed-offset slicing helper used everywhere the
/// language extracts a name or a print payload from a line. ArSharp statement
/// forms are recognized by position, not by parsing, so this helper is the
/// closest thing the language has to a grammar.
///
/// # Responsibilities
/// - Slice fixed numbers of characters off both ends of a string without
///   panicking on short or multi-byte input.
pub mod util;

pub use interpreter::scanner::Interpreter;

/// Executes a program and returns everything it printed.
///
/// This is the capture-style entry point: the program runs to completion and
/// its `cout::` output is collected into a `String` instead of going to
/// stdout. Language-level problems never produce an error here; the only
/// failure mode is the output sink itself.
///
/// # Errors
/// Returns an error only if writing to the capture buffer fails.
///
/// # Examples
/// ```
/// use arsharp::get_output;
///
/// let source = "var{x}=2+3\ncout::6*7 ::endl";
/// let output = get_output(source).unwrap();
/// assert_eq!(output, "42\n");
///
/// // Unrecognized text prints back verbatim rather than failing.
/// let output = get_output("cout::hello ::endl").unwrap();
/// assert_eq!(output, "hello\n");
/// ```
pub fn get_output(source: &str) -> io::Result<String> {
    let mut interpreter = Interpreter::new(source);
    let mut output = Vec::new();
    interpreter.execute_to(&mut output)?;

    Ok(String::from_utf8_lossy(&output).into_owned())
}
