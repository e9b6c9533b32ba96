//! # Introduction
//!
//! rpncalc converts an infix arithmetic expression over non-negative integers
//! and `+ - * /` into postfix (Reverse Polish) notation, then evaluates the
//! postfix form on a stack machine. Every step of both algorithms can be
//! recorded and replayed in a terminal UI built with
//! [ratatui](https://docs.rs/ratatui).
//!
//! ## Pipeline
//!
//! ```text
//! Infix → Lexer → Translator → Postfix → Evaluator → Result
//!                      ↘            ↘
//!                       Snapshots → TUI
//! ```
//!
//! 1. [`notation`] — tokenises the infix text and reorders operators by
//!    precedence using an operator stack.
//! 2. [`evaluator`] — runs the postfix text on an operand stack.
//! 3. [`memory`] — the shared [`memory::stack::Stack`] and its tagged
//!    [`memory::entry::Entry`] element.
//! 4. [`snapshot`] / [`session`] — bounded step history and navigation.
//! 5. [`ui`] — ratatui-based step-through viewer; not part of the stable
//!    library API.
//!
//! ## Example
//!
//! ```
//! assert_eq!(rpncalc::notation::translate("2+3*4").unwrap(), "2 3 4 * + ");
//! assert_eq!(rpncalc::calculate("2+3*4").unwrap(), 14.0);
//! ```

pub mod constants;
pub mod errors;
pub mod evaluator;
pub mod memory;
pub mod notation;
pub mod session;
pub mod snapshot;
pub mod ui;

use errors::CalcError;

/// Translate `infix` to postfix and evaluate it
pub fn calculate(infix: &str) -> Result<f64, CalcError> {
    let postfix = notation::translate(infix)?;
    evaluator::evaluate(&postfix)
}

/// Format a result the way the command line prints it (six decimal places)
pub fn format_result(value: f64) -> String {
    format!("{:.*}", constants::RESULT_PRECISION, value)
}
