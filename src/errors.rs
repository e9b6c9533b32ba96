//! Error types for translation and evaluation
//!
//! This module defines [`CalcError`], which covers every way a calculation can
//! fail, from an unexpected character in the infix input to an exhausted step
//! history in the visualizer.
//!
//! All errors are terminal for the current calculation: there is no retry and
//! no partial result. Callers report them and stop.

use crate::memory::entry::Operator;
use std::fmt;

/// Errors that can occur while translating or evaluating an expression
#[derive(Debug, Clone, PartialEq)]
pub enum CalcError {
    /// Infix input contains a character that is neither digit, operator, nor whitespace
    InvalidToken { ch: char, column: usize },

    /// Postfix input contains a character that is neither digit, operator, nor whitespace
    InvalidOperator { ch: char, column: usize },

    /// Pop or peek on an empty stack
    EmptyStack,

    /// An operator found fewer than two operands on the stack
    InsufficientOperands { operator: Operator, column: usize },

    /// Divisor evaluated to zero
    DivisionByZero { column: usize },

    /// Evaluation finished with a stack size other than one
    MalformedExpression { remaining: usize },

    /// Growing a stack failed
    Allocation { message: String },

    /// Step history limit exceeded
    SnapshotLimitExceeded { current: usize, limit: usize },

    /// History navigation went past either end
    HistoryOperationFailed { message: String },
}

impl CalcError {
    /// Column (1-based) in the scanned input where the error was detected
    pub fn column(&self) -> Option<usize> {
        match self {
            CalcError::InvalidToken { column, .. } => Some(*column),
            CalcError::InvalidOperator { column, .. } => Some(*column),
            CalcError::InsufficientOperands { column, .. } => Some(*column),
            CalcError::DivisionByZero { column } => Some(*column),
            CalcError::EmptyStack => None,
            CalcError::MalformedExpression { .. } => None,
            CalcError::Allocation { .. } => None,
            CalcError::SnapshotLimitExceeded { .. } => None,
            CalcError::HistoryOperationFailed { .. } => None,
        }
    }
}

impl fmt::Display for CalcError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CalcError::InvalidToken { ch, column } => {
                write!(
                    f,
                    "'{}' at column {} is neither an operator nor an operand",
                    ch.escape_debug(),
                    column
                )
            }
            CalcError::InvalidOperator { ch, column } => {
                write!(
                    f,
                    "Invalid operator '{}' at column {}",
                    ch.escape_debug(),
                    column
                )
            }
            CalcError::EmptyStack => write!(f, "Stack is empty"),
            CalcError::InsufficientOperands { operator, column } => {
                write!(
                    f,
                    "Operator '{}' at column {} needs two operands",
                    operator, column
                )
            }
            CalcError::DivisionByZero { column } => {
                write!(f, "Division by zero at column {}", column)
            }
            CalcError::MalformedExpression { remaining } => {
                write!(
                    f,
                    "Malformed expression: {} value{} left on the stack, expected 1",
                    remaining,
                    if *remaining == 1 { "" } else { "s" }
                )
            }
            CalcError::Allocation { message } => {
                write!(f, "Memory allocation failed: {}", message)
            }
            CalcError::SnapshotLimitExceeded { current, limit } => {
                write!(
                    f,
                    "Snapshot memory limit exceeded: {} bytes used, limit is {}",
                    current, limit
                )
            }
            CalcError::HistoryOperationFailed { message } => {
                write!(f, "History operation failed: {}", message)
            }
        }
    }
}

impl std::error::Error for CalcError {}
