//! Stack entry representation
//!
//! This module defines the [`Entry`] enum, the single element type shared by the
//! translator's operator stack and the evaluator's operand stack, along with the
//! [`Operator`] it may carry.
//!
//! # Entry Types
//!
//! - [`Entry::Operator`]: one of `+`, `-`, `*`, `/`
//! - [`Entry::Operand`]: a numeric value
//!
//! An entry is always exactly one of the two; there is no sentinel operator
//! standing in for "this is a number".

use crate::constants::RESULT_PRECISION;
use crate::errors::CalcError;
use std::fmt;

/// The four binary arithmetic operators
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operator {
    Add,
    Sub,
    Mul,
    Div,
}

impl Operator {
    /// Map an input character to its operator, if it is one
    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '+' => Some(Operator::Add),
            '-' => Some(Operator::Sub),
            '*' => Some(Operator::Mul),
            '/' => Some(Operator::Div),
            _ => None,
        }
    }

    pub fn symbol(self) -> char {
        match self {
            Operator::Add => '+',
            Operator::Sub => '-',
            Operator::Mul => '*',
            Operator::Div => '/',
        }
    }

    /// Binding strength: `*` and `/` bind tighter than `+` and `-`
    pub fn precedence(self) -> u8 {
        match self {
            Operator::Add | Operator::Sub => 1,
            Operator::Mul | Operator::Div => 2,
        }
    }

    /// Compute `a <op> b`.
    ///
    /// `column` is only used to locate a division by zero in the error.
    pub fn apply(self, a: f64, b: f64, column: usize) -> Result<f64, CalcError> {
        match self {
            Operator::Add => Ok(a + b),
            Operator::Sub => Ok(a - b),
            Operator::Mul => Ok(a * b),
            Operator::Div => {
                if b == 0.0 {
                    Err(CalcError::DivisionByZero { column })
                } else {
                    Ok(a / b)
                }
            }
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

/// A value held on a [`Stack`](super::stack::Stack)
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Entry {
    Operator(Operator),
    Operand(f64),
}

impl Entry {
    /// Get the operator, returns None if this is an Operand
    pub fn as_operator(&self) -> Option<Operator> {
        match self {
            Entry::Operator(op) => Some(*op),
            Entry::Operand(_) => None,
        }
    }

    /// Get the numeric value, returns None if this is an Operator
    pub fn as_operand(&self) -> Option<f64> {
        match self {
            Entry::Operand(value) => Some(*value),
            Entry::Operator(_) => None,
        }
    }
}

impl fmt::Display for Entry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entry::Operator(op) => write!(f, "{}", op),
            Entry::Operand(value) => write!(f, "{:.*}", RESULT_PRECISION, value),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_precedence_levels() {
        assert!(Operator::Mul.precedence() > Operator::Add.precedence());
        assert_eq!(Operator::Mul.precedence(), Operator::Div.precedence());
        assert_eq!(Operator::Add.precedence(), Operator::Sub.precedence());
    }

    #[test]
    fn test_from_char_rejects_non_operators() {
        assert_eq!(Operator::from_char('/'), Some(Operator::Div));
        assert_eq!(Operator::from_char('%'), None);
        assert_eq!(Operator::from_char('\0'), None);
    }

    #[test]
    fn test_apply_subtraction_order() {
        assert_eq!(Operator::Sub.apply(8.0, 3.0, 1), Ok(5.0));
        assert_eq!(Operator::Div.apply(6.0, 3.0, 1), Ok(2.0));
    }

    #[test]
    fn test_divide_by_zero_is_error() {
        assert_eq!(
            Operator::Div.apply(5.0, 0.0, 4),
            Err(CalcError::DivisionByZero { column: 4 })
        );
    }

    #[test]
    fn test_entry_display() {
        assert_eq!(Entry::Operator(Operator::Add).to_string(), "+");
        assert_eq!(Entry::Operand(2.5).to_string(), "2.500000");
    }
}
