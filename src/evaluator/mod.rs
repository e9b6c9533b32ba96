//! Postfix evaluation
//!
//! - [`engine`]: the [`Evaluator`] stack machine and the [`evaluate`] shortcut
//!
//! # Numeric Model
//!
//! Operands are parsed as unsigned integers and computed in `f64`. Division
//! by zero is rejected with [`CalcError::DivisionByZero`](crate::errors::CalcError)
//! instead of producing an infinity or NaN.

pub mod engine;

pub use engine::{evaluate, Evaluator};
