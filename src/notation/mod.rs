//! Expression notation handling
//!
//! This module turns infix text into postfix text:
//! - [`lexer`]: Tokenization (expression text → tokens)
//! - [`translator`]: Shunting translation (infix tokens → postfix string)
//!
//! # Supported Input
//!
//! - Non-negative integer literals of any length (`12`, `007`)
//! - Binary operators `+`, `-`, `*`, `/`
//! - Whitespace anywhere, ignored
//!
//! No parentheses, unary operators, or decimal points.

pub mod lexer;
pub mod translator;

pub use translator::{translate, Translator};
