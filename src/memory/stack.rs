//! LIFO stack shared by the translator and the evaluator
//!
//! [`Stack`] owns its entries in a `Vec`, with the top of the stack at the end.
//! Entries are created only by [`Stack::push`] and removed only by
//! [`Stack::pop`]; dropping a stack releases whatever it still holds, so every
//! exit path (including errors) cleans up.
//!
//! # Failure Modes
//!
//! - `pop`/`peek` on an empty stack return [`CalcError::EmptyStack`]
//! - `push` returns [`CalcError::Allocation`] if the backing buffer cannot grow

use crate::errors::CalcError;
use std::fmt;

/// A last-in-first-out stack
#[derive(Debug, Clone, PartialEq)]
pub struct Stack<T> {
    entries: Vec<T>,
}

impl<T> Stack<T> {
    pub fn new() -> Self {
        Stack {
            entries: Vec::new(),
        }
    }

    /// Push an entry onto the top of the stack
    pub fn push(&mut self, entry: T) -> Result<(), CalcError> {
        self.entries
            .try_reserve(1)
            .map_err(|e| CalcError::Allocation {
                message: e.to_string(),
            })?;
        self.entries.push(entry);
        Ok(())
    }

    /// Remove and return the top entry
    pub fn pop(&mut self) -> Result<T, CalcError> {
        self.entries.pop().ok_or(CalcError::EmptyStack)
    }

    /// Look at the top entry without removing it
    pub fn peek(&self) -> Result<&T, CalcError> {
        self.entries.last().ok_or(CalcError::EmptyStack)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate from the top of the stack to the bottom
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter().rev()
    }

    /// Drop every entry
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

impl<T> Default for Stack<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// Renders top to bottom, e.g. `3.000000 -> 2.000000 -> NULL`
impl<T: fmt::Display> fmt::Display for Stack<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return write!(f, "Stack is empty.");
        }
        for entry in self.iter() {
            write!(f, "{} -> ", entry)?;
        }
        write!(f, "NULL")
    }
}
