//! Infix to postfix translation
//!
//! Single left-to-right scan with one operator stack (shunting):
//!
//! - operands are written straight to the output
//! - an operator first pops every stacked operator whose precedence is greater
//!   than or equal to its own, then is pushed itself
//! - at end of input the remaining operators are popped to the output
//!
//! Popping on *equal* precedence is what makes `8-3-2` group as `(8-3)-2`.
//!
//! Every token in the output is followed by [`POSTFIX_SEPARATOR`], so
//! `"2+3*4"` becomes `"2 3 4 * + "`. Empty input yields empty output.

use super::lexer::{Lexer, Token};
use crate::constants::POSTFIX_SEPARATOR;
use crate::errors::CalcError;
use crate::memory::entry::{Entry, Operator};
use crate::memory::stack::Stack;
use crate::snapshot::{Phase, Snapshot, SnapshotManager};

/// Translate an infix expression to postfix notation
pub fn translate(infix: &str) -> Result<String, CalcError> {
    Translator::new(infix).run()
}

/// Infix to postfix translator with an optional step history
pub struct Translator<'a> {
    lexer: Lexer,
    stack: Stack<Entry>,
    output: String,
    history: Option<&'a mut SnapshotManager>,
}

impl<'a> Translator<'a> {
    pub fn new(infix: &str) -> Self {
        Translator {
            lexer: Lexer::new(infix),
            stack: Stack::new(),
            output: String::new(),
            history: None,
        }
    }

    /// Record a snapshot after every step into `history`
    pub fn with_history(mut self, history: &'a mut SnapshotManager) -> Self {
        self.history = Some(history);
        self
    }

    /// Run the translation to completion, returning the postfix string
    pub fn run(mut self) -> Result<String, CalcError> {
        if let Err(e) = self.scan() {
            let cursor = e.column().unwrap_or_else(|| self.lexer.current_column());
            self.record(cursor, format!("error: {}", e));
            return Err(e);
        }
        Ok(self.output)
    }

    fn scan(&mut self) -> Result<(), CalcError> {
        loop {
            match self.lexer.next_token()? {
                Token::Number { text, column, .. } => {
                    self.emit(&text);
                    self.record(column, format!("emit operand {}", text));
                }
                Token::Operator(op, column) => self.operator(op, column)?,
                Token::Eof(column) => return self.flush(column),
            }
        }
    }

    fn operator(&mut self, op: Operator, column: usize) -> Result<(), CalcError> {
        while let Some(top) = self.stack.peek().ok().and_then(Entry::as_operator) {
            if top.precedence() < op.precedence() {
                break;
            }
            self.stack.pop()?;
            self.emit(&top.to_string());
            self.record(
                column,
                format!(
                    "pop '{}' to output (precedence {} >= {})",
                    top,
                    top.precedence(),
                    op.precedence()
                ),
            );
        }

        self.stack.push(Entry::Operator(op))?;
        self.record(column, format!("push '{}'", op));
        Ok(())
    }

    /// Move every remaining operator to the output
    fn flush(&mut self, column: usize) -> Result<(), CalcError> {
        while !self.stack.is_empty() {
            let entry = self.stack.pop()?;
            self.emit(&entry.to_string());
            self.record(column, format!("end of input: pop '{}' to output", entry));
        }
        Ok(())
    }

    fn emit(&mut self, text: &str) {
        self.output.push_str(text);
        self.output.push(POSTFIX_SEPARATOR);
    }

    /// Once the history is full, recording stops and the scan carries on
    fn record(&mut self, cursor: usize, description: String) {
        let Some(history) = self.history.as_mut() else {
            return;
        };
        if history.is_truncated() {
            return;
        }
        history
            .push(Snapshot {
                phase: Phase::Translate,
                cursor,
                stack: self.stack.clone(),
                output: self.output.clone(),
                description,
            })
            .ok();
    }
}
