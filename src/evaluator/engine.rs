//! Postfix stack machine
//!
//! Scans a postfix string left to right with one operand stack. Numbers are
//! pushed; an operator pops `b` (the most recent operand) then `a`, and pushes
//! `a <op> b`. Exactly one value must remain at the end.

use crate::errors::CalcError;
use crate::memory::entry::{Entry, Operator};
use crate::memory::stack::Stack;
use crate::notation::lexer::{Lexer, Token};
use crate::snapshot::{Phase, Snapshot, SnapshotManager};

/// Evaluate a postfix expression such as `"2 3 4 * + "`
pub fn evaluate(postfix: &str) -> Result<f64, CalcError> {
    Evaluator::new(postfix).run()
}

/// Postfix evaluator with an optional step history
pub struct Evaluator<'a> {
    lexer: Lexer,
    stack: Stack<Entry>,
    history: Option<&'a mut SnapshotManager>,
}

impl<'a> Evaluator<'a> {
    pub fn new(postfix: &str) -> Self {
        Evaluator {
            lexer: Lexer::new(postfix),
            stack: Stack::new(),
            history: None,
        }
    }

    /// Record a snapshot after every step into `history`
    pub fn with_history(mut self, history: &'a mut SnapshotManager) -> Self {
        self.history = Some(history);
        self
    }

    /// Run the evaluation to completion, returning the single remaining value
    pub fn run(mut self) -> Result<f64, CalcError> {
        match self.scan() {
            Ok(value) => Ok(value),
            Err(e) => {
                let cursor = e.column().unwrap_or_else(|| self.lexer.current_column());
                self.record(cursor, format!("error: {}", e));
                Err(e)
            }
        }
    }

    fn scan(&mut self) -> Result<f64, CalcError> {
        loop {
            match self.next_token()? {
                Token::Number {
                    text,
                    value,
                    column,
                } => {
                    self.stack.push(Entry::Operand(value))?;
                    self.record(column, format!("push operand {}", text));
                }
                Token::Operator(op, column) => self.apply(op, column)?,
                Token::Eof(column) => return self.finish(column),
            }
        }
    }

    /// Characters outside the postfix alphabet are reported as invalid operators
    fn next_token(&mut self) -> Result<Token, CalcError> {
        self.lexer.next_token().map_err(|e| match e {
            CalcError::InvalidToken { ch, column } => CalcError::InvalidOperator { ch, column },
            other => other,
        })
    }

    fn apply(&mut self, op: Operator, column: usize) -> Result<(), CalcError> {
        let b = self.pop_operand(op, column)?;
        let a = self.pop_operand(op, column)?;
        let value = op.apply(a, b, column)?;

        self.stack.push(Entry::Operand(value))?;
        self.record(column, format!("{} {} {} = {}", a, op, b, value));
        Ok(())
    }

    fn pop_operand(&mut self, op: Operator, column: usize) -> Result<f64, CalcError> {
        self.stack
            .pop()
            .ok()
            .and_then(|entry| entry.as_operand())
            .ok_or(CalcError::InsufficientOperands {
                operator: op,
                column,
            })
    }

    fn finish(&mut self, column: usize) -> Result<f64, CalcError> {
        if self.stack.len() != 1 {
            return Err(CalcError::MalformedExpression {
                remaining: self.stack.len(),
            });
        }

        let result = self
            .stack
            .pop()?
            .as_operand()
            .ok_or(CalcError::MalformedExpression { remaining: 1 })?;
        self.record(column, format!("result {}", result));
        Ok(result)
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
                phase: Phase::Evaluate,
                cursor,
                stack: self.stack.clone(),
                output: String::new(),
                description,
            })
            .ok();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_evaluate_precedence_postfix() {
        assert_eq!(evaluate("2 3 4 * + "), Ok(14.0));
    }

    #[test]
    fn test_operand_order() {
        assert_eq!(evaluate("8 3 -"), Ok(5.0));
        assert_eq!(evaluate("1 4 /"), Ok(0.25));
    }

    #[test]
    fn test_missing_operand() {
        assert_eq!(
            evaluate("3 +"),
            Err(CalcError::InsufficientOperands {
                operator: Operator::Add,
                column: 3
            })
        );
    }

    #[test]
    fn test_stray_character_is_invalid_operator() {
        assert_eq!(
            evaluate("1 2 %"),
            Err(CalcError::InvalidOperator { ch: '%', column: 5 })
        );
    }

    #[test]
    fn test_leftover_values() {
        assert_eq!(
            evaluate("1 2"),
            Err(CalcError::MalformedExpression { remaining: 2 })
        );
        assert_eq!(
            evaluate(""),
            Err(CalcError::MalformedExpression { remaining: 0 })
        );
    }

    #[test]
    fn test_history_ends_with_result() {
        let mut history = SnapshotManager::new(1024 * 1024);
        let value = Evaluator::new("6 3 / ")
            .with_history(&mut history)
            .run()
            .unwrap();

        assert_eq!(value, 2.0);
        // push 6, push 3, apply /, result
        assert_eq!(history.len(), 4);
        assert_eq!(history.get(1).unwrap().stack.len(), 2);
        let last = history.get(3).unwrap();
        assert_eq!(last.phase, Phase::Evaluate);
        assert!(last.stack.is_empty());
        assert_eq!(last.description, "result 2");
    }
}
