//! Recorded calculation with step navigation
//!
//! A [`Session`] runs both phases over one expression while recording a
//! [`Snapshot`] after every step, then lets a caller move back and forth
//! through that history. A failed run keeps the steps recorded up to and
//! including the failure. When the history budget runs out, the remaining
//! steps go unrecorded but the outcome is still computed.

use crate::errors::CalcError;
use crate::evaluator::Evaluator;
use crate::notation::Translator;
use crate::snapshot::{Snapshot, SnapshotManager};

/// One expression, its outcome, and the steps that produced it
#[derive(Debug)]
pub struct Session {
    input: String,
    postfix: Option<String>,
    outcome: Option<Result<f64, CalcError>>,
    history: SnapshotManager,
    position: usize,
}

impl Session {
    pub fn new(input: &str, snapshot_limit: usize) -> Self {
        Session {
            input: input.to_string(),
            postfix: None,
            outcome: None,
            history: SnapshotManager::new(snapshot_limit),
            position: 0,
        }
    }

    /// Translate and evaluate, recording every step.
    ///
    /// Running again discards the previous history and starts over.
    pub fn run(&mut self) -> Result<f64, CalcError> {
        self.history = SnapshotManager::new(self.history.memory_limit());
        self.postfix = None;
        self.position = 0;

        let outcome = self.execute();
        self.outcome = Some(outcome.clone());
        outcome
    }

    fn execute(&mut self) -> Result<f64, CalcError> {
        let postfix = Translator::new(&self.input)
            .with_history(&mut self.history)
            .run()?;
        let result = Evaluator::new(&postfix)
            .with_history(&mut self.history)
            .run();
        self.postfix = Some(postfix);
        result
    }

    /// Move to the next recorded step
    pub fn step_forward(&mut self) -> Result<(), CalcError> {
        if self.position + 1 >= self.history.len() {
            return Err(CalcError::HistoryOperationFailed {
                message: "Already at the last step".to_string(),
            });
        }
        self.position += 1;
        Ok(())
    }

    /// Move to the previous recorded step
    pub fn step_backward(&mut self) -> Result<(), CalcError> {
        if self.position == 0 {
            return Err(CalcError::HistoryOperationFailed {
                message: "Already at the first step".to_string(),
            });
        }
        self.position -= 1;
        Ok(())
    }

    pub fn rewind_to_start(&mut self) -> Result<(), CalcError> {
        if self.history.is_empty() {
            return Err(CalcError::HistoryOperationFailed {
                message: "No steps recorded".to_string(),
            });
        }
        self.position = 0;
        Ok(())
    }

    pub fn jump_to_end(&mut self) -> Result<(), CalcError> {
        if self.history.is_empty() {
            return Err(CalcError::HistoryOperationFailed {
                message: "No steps recorded".to_string(),
            });
        }
        self.position = self.history.len() - 1;
        Ok(())
    }

    pub fn history_position(&self) -> usize {
        self.position
    }

    pub fn total_snapshots(&self) -> usize {
        self.history.len()
    }

    /// Whether some steps of the last run were not recorded
    pub fn history_truncated(&self) -> bool {
        self.history.is_truncated()
    }

    /// Snapshot at the current history position
    pub fn current_snapshot(&self) -> Option<&Snapshot> {
        self.history.get(self.position)
    }

    pub fn snapshots(&self) -> &[Snapshot] {
        self.history.snapshots()
    }

    pub fn input(&self) -> &str {
        &self.input
    }

    /// Postfix form, once translation has succeeded
    pub fn postfix(&self) -> Option<&str> {
        self.postfix.as_deref()
    }

    /// Final result or error, once [`Session::run`] has been called
    pub fn outcome(&self) -> Option<&Result<f64, CalcError>> {
        self.outcome.as_ref()
    }
}
