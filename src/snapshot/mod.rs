// Snapshot management for stepping through a calculation

use crate::errors::CalcError;
use crate::memory::{entry::Entry, stack::Stack};
use std::fmt;

/// Which algorithm produced a snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Translate,
    Evaluate,
}

impl fmt::Display for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::Translate => write!(f, "translate"),
            Phase::Evaluate => write!(f, "evaluate"),
        }
    }
}

/// State of one phase right after a single step
#[derive(Debug, Clone, PartialEq)]
pub struct Snapshot {
    pub phase: Phase,
    pub cursor: usize, // 1-based column of the token just handled in this phase's input
    pub stack: Stack<Entry>,
    pub output: String, // Postfix text emitted so far (translate phase only)
    pub description: String,
}

impl Snapshot {
    /// Estimate the memory usage of this snapshot in bytes
    pub fn estimated_size(&self) -> usize {
        std::mem::size_of::<Snapshot>()
            + self.stack.len() * std::mem::size_of::<Entry>()
            + self.output.len()
            + self.description.len()
    }
}

/// Bounded step history
///
/// The first snapshot that does not fit marks the history as truncated, and
/// every later push is refused so the recorded steps stay contiguous.
#[derive(Debug)]
pub struct SnapshotManager {
    snapshots: Vec<Snapshot>,
    max_memory: usize,
    current_memory: usize,
    truncated: bool,
}

impl SnapshotManager {
    pub fn new(max_memory: usize) -> Self {
        SnapshotManager {
            snapshots: Vec::new(),
            max_memory,
            current_memory: 0,
            truncated: false,
        }
    }

    /// Add a snapshot to history
    pub fn push(&mut self, snapshot: Snapshot) -> Result<(), CalcError> {
        let snapshot_size = snapshot.estimated_size();

        if self.truncated || self.current_memory + snapshot_size > self.max_memory {
            self.truncated = true;
            return Err(CalcError::SnapshotLimitExceeded {
                current: self.current_memory + snapshot_size,
                limit: self.max_memory,
            });
        }

        self.current_memory += snapshot_size;
        self.snapshots.push(snapshot);
        Ok(())
    }

    /// Get a snapshot by index
    pub fn get(&self, index: usize) -> Option<&Snapshot> {
        self.snapshots.get(index)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// All snapshots in recording order
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Whether a snapshot has been refused for lack of budget
    pub fn is_truncated(&self) -> bool {
        self.truncated
    }

    pub fn memory_usage(&self) -> usize {
        self.current_memory
    }

    pub fn memory_limit(&self) -> usize {
        self.max_memory
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample(description: &str) -> Snapshot {
        Snapshot {
            phase: Phase::Translate,
            cursor: 1,
            stack: Stack::new(),
            output: String::from("1 "),
            description: description.to_string(),
        }
    }

    #[test]
    fn test_push_tracks_memory() {
        let mut manager = SnapshotManager::new(1024 * 1024);
        let snap = sample("emit operand 1");
        let size = snap.estimated_size();

        manager.push(snap).unwrap();
        assert_eq!(manager.len(), 1);
        assert_eq!(manager.memory_usage(), size);
        assert_eq!(manager.get(0).unwrap().description, "emit operand 1");
        assert!(manager.get(1).is_none());
    }

    #[test]
    fn test_limit_exceeded() {
        let snap = sample("emit operand 1");
        let limit = snap.estimated_size() + 1;
        let mut manager = SnapshotManager::new(limit);

        manager.push(snap.clone()).unwrap();
        let err = manager.push(snap).unwrap_err();
        assert!(matches!(err, CalcError::SnapshotLimitExceeded { limit: l, .. } if l == limit));
        assert_eq!(manager.len(), 1);
        assert!(manager.is_truncated());
    }

    #[test]
    fn test_truncated_history_refuses_small_snapshots() {
        let big = Snapshot {
            description: "x".repeat(64),
            ..sample("")
        };
        let small = sample("");
        let limit = small.estimated_size() + big.estimated_size() - 1;
        let mut manager = SnapshotManager::new(limit);

        manager.push(small.clone()).unwrap();
        assert!(manager.push(big).is_err());
        // Fits on its own, but would leave a gap in the recorded steps
        assert!(manager.push(small).is_err());
        assert_eq!(manager.len(), 1);
    }
}
