//! Linear undo/redo history of record book snapshots
//!
//! Snapshots are indexed `0..=N`; `current` always points at the snapshot the live
//! book matches. Committing after an undo discards every snapshot after `current`.

use crate::model::error::{ModelError, ModelResult};
use crate::model::record_book::RecordBook;
use std::collections::VecDeque;

#[derive(Debug, Clone)]
pub struct SnapshotHistory {
    snapshots: VecDeque<RecordBook>,
    current: usize,
    /// Maximum number of undo steps kept; `None` keeps everything
    limit: Option<usize>,
}

impl SnapshotHistory {
    pub fn new(initial: RecordBook, limit: Option<usize>) -> Self {
        Self {
            snapshots: VecDeque::from([initial]),
            current: 0,
            limit,
        }
    }

    /// Record `state` as the newest snapshot, discarding the redo branch
    pub fn commit(&mut self, state: RecordBook) {
        self.snapshots.truncate(self.current + 1);
        self.snapshots.push_back(state);
        self.current += 1;

        if let Some(limit) = self.limit {
            while self.snapshots.len() > limit.saturating_add(1) {
                self.snapshots.pop_front();
                self.current -= 1;
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        self.current > 0
    }

    pub fn can_redo(&self) -> bool {
        self.current + 1 < self.snapshots.len()
    }

    /// Step back one snapshot and return it
    pub fn undo(&mut self) -> ModelResult<&RecordBook> {
        if !self.can_undo() {
            return Err(ModelError::NoPreviousState);
        }
        self.current -= 1;
        Ok(&self.snapshots[self.current])
    }

    /// Step forward one snapshot and return it
    pub fn redo(&mut self) -> ModelResult<&RecordBook> {
        if !self.can_redo() {
            return Err(ModelError::NoUndoneState);
        }
        self.current += 1;
        Ok(&self.snapshots[self.current])
    }

    pub fn current_index(&self) -> usize {
        self.current
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}
