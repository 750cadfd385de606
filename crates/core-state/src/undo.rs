//! Snapshot-based undo/redo history.
//!
//! Each entry is a full, independent copy of the buffer plus the cursor that
//! produced it. The history is seeded with the load-time state, so at least
//! one entry always exists and the index is always valid.
//!
//! Branching behavior is a single policy point. The historical engine did
//! not truncate the redo tail when pushing after an undo; it inserted the
//! new entry right after the index and shifted the tail outward, so states
//! from before the branch stay reachable by redo. That quirk is preserved
//! as [`BranchPolicy::InsertShift`] (the default), with the conventional
//! truncate-on-branch rule available as [`BranchPolicy::Truncate`]. Nothing
//! outside `push` depends on the choice.

use core_text::{Buffer, Position};
use tracing::trace;

/// A stored (buffer, cursor) snapshot.
#[derive(Debug, Clone)]
pub struct UndoEntry {
    pub buffer: Buffer,
    pub cursor: Position,
}

impl UndoEntry {
    pub fn new(buffer: Buffer, cursor: Position) -> Self {
        Self { buffer, cursor }
    }
}

/// How `push` treats history entries beyond the current index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BranchPolicy {
    /// Insert after the index, shifting the tail outward (historical
    /// behavior; redo can still reach pre-branch states).
    #[default]
    InsertShift,
    /// Drop everything beyond the index before pushing (conventional).
    Truncate,
}

/// Ordered snapshot history plus a position within it.
#[derive(Debug, Clone)]
pub struct UndoHistory {
    entries: Vec<UndoEntry>,
    index: usize,
    policy: BranchPolicy,
}

impl UndoHistory {
    /// Build a history seeded with the initial (load-time) snapshot.
    pub fn new(initial: UndoEntry, policy: BranchPolicy) -> Self {
        Self {
            entries: vec![initial],
            index: 0,
            policy,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Record a new snapshot immediately after the current index and move
    /// the index onto it.
    pub fn push(&mut self, entry: UndoEntry) {
        match self.policy {
            BranchPolicy::InsertShift => {
                self.index += 1;
                self.entries.insert(self.index, entry);
            }
            BranchPolicy::Truncate => {
                self.entries.truncate(self.index + 1);
                self.entries.push(entry);
                self.index = self.entries.len() - 1;
            }
        }
        trace!(
            target: "state.undo",
            index = self.index,
            len = self.entries.len(),
            policy = ?self.policy,
            "push_snapshot"
        );
    }

    /// Step back one entry, returning the snapshot to restore. No-op at the
    /// start of history.
    pub fn undo(&mut self) -> Option<&UndoEntry> {
        if self.index == 0 {
            return None;
        }
        self.index -= 1;
        trace!(target: "state.undo", index = self.index, "undo");
        Some(&self.entries[self.index])
    }

    /// Step forward one entry, returning the snapshot to restore. No-op at
    /// the end of history.
    pub fn redo(&mut self) -> Option<&UndoEntry> {
        if self.index + 1 >= self.entries.len() {
            return None;
        }
        self.index += 1;
        trace!(target: "state.undo", index = self.index, "redo");
        Some(&self.entries[self.index])
    }
}
