//! Linear, branch-truncating undo/redo history over graph snapshots.

use crate::graph::WorkflowGraph;

/// Classifies a record request. User-initiated edits become undoable
/// snapshots; derived updates (applying history, cosmetic rewrites)
/// never do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordKind {
    UserEdit,
    Derived,
}

/// Owns the ordered snapshot sequence and the cursor into it.
///
/// Snapshots handed back by `undo`/`redo` are independent clones, so
/// later mutation of the live graph never rewrites stored history. The
/// history is deliberately linear: recording after an undo permanently
/// discards the forward tail.
#[derive(Debug, Default)]
pub struct History {
    snapshots: Vec<WorkflowGraph>,
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    /// Records a snapshot of the graph.
    ///
    /// `Derived` records are ignored. An empty graph is not recorded
    /// while the history is still empty, so the initial blank state
    /// never becomes an entry. Recording truncates any redo tail before
    /// appending.
    pub fn record(&mut self, graph: &WorkflowGraph, kind: RecordKind) {
        if kind == RecordKind::Derived {
            return;
        }
        if graph.is_empty() && self.snapshots.is_empty() {
            return;
        }
        match self.cursor {
            Some(index) => self.snapshots.truncate(index + 1),
            None => self.snapshots.clear(),
        }
        self.snapshots.push(graph.clone());
        self.cursor = Some(self.snapshots.len() - 1);
    }

    pub fn can_undo(&self) -> bool {
        matches!(self.cursor, Some(index) if index > 0)
    }

    pub fn can_redo(&self) -> bool {
        matches!(self.cursor, Some(index) if index + 1 < self.snapshots.len())
    }

    /// Steps the cursor back and returns a clone of that snapshot for
    /// the caller to install as the live graph. No-op at the oldest
    /// entry (the current state would have nothing to go back to).
    pub fn undo(&mut self) -> Option<WorkflowGraph> {
        match self.cursor {
            Some(index) if index > 0 => {
                self.cursor = Some(index - 1);
                Some(self.snapshots[index - 1].clone())
            }
            _ => None,
        }
    }

    /// Steps the cursor forward and returns a clone of that snapshot.
    /// No-op at the newest entry.
    pub fn redo(&mut self) -> Option<WorkflowGraph> {
        match self.cursor {
            Some(index) if index + 1 < self.snapshots.len() => {
                self.cursor = Some(index + 1);
                Some(self.snapshots[index + 1].clone())
            }
            _ => None,
        }
    }

    /// Number of stored snapshots.
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Current cursor position; `None` before the first record.
    pub fn position(&self) -> Option<usize> {
        self.cursor
    }
}
