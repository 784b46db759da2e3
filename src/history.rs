//! Linear, invertible action log backing undo/redo.
//!
//! DESIGN
//! ======
//! `History` is a list of [`Action`]s plus a cursor counting how many of
//! them are currently applied. Entries before the cursor are the applied
//! past; entries at or after it are redoable. Recording a new action while
//! the cursor is behind the end discards the redoable tail first, so a new
//! edit after an undo makes the undone branch unreachable.
//!
//! Applying actions to shapes lives in [`crate::scene::Scene`]; this module
//! only moves the cursor and hands back the entry to apply.

#[cfg(test)]
#[path = "history_test.rs"]
mod history_test;

use serde::{Deserialize, Serialize};

use crate::shape::Shape;

/// A recorded mutation of the shape set.
///
/// Each action owns copies of the shapes it touched, captured at the moment
/// of mutation, so it can be reversed without consulting the live scene.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Action {
    /// One shape was inserted.
    AddShape { shape: Shape },
    /// A batch of shapes was removed in one step.
    RemoveShapes { shapes: Vec<Shape> },
}

impl Action {
    /// Short name used in logs.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::AddShape { .. } => "add_shape",
            Self::RemoveShapes { .. } => "remove_shapes",
        }
    }
}

/// Undo/redo log. Invariant: `cursor <= entries.len()`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct History {
    entries: Vec<Action>,
    cursor: usize,
}

impl History {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop any redoable tail, append `action`, and mark it applied.
    pub fn record(&mut self, action: Action) {
        self.entries.truncate(self.cursor);
        self.entries.push(action);
        self.cursor += 1;
    }

    /// Step the cursor back and return the action to invert, or `None` at
    /// the start of the log.
    pub fn step_back(&mut self) -> Option<&Action> {
        if self.cursor == 0 {
            return None;
        }
        self.cursor -= 1;
        self.entries.get(self.cursor)
    }

    /// Return the action to re-apply and step the cursor forward, or `None`
    /// at the end of the log.
    pub fn step_forward(&mut self) -> Option<&Action> {
        let action = self.entries.get(self.cursor)?;
        self.cursor += 1;
        Some(action)
    }

    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.entries.len()
    }

    /// Number of actions currently applied.
    #[must_use]
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// All recorded actions, applied and redoable.
    #[must_use]
    pub fn entries(&self) -> &[Action] {
        &self.entries
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Forget every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
        self.cursor = 0;
    }
}
