//! Undo/redo command history
//!
//! - [`command`]: [`Operation`] requests and captured, invertible [`Command`]s
//! - [`CommandHistory`]: the undo and redo sequences for one structure
//!
//! # Model
//!
//! ```text
//! execute(C): apply C, push C on undo, clear redo
//! undo():     pop undo, apply inverse, push on redo
//! redo():     pop redo, apply forward, push on undo
//! ```
//!
//! Executing a new command always clears the redo sequence, so history never
//! branches. The undo sequence is bounded; the oldest entries fall off once
//! it grows past `max_depth`.

pub mod command;

pub use command::{Command, Inverse, Operation};

use crate::config::constants::DEFAULT_MAX_HISTORY;
use crate::errors::{HistoryError, Result, StructureError};
use crate::structures::{Value, Workbench};
use std::collections::VecDeque;
use tracing::{debug, trace};

/// Undo and redo sequences for one structure
#[derive(Debug, Clone)]
pub struct CommandHistory {
    undo: VecDeque<Command>,
    redo: Vec<Command>,
    max_depth: usize,
}

impl CommandHistory {
    pub fn new(max_depth: usize) -> Self {
        CommandHistory {
            undo: VecDeque::new(),
            redo: Vec::new(),
            max_depth: max_depth.max(1),
        }
    }

    /// Apply `command`, record it for undo and drop the redo sequence.
    /// A command that fails to apply is not recorded.
    pub fn execute(
        &mut self,
        command: Command,
        workbench: &mut Workbench,
    ) -> Result<Option<Value>, StructureError> {
        let removed = command.apply(workbench)?;
        debug!(command = %command, target = %command.target(), "executed");

        self.redo.clear();
        self.undo.push_back(command);
        while self.undo.len() > self.max_depth {
            if let Some(dropped) = self.undo.pop_front() {
                trace!(command = %dropped, "history full, dropping oldest");
            }
        }
        Ok(removed)
    }

    /// Revert the most recent command and move it to the redo sequence
    pub fn undo(&mut self, workbench: &mut Workbench) -> Result<&Command> {
        let command = self.undo.pop_back().ok_or(HistoryError::NothingToUndo)?;
        if let Err(e) = command.revert(workbench) {
            self.undo.push_back(command);
            return Err(e.into());
        }
        debug!(command = %command, "undone");
        self.redo.push(command);
        Ok(&self.redo[self.redo.len() - 1])
    }

    /// Re-apply the most recently undone command
    pub fn redo(&mut self, workbench: &mut Workbench) -> Result<&Command> {
        let command = self.redo.pop().ok_or(HistoryError::NothingToRedo)?;
        if let Err(e) = command.apply(workbench) {
            self.redo.push(command);
            return Err(e.into());
        }
        debug!(command = %command, "redone");
        self.undo.push_back(command);
        Ok(&self.undo[self.undo.len() - 1])
    }

    pub fn can_undo(&self) -> bool {
        !self.undo.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    pub fn max_depth(&self) -> usize {
        self.max_depth
    }

    /// Description of the last applied command
    pub fn current(&self) -> String {
        self.undo
            .back()
            .map(Command::description)
            .unwrap_or_else(|| String::from("No operations"))
    }

    /// Applied commands, oldest first
    pub fn undo_entries(&self) -> impl DoubleEndedIterator<Item = &Command> {
        self.undo.iter()
    }

    /// Undone commands, the next one to redo last
    pub fn redo_entries(&self) -> impl DoubleEndedIterator<Item = &Command> {
        self.redo.iter()
    }

    pub fn clear(&mut self) {
        self.undo.clear();
        self.redo.clear();
    }
}

impl Default for CommandHistory {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}
