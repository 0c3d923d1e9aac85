//! Request/response façade over the workbench, its histories and playback
//!
//! The shell talks to the core only through [`Session`]: `execute`, `undo`,
//! `redo` and `query`. Each accepted request commits its structural change
//! first and then replaces whatever animation was playing with a new one, so
//! at most one animation is ever in flight.

use crate::animation::{Animation, Playback, Script};
use crate::config::constants::DEFAULT_MAX_HISTORY;
use crate::config::Config;
use crate::errors::Result;
use crate::history::{Command, CommandHistory, Operation};
use crate::structures::{Answer, Query, StructureKind, Value, Workbench};
use rustc_hash::FxHashMap;
use tracing::{debug, warn};

/// One workbench, one history per structure and the current playback
#[derive(Debug)]
pub struct Session {
    workbench: Workbench,
    histories: FxHashMap<StructureKind, CommandHistory>,
    playback: Option<Playback>,
    max_history: usize,
}

impl Session {
    pub fn new(max_history: usize) -> Self {
        Self::with_workbench(Workbench::new(), max_history)
    }

    /// Start from existing contents; they are not undoable
    pub fn with_workbench(workbench: Workbench, max_history: usize) -> Self {
        let histories = StructureKind::ALL
            .iter()
            .map(|&kind| (kind, CommandHistory::new(max_history)))
            .collect();
        Session {
            workbench,
            histories,
            playback: None,
            max_history,
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::with_workbench(config.seeded_workbench(), config.max_history)
    }

    pub fn workbench(&self) -> &Workbench {
        &self.workbench
    }

    pub fn history(&self, kind: StructureKind) -> Option<&CommandHistory> {
        self.histories.get(&kind)
    }

    pub fn playback(&self) -> Option<&Playback> {
        self.playback.as_ref()
    }

    pub fn playback_mut(&mut self) -> Option<&mut Playback> {
        self.playback.as_mut()
    }

    /// Validate, apply and record `operation`. Returns the value it removed,
    /// if any.
    pub fn execute(&mut self, operation: Operation) -> Result<Option<Value>> {
        self.cancel_playback();
        let kind = operation.target();
        let command = Command::capture(operation, &self.workbench).inspect_err(|e| {
            warn!(structure = %kind, error = %e, "operation rejected");
        })?;

        let history = history_for(&mut self.histories, kind, self.max_history);
        let removed = history.execute(command.clone(), &mut self.workbench)?;
        self.play(command.description(), Script::Forward(command));
        Ok(removed)
    }

    /// Revert the last command applied to `kind`
    pub fn undo(&mut self, kind: StructureKind) -> Result<Command> {
        self.cancel_playback();
        let history = history_for(&mut self.histories, kind, self.max_history);
        let command = history
            .undo(&mut self.workbench)
            .inspect_err(|e| warn!(structure = %kind, error = %e, "undo rejected"))?
            .clone();
        self.play(format!("Undo: {}", command.description()), Script::Backward(command.clone()));
        Ok(command)
    }

    /// Re-apply the last command undone on `kind`
    pub fn redo(&mut self, kind: StructureKind) -> Result<Command> {
        self.cancel_playback();
        let history = history_for(&mut self.histories, kind, self.max_history);
        let command = history
            .redo(&mut self.workbench)
            .inspect_err(|e| warn!(structure = %kind, error = %e, "redo rejected"))?
            .clone();
        self.play(format!("Redo: {}", command.description()), Script::Forward(command.clone()));
        Ok(command)
    }

    /// Answer a read-only request and animate how the answer was found
    pub fn query(&mut self, query: Query) -> Result<Answer> {
        self.cancel_playback();
        let answer = self.workbench.query(&query).inspect_err(|e| {
            warn!(structure = %query.target(), error = %e, "query rejected");
        })?;
        debug!(query = %query, answer = %answer, "answered");
        self.play(query.to_string(), Script::Query(query));
        Ok(answer)
    }

    /// Stop the animation in flight. Structure state is untouched.
    /// Returns true if something was actually playing.
    pub fn cancel_playback(&mut self) -> bool {
        match self.playback.as_mut() {
            Some(playback) if playback.is_active() => {
                debug!(animation = playback.animation().title(), "playback cancelled");
                playback.cancel();
                true
            }
            _ => false,
        }
    }

    fn play(&mut self, title: String, script: Script) {
        let animation = Animation::new(title, script, &self.workbench);
        self.playback = Some(Playback::new(animation));
    }
}

fn history_for(
    histories: &mut FxHashMap<StructureKind, CommandHistory>,
    kind: StructureKind,
    max_history: usize,
) -> &mut CommandHistory {
    histories
        .entry(kind)
        .or_insert_with(|| CommandHistory::new(max_history))
}

impl Default for Session {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_HISTORY)
    }
}
