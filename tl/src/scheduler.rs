//! Scheduler: the task sequence plus its undo/redo history
//!
//! All mutation goes through here. Forward actions append to the undo stack;
//! `undo` and `redo` move commands between the two stacks and apply the
//! matching change to the sequence.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::history::{Action, Command, CommandHistory};
use crate::sequence::TaskSequence;
use crate::task::Task;

/// What a forward action does to redo history
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RedoPolicy {
    /// Forward actions leave redo history alone, so an old redo can still
    /// replay after a fresh add or remove
    #[default]
    Preserve,

    /// Forward actions discard redo history
    ClearOnForward,
}

impl std::fmt::Display for RedoPolicy {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Preserve => write!(f, "preserve"),
            Self::ClearOnForward => write!(f, "clear-on-forward"),
        }
    }
}

impl std::str::FromStr for RedoPolicy {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "preserve" => Ok(Self::Preserve),
            "clear-on-forward" | "clear" => Ok(Self::ClearOnForward),
            _ => Err(format!("Unknown redo policy: {}", s)),
        }
    }
}

/// Owns the task sequence and the command history
#[derive(Debug, Default)]
pub struct Scheduler {
    tasks: TaskSequence,
    history: CommandHistory,
    policy: RedoPolicy,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_policy(policy: RedoPolicy) -> Self {
        Self {
            policy,
            ..Self::default()
        }
    }

    pub fn policy(&self) -> RedoPolicy {
        self.policy
    }

    /// Append a task and record the add
    pub fn add_task(&mut self, task: Task) {
        debug!(task_id = %task.id(), title = task.title(), "add task");
        self.tasks.append(task.clone());
        self.record_forward(Action::Add, task);
    }

    /// Remove a task and record the removal
    ///
    /// The removal is recorded even when the task was not present.
    pub fn remove_task(&mut self, task: &Task) {
        let removed = self.tasks.remove(task).is_some();
        debug!(task_id = %task.id(), removed, "remove task");
        self.record_forward(Action::Remove, task.clone());
    }

    /// Revert the most recent command; `None` when there is nothing to undo
    pub fn undo(&mut self) -> Option<Command> {
        let command = self.history.pop_undo()?;
        match command.action {
            Action::Add => {
                self.tasks.remove(&command.task);
            }
            Action::Remove => self.tasks.append(command.task.clone()),
        }
        debug!(action = %command.action, task_id = %command.task.id(), "undo");
        self.history.push_redo(command.action, command.task.clone());
        Some(command)
    }

    /// Replay the most recently undone command; `None` when there is nothing to redo
    pub fn redo(&mut self) -> Option<Command> {
        let command = self.history.pop_redo()?;
        match command.action {
            Action::Add => self.tasks.append(command.task.clone()),
            Action::Remove => {
                self.tasks.remove(&command.task);
            }
        }
        debug!(action = %command.action, task_id = %command.task.id(), "redo");
        self.history.push_undo(command.action, command.task.clone());
        Some(command)
    }

    pub fn can_undo(&self) -> bool {
        !self.history.is_undo_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.history.is_redo_empty()
    }

    /// Read access to the live sequence
    pub fn tasks(&self) -> &TaskSequence {
        &self.tasks
    }

    pub fn history(&self) -> &CommandHistory {
        &self.history
    }

    /// Sort the sequence in place by ascending priority
    pub fn sort_tasks(&mut self) {
        self.tasks.sort();
    }

    /// Sort, then snapshot: what a display refresh shows
    pub fn refresh(&mut self) -> Vec<Task> {
        self.sort_tasks();
        self.tasks.to_sequence()
    }

    fn record_forward(&mut self, action: Action, task: Task) {
        self.history.push_undo(action, task);
        if self.policy == RedoPolicy::ClearOnForward && !self.history.is_redo_empty() {
            debug!(dropped = self.history.redo_len(), "clearing redo history");
            self.history.clear_redo();
        }
    }
}
