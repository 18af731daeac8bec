//! Undo/redo command history
//!
//! Two independent LIFO stacks of [`Command`]s. The scheduler is the only
//! writer; entries are pushed and popped whole and never edited.

use crate::task::Task;

/// Kind of mutation a command records
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Add,
    Remove,
}

impl std::fmt::Display for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Add => write!(f, "add"),
            Self::Remove => write!(f, "remove"),
        }
    }
}

/// A recorded mutation: what happened and to which task
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    pub action: Action,
    pub task: Task,
}

impl Command {
    pub fn new(action: Action, task: Task) -> Self {
        Self { action, task }
    }
}

impl std::fmt::Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} \"{}\"", self.action, self.task.title())
    }
}

/// Undo and redo stacks
#[derive(Debug, Default)]
pub struct CommandHistory {
    undo: Vec<Command>,
    redo: Vec<Command>,
}

impl CommandHistory {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_undo(&mut self, action: Action, task: Task) {
        self.undo.push(Command::new(action, task));
    }

    /// Pop the most recent undo entry, `None` when empty
    pub fn pop_undo(&mut self) -> Option<Command> {
        self.undo.pop()
    }

    pub fn push_redo(&mut self, action: Action, task: Task) {
        self.redo.push(Command::new(action, task));
    }

    /// Pop the most recent redo entry, `None` when empty
    pub fn pop_redo(&mut self) -> Option<Command> {
        self.redo.pop()
    }

    pub fn peek_undo(&self) -> Option<&Command> {
        self.undo.last()
    }

    pub fn peek_redo(&self) -> Option<&Command> {
        self.redo.last()
    }

    pub fn is_undo_empty(&self) -> bool {
        self.undo.is_empty()
    }

    pub fn is_redo_empty(&self) -> bool {
        self.redo.is_empty()
    }

    pub fn undo_len(&self) -> usize {
        self.undo.len()
    }

    pub fn redo_len(&self) -> usize {
        self.redo.len()
    }

    /// Drop every redo entry
    pub fn clear_redo(&mut self) {
        self.redo.clear();
    }
}
