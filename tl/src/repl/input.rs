//! Task field parsing and validation
//!
//! The core accepts any task it is given; this is where field input gets
//! checked before a [`Task`] is built.

use super::error::InputError;
use crate::task::Task;

/// Separator between fields on an `add` line
pub const FIELD_SEPARATOR: char = '|';

const FIELD_NAMES: [&str; 4] = ["title", "description", "due date", "priority"];

/// Raw, trimmed task fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub title: String,
    pub description: String,
    pub due_date: String,
    pub priority: String,
}

impl TaskInput {
    /// Split `title | description | due date | priority` into fields
    pub fn split(line: &str) -> Result<Self, InputError> {
        let fields: Vec<&str> = line.split(FIELD_SEPARATOR).map(str::trim).collect();
        match fields.as_slice() {
            [title, description, due_date, priority] => Ok(Self {
                title: title.to_string(),
                description: description.to_string(),
                due_date: due_date.to_string(),
                priority: priority.to_string(),
            }),
            _ => Err(InputError::WrongFieldCount {
                expected: FIELD_NAMES.len(),
                found: fields.len(),
            }),
        }
    }

    /// Check every field and build the task
    pub fn validate(self) -> Result<Task, InputError> {
        let values = [&self.title, &self.description, &self.due_date, &self.priority];
        if let Some((field, _)) = FIELD_NAMES.iter().zip(values).find(|(_, value)| value.is_empty()) {
            return Err(InputError::EmptyField { field: *field });
        }

        let priority = self
            .priority
            .parse::<i64>()
            .map_err(|_| InputError::InvalidPriority { value: self.priority.clone() })?;

        Ok(Task::new(self.title, self.description, self.due_date, priority))
    }

    /// Split and validate in one step
    pub fn parse(line: &str) -> Result<Task, InputError> {
        Self::split(line)?.validate()
    }
}
