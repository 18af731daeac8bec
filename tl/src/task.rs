//! Task records
//!
//! A task is an immutable bundle of title, description, due date and priority.
//! Equality is by identity: every task gets a [`TaskId`] when it is built, and
//! clones share it. Two tasks with identical fields are still different tasks.

use std::hash::{Hash, Hasher};

/// Identity of a task, assigned once at construction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TaskId(uuid::Uuid);

impl TaskId {
    fn generate() -> Self {
        Self(uuid::Uuid::now_v7())
    }

    /// Short hex prefix (first 8 chars), handy in logs
    pub fn short(&self) -> String {
        self.0.simple().to_string()[..8].to_string()
    }
}

impl std::fmt::Display for TaskId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A single task
///
/// Fields are private so a task cannot change after it is created. The due
/// date is kept as opaque text and never parsed.
#[derive(Debug, Clone)]
pub struct Task {
    id: TaskId,
    title: String,
    description: String,
    due_date: String,
    priority: i64,
}

impl Task {
    /// Create a new task with a fresh identity
    ///
    /// No validation happens here; the caller is expected to have checked its
    /// input already.
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        due_date: impl Into<String>,
        priority: i64,
    ) -> Self {
        Self {
            id: TaskId::generate(),
            title: title.into(),
            description: description.into(),
            due_date: due_date.into(),
            priority,
        }
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn due_date(&self) -> &str {
        &self.due_date
    }

    /// Lower values sort first
    pub fn priority(&self) -> i64 {
        self.priority
    }

    /// True when both handles refer to the same task
    pub fn same_as(&self, other: &Task) -> bool {
        self.id == other.id
    }
}

impl PartialEq for Task {
    fn eq(&self, other: &Self) -> bool {
        self.same_as(other)
    }
}

impl Eq for Task {}

impl Hash for Task {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// One-line listing format: `{title} - {due_date}`
impl std::fmt::Display for Task {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} - {}", self.title, self.due_date)
    }
}
