//! tasklist - personal task list with undo/redo
//!
//! Tasks carry a title, description, opaque due date and integer priority.
//! They live in a singly linked [`TaskSequence`] that is selection-sorted by
//! ascending priority before display. Every add and remove is recorded in a
//! two-stack [`CommandHistory`] so the [`Scheduler`] can undo and redo them.
//!
//! # Example
//!
//! ```
//! use tasklist::{Scheduler, Task};
//!
//! let mut scheduler = Scheduler::new();
//! let rent = Task::new("Pay rent", "Transfer to landlord", "2024-05-01", 2);
//! scheduler.add_task(rent.clone());
//! scheduler.add_task(Task::new("Call mum", "Birthday", "2024-04-30", 1));
//!
//! scheduler.remove_task(&rent);
//! scheduler.undo();
//!
//! let titles: Vec<String> = scheduler.refresh().iter().map(|t| t.title().to_string()).collect();
//! assert_eq!(titles, vec!["Call mum", "Pay rent"]);
//! ```

pub mod cli;
pub mod config;
pub mod history;
pub mod repl;
pub mod scheduler;
pub mod sequence;
pub mod task;

pub use config::Config;
pub use history::{Action, Command, CommandHistory};
pub use scheduler::{RedoPolicy, Scheduler};
pub use sequence::TaskSequence;
pub use task::{Task, TaskId};

/// Default interactive prompt
pub const DEFAULT_PROMPT: &str = "tl>";
