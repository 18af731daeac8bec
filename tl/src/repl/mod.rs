//! Terminal front end for the task list
//!
//! Parses commands, validates task fields, and drives a [`Scheduler`] from
//! either an interactive readline loop or a line-oriented batch input.
//!
//! [`Scheduler`]: crate::scheduler::Scheduler

mod command;
mod error;
mod input;
mod session;

pub use command::ReplCommand;
pub use error::{CommandError, InputError};
pub use input::{FIELD_SEPARATOR, TaskInput};
pub use session::{Outcome, Session};
