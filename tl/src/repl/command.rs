//! REPL command parsing

use std::str::FromStr;

use super::error::CommandError;
use super::input::TaskInput;

/// A single line of user input
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    /// Add a task from `title | description | due date | priority`
    Add(TaskInput),

    /// Remove the n-th task (1-based) of the sorted listing
    Remove(usize),

    Undo,
    Redo,

    /// Sort and display the tasks
    List,

    /// Show the description of the n-th task (1-based)
    Show(usize),

    /// Show undo/redo stack state
    History,

    Help,
    Quit,
}

impl FromStr for ReplCommand {
    type Err = CommandError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let (word, rest) = match line.split_once(char::is_whitespace) {
            Some((word, rest)) => (word, rest.trim()),
            None => (line, ""),
        };

        match word.to_lowercase().as_str() {
            "add" | "a" => {
                if rest.is_empty() {
                    return Err(CommandError::MissingArgument {
                        command: "add",
                        argument: "title | description | due date | priority",
                    });
                }
                Ok(Self::Add(TaskInput::split(rest)?))
            }
            "remove" | "rm" => Ok(Self::Remove(parse_index("remove", rest)?)),
            "show" => Ok(Self::Show(parse_index("show", rest)?)),
            "undo" | "u" => Ok(Self::Undo),
            "redo" | "r" => Ok(Self::Redo),
            "list" | "ls" => Ok(Self::List),
            "history" => Ok(Self::History),
            "help" | "?" => Ok(Self::Help),
            "quit" | "exit" | "q" => Ok(Self::Quit),
            _ => Err(CommandError::Unknown(word.to_string())),
        }
    }
}

/// Parse a 1-based task number
fn parse_index(command: &'static str, arg: &str) -> Result<usize, CommandError> {
    if arg.is_empty() {
        return Err(CommandError::MissingArgument {
            command,
            argument: "a task number",
        });
    }
    match arg.parse::<usize>() {
        Ok(n) if n > 0 => Ok(n),
        _ => Err(CommandError::InvalidIndex(arg.to_string())),
    }
}
