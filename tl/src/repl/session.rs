//! REPL session: owns the scheduler and runs commands against it

use std::io::{BufRead, Write};

use colored::Colorize;
use eyre::{Context, Result};
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;
use tracing::{debug, info};

use super::command::ReplCommand;
use super::error::CommandError;
use crate::config::Config;
use crate::scheduler::Scheduler;
use crate::task::Task;

/// Result of executing one command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// Keep going; text to show the user (may be empty)
    Continue(String),
    Quit,
}

/// Interactive task list session
pub struct Session {
    scheduler: Scheduler,
    prompt: String,
}

impl Session {
    /// Create a session with an empty task list
    pub fn new(config: &Config) -> Self {
        Self {
            scheduler: Scheduler::with_policy(config.redo_policy),
            prompt: config.prompt.clone(),
        }
    }

    pub fn scheduler(&self) -> &Scheduler {
        &self.scheduler
    }

    /// Parse and execute one line; blank lines do nothing
    pub fn execute_line(&mut self, line: &str) -> Result<Outcome, CommandError> {
        if line.trim().is_empty() {
            return Ok(Outcome::Continue(String::new()));
        }
        let command: ReplCommand = line.parse()?;
        self.execute(command)
    }

    /// Execute a parsed command
    pub fn execute(&mut self, command: ReplCommand) -> Result<Outcome, CommandError> {
        debug!(?command, "execute");
        let text = match command {
            ReplCommand::Add(input) => {
                let task = input.validate()?;
                self.scheduler.add_task(task);
                format!("Task added successfully.\n{}", self.render_list())
            }
            ReplCommand::Remove(index) => {
                let task = self.task_at(index)?;
                self.scheduler.remove_task(&task);
                format!("Removed: {}\n{}", task, self.render_list())
            }
            ReplCommand::Undo => {
                let message = match self.scheduler.undo() {
                    Some(command) => format!("Undid {}", command),
                    None => "Nothing to undo".dimmed().to_string(),
                };
                format!("{}\n{}", message, self.render_list())
            }
            ReplCommand::Redo => {
                let message = match self.scheduler.redo() {
                    Some(command) => format!("Redid {}", command),
                    None => "Nothing to redo".dimmed().to_string(),
                };
                format!("{}\n{}", message, self.render_list())
            }
            ReplCommand::List => self.render_list(),
            ReplCommand::Show(index) => {
                let task = self.task_at(index)?;
                format!("{}\n{}", task.title().bold(), task.description())
            }
            ReplCommand::History => self.render_history(),
            ReplCommand::Help => help_text(),
            ReplCommand::Quit => return Ok(Outcome::Quit),
        };
        Ok(Outcome::Continue(text))
    }

    /// Run the interactive readline loop
    pub fn run_interactive(&mut self) -> Result<()> {
        info!("Interactive session started");
        print_welcome();

        let mut rl = DefaultEditor::new().map_err(|e| eyre::eyre!("Failed to initialize readline: {}", e))?;
        let prompt = format!("{} ", self.prompt.bright_green());

        loop {
            match rl.readline(&prompt) {
                Ok(line) => {
                    let input = line.trim();
                    if input.is_empty() {
                        continue;
                    }
                    let _ = rl.add_history_entry(input);

                    match self.execute_line(input) {
                        Ok(Outcome::Continue(text)) => {
                            if !text.is_empty() {
                                println!("{}", text);
                            }
                        }
                        Ok(Outcome::Quit) => break,
                        Err(err) => print_error(&err),
                    }
                }
                Err(ReadlineError::Interrupted) => {
                    println!("^C");
                    continue;
                }
                Err(ReadlineError::Eof) => {
                    println!();
                    break;
                }
                Err(err) => {
                    return Err(eyre::eyre!("Readline error: {}", err));
                }
            }
        }

        info!(tasks = self.scheduler.tasks().len(), "Interactive session ended");
        println!("Goodbye!");
        Ok(())
    }

    /// Execute every line of `input`, writing output to `out`
    ///
    /// A failing line is reported and skipped. Returns the number of lines
    /// that failed.
    pub fn run_batch<R: BufRead, W: Write>(&mut self, input: R, mut out: W) -> Result<usize> {
        info!("Batch session started");
        let mut failures = 0;

        for (number, line) in input.lines().enumerate() {
            let line = line.context("Failed to read input")?;
            match self.execute_line(&line) {
                Ok(Outcome::Continue(text)) => {
                    if !text.is_empty() {
                        writeln!(out, "{}", text)?;
                    }
                }
                Ok(Outcome::Quit) => break,
                Err(err) => {
                    failures += 1;
                    writeln!(out, "line {}: {} {}", number + 1, "Error:".red(), err)?;
                }
            }
        }

        out.flush()?;
        info!(failures, tasks = self.scheduler.tasks().len(), "Batch session ended");
        Ok(failures)
    }

    /// Task at a 1-based position of the sorted listing
    fn task_at(&mut self, index: usize) -> Result<Task, CommandError> {
        let mut tasks = self.scheduler.refresh();
        let len = tasks.len();
        if index == 0 || index > len {
            return Err(CommandError::IndexOutOfRange { index, len });
        }
        Ok(tasks.swap_remove(index - 1))
    }

    fn render_list(&mut self) -> String {
        let tasks = self.scheduler.refresh();
        if tasks.is_empty() {
            return "No tasks".dimmed().to_string();
        }
        tasks
            .iter()
            .enumerate()
            .map(|(i, task)| {
                let priority = format!("[priority {}]", task.priority());
                format!("{:>3}. {}  {}", i + 1, task, priority.dimmed())
            })
            .collect::<Vec<_>>()
            .join("\n")
    }

    fn render_history(&self) -> String {
        let history = self.scheduler.history();
        let next = |command: Option<&crate::history::Command>| {
            command
                .map(|c| format!(" (next: {})", c))
                .unwrap_or_default()
        };
        format!(
            "Undo stack: {}{}\nRedo stack: {}{}\nRedo policy: {}",
            history.undo_len(),
            next(history.peek_undo()),
            history.redo_len(),
            next(history.peek_redo()),
            self.scheduler.policy(),
        )
    }
}

fn print_welcome() {
    println!();
    println!("{}", "Task List".bright_cyan().bold());
    println!("Type {} for help, {} to quit", "help".yellow(), "quit".yellow());
    println!();
}

fn print_error(err: &CommandError) {
    println!("{} {}", "Error:".red(), err);
    if !err.is_input_error() {
        println!("Type {} for available commands", "help".yellow());
    }
}

fn help_text() -> String {
    let rows = [
        ("add <t> | <d> | <due> | <p>", "Add a task (title, description, due date, priority)"),
        ("remove <n>", "Remove task number n"),
        ("show <n>", "Show the description of task n"),
        ("list", "Show tasks, lowest priority number first"),
        ("undo", "Undo the last add/remove"),
        ("redo", "Redo the last undone action"),
        ("history", "Show undo/redo state"),
        ("quit", "Exit"),
    ];
    let mut text = format!("{}", "Available Commands:".bright_cyan());
    for (usage, about) in rows {
        text.push_str(&format!("\n  {:30} {}", usage.yellow(), about));
    }
    text
}
