//! Interactive to-do list manager
//!
//! This library provides a menu-driven task list: tasks are created, edited,
//! deleted, completed and filtered in memory and written to a plain text
//! file on request.
//!
//! # Architecture
//!
//! - **Session Layer**: `TaskList` - Reads menu selections and dispatches to handlers
//! - **Domain Layer**: `tasks` module - Task record and the ordered `TaskStore`
//! - **Persistence Layer**: `storage` module - Five-line-per-task flat file
//!
//! # Example
//!
//! ```no_run
//! use tasklist::{Config, TaskList};
//! use anyhow::Result;
//!
//! fn main() -> Result<()> {
//!     let stdin = std::io::stdin();
//!     let mut session = TaskList::from_config(&Config::default(), stdin.lock(), std::io::stdout())?;
//!     session.run()?;
//!     Ok(())
//! }
//! ```

pub mod config;
pub mod error;
pub mod formatting;
mod handlers;
pub mod menu;
pub mod storage;
pub mod tasks;
pub mod validation;

use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::debug;

pub use config::Config;
pub use error::{EndOfInput, TaskError};
pub use menu::{FilterChoice, MenuChoice};
pub use storage::Storage;
pub use tasks::{EditMode, Filter, Task, TaskStore};
pub use validation::{DateRule, is_valid_date};

/// Interactive task list session
///
/// Owns the task store and the storage it was loaded from, and talks to the
/// user through any line-oriented reader and writer.
pub struct TaskList<R, W> {
    pub(crate) store: TaskStore,
    pub(crate) storage: Storage,
    input: R,
    pub(crate) output: W,
}

/// Whether the menu loop keeps running after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Exit,
}

impl<R: BufRead, W: Write> TaskList<R, W> {
    /// Create a session over an existing store
    pub fn new(store: TaskStore, storage: Storage, input: R, output: W) -> Self {
        Self {
            store,
            storage,
            input,
            output,
        }
    }

    /// Create a session, loading tasks from the configured data file
    ///
    /// # Arguments
    /// * `config` - Data file location and validation rules
    /// * `input` - Source of user input lines
    /// * `output` - Destination for prompts and results
    pub fn from_config(config: &Config, input: R, output: W) -> Result<Self> {
        let storage = Storage::new(&config.file);
        let store = TaskStore::from_tasks(storage.load()?)
            .with_date_rule(config.date_rule)
            .with_edit_mode(config.edit_mode());
        Ok(Self::new(store, storage, input, output))
    }

    pub fn store(&self) -> &TaskStore {
        &self.store
    }

    pub fn output(&self) -> &W {
        &self.output
    }

    /// Run the menu loop until Exit is chosen or input ends
    pub fn run(&mut self) -> Result<()> {
        loop {
            write!(self.output, "{}", formatting::format_menu())?;
            let flow = match self.prompt("Enter your choice: ") {
                Ok(line) => match line.parse::<MenuChoice>() {
                    Ok(choice) => self.dispatch(choice),
                    Err(e) => self.report(&e).map(|()| Flow::Continue),
                },
                Err(e) => Err(e),
            };

            match flow {
                Ok(Flow::Continue) => {}
                Ok(Flow::Exit) => break,
                Err(e) if e.is::<EndOfInput>() => {
                    debug!("input closed, leaving menu loop");
                    writeln!(self.output)?;
                    self.say("Exiting...")?;
                    break;
                }
                Err(e) => return Err(e),
            }
        }
        self.output.flush()?;
        Ok(())
    }

    fn dispatch(&mut self, choice: MenuChoice) -> Result<Flow> {
        debug!(?choice, "menu selection");
        match choice {
            MenuChoice::Create => self.handle_create()?,
            MenuChoice::Display => self.handle_display()?,
            MenuChoice::Edit => self.handle_edit()?,
            MenuChoice::Delete => self.handle_delete()?,
            MenuChoice::Complete => self.handle_complete()?,
            MenuChoice::Filter => self.handle_filter()?,
            MenuChoice::Save => self.handle_save()?,
            MenuChoice::Exit => {
                self.say("Exiting...")?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    /// Print `text` and read one full line of input
    ///
    /// Returns [`EndOfInput`] when the reader is exhausted.
    pub(crate) fn prompt(&mut self, text: &str) -> Result<String> {
        write!(self.output, "{}", text)?;
        self.output.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Err(EndOfInput.into());
        }
        let trimmed = line.strip_suffix('\n').unwrap_or(&line);
        let trimmed = trimmed.strip_suffix('\r').unwrap_or(trimmed);
        Ok(trimmed.to_string())
    }

    pub(crate) fn say(&mut self, message: &str) -> Result<()> {
        writeln!(self.output, "{}", message)?;
        Ok(())
    }

    /// Print the user-facing message for a recoverable error
    pub(crate) fn report(&mut self, error: &TaskError) -> Result<()> {
        debug!(?error, "command failed");
        self.say(&error.to_string())
    }
}
