//! Error types for task list operations
//!
//! Every variant is recoverable: the command loop prints the message and
//! returns to the menu.

use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum TaskError {
    /// A due date failed the date validity predicate
    #[error("Invalid date format! Please use DD-MM-YYYY.")]
    InvalidDateFormat(String),

    /// A positional task number outside `[1, count]` (or not a number at all)
    #[error("Invalid task number!")]
    InvalidTaskIndex(String),

    /// The data file could not be opened or written while saving
    #[error("Error saving tasks!")]
    FileOpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// An existing data file could not be read at startup
    #[error("Error loading tasks from {path}")]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A selection that names no menu entry
    #[error("Invalid choice! Please try again.")]
    InvalidMenuChoice(String),
}

pub type Result<T> = std::result::Result<T, TaskError>;

/// The input stream closed while a prompt was waiting for a line
#[derive(Debug, Error)]
#[error("end of input")]
pub struct EndOfInput;
