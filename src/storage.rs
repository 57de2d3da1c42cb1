//! Flat text file persistence
//!
//! Each task is stored as five lines (title, description, priority, due
//! date, completed flag as `0`/`1`) followed by one blank line. There is no
//! header or version marker.

use crate::error::{Result, TaskError};
use crate::tasks::Task;
use std::borrow::Cow;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Default data file, relative to the working directory
pub const DEFAULT_FILE: &str = "tasks.txt";

pub struct Storage {
    file_path: PathBuf,
}

impl Storage {
    pub fn new(file_path: impl AsRef<Path>) -> Self {
        Self {
            file_path: file_path.as_ref().to_path_buf(),
        }
    }

    pub fn file_path(&self) -> &Path {
        &self.file_path
    }

    /// Read all tasks from the data file
    ///
    /// A missing file is not an error and yields an empty list. Bytes that
    /// are not valid UTF-8 are replaced rather than rejected; only a file
    /// that exists but cannot be read at all is an error.
    pub fn load(&self) -> Result<Vec<Task>> {
        if !self.file_path.exists() {
            info!(path = %self.file_path.display(), "no data file, starting empty");
            return Ok(Vec::new());
        }

        let bytes = fs::read(&self.file_path).map_err(|source| TaskError::FileRead {
            path: self.file_path.clone(),
            source,
        })?;
        let content = String::from_utf8_lossy(&bytes);
        if matches!(content, Cow::Owned(_)) {
            warn!(path = %self.file_path.display(), "data file is not valid UTF-8, replacing bad bytes");
        }
        let tasks = parse_tasks(&content);
        info!(path = %self.file_path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Overwrite the data file with `tasks`
    pub fn save(&self, tasks: &[Task]) -> Result<()> {
        fs::write(&self.file_path, format_tasks(tasks)).map_err(|source| {
            TaskError::FileOpenFailure {
                path: self.file_path.clone(),
                source,
            }
        })?;
        info!(path = %self.file_path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }
}

/// Serialize tasks into the record format
pub fn format_tasks(tasks: &[Task]) -> String {
    let mut out = String::new();
    for task in tasks {
        out.push_str(&task.title);
        out.push('\n');
        out.push_str(&task.description);
        out.push('\n');
        out.push_str(&task.priority);
        out.push('\n');
        out.push_str(&task.due_date);
        out.push('\n');
        out.push_str(if task.completed { "1" } else { "0" });
        out.push_str("\n\n");
    }
    out
}

/// Parse tasks from the record format
///
/// Parsing stops at the first truncated record or unreadable completed
/// flag; every record read before that point is kept.
pub fn parse_tasks(content: &str) -> Vec<Task> {
    let mut lines = content.lines().peekable();
    let mut tasks = Vec::new();

    while let Some(title) = lines.next() {
        let (Some(description), Some(priority), Some(due_date), Some(flag)) =
            (lines.next(), lines.next(), lines.next(), lines.next())
        else {
            warn!(record = tasks.len() + 1, "truncated task record, ignoring rest of file");
            break;
        };

        let completed = match flag.trim() {
            "0" => false,
            "1" => true,
            other => {
                warn!(
                    record = tasks.len() + 1,
                    flag = other,
                    "unreadable completed flag, ignoring rest of file"
                );
                break;
            }
        };

        tasks.push(Task {
            title: title.to_string(),
            description: description.to_string(),
            priority: priority.to_string(),
            due_date: due_date.to_string(),
            completed,
        });

        if lines.next_if(|line| line.is_empty()).is_none() && lines.peek().is_some() {
            warn!(record = tasks.len(), "missing blank line after task record");
        }
    }

    tasks
}
