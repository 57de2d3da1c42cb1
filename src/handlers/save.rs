//! Save handler

use crate::TaskList;
use crate::error::TaskError;
use anyhow::Result;
use std::io::{BufRead, Write};
use tracing::warn;

impl<R: BufRead, W: Write> TaskList<R, W> {
    /// Overwrites the data file with the current tasks.
    pub(crate) fn handle_save(&mut self) -> Result<()> {
        match self.storage.save(self.store.tasks()) {
            Ok(()) => self.say("Tasks saved successfully!"),
            Err(e) => {
                if let TaskError::FileOpenFailure { path, source } = &e {
                    warn!(path = %path.display(), error = %source, "save failed");
                }
                self.report(&e)
            }
        }
    }
}
