//! Delete handler

use crate::TaskList;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> TaskList<R, W> {
    pub(crate) fn handle_delete(&mut self) -> Result<()> {
        if !self.show_tasks_for_selection()? {
            return Ok(());
        }

        let outcome = self
            .prompt_task_number("Enter task number to delete: ")?
            .and_then(|index| self.store.delete(index));
        match outcome {
            Ok(_) => self.say("Task deleted successfully!"),
            Err(e) => self.report(&e),
        }
    }
}
