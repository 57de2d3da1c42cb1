//! Mark-completed handler

use crate::TaskList;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> TaskList<R, W> {
    pub(crate) fn handle_complete(&mut self) -> Result<()> {
        if !self.show_tasks_for_selection()? {
            return Ok(());
        }

        let outcome = self
            .prompt_task_number("Enter task number to mark as completed: ")?
            .and_then(|index| self.store.mark_completed(index));
        match outcome {
            Ok(()) => self.say("Task marked as completed!"),
            Err(e) => self.report(&e),
        }
    }
}
