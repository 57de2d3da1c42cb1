//! Edit handler

use crate::TaskList;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> TaskList<R, W> {
    /// Shows the list, asks which task to edit and then for all four fields.
    ///
    /// The task number is checked before the fields are requested. Whether a
    /// rejected due date also discards the other fields depends on the
    /// store's edit mode.
    pub(crate) fn handle_edit(&mut self) -> Result<()> {
        if !self.show_tasks_for_selection()? {
            return Ok(());
        }

        let index = match self.prompt_task_number("Enter task number to edit: ")? {
            Ok(index) => index,
            Err(e) => return self.report(&e),
        };

        let title = self.prompt("Enter new title: ")?;
        let description = self.prompt("Enter new description: ")?;
        let priority = self.prompt("Enter new priority (High/Medium/Low): ")?;
        let due_date = self.prompt("Enter new due date (DD-MM-YYYY): ")?;

        match self
            .store
            .edit(index, title, description, priority, due_date)
        {
            Ok(()) => self.say("Task updated successfully!"),
            Err(e) => self.report(&e),
        }
    }
}
