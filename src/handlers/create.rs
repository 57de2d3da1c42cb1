//! Create handler

use crate::TaskList;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> TaskList<R, W> {
    /// Prompts for the four task fields and appends a pending task.
    pub(crate) fn handle_create(&mut self) -> Result<()> {
        let title = self.prompt("Enter task title: ")?;
        let description = self.prompt("Enter task description: ")?;
        let priority = self.prompt("Enter task priority (High/Medium/Low): ")?;
        let due_date = self.prompt("Enter due date (DD-MM-YYYY): ")?;

        match self.store.create(title, description, priority, due_date) {
            Ok(_) => self.say("Task created successfully!"),
            Err(e) => self.report(&e),
        }
    }
}
