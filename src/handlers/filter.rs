//! Filter handler

use crate::TaskList;
use crate::formatting;
use crate::menu::FilterChoice;
use crate::tasks::Filter;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> TaskList<R, W> {
    /// Shows the filter sub-menu, reads the filter argument if one is
    /// needed and prints the matching tasks without their positions.
    pub(crate) fn handle_filter(&mut self) -> Result<()> {
        write!(self.output, "{}", formatting::format_filter_menu())?;
        let choice = self.prompt("Enter your choice: ")?;

        let filter = match choice.parse::<FilterChoice>() {
            Ok(FilterChoice::Pending) => Filter::Pending,
            Ok(FilterChoice::Completed) => Filter::Completed,
            Ok(FilterChoice::DueDate) => {
                Filter::DueDate(self.prompt("Enter due date (DD-MM-YYYY): ")?)
            }
            Ok(FilterChoice::Priority) => {
                Filter::Priority(self.prompt("Enter priority (High/Medium/Low): ")?)
            }
            Err(_) => return self.say("Invalid choice!"),
        };

        let rendered = self
            .store
            .filter(&filter)
            .map(|tasks| formatting::format_filtered(&filter, tasks));
        match rendered {
            Ok(text) => {
                write!(self.output, "{}", text)?;
                Ok(())
            }
            Err(e) => self.report(&e),
        }
    }
}
