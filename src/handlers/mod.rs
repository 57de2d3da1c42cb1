//! Menu command handlers
//!
//! Each handler prompts for its own input, applies one store operation and
//! prints the outcome. Domain errors are printed and swallowed; only I/O
//! failures and [`crate::EndOfInput`] propagate to the menu loop.

mod complete;
mod create;
mod delete;
mod edit;
mod filter;
mod list;
mod save;

use crate::TaskList;
use crate::validation;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> TaskList<R, W> {
    /// Print the task listing first, as the index-based commands do
    ///
    /// # Returns
    /// `false` when there are no tasks to choose from
    pub(crate) fn show_tasks_for_selection(&mut self) -> Result<bool> {
        self.handle_display()?;
        Ok(!self.store.is_empty())
    }

    /// Prompt for a task number and check it against the store
    pub(crate) fn prompt_task_number(
        &mut self,
        text: &str,
    ) -> Result<crate::error::Result<usize>> {
        let input = self.prompt(text)?;
        Ok(validation::parse_task_number(&input)
            .and_then(|index| self.store.check_index(index).map(|()| index)))
    }
}
