//! Display handler

use crate::TaskList;
use crate::formatting;
use anyhow::Result;
use std::io::{BufRead, Write};

impl<R: BufRead, W: Write> TaskList<R, W> {
    pub(crate) fn handle_display(&mut self) -> Result<()> {
        let listing = formatting::format_task_list(&self.store);
        write!(self.output, "{}", listing)?;
        Ok(())
    }
}
