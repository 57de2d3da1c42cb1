//! Listing and filtering over the task store
//!
//! Queries never mutate the store and always yield tasks in store order.

use super::task::Task;
use super::task_store::TaskStore;
use crate::error::Result;

/// Filter applied by [`TaskStore::filter`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Filter {
    /// Tasks not yet completed
    Pending,
    /// Completed tasks
    Completed,
    /// Tasks whose due date equals the given string exactly
    DueDate(String),
    /// Tasks whose priority equals the given string (case-sensitive)
    Priority(String),
}

impl Filter {
    /// Check whether a task passes this filter
    pub fn matches(&self, task: &Task) -> bool {
        match self {
            Filter::Pending => !task.completed,
            Filter::Completed => task.completed,
            Filter::DueDate(date) => task.due_date == *date,
            Filter::Priority(priority) => task.priority == *priority,
        }
    }
}

impl TaskStore {
    /// Iterate over all tasks with their 1-based positions
    pub fn list(&self) -> impl Iterator<Item = (usize, &Task)> {
        self.tasks.iter().enumerate().map(|(i, task)| (i + 1, task))
    }

    /// Iterate over the tasks matching `filter`, in store order
    ///
    /// A [`Filter::DueDate`] argument must itself pass the store's date
    /// rule, otherwise `InvalidDateFormat` is returned.
    pub fn filter<'a>(&'a self, filter: &Filter) -> Result<impl Iterator<Item = &'a Task>> {
        if let Filter::DueDate(date) = filter {
            self.date_rule().check(date)?;
        }
        Ok(self.tasks.iter().filter(move |task| filter.matches(task)))
    }

    /// Count tasks not yet completed
    pub fn pending_count(&self) -> usize {
        self.tasks.iter().filter(|t| !t.completed).count()
    }

    /// Count completed tasks
    pub fn completed_count(&self) -> usize {
        self.tasks.iter().filter(|t| t.completed).count()
    }
}
