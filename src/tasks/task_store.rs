use super::task::Task;
use crate::error::{Result, TaskError};
use crate::validation::DateRule;
use tracing::debug;

/// How `edit` applies its fields when the new due date is rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EditMode {
    /// Title, description and priority are written before the date is
    /// checked; a rejected date leaves them written and keeps the old date.
    #[default]
    Partial,
    /// The date is checked first; a rejected date changes nothing.
    Atomic,
}

/// Ordered in-memory collection of tasks
///
/// Tasks are addressed by their 1-based position. Deleting a task shifts
/// every later task down by one, so positions are not stable identifiers.
#[derive(Debug, Clone, Default)]
pub struct TaskStore {
    /// Tasks in insertion order
    pub(crate) tasks: Vec<Task>,
    date_rule: DateRule,
    edit_mode: EditMode,
}

impl TaskStore {
    /// Create an empty store with the default rules
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from already loaded tasks
    ///
    /// Loaded due dates are not re-validated.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            ..Self::default()
        }
    }

    pub fn with_date_rule(mut self, date_rule: DateRule) -> Self {
        self.date_rule = date_rule;
        self
    }

    pub fn with_edit_mode(mut self, edit_mode: EditMode) -> Self {
        self.edit_mode = edit_mode;
        self
    }

    pub fn date_rule(&self) -> DateRule {
        self.date_rule
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// All tasks in order
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Get the task at a 1-based position
    pub fn get(&self, index: usize) -> Option<&Task> {
        index.checked_sub(1).and_then(|i| self.tasks.get(i))
    }

    /// Check that a 1-based position names an existing task
    pub fn check_index(&self, index: usize) -> Result<()> {
        self.offset(index).map(|_| ())
    }

    /// Convert a 1-based position into a vector offset
    fn offset(&self, index: usize) -> Result<usize> {
        if index == 0 || index > self.tasks.len() {
            return Err(TaskError::InvalidTaskIndex(index.to_string()));
        }
        Ok(index - 1)
    }

    /// Append a new pending task
    ///
    /// # Returns
    /// The 1-based position of the new task, or `InvalidDateFormat` if the
    /// due date is rejected (the store is left unchanged).
    pub fn create(
        &mut self,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Result<usize> {
        let due_date = due_date.into();
        self.date_rule.check(&due_date)?;

        self.tasks
            .push(Task::new(title, description, priority, due_date));
        debug!(index = self.tasks.len(), "created task");
        Ok(self.tasks.len())
    }

    /// Replace the fields of the task at `index`
    ///
    /// In [`EditMode::Partial`] the title, description and priority are
    /// written even when the new due date is rejected; the due date keeps
    /// its previous value and `InvalidDateFormat` is returned. In
    /// [`EditMode::Atomic`] a rejected date leaves the task untouched.
    pub fn edit(
        &mut self,
        index: usize,
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Result<()> {
        let offset = self.offset(index)?;
        let due_date = due_date.into();
        let date_ok = self.date_rule.is_valid(&due_date);

        if self.edit_mode == EditMode::Atomic && !date_ok {
            return Err(TaskError::InvalidDateFormat(due_date));
        }

        let task = &mut self.tasks[offset];
        task.title = title.into();
        task.description = description.into();
        task.priority = priority.into();

        if !date_ok {
            debug!(index, "edit kept previous due date");
            return Err(TaskError::InvalidDateFormat(due_date));
        }

        task.due_date = due_date;
        debug!(index, "edited task");
        Ok(())
    }

    /// Remove the task at `index`, shifting later tasks down by one
    pub fn delete(&mut self, index: usize) -> Result<Task> {
        let offset = self.offset(index)?;
        let task = self.tasks.remove(offset);
        debug!(index, remaining = self.tasks.len(), "deleted task");
        Ok(task)
    }

    /// Mark the task at `index` as completed
    pub fn mark_completed(&mut self, index: usize) -> Result<()> {
        let offset = self.offset(index)?;
        self.tasks[offset].completed = true;
        debug!(index, "marked task completed");
        Ok(())
    }
}
