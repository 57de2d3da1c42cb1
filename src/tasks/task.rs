/// A single to-do record
///
/// `priority` is expected to be one of "High", "Medium" or "Low" but any
/// text is accepted. `due_date` is kept as typed (`DD-MM-YYYY`).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Task {
    pub title: String,
    pub description: String,
    pub priority: String,
    pub due_date: String,
    pub completed: bool,
}

impl Task {
    /// Create a pending task
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        priority: impl Into<String>,
        due_date: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            priority: priority.into(),
            due_date: due_date.into(),
            completed: false,
        }
    }

    /// Human-readable status label
    pub fn status_label(&self) -> &'static str {
        if self.completed { "Completed" } else { "Pending" }
    }
}
