//! Formatting helper functions for console output
//!
//! This module renders the menus, task listings and filter results shown in
//! the interactive session.

use crate::tasks::{Filter, Task, TaskStore};

pub const SEPARATOR: &str = "----------------------------";

/// Render the main menu
pub fn format_menu() -> String {
    [
        "",
        "===== TO-DO LIST MENU =====",
        "1. Create Task",
        "2. Display Tasks",
        "3. Edit Task",
        "4. Delete Task",
        "5. Mark Task as Completed",
        "6. Filter Tasks",
        "7. Save Tasks",
        "8. Exit",
        "",
    ]
    .join("\n")
}

/// Render the filter sub-menu
pub fn format_filter_menu() -> String {
    [
        "",
        "===== FILTER OPTIONS =====",
        "1. Pending Tasks",
        "2. Completed Tasks",
        "3. Tasks by Due Date",
        "4. Tasks by Priority",
        "",
    ]
    .join("\n")
}

/// Render every task with its position and status
///
/// # Returns
/// "No tasks found!" for an empty store, otherwise the full listing
/// followed by a one-line summary of counts.
pub fn format_task_list(store: &TaskStore) -> String {
    if store.is_empty() {
        return "No tasks found!\n".to_string();
    }

    let mut result = String::from("\n===== TASKS =====\n");
    for (index, task) in store.list() {
        result.push_str(&format!("Task #{}:\n", index));
        push_fields(&mut result, task);
        result.push_str(&format!("Status: {}\n", task.status_label()));
        result.push_str(SEPARATOR);
        result.push('\n');
    }
    result.push_str(&format!(
        "{} task(s), {} pending, {} completed\n",
        store.len(),
        store.pending_count(),
        store.completed_count()
    ));
    result
}

/// Heading printed above the results of a filter
pub fn filter_heading(filter: &Filter) -> String {
    match filter {
        Filter::Pending => "===== PENDING TASKS =====".to_string(),
        Filter::Completed => "===== COMPLETED TASKS =====".to_string(),
        Filter::DueDate(date) => format!("===== TASKS DUE ON {} =====", date),
        Filter::Priority(priority) => format!("===== TASKS WITH PRIORITY {} =====", priority),
    }
}

/// Render the tasks matched by a filter
pub fn format_filtered<'a>(filter: &Filter, tasks: impl Iterator<Item = &'a Task>) -> String {
    let mut result = format!("\n{}\n", filter_heading(filter));
    for task in tasks {
        push_fields(&mut result, task);
        result.push_str(SEPARATOR);
        result.push('\n');
    }
    result
}

fn push_fields(out: &mut String, task: &Task) {
    out.push_str(&format!("Title: {}\n", task.title));
    out.push_str(&format!("Description: {}\n", task.description));
    out.push_str(&format!("Priority: {}\n", task.priority));
    out.push_str(&format!("Due Date: {}\n", task.due_date));
}
