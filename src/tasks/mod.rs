//! Task domain model
//!
//! This module contains the task record and the in-memory store:
//! - `task`: the task record itself
//! - `task_store`: ordered store with positional create/edit/delete/complete
//! - `queries`: listing and filtering over the store

mod queries;
mod task;
mod task_store;

pub use queries::Filter;
pub use task::Task;
pub use task_store::{EditMode, TaskStore};
