//! Task module - the task record and the pure logic applied to task lists.
//!
//! Everything here is free of IO:
//! - `extract`: header fields from a pasted document
//! - `status`: deadline status relative to an explicit "today"
//! - `filter`: search and document-date range
//! - `stats`: all-time and per-month counts

pub mod task;
pub mod extract;
pub mod status;
mod filter;
mod stats;

pub use task::{Task, TaskId, NewTask, TaskEdit};
pub use extract::{DocumentFields, extract_fields};
pub use status::{TaskStatus, TaskView, DUE_SOON_DAYS};
pub use filter::TaskFilter;
pub use stats::{Counts, TaskStats};
