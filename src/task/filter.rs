//! Search and document-date range filtering over the task list.

use super::task::Task;
use crate::dates::MonthYear;

/// List filter built from the page's query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    /// Case-insensitive substring matched against summary, note and tags.
    pub search: Option<String>,
    /// Keep documents dated on or after the first day of this month.
    pub from: Option<MonthYear>,
    /// Keep documents dated on or before the last day of this month.
    pub to: Option<MonthYear>,
}

impl TaskFilter {
    pub fn is_empty(&self) -> bool {
        self.search_term().is_none() && self.from.is_none() && self.to.is_none()
    }

    fn search_term(&self) -> Option<String> {
        self.search
            .as_deref()
            .map(str::trim)
            .filter(|s| !s.is_empty())
            .map(str::to_lowercase)
    }

    fn matches_search(task: &Task, needle: &str) -> bool {
        [&task.summary, &task.note, &task.tags]
            .iter()
            .any(|field| field.to_lowercase().contains(needle))
    }

    /// Documents whose date cannot be parsed are never inside a range.
    fn matches_range(&self, task: &Task) -> bool {
        if self.from.is_none() && self.to.is_none() {
            return true;
        }
        let Some(date) = task.parsed_document_date() else {
            return false;
        };
        if let Some(from) = self.from {
            if date < from.first_day() {
                return false;
            }
        }
        if let Some(to) = self.to {
            if date > to.last_day() {
                return false;
            }
        }
        true
    }

    pub fn matches(&self, task: &Task) -> bool {
        if let Some(needle) = self.search_term() {
            if !Self::matches_search(task, &needle) {
                return false;
            }
        }
        self.matches_range(task)
    }

    /// Keep matching tasks, preserving input order.
    pub fn apply(&self, tasks: Vec<Task>) -> Vec<Task> {
        if self.is_empty() {
            return tasks;
        }
        tasks.into_iter().filter(|t| self.matches(t)).collect()
    }
}
