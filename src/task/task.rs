//! The persisted task record and the payloads that create or edit it.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::dates;

/// Store-assigned identifier. Never reused.
pub type TaskId = i64;

/// One tracked document and the action it requires.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    /// Date printed on the document, kept as entered (usually `dd/mm/yyyy`).
    pub document_date: String,
    pub reference_number: String,
    pub issuing_authority: String,
    pub summary: String,
    /// Deadline; `None` means the document has no deadline.
    pub due_date: Option<NaiveDate>,
    pub note: String,
    /// Free-form hashtags, e.g. `#budget #urgent`.
    pub tags: String,
    pub completed: bool,
    /// Set iff `completed` is true.
    pub completed_date: Option<NaiveDate>,
}

impl Task {
    /// `document_date` as a calendar date, if it is well-formed.
    pub fn parsed_document_date(&self) -> Option<NaiveDate> {
        dates::parse_date(&self.document_date).ok()
    }

    /// Overdue: open, has a deadline, and the deadline is before `today`.
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.completed && self.due_date.is_some_and(|due| due < today)
    }

    /// Completion date if present, otherwise the deadline.
    pub fn effective_date(&self) -> Option<NaiveDate> {
        self.completed_date.or(self.due_date)
    }
}

/// Fields for a task that has not been stored yet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewTask {
    pub document_date: String,
    pub reference_number: String,
    pub issuing_authority: String,
    pub summary: String,
    pub due_date: Option<NaiveDate>,
    pub note: String,
    pub tags: String,
}

/// Replacement values for every editable field. Completion state is
/// changed only through complete/undo.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskEdit {
    pub document_date: String,
    pub reference_number: String,
    pub issuing_authority: String,
    pub summary: String,
    pub due_date: Option<NaiveDate>,
    pub note: String,
    pub tags: String,
}
