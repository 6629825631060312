//! Mutations submitted from the task page.
//!
//! A form post is parsed into an [`Action`] and then applied. Every input is
//! validated before anything is written; an edit's deadline is checked only
//! after the task is found. The outcome is a [`Flash`] shown once on the next
//! page render. Unknown task ids are silently ignored.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::dates::{self, DateParseError};
use crate::store::{StoreError, TaskStore};
use crate::task::{extract_fields, NewTask, TaskEdit, TaskId};

#[derive(Debug, Error)]
pub enum ActionError {
    #[error("Deadline must use the dd/mm/yyyy format")]
    InvalidDueDate(#[from] DateParseError),

    #[error("Missing or invalid task id")]
    InvalidTaskId,

    #[error("Unknown action '{0}'")]
    UnknownAction(String),

    #[error("Could not save changes")]
    Store(#[from] StoreError),
}

/// Severity of a one-shot page message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlashLevel {
    Success,
    Danger,
}

impl FlashLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Success => "success",
            Self::Danger => "danger",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "success" => Some(Self::Success),
            "danger" => Some(Self::Danger),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Flash {
    pub level: FlashLevel,
    pub message: String,
}

impl Flash {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Success,
            message: message.into(),
        }
    }

    pub fn danger(message: impl Into<String>) -> Self {
        Self {
            level: FlashLevel::Danger,
            message: message.into(),
        }
    }
}

impl From<&ActionError> for Flash {
    fn from(e: &ActionError) -> Self {
        Self::danger(e.to_string())
    }
}

/// Raw fields of the task page form. Which ones matter depends on `action`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ActionForm {
    #[serde(default)]
    pub action: String,
    pub task_id: Option<String>,
    /// Pasted document text (add).
    pub van_ban: Option<String>,
    /// Deadline, `dd/mm/yyyy` or empty.
    pub han_xu_ly: Option<String>,
    pub ghi_chu: Option<String>,
    pub hashtag: Option<String>,
    pub ngay_van_ban: Option<String>,
    pub so_ky_hieu: Option<String>,
    pub cq_ban_hanh: Option<String>,
    pub trich_yeu: Option<String>,
}

/// Replacement fields for an existing task, with the deadline still as
/// submitted. The deadline is validated only once the task is known to exist.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditRequest {
    pub document_date: String,
    pub reference_number: String,
    pub issuing_authority: String,
    pub summary: String,
    pub due_date: Option<String>,
    pub note: String,
    pub tags: String,
}

impl EditRequest {
    fn into_edit(self) -> Result<TaskEdit, DateParseError> {
        Ok(TaskEdit {
            due_date: dates::parse_optional_date(self.due_date.as_deref())?,
            document_date: self.document_date,
            reference_number: self.reference_number,
            issuing_authority: self.issuing_authority,
            summary: self.summary,
            note: self.note,
            tags: self.tags,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Add(NewTask),
    Edit(TaskId, EditRequest),
    Complete(TaskId),
    UndoComplete(TaskId),
    Delete(TaskId),
}

fn text(field: Option<String>) -> String {
    field.unwrap_or_default()
}

fn task_id(field: Option<&str>) -> Result<TaskId, ActionError> {
    field
        .map(str::trim)
        .and_then(|s| s.parse().ok())
        .ok_or(ActionError::InvalidTaskId)
}

impl TryFrom<ActionForm> for Action {
    type Error = ActionError;

    fn try_from(form: ActionForm) -> Result<Self, Self::Error> {
        match form.action.as_str() {
            "add" => {
                let due_date = dates::parse_optional_date(form.han_xu_ly.as_deref())?;
                let fields = extract_fields(form.van_ban.as_deref().unwrap_or_default());
                Ok(Self::Add(NewTask {
                    document_date: fields.document_date,
                    reference_number: fields.reference_number,
                    issuing_authority: fields.issuing_authority,
                    summary: fields.summary,
                    due_date,
                    note: text(form.ghi_chu),
                    tags: text(form.hashtag),
                }))
            }
            "edit" => {
                let id = task_id(form.task_id.as_deref())?;
                Ok(Self::Edit(
                    id,
                    EditRequest {
                        document_date: text(form.ngay_van_ban),
                        reference_number: text(form.so_ky_hieu),
                        issuing_authority: text(form.cq_ban_hanh),
                        summary: text(form.trich_yeu),
                        due_date: form.han_xu_ly,
                        note: text(form.ghi_chu),
                        tags: text(form.hashtag),
                    },
                ))
            }
            "complete" => Ok(Self::Complete(task_id(form.task_id.as_deref())?)),
            "undo_complete" => Ok(Self::UndoComplete(task_id(form.task_id.as_deref())?)),
            "delete" => Ok(Self::Delete(task_id(form.task_id.as_deref())?)),
            other => Err(ActionError::UnknownAction(other.to_string())),
        }
    }
}

impl Action {
    /// Apply to the store. `Ok(None)` means the referenced task does not
    /// exist and nothing changed.
    pub fn apply(self, store: &TaskStore, today: NaiveDate) -> Result<Option<Flash>, ActionError> {
        let flash = match self {
            Self::Add(new) => {
                let task = store.create(new)?;
                tracing::info!(task_id = task.id, "Added task");
                Some(Flash::success("Task added"))
            }
            Self::Edit(id, request) => {
                if store.get(id)?.is_none() {
                    return Ok(None);
                }
                let edit = request.into_edit()?;
                store.update(id, edit)?.then(|| {
                    tracing::info!(task_id = id, "Edited task");
                    Flash::success("Task updated")
                })
            }
            Self::Complete(id) => store.set_completion(id, Some(today))?.then(|| {
                tracing::info!(task_id = id, completed_date = %today, "Completed task");
                Flash::success("Task completed")
            }),
            Self::UndoComplete(id) => store.set_completion(id, None)?.then(|| {
                tracing::info!(task_id = id, "Reopened task");
                Flash::success("Completion undone")
            }),
            Self::Delete(id) => store.delete(id)?.then(|| {
                tracing::info!(task_id = id, "Deleted task");
                Flash::success("Task deleted")
            }),
        };
        Ok(flash)
    }
}

/// Parse, validate and apply a submitted form. Never fails: every error is
/// turned into a danger flash.
pub fn handle_form(store: &TaskStore, today: NaiveDate, form: ActionForm) -> Option<Flash> {
    let result = Action::try_from(form).and_then(|action| action.apply(store, today));
    match result {
        Ok(flash) => flash,
        Err(ActionError::Store(e)) => {
            tracing::error!("Failed to apply task action: {}", e);
            Some(Flash::danger("Could not save changes"))
        }
        Err(e) => {
            tracing::warn!("Rejected task action: {}", e);
            Some(Flash::from(&e))
        }
    }
}
