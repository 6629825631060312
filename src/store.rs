//! SQLite-backed task storage.
//!
//! One `tasks` table; ids come from `AUTOINCREMENT` so deleted ids are never
//! handed out again. Dates are stored as ISO `YYYY-MM-DD` text.

use std::path::Path;
use std::sync::{Mutex, MutexGuard};

use chrono::NaiveDate;
use rusqlite::{params, Connection, OptionalExtension, Row};
use thiserror::Error;

use crate::task::{NewTask, Task, TaskEdit, TaskId};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Task store lock poisoned")]
    Poisoned,
}

pub type StoreResult<T> = Result<T, StoreError>;

const SCHEMA: &str = "
CREATE TABLE IF NOT EXISTS tasks (
    id                INTEGER PRIMARY KEY AUTOINCREMENT,
    document_date     TEXT    NOT NULL DEFAULT '',
    reference_number  TEXT    NOT NULL DEFAULT '',
    issuing_authority TEXT    NOT NULL DEFAULT '',
    summary           TEXT    NOT NULL DEFAULT '',
    due_date          TEXT,
    note              TEXT    NOT NULL DEFAULT '',
    tags              TEXT    NOT NULL DEFAULT '',
    completed         INTEGER NOT NULL DEFAULT 0,
    completed_date    TEXT
);
";

const COLUMNS: &str = "id, document_date, reference_number, issuing_authority, summary, \
                       due_date, note, tags, completed, completed_date";

/// Persistent store for tasks.
pub struct TaskStore {
    conn: Mutex<Connection>,
}

impl std::fmt::Debug for TaskStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TaskStore").finish_non_exhaustive()
    }
}

impl TaskStore {
    /// Open (or create) the database file and make sure the schema exists.
    pub fn open(path: &Path) -> StoreResult<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(e) = std::fs::create_dir_all(parent) {
                tracing::warn!("Failed to create database directory {}: {}", parent.display(), e);
            }
        }
        let conn = Connection::open(path)?;
        tracing::info!("Opened task database at {}", path.display());
        Self::with_connection(conn)
    }

    /// Throwaway in-memory database.
    pub fn open_in_memory() -> StoreResult<Self> {
        Self::with_connection(Connection::open_in_memory()?)
    }

    fn with_connection(conn: Connection) -> StoreResult<Self> {
        conn.execute_batch(SCHEMA)?;
        Ok(Self {
            conn: Mutex::new(conn),
        })
    }

    fn conn(&self) -> StoreResult<MutexGuard<'_, Connection>> {
        self.conn.lock().map_err(|_| StoreError::Poisoned)
    }

    fn row_to_task(row: &Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            document_date: row.get(1)?,
            reference_number: row.get(2)?,
            issuing_authority: row.get(3)?,
            summary: row.get(4)?,
            due_date: row.get::<_, Option<NaiveDate>>(5)?,
            note: row.get(6)?,
            tags: row.get(7)?,
            completed: row.get(8)?,
            completed_date: row.get::<_, Option<NaiveDate>>(9)?,
        })
    }

    /// Insert a task and return it with its assigned id.
    pub fn create(&self, new: NewTask) -> StoreResult<Task> {
        let conn = self.conn()?;
        conn.execute(
            "INSERT INTO tasks (document_date, reference_number, issuing_authority, summary, \
             due_date, note, tags) VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7)",
            params![
                new.document_date,
                new.reference_number,
                new.issuing_authority,
                new.summary,
                new.due_date,
                new.note,
                new.tags,
            ],
        )?;
        let id = conn.last_insert_rowid();
        Ok(Task {
            id,
            document_date: new.document_date,
            reference_number: new.reference_number,
            issuing_authority: new.issuing_authority,
            summary: new.summary,
            due_date: new.due_date,
            note: new.note,
            tags: new.tags,
            completed: false,
            completed_date: None,
        })
    }

    /// All tasks, newest first.
    pub fn list(&self) -> StoreResult<Vec<Task>> {
        let conn = self.conn()?;
        let mut stmt = conn.prepare(&format!("SELECT {} FROM tasks ORDER BY id DESC", COLUMNS))?;
        let tasks = stmt
            .query_map([], Self::row_to_task)?
            .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(tasks)
    }

    pub fn get(&self, id: TaskId) -> StoreResult<Option<Task>> {
        let conn = self.conn()?;
        let task = conn
            .query_row(
                &format!("SELECT {} FROM tasks WHERE id = ?1", COLUMNS),
                params![id],
                Self::row_to_task,
            )
            .optional()?;
        Ok(task)
    }

    /// Replace the editable fields. Returns `false` if no such task exists.
    pub fn update(&self, id: TaskId, edit: TaskEdit) -> StoreResult<bool> {
        let conn = self.conn()?;
        let affected = conn.execute(
            "UPDATE tasks SET document_date = ?1, reference_number = ?2, issuing_authority = ?3, \
             summary = ?4, due_date = ?5, note = ?6, tags = ?7 WHERE id = ?8",
            params![
                edit.document_date,
                edit.reference_number,
                edit.issuing_authority,
                edit.summary,
                edit.due_date,
                edit.note,
                edit.tags,
                id,
            ],
        )?;
        Ok(affected > 0)
    }

    /// Mark complete on `date`, or reopen when `date` is `None`. Both fields
    /// change in one statement so `completed_date` tracks `completed`.
    pub fn set_completion(&self, id: TaskId, date: Option<NaiveDate>) -> StoreResult<bool> {
        let conn = self.conn()?;
        let affected = conn.execute(
            "UPDATE tasks SET completed = ?1, completed_date = ?2 WHERE id = ?3",
            params![date.is_some(), date, id],
        )?;
        Ok(affected > 0)
    }

    pub fn delete(&self, id: TaskId) -> StoreResult<bool> {
        let conn = self.conn()?;
        let affected = conn.execute("DELETE FROM tasks WHERE id = ?1", params![id])?;
        Ok(affected > 0)
    }
}
