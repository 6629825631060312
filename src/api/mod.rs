//! HTTP API: the task page, its form actions and a JSON listing.
//!
//! ## Endpoints
//! - `GET /` - filtered task list with statuses and the report panel
//! - `POST /` - add / edit / complete / undo_complete / delete, then redirect
//! - `GET /api/tasks` - the same read path as JSON
//! - `GET /api/health` - liveness

mod flash;
mod routes;
mod types;
mod view;

pub use routes::{router, serve, AppState};
pub use types::{ListQuery, TaskPage};
