//! # Docket
//!
//! A single-user tracker for incoming administrative documents: what arrived,
//! when it is due, and whether it has been handled.
//!
//! ## Request Flow
//!
//! ```text
//!   POST /  ──► ActionForm ──► Action ──► TaskStore ──► 303 + flash
//!
//!   GET /   ──► TaskStore::list ──► TaskFilter ──► TaskView (status)
//!                      │                                │
//!                      └──────► TaskStats ──────────────┴──► HTML / JSON
//! ```
//!
//! ## Modules
//! - `task`: task record, field extraction, status, filtering, statistics
//! - `store`: SQLite persistence
//! - `actions`: form validation and mutations
//! - `api`: HTTP routes and page rendering
//! - `clock`: injectable "today"

pub mod actions;
pub mod api;
pub mod clock;
pub mod config;
pub mod dates;
pub mod store;
pub mod task;

pub use config::Config;
pub use store::TaskStore;
