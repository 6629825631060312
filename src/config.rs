//! Runtime configuration, read from environment variables.
//!
//! - `DOCKET_HOST` - bind address (default `127.0.0.1`)
//! - `DOCKET_PORT` - bind port (default `3000`)
//! - `DOCKET_DATABASE` - SQLite file (default `tasks.db`)
//! - `DOCKET_TODAY` - optional `dd/mm/yyyy`; pins "today" instead of the system date

use std::path::PathBuf;

use anyhow::Context;
use chrono::NaiveDate;

use crate::dates;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    pub database_path: PathBuf,
    pub today_override: Option<NaiveDate>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            database_path: PathBuf::from("tasks.db"),
            today_override: None,
        }
    }
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> anyhow::Result<Self> {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let defaults = Self::default();

        let port = match get("DOCKET_PORT") {
            Some(v) => v
                .trim()
                .parse()
                .with_context(|| format!("DOCKET_PORT must be a port number, got '{}'", v))?,
            None => defaults.port,
        };

        let today_override = get("DOCKET_TODAY")
            .map(|v| dates::parse_date(&v))
            .transpose()
            .context("DOCKET_TODAY must use the dd/mm/yyyy format")?;

        Ok(Self {
            host: get("DOCKET_HOST").unwrap_or(defaults.host),
            port,
            database_path: get("DOCKET_DATABASE")
                .map(PathBuf::from)
                .unwrap_or(defaults.database_path),
            today_override,
        })
    }
}
