//! Centralized configuration (environment variables + defaults).
//!
//! Values are read once into [`Settings`] and handed to the stores and the
//! server explicitly.

use anyhow::{Context, Result};
use std::net::SocketAddr;
use std::path::PathBuf;

pub const AUTHORS_FILE: &str = "authors.json";
pub const BOOKS_FILE: &str = "books.json";

/// Runtime settings for the service.
#[derive(Debug, Clone)]
pub struct Settings {
    /// Directory holding the backing documents.
    pub database_path: PathBuf,
    pub bind_addr: SocketAddr,
    /// Hold a per-document writer lock across read -> decide -> write.
    pub serialize_writes: bool,
    pub query_depth_limit: usize,
}

impl Settings {
    /// Loads `.env` (if present) and reads every setting from the environment.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Ok(Self {
            database_path: database_path(),
            bind_addr: bind_addr()?,
            serialize_writes: serialize_writes()?,
            query_depth_limit: query_depth_limit()?,
        })
    }

    /// Settings rooted at `database_path` with every other value at its default.
    pub fn with_database_path(database_path: impl Into<PathBuf>) -> Self {
        Self {
            database_path: database_path.into(),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            serialize_writes: true,
            query_depth_limit: 3,
        }
    }

    pub fn authors_path(&self) -> PathBuf {
        self.database_path.join(AUTHORS_FILE)
    }

    pub fn books_path(&self) -> PathBuf {
        self.database_path.join(BOOKS_FILE)
    }
}

/// Directory of the backing documents (default `app/db`).
pub fn database_path() -> PathBuf {
    PathBuf::from(env_string("DATABASE_PATH", "app/db"))
}

/// Listen address (default `0.0.0.0:8000`).
pub fn bind_addr() -> Result<SocketAddr> {
    env_string("BIND_ADDR", "0.0.0.0:8000")
        .parse::<SocketAddr>()
        .context("BIND_ADDR must be a valid host:port")
}

/// Writer lock toggle (default `true`). `false` restores the unguarded legacy behavior.
pub fn serialize_writes() -> Result<bool> {
    parse_bool(&env_string("SERIALIZE_WRITES", "true"))
        .context("SERIALIZE_WRITES must be true or false")
}

/// Maximum GraphQL selection depth (default 3).
pub fn query_depth_limit() -> Result<usize> {
    env_string("QUERY_DEPTH_LIMIT", "3")
        .parse::<usize>()
        .context("QUERY_DEPTH_LIMIT must be a positive integer")
}

fn env_string(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

fn parse_bool(raw: &str) -> Result<bool> {
    match raw.trim().to_lowercase().as_str() {
        "true" | "1" | "yes" | "on" => Ok(true),
        "false" | "0" | "no" | "off" => Ok(false),
        other => Err(anyhow::anyhow!("invalid boolean: {other:?}")),
    }
}
