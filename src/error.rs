// SPDX-License-Identifier: PMPL-1.0-or-later
//! Error types for auditbot

use crate::report::Engine;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, AuditError>;

#[derive(Error, Debug)]
pub enum AuditError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("{engine} audit failed: {message}")]
    Engine { engine: Engine, message: String },

    #[error("{engine} audit timed out after {ms}ms")]
    Timeout { engine: Engine, ms: u64 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("URL error: {0}")]
    Url(#[from] url::ParseError),
}

impl AuditError {
    /// Upstream engine failure with a descriptive message
    pub fn engine(engine: Engine, message: impl Into<String>) -> Self {
        AuditError::Engine { engine, message: message.into() }
    }
}
