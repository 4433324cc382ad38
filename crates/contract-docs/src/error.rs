use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum DocError {
    #[error("Failed to read file: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to parse JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unknown network id {id}: not in the display-name table")]
    UnknownNetwork { id: String },

    #[error("No network defines a contract named {name}")]
    MissingContract { name: String },

    #[error("Include target does not exist: {}", path.display())]
    MissingInclude { path: PathBuf },

    #[error("Include depth exceeded at {}: possible include cycle", path.display())]
    IncludeCycle { path: PathBuf },
}

#[derive(Debug, Clone)]
pub struct Violation {
    pub severity: Severity,
    pub rule: String,
    pub message: String,
    pub location: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Error,
    Warning,
    Info,
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let prefix = match self.severity {
            Severity::Error => "ERROR",
            Severity::Warning => "WARN",
            Severity::Info => "INFO",
        };
        write!(f, "[{prefix}] {}: {}", self.rule, self.message)
    }
}
