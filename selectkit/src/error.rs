//! Error types.

use thiserror::Error;

/// Failure to load a widget configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid configuration JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("widget id must not be empty")]
    EmptyId,
}

/// Failure to apply a change to a listbox or native select.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SelectError {
    #[error("no option matches value '{0}'")]
    UnknownOption(String),

    #[error("option '{0}' is disabled")]
    DisabledOption(String),

    #[error("clearing the selection is not allowed")]
    ClearNotAllowed,

    #[error("select is disabled")]
    Disabled,
}
