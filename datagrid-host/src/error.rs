//! Error types

use datagrid::{ConfigError, TableError};
use thiserror::Error;

/// Errors of the demo host.
#[derive(Debug, Error)]
pub enum HostError {
    /// The table configuration was rejected.
    #[error("invalid table configuration: {0}")]
    Config(#[from] ConfigError),

    /// A table operation failed.
    #[error(transparent)]
    Table(#[from] TableError),

    /// A query parameter could not be interpreted by the catalog.
    #[error("invalid query parameter {key}={value}")]
    BadParam {
        /// Parameter name.
        key: String,
        /// Parameter value.
        value: String,
    },

    /// The configuration file is not valid JSON.
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),

    /// Reading input or the configuration file failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Errors parsing a shell command.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShellError {
    #[error("unknown command '{0}' (try 'help')")]
    UnknownCommand(String),

    #[error("'{command}' expects {expected}")]
    MissingArgument {
        command: &'static str,
        expected: &'static str,
    },

    #[error("'{value}' is not a valid {expected}")]
    InvalidArgument {
        value: String,
        expected: &'static str,
    },
}
