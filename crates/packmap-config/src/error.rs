//! Error types for build-plan configuration.

use std::path::PathBuf;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, ConfigError>;

#[derive(Debug, Error)]
pub enum ConfigError {
    /// Root resolution needs an absolute base to anchor the configured
    /// source and output directories against.
    #[error("project root must be an absolute path: {0}")]
    RelativeProjectRoot(PathBuf),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
