//! Absolute source and output roots for one build invocation.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{ConfigError, Result};
use crate::settings::Settings;

/// The two directories every other path computation is anchored against.
///
/// Both roots are absolute. Their existence is not checked here: a missing
/// source root surfaces later as an empty entry map, not as an error.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Roots {
    pub source_root: PathBuf,
    pub output_root: PathBuf,
}

impl Roots {
    /// Resolve the configured directories against an absolute project root.
    ///
    /// A configured directory that is already absolute passes through
    /// unchanged (`Path::join` semantics).
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::RelativeProjectRoot`] if `project_root` is not
    /// absolute. This is the one genuine configuration failure in this crate;
    /// everything downstream of it is infallible path algebra.
    pub fn resolve(project_root: &Path, settings: &Settings) -> Result<Self> {
        if !project_root.is_absolute() {
            return Err(ConfigError::RelativeProjectRoot(project_root.to_path_buf()));
        }

        Ok(Self {
            source_root: project_root.join(&settings.source_dir),
            output_root: project_root.join(&settings.output_dir),
        })
    }
}
