//! Output-path resolution.
//!
//! Pure path algebra: given an entry's source file, compute where its
//! compiled artifact belongs relative to the output root. Nothing here
//! touches the filesystem; the downstream writer creates directories.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::kind::Kind;
use crate::paths::Roots;
use crate::settings::BundlingMode;

/// Destination of one compiled artifact, relative to the output root.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutputPath {
    /// Directory under the output root; empty means the root itself.
    pub directory: PathBuf,
    /// `<entry name>.<compiled extension>`.
    pub filename: String,
}

impl OutputPath {
    /// The full path relative to the output root.
    pub fn relative_path(&self) -> PathBuf {
        self.directory.join(&self.filename)
    }
}

/// Compute the output location for one source file.
///
/// In `Flat` mode every artifact lands directly in the output root, whatever
/// its original nesting; two entries with the same name then overwrite each
/// other at write time, so flat builds need globally unique entry names. In
/// `Mirrored` mode the source file's directory, relative to the source root,
/// is preserved verbatim. A source path outside the source root degrades to
/// the output root rather than escaping it.
pub fn resolve_output(
    source_path: &Path,
    roots: &Roots,
    mode: BundlingMode,
    kind: Kind,
) -> OutputPath {
    let directory = match mode {
        BundlingMode::Flat => PathBuf::new(),
        BundlingMode::Mirrored => source_path
            .parent()
            .and_then(|dir| dir.strip_prefix(&roots.source_root).ok())
            .map(Path::to_path_buf)
            .unwrap_or_default(),
    };

    let name = source_path
        .file_stem()
        .and_then(|stem| stem.to_str())
        .unwrap_or_default();

    OutputPath {
        directory,
        filename: format!("{name}.{}", kind.compiled_extension()),
    }
}
