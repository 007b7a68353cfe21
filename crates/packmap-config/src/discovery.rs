//! Entry discovery.
//!
//! Walks the source root once and turns every recognized source file into a
//! named entry. The walk order is whatever the filesystem yields - unsorted
//! and not guaranteed stable across filesystems - so when two files collide
//! on a name, which one wins is deliberately unspecified.

use std::path::PathBuf;

use rustc_hash::FxHashMap;
use serde::Serialize;
use tracing::debug;
use walkdir::WalkDir;

use crate::kind::{Kind, classify};
use crate::paths::Roots;
use crate::settings::BundlingMode;

/// A named unit of compilation: logical name plus its source file.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Entry {
    pub name: String,
    pub source_path: PathBuf,
    pub kind: Kind,
}

/// Entry map keyed by entry name.
pub type EntryMap = FxHashMap<String, Entry>;

/// What to do when two discovered files share an entry name.
///
/// Kept as an explicit policy so a strict variant can be added later without
/// touching the walk itself.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum CollisionPolicy {
    /// The later file in walk order replaces the earlier one, silently.
    /// Note `foo.js` and `foo.scss` collide too: name derivation strips the
    /// extension, so entries of different kinds share the name `foo`.
    #[default]
    LastWriteWins,
}

/// Scan the source root and build the entry map.
///
/// `Flat` mode lists only direct children of the source root; `Mirrored`
/// mode recurses. Files with unrecognized extensions are skipped. A missing
/// or unreadable source root yields an empty map - "nothing to build" is not
/// an error here; the downstream consumer decides what that means.
///
/// # Example
///
/// ```no_run
/// use packmap_config::{CollisionPolicy, Roots, Settings, discover};
///
/// let settings = Settings::default();
/// let roots = Roots::resolve(std::path::Path::new("/project"), &settings).unwrap();
/// let entries = discover(&roots, settings.mode, CollisionPolicy::default());
/// for entry in entries.values() {
///     println!("{} <- {}", entry.name, entry.source_path.display());
/// }
/// ```
pub fn discover(roots: &Roots, mode: BundlingMode, policy: CollisionPolicy) -> EntryMap {
    let walker = match mode {
        BundlingMode::Flat => WalkDir::new(&roots.source_root).min_depth(1).max_depth(1),
        BundlingMode::Mirrored => WalkDir::new(&roots.source_root).min_depth(1),
    };

    let mut entries = EntryMap::default();
    for dirent in walker.into_iter().filter_map(|res| res.ok()) {
        if !dirent.file_type().is_file() {
            continue;
        }
        let Some((name, kind)) = classify(dirent.path()) else {
            continue;
        };

        let entry = Entry {
            name: name.clone(),
            source_path: dirent.path().to_path_buf(),
            kind,
        };
        match policy {
            CollisionPolicy::LastWriteWins => {
                if let Some(replaced) = entries.insert(name, entry) {
                    debug!(
                        entry = %replaced.name,
                        dropped = %replaced.source_path.display(),
                        "duplicate entry name, keeping the later file"
                    );
                }
            }
        }
    }

    debug!(count = entries.len(), mode = %mode, "entry discovery complete");
    entries
}
