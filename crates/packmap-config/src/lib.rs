//! Build-plan configuration for the packmap bundler.
//!
//! This crate holds the decision logic that runs once per build invocation,
//! before any compilation starts:
//!
//! 1. [`Settings`] snapshots the environment variables that drive a build.
//! 2. [`Roots`] resolves the absolute source and output directories.
//! 3. [`discover`] walks the source root and produces the named entry map.
//! 4. [`resolve_output`] maps each entry's source file to its compiled
//!    output location, either flattened or mirroring the source tree.
//!
//! Everything here is synchronous and single-shot: the caller resolves roots,
//! discovers entries, and computes output paths from a snapshot of the
//! directory tree. Nothing is compiled or written by this crate.

pub mod discovery;
pub mod error;
pub mod kind;
pub mod output;
pub mod paths;
pub mod settings;

// Re-export main types
pub use discovery::{CollisionPolicy, Entry, EntryMap, discover};
pub use error::{ConfigError, Result};
pub use kind::{Kind, classify};
pub use output::{OutputPath, resolve_output};
pub use paths::Roots;
pub use settings::{BuildProfile, BundlingMode, Settings};
