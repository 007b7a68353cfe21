//! Environment snapshot driving a build plan.
//!
//! The surrounding build never reads `std::env` ambiently: the variables it
//! cares about are captured once into an immutable [`Settings`] value and
//! threaded explicitly into root resolution and entry discovery.

use std::fmt;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// How discovered entries map onto the output tree.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BundlingMode {
    /// Shallow scan of the source root; every output lands directly in the
    /// output root. Entry names must be unique across the whole tree or
    /// later files silently overwrite earlier ones at write time.
    Flat,

    /// Recursive scan; the output tree mirrors the source tree.
    #[default]
    Mirrored,
}

impl fmt::Display for BundlingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BundlingMode::Flat => write!(f, "flat"),
            BundlingMode::Mirrored => write!(f, "mirrored"),
        }
    }
}

/// Build profile, carried in the plan for downstream consumers.
///
/// Does not influence discovery or path mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildProfile {
    #[default]
    Development,
    Production,
}

impl fmt::Display for BuildProfile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BuildProfile::Development => write!(f, "development"),
            BuildProfile::Production => write!(f, "production"),
        }
    }
}

/// Immutable capture of the environment variables a build consumes.
///
/// # Example
///
/// ```
/// use packmap_config::{BundlingMode, Settings};
///
/// let settings = Settings::from_vars([("SRC", "web/src"), ("BUNDLE_FILES", "true")]);
/// assert_eq!(settings.source_dir.as_os_str(), "web/src");
/// assert_eq!(settings.output_dir.as_os_str(), "dist");
/// assert_eq!(settings.mode, BundlingMode::Flat);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Source directory, relative to the project root unless absolute.
    pub source_dir: PathBuf,

    /// Output directory, relative to the project root unless absolute.
    pub output_dir: PathBuf,

    pub mode: BundlingMode,

    pub profile: BuildProfile,
}

impl Default for Settings {
    fn default() -> Self {
        Self::from_vars(std::iter::empty::<(&str, &str)>())
    }
}

impl Settings {
    /// Build settings from an iterator of environment variable pairs.
    ///
    /// Recognized variables:
    /// - `SRC` - source directory (default `src`)
    /// - `DIST` - output directory (default `dist`)
    /// - `BUNDLE_FILES` - exactly `"true"` selects [`BundlingMode::Flat`];
    ///   anything else, including unset, selects [`BundlingMode::Mirrored`]
    /// - `NODE_ENV` - `"production"` selects [`BuildProfile::Production`];
    ///   anything else selects [`BuildProfile::Development`]
    ///
    /// Pure function of its input; unknown variables are ignored.
    pub fn from_vars<I, K, V>(vars: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: AsRef<str>,
    {
        let mut source_dir = None;
        let mut output_dir = None;
        let mut mode = BundlingMode::Mirrored;
        let mut profile = BuildProfile::Development;

        for (key, value) in vars {
            match key.as_ref() {
                "SRC" => source_dir = Some(PathBuf::from(value.as_ref())),
                "DIST" => output_dir = Some(PathBuf::from(value.as_ref())),
                "BUNDLE_FILES" if value.as_ref() == "true" => mode = BundlingMode::Flat,
                "NODE_ENV" if value.as_ref() == "production" => {
                    profile = BuildProfile::Production;
                }
                _ => {}
            }
        }

        Self {
            source_dir: source_dir.unwrap_or_else(|| PathBuf::from("src")),
            output_dir: output_dir.unwrap_or_else(|| PathBuf::from("dist")),
            mode,
            profile,
        }
    }
}
