//! Source file classification.
//!
//! The recognized extension set is a closed table, checked by exact match.
//! Anything outside it (images, JSON, markdown, ...) is not an entry and is
//! silently excluded from discovery.

use std::path::Path;

use serde::Serialize;

/// Semantic category of a source file, which picks its compiled extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Kind {
    /// `.js`, `.jsx`, `.ts`, `.tsx` - compiled to `.js`.
    Script,
    /// `.scss`, `.sass` - compiled to `.css`.
    Stylesheet,
}

const EXTENSION_TABLE: &[(&str, Kind)] = &[
    ("js", Kind::Script),
    ("jsx", Kind::Script),
    ("ts", Kind::Script),
    ("tsx", Kind::Script),
    ("scss", Kind::Stylesheet),
    ("sass", Kind::Stylesheet),
];

impl Kind {
    /// Look up a file extension (without the leading dot) in the table.
    pub fn from_extension(ext: &str) -> Option<Kind> {
        EXTENSION_TABLE
            .iter()
            .find(|(candidate, _)| *candidate == ext)
            .map(|(_, kind)| *kind)
    }

    /// Extension of the compiled artifact, without the leading dot.
    pub fn compiled_extension(self) -> &'static str {
        match self {
            Kind::Script => "js",
            Kind::Stylesheet => "css",
        }
    }
}

/// Classify a candidate file, returning its entry name and kind.
///
/// The entry name is the base name with exactly the matched extension
/// stripped: `widgets/button.module.scss` classifies as `button.module`.
/// Returns `None` for unrecognized extensions, extensionless files, and
/// non-UTF-8 file names.
pub fn classify(path: &Path) -> Option<(String, Kind)> {
    let ext = path.extension()?.to_str()?;
    let kind = Kind::from_extension(ext)?;
    let name = path.file_stem()?.to_str()?.to_owned();
    Some((name, kind))
}
