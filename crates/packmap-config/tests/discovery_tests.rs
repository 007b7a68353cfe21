//! Filesystem-backed tests for entry discovery and output mapping.
//!
//! These build small source trees in a temp directory and run the same
//! discovery pass the CLI does. Collision tests assert "exactly one entry
//! survives", never a specific winner: walk order is filesystem-dependent.

use std::fs;
use std::path::{Path, PathBuf};

use proptest::prelude::*;
use tempfile::TempDir;

use packmap_config::{
    BundlingMode, CollisionPolicy, Kind, Roots, Settings, discover, resolve_output,
};

/// Create a file (and its parent directories) under `project`.
fn write_file(project: &Path, relative: &str) {
    let path = project.join(relative);
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).unwrap();
    }
    fs::write(&path, "// test fixture\n").unwrap();
}

fn roots_for(project: &Path) -> Roots {
    Roots::resolve(project, &Settings::default()).unwrap()
}

#[test]
fn recognized_files_become_entries() {
    let project = TempDir::new().unwrap();
    write_file(project.path(), "src/app.ts");
    write_file(project.path(), "src/vendor.jsx");
    write_file(project.path(), "src/theme.sass");

    let entries = discover(
        &roots_for(project.path()),
        BundlingMode::Mirrored,
        CollisionPolicy::default(),
    );

    assert_eq!(entries.len(), 3);
    assert_eq!(entries["app"].kind, Kind::Script);
    assert_eq!(entries["vendor"].kind, Kind::Script);
    assert_eq!(entries["theme"].kind, Kind::Stylesheet);
}

#[test]
fn unrecognized_extensions_are_never_present() {
    let project = TempDir::new().unwrap();
    write_file(project.path(), "src/app.ts");
    write_file(project.path(), "src/logo.png");
    write_file(project.path(), "src/data.json");
    write_file(project.path(), "src/notes.md");
    write_file(project.path(), "src/plain.css");

    let entries = discover(
        &roots_for(project.path()),
        BundlingMode::Mirrored,
        CollisionPolicy::default(),
    );

    assert_eq!(entries.len(), 1);
    assert!(entries.contains_key("app"));
}

#[test]
fn flat_mode_scans_only_direct_children() {
    let project = TempDir::new().unwrap();
    write_file(project.path(), "src/app.ts");
    write_file(project.path(), "src/widgets/button.scss");

    let entries = discover(
        &roots_for(project.path()),
        BundlingMode::Flat,
        CollisionPolicy::default(),
    );

    // button.scss is not a direct child of the source root, so it is not an
    // entry at all in flat mode.
    assert_eq!(entries.len(), 1);
    assert!(entries.contains_key("app"));
    assert!(!entries.contains_key("button"));
}

#[test]
fn mirrored_mode_worked_example() {
    let project = TempDir::new().unwrap();
    write_file(project.path(), "src/app.ts");
    write_file(project.path(), "src/widgets/button.scss");

    let roots = roots_for(project.path());
    let entries = discover(&roots, BundlingMode::Mirrored, CollisionPolicy::default());

    assert_eq!(entries.len(), 2);
    assert_eq!(entries["app"].source_path, project.path().join("src/app.ts"));
    assert_eq!(
        entries["button"].source_path,
        project.path().join("src/widgets/button.scss")
    );

    let app = resolve_output(
        &entries["app"].source_path,
        &roots,
        BundlingMode::Mirrored,
        entries["app"].kind,
    );
    assert_eq!(app.relative_path(), PathBuf::from("app.js"));

    let button = resolve_output(
        &entries["button"].source_path,
        &roots,
        BundlingMode::Mirrored,
        entries["button"].kind,
    );
    assert_eq!(
        button.relative_path(),
        PathBuf::from("widgets").join("button.css")
    );
}

#[test]
fn colliding_names_yield_exactly_one_entry() {
    let project = TempDir::new().unwrap();
    write_file(project.path(), "src/a/x.js");
    write_file(project.path(), "src/b/x.ts");

    let entries = discover(
        &roots_for(project.path()),
        BundlingMode::Mirrored,
        CollisionPolicy::LastWriteWins,
    );

    // Exactly one survives; which one is walk-order dependent and
    // deliberately not asserted.
    assert_eq!(entries.len(), 1);
    let survivor = &entries["x"];
    assert!(
        survivor.source_path == project.path().join("src/a/x.js")
            || survivor.source_path == project.path().join("src/b/x.ts")
    );
}

#[test]
fn same_stem_across_kinds_also_collides() {
    let project = TempDir::new().unwrap();
    write_file(project.path(), "src/foo.js");
    write_file(project.path(), "src/foo.scss");

    let entries = discover(
        &roots_for(project.path()),
        BundlingMode::Mirrored,
        CollisionPolicy::default(),
    );

    // Name derivation strips the extension, so a script and a stylesheet
    // with the same stem share one key.
    assert_eq!(entries.len(), 1);
    assert!(entries.contains_key("foo"));
}

#[test]
fn discovery_is_idempotent_on_an_unchanged_tree() {
    let project = TempDir::new().unwrap();
    write_file(project.path(), "src/app.ts");
    write_file(project.path(), "src/widgets/button.scss");
    write_file(project.path(), "src/widgets/card.module.scss");

    let roots = roots_for(project.path());
    let first = discover(&roots, BundlingMode::Mirrored, CollisionPolicy::default());
    let second = discover(&roots, BundlingMode::Mirrored, CollisionPolicy::default());

    assert_eq!(first.len(), second.len());
    for (name, entry) in &first {
        assert_eq!(second[name].source_path, entry.source_path);
    }
}

#[test]
fn missing_source_root_yields_an_empty_map() {
    let project = TempDir::new().unwrap();
    // No src/ directory at all.
    let entries = discover(
        &roots_for(project.path()),
        BundlingMode::Mirrored,
        CollisionPolicy::default(),
    );
    assert!(entries.is_empty());
}

#[test]
fn empty_source_root_yields_an_empty_map() {
    let project = TempDir::new().unwrap();
    fs::create_dir(project.path().join("src")).unwrap();
    let entries = discover(
        &roots_for(project.path()),
        BundlingMode::Flat,
        CollisionPolicy::default(),
    );
    assert!(entries.is_empty());
}

#[test]
fn directories_with_source_like_names_are_not_entries() {
    let project = TempDir::new().unwrap();
    fs::create_dir_all(project.path().join("src/lib.ts")).unwrap();
    write_file(project.path(), "src/lib.ts/inner.png");

    let entries = discover(
        &roots_for(project.path()),
        BundlingMode::Mirrored,
        CollisionPolicy::default(),
    );
    assert!(entries.is_empty());
}

const RECOGNIZED: &[&str] = &["js", "jsx", "ts", "tsx", "scss", "sass"];

proptest! {
    /// N files with distinct stems produce exactly N entries, whatever mix
    /// of recognized extensions they use.
    #[test]
    fn distinct_stems_map_one_to_one(
        stems in prop::collection::hash_set("[a-z][a-z0-9]{0,7}", 0..12)
    ) {
        let project = TempDir::new().unwrap();
        fs::create_dir(project.path().join("src")).unwrap();
        for (i, stem) in stems.iter().enumerate() {
            let ext = RECOGNIZED[i % RECOGNIZED.len()];
            write_file(project.path(), &format!("src/{stem}.{ext}"));
        }

        let entries = discover(
            &roots_for(project.path()),
            BundlingMode::Mirrored,
            CollisionPolicy::default(),
        );

        prop_assert_eq!(entries.len(), stems.len());
        for stem in &stems {
            prop_assert!(entries.contains_key(stem.as_str()));
        }
    }
}
