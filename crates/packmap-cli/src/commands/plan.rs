//! The `plan` command: snapshot the environment, discover entries, and
//! print where each compiled artifact would land.

use std::path::PathBuf;

use anyhow::Result;
use serde::Serialize;
use tracing::{debug, info};

use packmap_config::{
    BuildProfile, BundlingMode, CollisionPolicy, Kind, Roots, Settings, discover, resolve_output,
};

use crate::cli::{OutputFormat, PlanArgs};

/// One entry in the rendered plan, with its output path already joined onto
/// the output root.
#[derive(Debug, Serialize)]
struct PlanEntry {
    name: String,
    kind: Kind,
    source: PathBuf,
    output: PathBuf,
}

#[derive(Debug, Serialize)]
struct BuildPlan {
    profile: BuildProfile,
    mode: BundlingMode,
    source_root: PathBuf,
    output_root: PathBuf,
    entries: Vec<PlanEntry>,
}

pub fn plan_execute(args: PlanArgs) -> Result<()> {
    let mut settings = Settings::from_vars(std::env::vars());
    if let Some(src) = args.src {
        settings.source_dir = src;
    }
    if let Some(dist) = args.dist {
        settings.output_dir = dist;
    }
    if args.flat {
        settings.mode = BundlingMode::Flat;
    }

    let project_root = match args.root {
        Some(root) if root.is_absolute() => root,
        Some(root) => std::env::current_dir()?.join(root),
        None => std::env::current_dir()?,
    };
    let roots = Roots::resolve(&project_root, &settings)?;

    info!(
        source = %roots.source_root.display(),
        mode = %settings.mode,
        "scanning for entries"
    );

    let entry_map = discover(&roots, settings.mode, CollisionPolicy::default());
    debug!(count = entry_map.len(), "discovery finished");

    let mut entries: Vec<PlanEntry> = entry_map
        .into_values()
        .map(|entry| {
            let output = resolve_output(&entry.source_path, &roots, settings.mode, entry.kind);
            PlanEntry {
                name: entry.name,
                kind: entry.kind,
                source: entry.source_path,
                output: roots.output_root.join(output.relative_path()),
            }
        })
        .collect();
    // Display ordering only; the entry map itself stays unordered.
    entries.sort_by(|a, b| a.name.cmp(&b.name));

    let plan = BuildPlan {
        profile: settings.profile,
        mode: settings.mode,
        source_root: roots.source_root,
        output_root: roots.output_root,
        entries,
    };

    match args.format {
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&plan)?),
        OutputFormat::Text => print_text(&plan),
    }

    Ok(())
}

fn print_text(plan: &BuildPlan) {
    println!("profile: {}", plan.profile);
    println!("mode:    {}", plan.mode);
    println!("source:  {}", plan.source_root.display());
    println!("output:  {}", plan.output_root.display());

    if plan.entries.is_empty() {
        println!("no entries discovered");
        return;
    }

    println!();
    for entry in &plan.entries {
        println!(
            "  {}  {} -> {}",
            entry.name,
            entry.source.display(),
            entry.output.display()
        );
    }
}
