//! Command-line interface definition.
//!
//! Defined with clap v4 derive macros. Environment variables (`SRC`, `DIST`,
//! `BUNDLE_FILES`, `NODE_ENV`) are snapshotted at command execution, not
//! here; the flags below override the corresponding variables.

use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

/// Packmap - entry discovery and output planning for web bundles
#[derive(Parser, Debug)]
#[command(
    name = "packmap",
    version,
    about = "Entry discovery and output planning for web bundles",
    long_about = "Packmap scans a source tree, names each qualifying file as a build\n\
                  entry, and computes where its compiled artifact belongs - either\n\
                  flattened into one directory or mirroring the source layout.\n\
                  It produces a plan for a bundler to consume; it compiles nothing."
)]
pub struct Cli {
    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Scan the source tree and print the resulting build plan
    Plan(PlanArgs),
}

#[derive(clap::Args, Debug)]
pub struct PlanArgs {
    /// Project root directory [default: current directory]
    #[arg(long)]
    pub root: Option<PathBuf>,

    /// Source directory, overriding the SRC environment variable
    #[arg(long)]
    pub src: Option<PathBuf>,

    /// Output directory, overriding the DIST environment variable
    #[arg(long)]
    pub dist: Option<PathBuf>,

    /// Flatten every entry into the output root (shallow scan),
    /// overriding BUNDLE_FILES
    #[arg(long)]
    pub flat: bool,

    /// Output format for the plan
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub format: OutputFormat,
}

#[derive(ValueEnum, Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    /// Human-readable listing, sorted by entry name
    Text,
    /// Pretty-printed JSON for tooling
    Json,
}
