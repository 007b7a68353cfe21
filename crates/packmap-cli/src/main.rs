//! Packmap CLI - build-plan inspection for web bundles.
//!
//! Entry point: parses arguments, initializes logging, and dispatches to the
//! requested command.

use anyhow::Result;
use clap::Parser;
use packmap_cli::{cli, commands, logger};

fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);

    match args.command {
        cli::Command::Plan(plan_args) => commands::plan_execute(plan_args),
    }
}
