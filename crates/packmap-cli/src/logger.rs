//! Logging setup for the packmap CLI.
//!
//! Structured logging via the `tracing` ecosystem. Verbosity is controlled
//! by the global flags, with `RUST_LOG` as an escape hatch for custom
//! filters.

use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber.
///
/// Call once at startup, before any logging occurs. Level selection order:
/// `--verbose` (debug for packmap crates), `--quiet` (errors only), the
/// `RUST_LOG` environment variable, then the info-level default.
pub fn init_logger(verbose: bool, quiet: bool, no_color: bool) {
    let filter = if verbose {
        EnvFilter::new("packmap=debug,packmap_config=debug,packmap_cli=debug")
    } else if quiet {
        EnvFilter::new("packmap=error,packmap_config=error,packmap_cli=error")
    } else {
        EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("packmap=info,packmap_config=info,packmap_cli=info"))
    };

    // Logs go to stderr; stdout is reserved for the rendered plan so it can
    // be piped into other tools.
    let fmt_layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false)
        .with_level(true)
        .with_ansi(!no_color)
        .compact();

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .init();
}
