//! Page - a tiny age-encrypted password store.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use page::cli::output;
use page::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("PAGE_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("page=debug")
        } else {
            EnvFilter::new("page=warn")
        }
    });

    // Logs share stderr with status lines; stdout carries only data
    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        if e.needs_init() {
            output::hint("run: page init");
        }
        std::process::exit(1);
    }
}
