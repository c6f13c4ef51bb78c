use anyhow::Context;
use clap::Parser;
use markerdb::cli::Cli;
use markerdb::cli_handlers;
use std::process;

fn main() {
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();

    let result = cli_handlers::handle_load(&cli)
        .with_context(|| format!("building {}", cli.database.display()));

    if let Err(e) = result {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}
