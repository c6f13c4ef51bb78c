use clap::Parser;
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "markerdb")]
#[command(about = "Build the fish status and marker sequence database")]
#[command(version = "0.1.0")]
pub struct Cli {
    /// SQLite database file (replaced if it exists)
    #[arg(long)]
    pub database: PathBuf,

    /// Tab-delimited sequence table with columns accession, title, length,
    /// taxid, scientific_name, common_name, marker, genomic_location
    #[arg(long = "sequence_table")]
    pub sequence_table: PathBuf,

    /// Tab-delimited table of fish status (endemic, native etc.) per region
    #[arg(long = "status_table")]
    pub status_table: PathBuf,
}
