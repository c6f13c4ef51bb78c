use crate::cli::Cli;
use crate::db::Database;
use crate::error::Result;
use crate::loader;
use crate::models::LoadSummary;
use crate::tsv;
use tracing::{debug, info};

/// Rebuild the store from both tables
pub fn handle_load(cli: &Cli) -> Result<(LoadSummary, LoadSummary)> {
    Database::create(&cli.database)?.close()?;

    let status = tsv::read_status_table(&cli.status_table)?;
    debug!(records = status.len(), "parsed status table");
    let geography = loader::load_species_geography(&cli.database, &status)?;
    info!(
        records = geography.records,
        rows = geography.rows,
        "species_geography loaded"
    );

    let sequences = loader::load_sequence(&cli.database, &cli.sequence_table)?;
    info!(
        records = sequences.records,
        rows = sequences.rows,
        "sequence and organism loaded"
    );
    Ok((geography, sequences))
}
