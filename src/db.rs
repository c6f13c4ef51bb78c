use crate::error::{LoadError, Result};
use crate::models::{SequenceRecord, SpeciesGeographyRow};
use rusqlite::{Connection, Transaction};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::debug;

/// Indexes built after the status table has been loaded
pub const SPECIES_GEOGRAPHY_INDEXES: &[(&str, &str)] = &[
    ("species_geography", "scientific_name"),
    ("species_geography", "common_name"),
    ("species_geography", "region"),
    ("species_geography", "status"),
];

/// Indexes built after the sequence table has been loaded
pub const SEQUENCE_INDEXES: &[(&str, &str)] = &[
    ("sequence", "taxid"),
    ("sequence", "accession"),
    ("sequence", "seq_marker"),
    ("sequence", "genomic_location"),
    ("organism", "taxid"),
    ("organism", "scientific_name"),
    ("organism", "common_name"),
];

/// Database handle
pub struct Database {
    conn: Connection,
    path: PathBuf,
}

impl Database {
    /// Open a connection to an existing or new store
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref().to_path_buf();
        match Connection::open(&path) {
            Ok(conn) => {
                debug!(path = %path.display(), "opened store");
                Ok(Database { conn, path })
            }
            Err(source) => {
                println!("Database {} not found.", path.display());
                Err(LoadError::StoreOpen { path, source })
            }
        }
    }

    /// Discard any store at `path` and create the empty schema.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        if path.is_file() {
            debug!(path = %path.display(), "removing existing store");
            fs::remove_file(path)?;
        }

        let db = Self::open(path)?;
        db.create_tables()?;
        Ok(db)
    }

    fn create_tables(&self) -> Result<()> {
        // Columns are deliberately untyped.
        self.conn.execute_batch(
            "CREATE TABLE species_geography
                (scientific_name, common_name, region, status);
             CREATE TABLE sequence
                (accession, length, seq_marker, title, genomic_location, taxid);
             CREATE TABLE organism
                (taxid, scientific_name, common_name);",
        )?;
        Ok(())
    }

    /// Path the store was opened at
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Begin a transaction; dropped without `commit` it rolls back.
    pub fn transaction(&mut self) -> Result<Transaction<'_>> {
        self.conn.transaction().map_err(Into::into)
    }

    /// Create `<table>_<column>` indexes
    pub fn create_indexes(&self, indexes: &[(&str, &str)]) -> Result<()> {
        for (table, column) in indexes {
            self.conn.execute(
                &format!("CREATE INDEX {table}_{column} ON {table}({column})"),
                [],
            )?;
        }
        Ok(())
    }

    pub fn row_count(&self, table: &str) -> Result<i64> {
        let count = self
            .conn
            .query_row(&format!("SELECT COUNT(*) FROM {table}"), [], |row| {
                row.get(0)
            })?;
        Ok(count)
    }

    /// Names of all user-created indexes, sorted
    pub fn index_names(&self) -> Result<Vec<String>> {
        let mut stmt = self.conn.prepare(
            "SELECT name FROM sqlite_master
             WHERE type = 'index' AND sql IS NOT NULL
             ORDER BY name",
        )?;

        let names = stmt.query_map([], |row| row.get(0))?;
        names
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(|e| e.into())
    }

    /// Close the connection, surfacing any error from SQLite
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, e)| LoadError::StoreClose(e))
    }
}

// ==================== Row Writers ====================

pub fn insert_species_geography(tx: &Transaction, row: &SpeciesGeographyRow) -> Result<()> {
    let mut stmt = tx.prepare_cached("INSERT INTO species_geography VALUES (?1, ?2, ?3, ?4)")?;
    stmt.execute((
        &row.scientific_name,
        &row.common_name,
        &row.region,
        &row.status,
    ))?;
    Ok(())
}

pub fn insert_sequence(tx: &Transaction, record: &SequenceRecord) -> Result<()> {
    let mut stmt = tx.prepare_cached("INSERT INTO sequence VALUES (?1, ?2, ?3, ?4, ?5, ?6)")?;
    stmt.execute((
        &record.accession,
        &record.length,
        &record.marker,
        &record.title,
        &record.genomic_location,
        &record.taxid,
    ))?;
    Ok(())
}

pub fn insert_organism(tx: &Transaction, record: &SequenceRecord) -> Result<()> {
    let mut stmt = tx.prepare_cached("INSERT INTO organism VALUES (?1, ?2, ?3)")?;
    stmt.execute((&record.taxid, &record.scientific_name, &record.common_name))?;
    Ok(())
}
