use std::path::PathBuf;
use thiserror::Error;

/// All possible errors while building the marker database
#[derive(Error, Debug)]
pub enum LoadError {
    #[error("Database {} not found: {source}", .path.display())]
    StoreOpen {
        path: PathBuf,
        source: rusqlite::Error,
    },

    #[error("Database error: {0}")]
    Db(#[from] rusqlite::Error),

    #[error("Failed to close database: {0}")]
    StoreClose(rusqlite::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Table parse error: {0}")]
    Tsv(#[from] csv::Error),
}

/// Result type alias
pub type Result<T> = std::result::Result<T, LoadError>;
