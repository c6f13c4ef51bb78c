pub mod cli;
pub mod cli_handlers;
pub mod db;
pub mod error;
pub mod loader;
pub mod models;
pub mod tsv;
pub mod vocab;

pub use error::{LoadError, Result};
pub use models::*;
