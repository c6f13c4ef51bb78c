//! Tab-delimited table readers. Columns are matched by header name.

use crate::error::Result;
use crate::models::{SequenceRecord, StatusRecord};
use csv::{Reader, ReaderBuilder};
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io;
use std::path::Path;

fn reader_from<R: io::Read>(rdr: R) -> Reader<R> {
    ReaderBuilder::new()
        .delimiter(b'\t')
        .has_headers(true)
        // extra trailing fields are ignored, missing ones fail in serde
        .flexible(true)
        .from_reader(rdr)
}

/// Open a tab-delimited file for record-by-record reading.
pub fn open<P: AsRef<Path>>(path: P) -> Result<Reader<File>> {
    let file = File::open(path)?;
    Ok(reader_from(file))
}

/// Deserialize every record of `rdr`, failing on the first bad one.
pub fn read_all<T, R>(rdr: &mut Reader<R>) -> Result<Vec<T>>
where
    T: DeserializeOwned,
    R: io::Read,
{
    let records = rdr
        .deserialize()
        .collect::<std::result::Result<Vec<T>, _>>()?;
    Ok(records)
}

/// Parse the whole status table into memory, in file order.
pub fn read_status_table<P: AsRef<Path>>(path: P) -> Result<Vec<StatusRecord>> {
    let mut rdr = open(path)?;
    read_all(&mut rdr)
}

/// Iterate the sequence table lazily.
pub fn sequence_records<R: io::Read>(
    rdr: &mut Reader<R>,
) -> impl Iterator<Item = Result<SequenceRecord>> {
    rdr.deserialize().map(|r| r.map_err(Into::into))
}
