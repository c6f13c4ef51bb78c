//! Table loaders. Each loader owns one connection for its duration.
//!
//! The status loader commits after every input record, the sequence loader
//! commits once at the end of the file. A failure part way through therefore
//! leaves the earlier status records in the store but no sequence rows.

use crate::db::{self, Database, SEQUENCE_INDEXES, SPECIES_GEOGRAPHY_INDEXES};
use crate::error::Result;
use crate::models::{LoadSummary, StatusRecord};
use crate::tsv;
use std::path::Path;
use tracing::debug;

/// Load parsed status records into `species_geography`, then index it.
pub fn load_species_geography<P: AsRef<Path>>(
    db_path: P,
    records: &[StatusRecord],
) -> Result<LoadSummary> {
    let mut db = Database::open(db_path)?;
    let mut summary = LoadSummary::default();

    for record in records {
        let rows = record.expand();
        debug!(
            scientific_name = %record.scientific_name(),
            terms = rows.len(),
            "expanding status record"
        );

        let tx = db.transaction()?;
        for row in &rows {
            db::insert_species_geography(&tx, row)?;
        }
        tx.commit()?;

        summary.records += 1;
        summary.rows += rows.len();
    }
    println!("Species geography table creation done");

    db.create_indexes(SPECIES_GEOGRAPHY_INDEXES)?;
    println!("Indexing done");

    let stored = db.row_count("species_geography")?;
    let indexes = db.index_names()?;
    debug!(
        path = %db.path().display(),
        stored,
        ?indexes,
        "species_geography indexed"
    );
    db.close()?;
    Ok(summary)
}

/// Load the sequence table into `sequence` and `organism`, then index both.
///
/// Every input record yields one row in each table; organisms are not
/// deduplicated by taxid.
pub fn load_sequence<P: AsRef<Path>, Q: AsRef<Path>>(
    db_path: P,
    sequence_table: Q,
) -> Result<LoadSummary> {
    let mut db = Database::open(db_path)?;
    let mut rdr = tsv::open(sequence_table)?;
    let mut summary = LoadSummary::default();

    let tx = db.transaction()?;
    for record in tsv::sequence_records(&mut rdr) {
        let record = record?;
        db::insert_sequence(&tx, &record)?;
        db::insert_organism(&tx, &record)?;
        summary.records += 1;
    }
    tx.commit()?;
    summary.rows = summary.records;
    println!("Sequence table creation done");
    println!("Organism table creation done");

    db.create_indexes(SEQUENCE_INDEXES)?;
    println!("Indexing done");

    let sequences = db.row_count("sequence")?;
    let organisms = db.row_count("organism")?;
    let indexes = db.index_names()?;
    debug!(
        path = %db.path().display(),
        sequences,
        organisms,
        ?indexes,
        "sequence and organism indexed"
    );
    db.close()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LoadError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    const SEQUENCE_HEADER: &str =
        "accession\ttitle\tlength\ttaxid\tscientific_name\tcommon_name\tmarker\tgenomic_location\n";

    fn setup_test() -> (TempDir, PathBuf) {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("fish.db");
        Database::create(&db_path).unwrap().close().unwrap();
        (temp_dir, db_path)
    }

    fn status(genus: &str, species: &str, status: &str) -> StatusRecord {
        StatusRecord {
            genus: genus.to_string(),
            species: species.to_string(),
            subspecies: String::new(),
            common_name: format!("{genus} fish"),
            status: status.to_string(),
            region: "Great Lakes Basin".to_string(),
        }
    }

    #[test]
    fn test_row_count_is_sum_of_terms() {
        let (_temp, path) = setup_test();
        let records = vec![
            status("Esox", "lucius", "N/I"),
            status("Perca", "flavescens", "N"),
            status("Salmo", "trutta", "NN/I/W"),
        ];
        let summary = load_species_geography(&path, &records).unwrap();
        assert_eq!(summary, LoadSummary { records: 3, rows: 6 });

        let db = Database::open(&path).unwrap();
        assert_eq!(db.row_count("species_geography").unwrap(), 6);
        assert_eq!(db.index_names().unwrap().len(), 4);
    }

    #[test]
    fn test_region_stored_as_raw_text() {
        let (_temp, path) = setup_test();
        load_species_geography(&path, &[status("Esox", "lucius", "N")]).unwrap();

        let conn = rusqlite::Connection::open(&path).unwrap();
        let (region, kind): (String, String) = conn
            .query_row(
                "SELECT region, typeof(region) FROM species_geography",
                [],
                |row| Ok((row.get(0)?, row.get(1)?)),
            )
            .unwrap();
        assert_eq!(region, "Great Lakes Basin");
        assert_eq!(kind, "text");
    }

    #[test]
    fn test_sequence_rows_in_input_order() {
        let (temp, path) = setup_test();
        let table = temp.path().join("seq.tsv");
        fs::write(
            &table,
            format!(
                "{SEQUENCE_HEADER}\
                 AB1\tt1\t100\t8035\tEsox lucius\tNorthern Pike\tCOI\tmitochondrion\n\
                 AB2\tt2\t200\t8035\tEsox lucius\tNorthern Pike\tCYTB\tmitochondrion\n"
            ),
        )
        .unwrap();

        let summary = load_sequence(&path, &table).unwrap();
        assert_eq!(summary.records, 2);

        let conn = rusqlite::Connection::open(&path).unwrap();
        let mut stmt = conn
            .prepare("SELECT accession, length, typeof(length) FROM sequence ORDER BY rowid")
            .unwrap();
        let rows: Vec<(String, String, String)> = stmt
            .query_map([], |row| Ok((row.get(0)?, row.get(1)?, row.get(2)?)))
            .unwrap()
            .collect::<std::result::Result<_, _>>()
            .unwrap();
        assert_eq!(
            rows[0],
            ("AB1".to_string(), "100".to_string(), "text".to_string())
        );
        assert_eq!(rows[1].0, "AB2");

        // one organism row per sequence, duplicates kept
        let organisms: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM organism WHERE taxid = '8035'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert_eq!(organisms, 2);
    }

    #[test]
    fn test_sequence_row_with_trailing_field_loads() {
        let (temp, path) = setup_test();
        let table = temp.path().join("seq.tsv");
        fs::write(
            &table,
            format!(
                "{SEQUENCE_HEADER}\
                 AB123\tmito genome\t16500\t8035\tEsox lucius\tNorthern Pike\tCOI\tmitochondrion\t\n"
            ),
        )
        .unwrap();

        let summary = load_sequence(&path, &table).unwrap();
        assert_eq!(summary, LoadSummary { records: 1, rows: 1 });

        let db = Database::open(&path).unwrap();
        assert_eq!(db.row_count("sequence").unwrap(), 1);
        assert_eq!(db.row_count("organism").unwrap(), 1);
    }

    #[test]
    fn test_status_row_with_trailing_field_loads() {
        let (temp, path) = setup_test();
        let table = temp.path().join("status.tsv");
        fs::write(
            &table,
            "Genus\tSpecies\tSubspecies\tCommon name\tStatus\tRegion\n\
             Esox\tlucius\t\tNorthern Pike\tN/I\tNorth America\t\n",
        )
        .unwrap();

        let records = tsv::read_status_table(&table).unwrap();
        let summary = load_species_geography(&path, &records).unwrap();
        assert_eq!(summary, LoadSummary { records: 1, rows: 2 });
    }

    #[test]
    fn test_bad_sequence_row_leaves_no_sequence_rows() {
        let (temp, path) = setup_test();
        let table = temp.path().join("seq.tsv");
        fs::write(
            &table,
            format!(
                "{SEQUENCE_HEADER}\
                 AB1\tt1\t100\t8035\tEsox lucius\tNorthern Pike\tCOI\tmitochondrion\n\
                 AB2\tt2\n"
            ),
        )
        .unwrap();

        let result = load_sequence(&path, &table);
        assert!(matches!(result, Err(LoadError::Tsv(_))));

        let db = Database::open(&path).unwrap();
        assert_eq!(db.row_count("sequence").unwrap(), 0);
        assert_eq!(db.row_count("organism").unwrap(), 0);
    }
}
