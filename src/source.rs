//! Row source: reads the tabular export into memory.

use std::fs;
use std::path::Path;

use log::warn;

use crate::error::IngestError;
use crate::model::RawRow;

/// Read all rows from the export file.
///
/// The file is decoded as UTF-8, falling back to Latin-1 when that fails
/// (the dataset mixes encodings). encoding_rs maps iso-8859-1 to
/// WINDOWS_1252, which is a superset and decodes every byte.
///
/// A missing or unreadable file is fatal. A record the CSV reader cannot
/// deserialize degrades to an empty row, the validator will skip it and it
/// still counts as read.
pub fn read_rows(path: &Path) -> Result<Vec<RawRow>, IngestError> {
    let bytes = fs::read(path)?;
    let text = match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(err) => {
            warn!("Input is not valid UTF-8, falling back to Latin-1");
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(err.as_bytes());
            decoded.into_owned()
        }
    };

    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());
    // A file whose header row cannot be read is unreadable, not a row error.
    reader.headers()?;

    let mut rows = Vec::new();
    for record in reader.deserialize::<RawRow>() {
        match record {
            Ok(row) => rows.push(row),
            Err(e) => {
                warn!("Unreadable record, keeping as empty row: {}", e);
                rows.push(RawRow::default());
            }
        }
    }
    Ok(rows)
}
