//! CSV to JSON conversion shell.
//!
//! Reads every row into memory, assembles one [`PaperRecord`] per row in
//! source order, and only then writes the JSON document. A failure while
//! reading leaves any existing output file untouched.

use crate::error::{ReadingLogError, Result};
use crate::headers::HeaderIndex;
use crate::record::PaperRecord;
use csv::{ReaderBuilder, StringRecord};
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info};

/// Convert CSV text from any reader into records, preserving row order
pub fn read_records<R: Read>(reader: R) -> Result<Vec<PaperRecord>> {
    let mut rdr = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(reader);

    let index = HeaderIndex::new(rdr.headers()?);
    for field in index.missing() {
        debug!(header = field.header(), "Column not found, field will be empty");
    }

    let mut records = Vec::new();
    let mut row = StringRecord::new();
    let mut row_index = 0usize;
    while rdr.read_record(&mut row)? {
        row_index += 1;
        let record = PaperRecord::from_row(&index, &row, row_index);
        debug!(row = row_index, id = %record.id, "Assembled record");
        records.push(record);
    }

    info!("Read {} rows", records.len());
    Ok(records)
}

/// Read and convert a CSV file
pub fn read_records_from_path(path: &Path) -> Result<Vec<PaperRecord>> {
    let file = File::open(path).map_err(|source| ReadingLogError::Input {
        path: path.to_path_buf(),
        source,
    })?;
    read_records(file)
}

/// Render records as a 2-space indented JSON array
pub fn render_json(records: &[PaperRecord]) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

/// Write records to `path`, replacing any existing file
pub fn write_json(path: &Path, records: &[PaperRecord]) -> Result<()> {
    let content = render_json(records)?;
    std::fs::write(path, content).map_err(|source| ReadingLogError::Output {
        path: path.to_path_buf(),
        source,
    })?;
    info!("Saved {} records to {:?}", records.len(), path);
    Ok(())
}

/// Convert the CSV at `input` into the JSON document at `output`.
///
/// Returns the number of records written.
pub fn convert_file(input: &Path, output: &Path) -> Result<usize> {
    let records = read_records_from_path(input)?;
    write_json(output, &records)?;
    Ok(records.len())
}
