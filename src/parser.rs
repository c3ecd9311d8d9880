//! CSV parser for incident-report feeds.

use anyhow::Result;
use std::collections::HashMap;
use tracing::debug;

use crate::records::IncidentRecord;

/// Parses a CSV document into field-keyed [`IncidentRecord`]s.
///
/// The first row names the fields; each following row is zipped against
/// those names. Quoted fields (including embedded commas) are handled by
/// the csv crate, empty lines are skipped, and rows shorter than the
/// header produce records with the trailing fields absent. Rows the reader
/// cannot decode at all are skipped without aborting the parse.
///
/// # Errors
///
/// Returns an error only when the header row itself cannot be read.
pub fn parse_records(text: &str) -> Result<Vec<IncidentRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .flexible(true)
        .from_reader(text.as_bytes());

    let headers = reader.headers()?.clone();

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = match row {
            Ok(row) => row,
            Err(e) => {
                debug!(line = index + 2, error = %e, "Skipping undecodable CSV row");
                continue;
            }
        };

        let fields: HashMap<String, String> = headers
            .iter()
            .zip(row.iter())
            .map(|(name, value)| (name.to_string(), value.to_string()))
            .collect();

        records.push(IncidentRecord::new(fields));
    }

    Ok(records)
}
