use std::path::Path;

use crate::error::{PrepError, Result};

/// Column holding the text to score.
pub const MESSAGE_COLUMN: &str = "message";

/// Reads the `message` column of a UTF-8 CSV file, one entry per data row.
///
/// Rows too short to reach the column yield an empty message so that the
/// output stays aligned with the input rows.
pub fn read_messages(path: &Path) -> Result<Vec<String>> {
    if !path.is_file() {
        return Err(PrepError::InputNotFound(path.to_path_buf()));
    }
    let is_csv = path
        .extension()
        .map(|ext| ext.eq_ignore_ascii_case("csv"))
        .unwrap_or(false);
    if !is_csv {
        return Err(PrepError::UnsupportedInput(path.to_path_buf()));
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)?;

    let column = reader
        .headers()?
        .iter()
        .position(|h| h.trim_start_matches('\u{feff}') == MESSAGE_COLUMN)
        .ok_or_else(|| PrepError::MissingColumn {
            path: path.to_path_buf(),
            column: MESSAGE_COLUMN.to_string(),
        })?;

    let mut messages = Vec::new();
    for record in reader.records() {
        let record = record?;
        match record.get(column) {
            Some(message) => messages.push(message.to_string()),
            None => {
                log::warn!("Row {} has no '{}' field, writing an empty line", messages.len() + 1, MESSAGE_COLUMN);
                messages.push(String::new());
            }
        }
    }

    log::info!("Read {} messages from {:?}", messages.len(), path);
    Ok(messages)
}
