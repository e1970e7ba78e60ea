use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use csv::ReaderBuilder;
use tracing::debug;

use formulary_model::Row;

use crate::error::{Result, SourceError};
use crate::provider::RowSource;

/// Reads the working-set CSV export of the upstream spreadsheet.
///
/// The header row supplies field names (BOM stripped, otherwise verbatim);
/// every subsequent record becomes one [`Row`]. Cell values are carried
/// unchanged. Records shorter than the header are padded with empty cells,
/// and fully empty records are dropped.
#[derive(Debug, Clone)]
pub struct CsvRowSource {
    path: PathBuf,
}

impl CsvRowSource {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl RowSource for CsvRowSource {
    fn fetch_rows(&self) -> Result<Vec<Row>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(false)
            .flexible(true)
            .from_path(&self.path)
            .map_err(|error| open_error(&self.path, &error))?;

        let mut records = reader.records();
        let headers: Vec<String> = match records.next() {
            Some(record) => record
                .map_err(|error| read_error(&self.path, &error))?
                .iter()
                .map(strip_bom)
                .collect(),
            None => return Ok(Vec::new()),
        };

        let mut rows = Vec::new();
        let mut skipped = 0usize;
        for record in records {
            let record = record.map_err(|error| read_error(&self.path, &error))?;
            if record.iter().all(|cell| cell.trim().is_empty()) {
                skipped += 1;
                continue;
            }
            let cells = headers.iter().enumerate().map(|(idx, header)| {
                let value = record.get(idx).unwrap_or("");
                (header.clone(), value.to_string())
            });
            rows.push(Row::from_pairs(cells));
        }
        debug!(
            path = %self.path.display(),
            row_count = rows.len(),
            skipped_empty = skipped,
            "fetched rows"
        );
        Ok(rows)
    }
}

fn strip_bom(raw: &str) -> String {
    raw.trim_start_matches('\u{feff}').to_string()
}

fn read_error(path: &Path, error: &csv::Error) -> SourceError {
    SourceError::Unavailable {
        reason: format!("read record from {}: {error}", path.display()),
    }
}

fn open_error(path: &Path, error: &csv::Error) -> SourceError {
    let denied = matches!(
        error.kind(),
        csv::ErrorKind::Io(io) if io.kind() == ErrorKind::PermissionDenied
    );
    if denied {
        SourceError::AuthorizationFailed {
            reason: format!("open {}: permission denied", path.display()),
        }
    } else {
        SourceError::Unavailable {
            reason: format!("open {}: {error}", path.display()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_is_unavailable() {
        let source = CsvRowSource::new("/nonexistent/drug.csv");
        let error = source.fetch_rows().expect_err("missing file");
        assert!(matches!(error, SourceError::Unavailable { .. }));
    }
}
