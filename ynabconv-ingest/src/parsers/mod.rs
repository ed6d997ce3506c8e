//! Shared plumbing for the semicolon-delimited bank exports.

pub mod lansforsakringar;
pub mod swedbank;

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, Reader, ReaderBuilder};
use tracing::warn;

use crate::error::{IngestError, Result};

fn semicolon_builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder.delimiter(b';').has_headers(false).flexible(true);
    builder
}

pub(crate) fn open_export(path: &Path) -> Result<Reader<File>> {
    semicolon_builder()
        .from_path(path)
        .map_err(|source| IngestError::Open {
            path: path.to_path_buf(),
            source,
        })
}

pub(crate) fn export_reader<R: Read>(rdr: R) -> Reader<R> {
    semicolon_builder().from_reader(rdr)
}

/// One decoded input row plus the line it started on.
#[derive(Debug, Clone)]
pub(crate) struct Row {
    pub line: u64,
    pub fields: Vec<String>,
}

impl Row {
    /// Column by zero-based index; a missing column makes the row malformed.
    pub fn field(&self, idx: usize) -> Result<&str> {
        self.fields
            .get(idx)
            .map(String::as_str)
            .ok_or_else(|| self.malformed(format!("expected at least {} columns, found {}", idx + 1, self.fields.len())))
    }

    /// Like `field`, but an empty value is also malformed.
    pub fn amount(&self, idx: usize) -> Result<&str> {
        let value = self.field(idx)?;
        if value.trim().is_empty() {
            return Err(self.malformed(format!("empty amount in column {}", idx + 1)));
        }
        Ok(value)
    }

    pub fn raw(&self) -> String {
        self.fields.join(";")
    }

    fn malformed(&self, reason: String) -> IngestError {
        IngestError::MalformedRow {
            line: self.line,
            reason,
            raw: self.raw(),
        }
    }
}

/// Read every record (the csv reader already drops empty lines), decoding each field as UTF-8 or, failing
/// that, ISO-8859-1.
pub(crate) fn read_rows<R: Read>(mut rdr: Reader<R>) -> Result<Vec<Row>> {
    let mut rows = Vec::new();
    let mut record = ByteRecord::new();
    let mut latin1_fallback = false;

    loop {
        let line = rdr.position().line();
        match rdr.read_byte_record(&mut record) {
            Ok(false) => break,
            Ok(true) => {}
            Err(source) => return Err(IngestError::Read { line, source }),
        }
        let line = record.position().map_or(line, |p| p.line());
        let mut fields: Vec<String> = record
            .iter()
            .map(|bytes| {
                decode_field(bytes).unwrap_or_else(|| {
                    latin1_fallback = true;
                    bytes.iter().map(|&b| char::from(b)).collect()
                })
            })
            .collect();

        if rows.is_empty() {
            if let Some(first) = fields.first_mut() {
                if let Some(stripped) = first.strip_prefix('\u{feff}') {
                    *first = stripped.to_string();
                }
            }
        }
        rows.push(Row { line, fields });
    }

    if latin1_fallback {
        warn!("input is not valid UTF-8; decoded as ISO-8859-1");
    }
    Ok(rows)
}

fn decode_field(bytes: &[u8]) -> Option<String> {
    std::str::from_utf8(bytes).ok().map(str::to_string)
}
