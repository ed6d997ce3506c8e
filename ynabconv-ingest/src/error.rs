use std::path::PathBuf;
use thiserror::Error;

/// Failures while reading a bank export.
///
/// Any of these aborts the whole conversion; there is no partial-success mode.
#[derive(Error, Debug)]
pub enum IngestError {
    #[error("cannot open {}: {source}", path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("read error near line {line}: {source}")]
    Read {
        line: u64,
        #[source]
        source: csv::Error,
    },

    /// A transaction row that is missing columns or has no amount.
    #[error("malformed row at line {line} ({reason}): {raw}")]
    MalformedRow {
        line: u64,
        reason: String,
        raw: String,
    },
}

pub type Result<T> = std::result::Result<T, IngestError>;
