//! ynabconv-ingest: canonical transaction record and bank-specific CSV parsers.

pub mod error;
pub mod parsers;
pub mod types;

pub use error::IngestError;
pub use parsers::{
    lansforsakringar::{parse_lansforsakringar_csv, parse_lansforsakringar_reader},
    swedbank::{parse_swedbank_csv, parse_swedbank_reader},
};
pub use types::{Bank, FIELD_NAMES, Transaction};
