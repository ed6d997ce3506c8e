//! YNAB CSV output: `Date,Payee,Memo,Outflow,Inflow`, CRLF terminated.

use std::io::Write;
use std::path::Path;

use csv::{Terminator, WriterBuilder};
use serde::Serialize;
use tracing::{info, trace};
use ynabconv_ingest::{Bank, FIELD_NAMES, Transaction};

use crate::create_output;
use crate::error::Result;
use crate::filter::DateFilter;
use crate::normalize::{normalize_amount, strip_leading_sign};

/// Column-header text that can leak into the Date field of Länsförsäkringar
/// exports.
pub const LF_HEADER_ARTIFACT: &str = "Transaktionsdag";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CsvOptions {
    pub delimiter: u8,
    pub header: bool,
    pub date_filter: DateFilter,
    /// Rows whose Date contains this text are dropped.
    pub skip_date_marker: Option<String>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            header: true,
            date_filter: DateFilter::all(),
            skip_date_marker: None,
        }
    }
}

impl CsvOptions {
    pub fn for_bank(bank: Bank) -> Self {
        let skip_date_marker = match bank {
            Bank::Lansforsakringar => Some(LF_HEADER_ARTIFACT.to_string()),
            Bank::Swedbank => None,
        };
        Self {
            skip_date_marker,
            ..Self::default()
        }
    }

    pub fn with_date_filter(mut self, date_filter: DateFilter) -> Self {
        self.date_filter = date_filter;
        self
    }

    fn skips(&self, txn: &Transaction) -> bool {
        let artifact = self
            .skip_date_marker
            .as_deref()
            .is_some_and(|marker| txn.date.contains(marker));
        artifact || !self.date_filter.matches(&txn.date)
    }
}

#[derive(Serialize)]
struct OutputRow<'a> {
    date: &'a str,
    payee: &'a str,
    memo: &'a str,
    outflow: String,
    inflow: String,
}

impl<'a> From<&'a Transaction> for OutputRow<'a> {
    fn from(txn: &'a Transaction) -> Self {
        Self {
            date: &txn.date,
            payee: &txn.payee,
            memo: &txn.memo,
            outflow: normalize_amount(strip_leading_sign(&txn.outflow)),
            inflow: normalize_amount(&txn.inflow),
        }
    }
}

/// Write `records` as YNAB CSV to `out`, returning the number of data rows.
///
/// The header (when enabled) is written even if no row survives filtering.
pub fn write_csv_to<W: Write>(records: &[Transaction], out: W, opts: &CsvOptions) -> Result<usize> {
    let mut wtr = WriterBuilder::new()
        .delimiter(opts.delimiter)
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(out);

    if opts.header {
        wtr.write_record(FIELD_NAMES)?;
    }

    let mut written = 0;
    for txn in records {
        if opts.skips(txn) {
            trace!(date = %txn.date, "filtered out");
            continue;
        }
        wtr.serialize(OutputRow::from(txn))?;
        written += 1;
    }
    wtr.flush()?;
    Ok(written)
}

pub fn write_csv(records: &[Transaction], path: impl AsRef<Path>, opts: &CsvOptions) -> Result<usize> {
    let path = path.as_ref();
    let written = write_csv_to(records, create_output(path)?, opts)?;
    info!(path = %path.display(), written, "wrote YNAB CSV");
    Ok(written)
}
