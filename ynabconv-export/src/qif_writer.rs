//! QIF output for YNAB, one `!Type:Bank` block per transaction.

use std::io::Write;
use std::path::Path;

use tracing::info;
use ynabconv_ingest::Transaction;

use crate::create_output;
use crate::error::Result;
use crate::filter::DateFilter;
use crate::normalize::normalize_amount;

fn write_record<W: Write>(out: &mut W, date: &str, amount: &str, payee: &str) -> std::io::Result<()> {
    write!(out, "!Type:Bank\nD{date}\nT{amount}\nP{payee}\n^\n")
}

/// Write `records` as QIF to `out`, returning the number of blocks written.
///
/// Amounts keep their sign; QIF expresses outflows as negative totals.
pub fn write_qif_to<W: Write>(records: &[Transaction], mut out: W, date_filter: &DateFilter) -> Result<usize> {
    let mut written = 0;
    for txn in records.iter().filter(|t| date_filter.matches(&t.date)) {
        let amount = if txn.is_outflow() {
            normalize_amount(&txn.outflow)
        } else {
            normalize_amount(&txn.inflow)
        };
        write_record(&mut out, &txn.date, &amount, &txn.payee)?;
        written += 1;
    }
    out.flush()?;
    Ok(written)
}

pub fn write_qif(records: &[Transaction], path: impl AsRef<Path>, date_filter: &DateFilter) -> Result<usize> {
    let path = path.as_ref();
    let written = write_qif_to(records, create_output(path)?, date_filter)?;
    info!(path = %path.display(), written, "wrote QIF");
    Ok(written)
}
