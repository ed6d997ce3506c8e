//! Swedbank CSV export parser
//!
//! Every row is a transaction:
//!   SKYDDAT BELOPP;2018-01-01;-46,00;-
//!   Payee;Date;Amount;...

use std::io::Read;
use std::path::Path;

use tracing::debug;

use super::{Row, export_reader, open_export, read_rows};
use crate::error::Result;
use crate::types::Transaction;

fn to_transaction(row: &Row) -> Result<Transaction> {
    let payee = row.field(0)?;
    let date = row.field(1)?;
    let amount = row.amount(2)?;

    Ok(Transaction {
        date: date.to_string(),
        payee: payee.to_string(),
        ..Transaction::default()
    }
    .with_amount(amount))
}

fn parse_rows(rows: Vec<Row>) -> Result<Vec<Transaction>> {
    rows.iter().map(to_transaction).collect()
}

pub fn parse_swedbank_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let txns = parse_rows(read_rows(open_export(path)?)?)?;
    debug!(path = %path.display(), count = txns.len(), "parsed Swedbank export");
    Ok(txns)
}

pub fn parse_swedbank_reader<R: Read>(rdr: R) -> Result<Vec<Transaction>> {
    parse_rows(read_rows(export_reader(rdr))?)
}
