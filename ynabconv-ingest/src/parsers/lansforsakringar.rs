//! Länsförsäkringar CSV export parser
//!
//! The export starts with an account summary and a column header before the
//! transaction table:
//!   "Kontonummer";"Kontonamn";"";"Saldo";"Tillgängligt belopp"
//!   "123456789";"Privatkonto";"";"99 999,99";"11 222,33"
//!
//!   "Bokföringsdatum";"Transaktionsdatum";"Transaktionstyp";"Meddelande";"Belopp"
//!   "2022-01-12";"2022-01-11";"Kortköp";"Wolt,Stockholm,SE";"-164,00"

use std::io::Read;
use std::path::Path;
use std::sync::LazyLock;

use regex::Regex;
use tracing::{debug, trace};

use super::{Row, export_reader, open_export, read_rows};
use crate::error::Result;
use crate::types::Transaction;

static BOOKING_DATE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\d{4}-\d{2}-\d{2}").expect("valid date regex"));

const SWISH_PREFIX: &str = "Swish";

/// True when the transaction type column describes a Swish payment.
///
/// For those rows the bank puts the counterparty in the message column, so
/// payee and memo trade places.
pub fn is_swish_description(description: &str) -> bool {
    description.starts_with(SWISH_PREFIX)
}

fn is_transaction_row(row: &Row) -> bool {
    row.fields
        .first()
        .is_some_and(|booking| BOOKING_DATE_RE.is_match(booking))
}

fn to_transaction(row: &Row) -> Result<Transaction> {
    let date = row.field(1)?;
    let kind = row.field(2)?;
    let message = row.field(3)?;
    let amount = row.amount(4)?;

    let (payee, memo) = if is_swish_description(kind) {
        (kind, message)
    } else {
        (message, "")
    };

    Ok(Transaction {
        date: date.to_string(),
        payee: payee.to_string(),
        memo: memo.to_string(),
        ..Transaction::default()
    }
    .with_amount(amount))
}

fn parse_rows(rows: Vec<Row>) -> Result<Vec<Transaction>> {
    let mut out = Vec::new();
    for row in &rows {
        if !is_transaction_row(row) {
            trace!(line = row.line, "skipping non-transaction row");
            continue;
        }
        out.push(to_transaction(row)?);
    }
    Ok(out)
}

/// Parse a Länsförsäkringar export file, skipping the summary and header rows.
pub fn parse_lansforsakringar_csv(path: impl AsRef<Path>) -> Result<Vec<Transaction>> {
    let path = path.as_ref();
    let txns = parse_rows(read_rows(open_export(path)?)?)?;
    debug!(path = %path.display(), count = txns.len(), "parsed Länsförsäkringar export");
    Ok(txns)
}

/// Same as [`parse_lansforsakringar_csv`] for an in-memory or already open source.
pub fn parse_lansforsakringar_reader<R: Read>(rdr: R) -> Result<Vec<Transaction>> {
    parse_rows(read_rows(export_reader(rdr))?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::IngestError;

    const EXPORT: &str = "\"Kontonummer\";\"Kontonamn\";\"\";\"Saldo\";\"Tillgängligt belopp\"
\"123456789\";\"Privatkonto\";\"\";\"99 999,99\";\"11 222,33\"

\"Bokföringsdatum\";\"Transaktionsdatum\";\"Transaktionstyp\";\"Meddelande\";\"Belopp\"
\"2022-01-12\";\"2022-01-11\";\"Kortköp\";\"Wolt,Stockholm,SE\";\"-164,00\"
\"2022-01-12\";\"2022-01-11\";\"Kortköp\";\"PAYPAL *AMAGICOM AB,35314369001,SE\";\"-53,85\"
\"2022-01-11\";\"2022-01-10\";\"Kortköp\";\"COOP SALUHALLEN,NORRKÖPING,SE\";\"-45,95\"
";

    #[test]
    fn test_parse_skips_summary_and_header() {
        let txns = parse_lansforsakringar_reader(EXPORT.as_bytes()).unwrap();
        assert_eq!(txns.len(), 3);
    }

    #[test]
    fn test_parse_contents() {
        let txns = parse_lansforsakringar_reader(EXPORT.as_bytes()).unwrap();
        let first = &txns[0];
        assert_eq!(first.payee, "Wolt,Stockholm,SE");
        assert_eq!(first.date, "2022-01-11");
        assert_eq!(first.outflow, "-164,00");
        assert_eq!(first.inflow, "");
        assert_eq!(first.memo, "");
        assert_eq!(txns[2].payee, "COOP SALUHALLEN,NORRKÖPING,SE");
    }

    #[test]
    fn test_swish_swaps_payee_and_memo() {
        let input = "\"2022-02-01\";\"2022-02-01\";\"Swish inbetalning ANNA\";\"Middag\";\"250,00\"\n\
                     \"2022-02-02\";\"2022-02-02\";\"Överföring Swish\";\"Hyra\";\"-5 000,00\"\n";
        let txns = parse_lansforsakringar_reader(input.as_bytes()).unwrap();

        assert_eq!(txns[0].payee, "Swish inbetalning ANNA");
        assert_eq!(txns[0].memo, "Middag");
        assert_eq!(txns[0].inflow, "250,00");
        assert_eq!(txns[0].outflow, "");

        // "Swish" must be a prefix, not just present
        assert_eq!(txns[1].payee, "Hyra");
        assert_eq!(txns[1].memo, "");
        assert_eq!(txns[1].outflow, "-5 000,00");
    }

    #[test]
    fn test_swish_predicate() {
        assert!(is_swish_description("Swish betalning"));
        assert!(!is_swish_description("swish betalning"));
        assert!(!is_swish_description("Swi"));
        assert!(!is_swish_description(""));
    }

    #[test]
    fn test_duplicates_are_preserved() {
        let row = "\"2022-01-12\";\"2022-01-11\";\"Kortköp\";\"ICA\";\"-10,00\"\n";
        let input = format!("{row}{row}");
        let txns = parse_lansforsakringar_reader(input.as_bytes()).unwrap();
        assert_eq!(txns.len(), 2);
        assert_eq!(txns[0], txns[1]);
    }

    #[test]
    fn test_delimiter_only_row_is_not_a_transaction() {
        let input = "\"2022-01-12\";\"2022-01-11\";\"Kortköp\";\"ICA\";\"-10,00\"\n;;;;\n";
        let txns = parse_lansforsakringar_reader(input.as_bytes()).unwrap();
        assert_eq!(txns.len(), 1);
    }

    #[test]
    fn test_short_transaction_row_aborts() {
        let input = "\"2022-01-12\";\"2022-01-11\";\"Kortköp\";\"ICA\";\"-10,00\"\n\
                     \"2022-01-13\";\"2022-01-12\";\"Kortköp\"\n";
        let err = parse_lansforsakringar_reader(input.as_bytes()).unwrap_err();
        match err {
            IngestError::MalformedRow { line, raw, .. } => {
                assert_eq!(line, 2);
                assert_eq!(raw, "2022-01-13;2022-01-12;Kortköp");
            }
            other => panic!("expected MalformedRow, got {other:?}"),
        }
    }

    #[test]
    fn test_empty_amount_aborts() {
        let input = "\"2022-01-12\";\"2022-01-11\";\"Kortköp\";\"ICA\";\"\"\n";
        assert!(matches!(
            parse_lansforsakringar_reader(input.as_bytes()),
            Err(IngestError::MalformedRow { .. })
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = parse_lansforsakringar_csv("/nonexistent/lf.csv").unwrap_err();
        assert!(err.to_string().contains("/nonexistent/lf.csv"));
    }
}
