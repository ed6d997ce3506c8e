use serde::Serialize;

/// Output column order shared by both bank pipelines.
pub const FIELD_NAMES: [&str; 5] = ["Date", "Payee", "Memo", "Outflow", "Inflow"];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Bank {
    Lansforsakringar,
    Swedbank,
}

impl Bank {
    pub fn name(&self) -> &'static str {
        match self {
            Bank::Lansforsakringar => "Länsförsäkringar",
            Bank::Swedbank => "Swedbank",
        }
    }
}

/// Normalized output of the bank parsers (bank-agnostic).
///
/// Amounts stay as the bank wrote them ("-1 551,10") until a writer
/// normalizes them. Exactly one of `outflow`/`inflow` is non-empty.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Transaction {
    #[serde(rename = "Date")]
    pub date: String,
    #[serde(rename = "Payee")]
    pub payee: String,
    #[serde(rename = "Memo")]
    pub memo: String,
    /// Negative amounts, sign included.
    #[serde(rename = "Outflow")]
    pub outflow: String,
    #[serde(rename = "Inflow")]
    pub inflow: String,
}

impl Transaction {
    /// Route a signed amount into `outflow` (leading `-`) or `inflow`.
    pub fn with_amount(mut self, amount: &str) -> Self {
        if amount.starts_with('-') {
            self.outflow = amount.to_string();
            self.inflow.clear();
        } else {
            self.inflow = amount.to_string();
            self.outflow.clear();
        }
        self
    }

    pub fn is_outflow(&self) -> bool {
        !self.outflow.is_empty()
    }
}
