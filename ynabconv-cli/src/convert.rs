use anyhow::{Context, Result};
use clap::Args;
use std::fmt;
use std::path::PathBuf;
use tracing::debug;
use ynabconv_export::{DateFilter, write_csv, write_qif};
use ynabconv_ingest::{Bank, Transaction, parse_lansforsakringar_csv, parse_swedbank_csv};

use crate::config::Config;

/// Arguments shared by both executables.
#[derive(Args, Debug)]
pub struct CommonArgs {
    /// Input file exported from the bank
    pub input: PathBuf,

    /// Output file for YNAB
    pub output: PathBuf,

    /// Only keep dates containing this text, e.g. 2018-01
    #[arg(short, long)]
    pub whitelist: Option<String>,

    /// Do not print the read/written summary
    #[arg(short, long)]
    pub quiet: bool,

    /// Config file (default: ~/.ynabconv/config.toml)
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Log more to stderr (repeat for more detail)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl CommonArgs {
    /// The summary to print on stdout, or nothing under `--quiet`.
    pub fn report(&self, summary: &Summary) -> Option<String> {
        (!self.quiet).then(|| summary.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Csv,
    Qif,
}

/// Rows read from the input and rows written to the output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Summary {
    pub read: usize,
    pub input: PathBuf,
    pub written: usize,
    pub output: PathBuf,
}

impl fmt::Display for Summary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "R:{} <- {}\nW:{} -> {}",
            self.read,
            self.input.display(),
            self.written,
            self.output.display()
        )
    }
}

fn parse(bank: Bank, args: &CommonArgs) -> Result<Vec<Transaction>> {
    let txns = match bank {
        Bank::Lansforsakringar => parse_lansforsakringar_csv(&args.input),
        Bank::Swedbank => parse_swedbank_csv(&args.input),
    };
    txns.with_context(|| format!("parsing {} export {}", bank.name(), args.input.display()))
}

/// Parse the whole export, then write it in `format`.
pub fn convert(bank: Bank, format: OutputFormat, args: &CommonArgs, cfg: &Config) -> Result<Summary> {
    let txns = parse(bank, args)?;
    let date_filter = DateFilter::new(args.whitelist.as_deref());
    debug!(read = txns.len(), filter = ?date_filter.as_str(), ?format, "converting");

    let written = match format {
        OutputFormat::Csv => write_csv(&txns, &args.output, &cfg.csv_options(bank, date_filter)?),
        OutputFormat::Qif => write_qif(&txns, &args.output, &date_filter),
    }
    .with_context(|| format!("writing {}", args.output.display()))?;

    Ok(Summary {
        read: txns.len(),
        input: args.input.clone(),
        written,
        output: args.output.clone(),
    })
}
