use anyhow::Result;
use clap::Parser;
use ynabconv_cli::{CommonArgs, OutputFormat, convert, load_config, logging::init_logging};
use ynabconv_ingest::Bank;

/// Convert Swedbank CSV export to YNAB compatible CSV or QIF.
#[derive(Parser, Debug)]
#[command(name = "sb2ynab", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,

    /// Output in QIF format
    #[arg(long)]
    qif: bool,
}

impl Cli {
    fn format(&self) -> OutputFormat {
        if self.qif { OutputFormat::Qif } else { OutputFormat::Csv }
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(cli.common.config.as_deref())?;
    init_logging(cfg.log_level()?, cli.common.verbose);

    let summary = convert(Bank::Swedbank, cli.format(), &cli.common, &cfg)?;
    if let Some(report) = cli.common.report(&summary) {
        println!("{report}");
    }
    Ok(())
}
