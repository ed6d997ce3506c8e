use anyhow::Result;
use clap::Parser;
use ynabconv_cli::{CommonArgs, OutputFormat, convert, load_config, logging::init_logging};
use ynabconv_ingest::Bank;

/// Convert Länsförsäkringar Excel (CSV) export to YNAB compatible CSV.
#[derive(Parser, Debug)]
#[command(name = "lf2ynab", version)]
struct Cli {
    #[command(flatten)]
    common: CommonArgs,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let cfg = load_config(cli.common.config.as_deref())?;
    init_logging(cfg.log_level()?, cli.common.verbose);

    let summary = convert(Bank::Lansforsakringar, OutputFormat::Csv, &cli.common, &cfg)?;
    if let Some(report) = cli.common.report(&summary) {
        println!("{report}");
    }
    Ok(())
}
