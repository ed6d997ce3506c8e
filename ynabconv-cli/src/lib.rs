//! ynabconv-cli: shared plumbing for the `lf2ynab` and `sb2ynab` executables.

pub mod config;
pub mod convert;
pub mod logging;

pub use config::{Config, load_config};
pub use convert::{CommonArgs, OutputFormat, Summary, convert};
