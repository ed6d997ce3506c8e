use anyhow::{Context, Result, bail};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::Level;
use ynabconv_export::{CsvOptions, DateFilter};
use ynabconv_ingest::Bank;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    pub output: OutputSection,
    pub log: LogSection,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputSection {
    /// Single ASCII character used between CSV fields
    pub delimiter: String,
    pub header: bool,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LogSection {
    pub level: String,
}

impl Default for OutputSection {
    fn default() -> Self {
        Self {
            delimiter: ",".to_string(),
            header: true,
        }
    }
}

impl Default for LogSection {
    fn default() -> Self {
        Self {
            level: "warn".to_string(),
        }
    }
}

impl Config {
    pub fn delimiter(&self) -> Result<u8> {
        match self.output.delimiter.as_bytes() {
            [b] if b.is_ascii() => Ok(*b),
            _ => bail!(
                "output.delimiter must be a single ASCII character, got {:?}",
                self.output.delimiter
            ),
        }
    }

    pub fn log_level(&self) -> Result<Level> {
        self.log
            .level
            .parse()
            .map_err(|_| anyhow::anyhow!("log.level must be one of error, warn, info, debug, trace; got {:?}", self.log.level))
    }

    pub fn csv_options(&self, bank: Bank, date_filter: DateFilter) -> Result<CsvOptions> {
        Ok(CsvOptions {
            delimiter: self.delimiter()?,
            header: self.output.header,
            ..CsvOptions::for_bank(bank)
        }
        .with_date_filter(date_filter))
    }

    fn validate(self) -> Result<Self> {
        self.delimiter()?;
        self.log_level()?;
        Ok(self)
    }
}

pub fn ynabconv_home() -> Result<PathBuf> {
    let home = std::env::var("HOME").context("HOME is not set")?;
    Ok(PathBuf::from(home).join(".ynabconv"))
}

pub fn config_path() -> Result<PathBuf> {
    Ok(ynabconv_home()?.join("config.toml"))
}

pub fn parse_config(s: &str) -> Result<Config> {
    let cfg: Config = toml::from_str(s).context("parse config")?;
    cfg.validate()
}

/// Load `explicit` if given (it must exist), else `~/.ynabconv/config.toml`
/// when present, else defaults.
pub fn load_config(explicit: Option<&Path>) -> Result<Config> {
    let p = match explicit {
        Some(p) => p.to_path_buf(),
        None => match config_path() {
            Ok(p) if p.exists() => p,
            _ => return Ok(Config::default()),
        },
    };
    let s = fs::read_to_string(&p).with_context(|| format!("read {}", p.display()))?;
    parse_config(&s).with_context(|| format!("invalid config {}", p.display()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let cfg = Config::default();
        assert_eq!(cfg.delimiter().unwrap(), b',');
        assert!(cfg.output.header);
        assert_eq!(cfg.log_level().unwrap(), Level::WARN);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let cfg = parse_config("[output]\nheader = false\n").unwrap();
        assert!(!cfg.output.header);
        assert_eq!(cfg.output.delimiter, ",");
        assert_eq!(cfg.log.level, "warn");
    }

    #[test]
    fn test_semicolon_delimiter_and_debug_level() {
        let cfg = parse_config("[output]\ndelimiter = \";\"\n[log]\nlevel = \"debug\"\n").unwrap();
        assert_eq!(cfg.delimiter().unwrap(), b';');
        assert_eq!(cfg.log_level().unwrap(), Level::DEBUG);
    }

    #[test]
    fn test_bad_delimiter_is_rejected() {
        assert!(parse_config("[output]\ndelimiter = \",,\"\n").is_err());
        assert!(parse_config("[output]\ndelimiter = \"\"\n").is_err());
        assert!(parse_config("[output]\ndelimiter = \"ö\"\n").is_err());
    }

    #[test]
    fn test_bad_level_is_rejected() {
        assert!(parse_config("[log]\nlevel = \"loud\"\n").is_err());
    }

    #[test]
    fn test_csv_options_keep_bank_marker() {
        let cfg = parse_config("[output]\nheader = false\n").unwrap();
        let opts = cfg
            .csv_options(Bank::Lansforsakringar, DateFilter::new(Some("2022")))
            .unwrap();
        assert!(!opts.header);
        assert_eq!(opts.skip_date_marker.as_deref(), Some("Transaktionsdag"));
        assert_eq!(opts.date_filter.as_str(), Some("2022"));
    }

    #[test]
    fn test_missing_explicit_config_is_an_error() {
        let err = load_config(Some(Path::new("/nonexistent/ynabconv.toml"))).unwrap_err();
        assert!(format!("{err:#}").contains("/nonexistent/ynabconv.toml"));
    }
}
