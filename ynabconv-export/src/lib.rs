//! ynabconv-export: amount normalization, date filtering and the YNAB CSV / QIF writers

pub mod csv_writer;
pub mod error;
pub mod filter;
pub mod normalize;
pub mod qif_writer;

use std::fs::File;
use std::io::BufWriter;
use std::path::Path;

pub use csv_writer::{CsvOptions, write_csv, write_csv_to};
pub use error::ExportError;
pub use filter::DateFilter;
pub use normalize::{normalize_amount, strip_leading_sign};
pub use qif_writer::{write_qif, write_qif_to};

pub(crate) fn create_output(path: &Path) -> error::Result<BufWriter<File>> {
    File::create(path)
        .map(BufWriter::new)
        .map_err(|source| ExportError::Create {
            path: path.to_path_buf(),
            source,
        })
}
