#[cfg(feature = "cli")]
pub mod cli;
pub mod csv_config;
pub mod toml_config;

use crate::domain::ports::SuiteSource;
use crate::utils::error::Result;
use crate::utils::validation::validate_suite_extension;
use std::path::Path;

pub use csv_config::CsvSuiteFile;
pub use toml_config::TomlSuiteFile;

/// Picks a loader from the file extension (`.toml` or `.csv`).
pub fn suite_source<P: AsRef<Path>>(path: P) -> Result<Box<dyn SuiteSource>> {
    let path = path.as_ref();
    let source: Box<dyn SuiteSource> = match validate_suite_extension("suite_file", path)?.as_str() {
        "csv" => Box::new(CsvSuiteFile::new(path)),
        _ => Box::new(TomlSuiteFile::new(path)),
    };
    Ok(source)
}
