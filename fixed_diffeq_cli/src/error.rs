use std::path::PathBuf;

use fixed_diffeq::DiffeqError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    #[error("DiffeqError: {0}")]
    Diffeq(#[from] DiffeqError),
    #[error("could not read config '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("could not parse config '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: ron::error::SpannedError,
    },
    #[error("IoError: {0}")]
    Io(#[from] std::io::Error),
    #[error("CsvError: {0}")]
    Csv(#[from] csv::Error),
}
