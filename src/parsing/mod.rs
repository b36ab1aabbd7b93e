//! Loading of instance lists and solver result files
//!
//! Both file kinds are headerless, `;` separated tables. Files ending in `.zst`
//! are decompressed on the fly.

pub mod instances;
pub mod results;
pub mod table_reader;

pub use instances::{load_instances, parse_instances};
pub use results::{load_results, parse_results, split_combined_results, ResultsByAlgorithm};

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur during file parsing
#[derive(Error, Debug)]
pub enum ParsingError {
    #[error("Failed to read {}: {source}", path.display())]
    FileRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to decompress zstd file {}: {message}", path.display())]
    Decompression { path: PathBuf, message: String },

    #[error("Malformed table in {}: {source}", path.display())]
    Csv {
        path: PathBuf,
        #[source]
        source: csv::Error,
    },

    #[error("Invalid record in {} at line {line}: {message}", path.display())]
    InvalidRecord {
        path: PathBuf,
        line: u64,
        message: String,
    },
}

type Result<T> = core::result::Result<T, ParsingError>;
