//! Module errors

use thiserror::Error;

/// Represents the different types of errors that can occur while sampling or exporting.
#[derive(Error, Debug)]
pub enum SamplerError {
    /// The window is not full yet.
    #[error("Data not ready: {len} of {capacity} samples collected")]
    DataNotReady { len: usize, capacity: usize },

    /// The accelerometer could not be read.
    #[error("Failed to fetch data: {0}")]
    FetchData(String),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// A recorded value is not a number.
    #[error("Parse error: {0}")]
    Parse(String),

    /// A recording does not have the expected layout.
    #[error("Incorrect data format: {0}")]
    Format(String),
}

pub type Result<T> = std::result::Result<T, SamplerError>;
