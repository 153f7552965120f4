//! Error type shared across the crate.
//!
//! The model core is a pure function: any invalid input is surfaced
//! immediately as a typed failure, never as a partially-correct series
//! or a fabricated statistic.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum SpamsError {
    /// The memory window must span at least one day.
    #[error("invalid memory window: tau = {tau}, must be at least 1 day")]
    InvalidWindow { tau: usize },

    /// The forcing record is shorter than one full trailing window.
    #[error("insufficient meteo history: {available} day(s) available, window needs {required}")]
    InsufficientHistory { required: usize, available: usize },

    /// Precipitation and evapotranspiration arrays disagree in length.
    #[error("precip length {precip} does not match evapo length {evapo}")]
    LengthMismatch { precip: usize, evapo: usize },

    /// Meteo dates out of order or duplicated.
    #[error("meteo dates must be strictly increasing")]
    UnsortedDates,

    /// A statistic is mathematically undefined for the given inputs.
    #[error("undefined statistic: {0}")]
    DegenerateParameter(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    /// A source file row that could not be interpreted.
    #[error("malformed record at line {line}: {reason}")]
    Malformed { line: usize, reason: String },
}

/// Convenience type for `Result<T, SpamsError>`.
pub type Result<T> = std::result::Result<T, SpamsError>;
