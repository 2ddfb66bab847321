use thiserror::Error;

/// Application-wide error type - single point of truth
#[derive(Error, Debug)]
pub enum AppError {
    /// File I/O operations
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV processing
    #[error("CSV parsing error: {0}")]
    Csv(#[from] csv::Error),

    /// Configuration issues (paths, output selection, CLI arguments)
    #[error("Configuration error: {0}")]
    Config(String),

    /// Invalid binning parameters (non-positive design capacity, zero bins,
    /// non-positive time step). Always fatal before any computation starts.
    #[error("Invalid binning configuration: {0}")]
    InvalidConfig(String),

    /// Operating-hours metrics were requested but sample spacing is not
    /// uniform within tolerance.
    #[error(
        "Irregular time series: expected {expected_seconds}s spacing, \
         found {found_seconds}s at sample {index}"
    )]
    IrregularTimeSeries {
        expected_seconds: i64,
        found_seconds: i64,
        index: usize,
    },

    /// Invalid row in a load-profile input file
    #[error("Invalid load record at line {line}: {reason}")]
    InvalidRecord { line: usize, reason: String },

    /// Malformed EnergyPlus weather file
    #[error("EPW parsing error: {0}")]
    EpwParse(String),
}

/// Application-wide result type - single point of truth
pub type AppResult<T> = Result<T, AppError>;
