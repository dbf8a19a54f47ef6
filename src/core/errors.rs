use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AnalysisError {
    #[error("row {row}: {reason}")]
    MalformedInput { row: usize, reason: String },
    #[error("year {year} appears more than once in the source data")]
    DuplicateYear { year: i32 },
    #[error("no return on record for year {year}")]
    MissingYear { year: i32 },
    #[error("historic series contains no entries")]
    EmptySeries,
    #[error("annualized return requires at least one period")]
    InsufficientData,
    #[error("period return of {value}% means total loss or worse; cannot annualize")]
    InvalidReturn { value: f64 },
    #[error(
        "returns ({returns}), contributions ({contributions}) and withdrawals ({withdrawals}) must have equal lengths"
    )]
    LengthMismatch {
        returns: usize,
        contributions: usize,
        withdrawals: usize,
    },
    #[error("duration must be at least one year, got {duration}")]
    InvalidDuration { duration: u32 },
    #[error("historic data spans {start}-{end}, too short for a {duration}-year window")]
    InsufficientHistory { start: i32, end: i32, duration: u32 },
}
