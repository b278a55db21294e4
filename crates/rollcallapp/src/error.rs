use chrono::NaiveDate;
use thiserror::Error;

/// Rejections raised while turning a form payload into a stored record.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Please fill in {}", .0.join(", "))]
    MissingFields(Vec<&'static str>),

    #[error("Invalid {field} '{value}': expected YYYY-MM-DD")]
    InvalidDate { field: &'static str, value: String },

    #[error("Start date {start} is after end date {end}")]
    InvertedRange { start: NaiveDate, end: NaiveDate },
}

#[derive(Error, Debug)]
pub enum RollcallError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error("Invalid date window: {start} is after {end}")]
    InvalidWindow { start: NaiveDate, end: NaiveDate },

    #[error("Record id {0} is already taken")]
    DuplicateId(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RollcallError>;
