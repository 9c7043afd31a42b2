use thiserror::Error;

pub type CsvResult<T> = Result<T, CsvError>;

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid format on line {line}: {reason}")]
    InvalidFormat { line: u64, reason: String },

    #[error("Invalid amount on line {line}: '{value}'")]
    InvalidAmount { line: u64, value: String },

    #[error("Invalid transaction id on line {line}: '{value}'")]
    InvalidTransactionId { line: u64, value: String },
}
