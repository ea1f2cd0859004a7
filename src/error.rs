use thiserror::Error;

#[derive(Error, Debug)]
pub enum CartError {
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
    #[error("Validation error: {0}")]
    ValidationError(String),
    #[error("Unknown product: {0}")]
    UnknownProduct(String),
    #[error("Duplicate product: {0}")]
    DuplicateProduct(String),
    #[error("Input ended before {0} was answered")]
    UnexpectedEof(String),
}

pub type Result<T> = std::result::Result<T, CartError>;
