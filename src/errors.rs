use thiserror::Error;

/// Error type that captures snapshot and projection failures.
#[derive(Debug, Error)]
pub enum CashflowError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),
    #[error("Invalid transaction: {0}")]
    InvalidTransaction(String),
    #[error("Balance overflow: {0}")]
    Overflow(String),
}
