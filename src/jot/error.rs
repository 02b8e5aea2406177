use thiserror::Error;

#[derive(Error, Debug)]
pub enum JotError {
    #[error("Invalid note index: {index} (the list has {count} notes)")]
    IndexOutOfRange { index: usize, count: usize },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Store error: {0}")]
    Store(String),
}

pub type Result<T> = std::result::Result<T, JotError>;
