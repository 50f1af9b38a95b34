use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid criteria: {0}")]
    InvalidCriteria(String),

    #[error("Upstream error ({code}): {message}")]
    Upstream { code: String, message: String },

    #[error("External error: {0}")]
    External(#[from] anyhow::Error),
}

impl Error {
    pub fn invalid_criteria(msg: impl Into<String>) -> Self {
        Error::InvalidCriteria(msg.into())
    }
}

pub type Result<T> = std::result::Result<T, Error>;
