use thiserror::Error;

#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("IO_FAILURE: {0}")]
    Io(String),
    #[error("PARSE_FAILURE: {0}")]
    Parse(String),
    #[error("CONFIG_INVALID: {0}")]
    Config(String),
    #[error("ARGUMENT_INVALID: {0}")]
    InvalidArgument(String),
}

impl From<std::io::Error> for HistoryError {
    fn from(value: std::io::Error) -> Self {
        Self::Io(value.to_string())
    }
}

impl From<serde_json::Error> for HistoryError {
    fn from(value: serde_json::Error) -> Self {
        Self::Parse(value.to_string())
    }
}

pub type HistoryResult<T> = Result<T, HistoryError>;
