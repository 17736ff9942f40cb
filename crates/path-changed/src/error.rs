use thiserror::Error;

#[derive(Error, Debug)]
pub enum ChangeError {
    /// The query path is not a syntactically valid JSON Pointer.
    #[error("{0} is not a JSON pointer path")]
    InvalidPointer(String),

    /// Malformed JSON input (CLI only).
    #[error("invalid input: {0}")]
    Json(#[from] serde_json::Error),

    #[error("{0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, ChangeError>;
