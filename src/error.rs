use thiserror::Error;

#[derive(Debug, Error)]
pub enum MenuError {
    /// The fragment is not well-formed markup even after wrapping.
    #[error("failed to parse menu markup: {0}")]
    Parse(#[from] roxmltree::Error),

    #[error("line range {start}-{end} is out of bounds for file with {total} lines")]
    LineRange { start: usize, end: usize, total: usize },

    #[error("source is not valid UTF-8: {0}")]
    Encoding(#[from] std::str::Utf8Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),

    #[error("failed to serialize menu document: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MenuError>;
