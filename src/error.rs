use std::path::PathBuf;
use thiserror::Error;

pub type SvlinkResult<T> = std::result::Result<T, SvlinkError>;

#[derive(Debug, Error)]
pub enum SvlinkError {
    #[error("{0}")]
    Message(String),
    #[error(transparent)]
    Io(#[from] std::io::Error),
    #[error("Missing the following required columns: {}", columns.join(", "))]
    MissingColumns { columns: Vec<String> },
    #[error("Report has no header line: {}", path.display())]
    EmptyReport { path: PathBuf },
    #[error("Invalid gzip header: {}", path.display())]
    InvalidGzipHeader { path: PathBuf },
    #[error("Image cannot be embedded as a data URL: {}", path.display())]
    UnembeddableImage { path: PathBuf },
}

impl SvlinkError {
    pub fn message(message: impl Into<String>) -> Self {
        Self::Message(message.into())
    }
}

#[macro_export]
macro_rules! svlink_error {
    ($($arg:tt)*) => {
        $crate::error::SvlinkError::message(format!($($arg)*))
    };
}
