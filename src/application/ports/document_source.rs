use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[derive(Debug)]
pub enum DocumentSourceError {
    NotFound(String),
    IoError(String),
    InvalidEncoding(String),
}

impl std::fmt::Display for DocumentSourceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocumentSourceError::NotFound(path) => write!(f, "Path not found: {}", path),
            DocumentSourceError::IoError(msg) => write!(f, "IO error: {}", msg),
            DocumentSourceError::InvalidEncoding(path) => {
                write!(f, "File is not valid UTF-8: {}", path)
            }
        }
    }
}

impl std::error::Error for DocumentSourceError {}

#[async_trait]
pub trait DocumentSource: Send + Sync {
    /// Every regular file below `root`, recursively, in a stable order.
    async fn list_documents(&self, root: &Path) -> Result<Vec<PathBuf>, DocumentSourceError>;

    async fn read_document(&self, path: &Path) -> Result<String, DocumentSourceError>;
}
