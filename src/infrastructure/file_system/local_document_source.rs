use async_trait::async_trait;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use tokio::fs;

use crate::application::ports::document_source::{DocumentSource, DocumentSourceError};

/// Reads documents from the local file system.
#[derive(Debug, Default, Clone)]
pub struct LocalDocumentSource;

impl LocalDocumentSource {
    pub fn new() -> Self {
        Self
    }
}

fn io_error(path: &Path, error: std::io::Error) -> DocumentSourceError {
    if error.kind() == ErrorKind::NotFound {
        DocumentSourceError::NotFound(path.display().to_string())
    } else {
        DocumentSourceError::IoError(format!("{}: {}", path.display(), error))
    }
}

#[async_trait]
impl DocumentSource for LocalDocumentSource {
    async fn list_documents(&self, root: &Path) -> Result<Vec<PathBuf>, DocumentSourceError> {
        let metadata = fs::metadata(root).await.map_err(|e| io_error(root, e))?;
        if !metadata.is_dir() {
            return Err(DocumentSourceError::IoError(format!(
                "{} is not a directory",
                root.display()
            )));
        }

        let mut files = Vec::new();
        let mut pending = vec![root.to_path_buf()];

        while let Some(dir) = pending.pop() {
            let mut entries = fs::read_dir(&dir).await.map_err(|e| io_error(&dir, e))?;

            while let Some(entry) = entries.next_entry().await.map_err(|e| io_error(&dir, e))? {
                let path = entry.path();
                let file_type = entry.file_type().await.map_err(|e| io_error(&path, e))?;

                if file_type.is_dir() {
                    pending.push(path);
                } else if file_type.is_file() {
                    files.push(path);
                } else if file_type.is_symlink() {
                    // Linked files are read through; linked directories are not descended.
                    match fs::metadata(&path).await {
                        Ok(target) if target.is_file() => files.push(path),
                        Ok(target) if target.is_dir() => {
                            tracing::warn!("Skipped symlinked directory: {}", path.display());
                        }
                        Ok(_) => {
                            tracing::warn!("Skipped special file: {}", path.display());
                        }
                        Err(e) => {
                            tracing::warn!("Skipped broken symlink {}: {}", path.display(), e);
                        }
                    }
                }
            }
        }

        files.sort();
        Ok(files)
    }

    async fn read_document(&self, path: &Path) -> Result<String, DocumentSourceError> {
        let bytes = fs::read(path).await.map_err(|e| io_error(path, e))?;

        String::from_utf8(bytes)
            .map_err(|_| DocumentSourceError::InvalidEncoding(path.display().to_string()))
    }
}
