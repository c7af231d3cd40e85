use std::path::Path;
use std::sync::Arc;

use crate::application::ports::embedding_provider::EmbeddingRequest;
use crate::application::ports::{DocumentSource, EmbeddingProvider};
use crate::application::services::text_splitter::TextSplitter;
use crate::domain::entities::NewDocChunk;
use crate::domain::repositories::DocChunkRepository;

pub const SUPPORTED_EXTENSIONS: [&str; 2] = ["txt", "md"];

#[derive(Debug)]
pub enum IngestionError {
    SourceError(String),
    UnsupportedFileType(String),
    ReadError(String),
    EmbeddingError(String),
    RepositoryError(String),
}

impl std::fmt::Display for IngestionError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            IngestionError::SourceError(msg) => write!(f, "Document source error: {}", msg),
            IngestionError::UnsupportedFileType(ext) => {
                write!(f, "Unsupported file type: {}", ext)
            }
            IngestionError::ReadError(msg) => write!(f, "Read error: {}", msg),
            IngestionError::EmbeddingError(msg) => write!(f, "Embedding failed: {}", msg),
            IngestionError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for IngestionError {}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IngestionReport {
    pub files_seen: usize,
    pub files_ingested: usize,
    pub files_skipped: usize,
    pub files_failed: usize,
    pub chunks_stored: usize,
}

pub fn is_supported(path: &Path) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| ext.to_ascii_lowercase())
        .is_some_and(|ext| SUPPORTED_EXTENSIONS.contains(&ext.as_str()))
}

fn extension_label(path: &Path) -> String {
    path.extension()
        .map(|ext| format!(".{}", ext.to_string_lossy().to_lowercase()))
        .unwrap_or_else(|| "<none>".to_string())
}

pub struct IngestionService {
    document_source: Arc<dyn DocumentSource>,
    embedding_provider: Arc<dyn EmbeddingProvider>,
    chunk_repository: Arc<dyn DocChunkRepository>,
    splitter: Arc<dyn TextSplitter>,
}

impl IngestionService {
    pub fn new(
        document_source: Arc<dyn DocumentSource>,
        embedding_provider: Arc<dyn EmbeddingProvider>,
        chunk_repository: Arc<dyn DocChunkRepository>,
        splitter: Arc<dyn TextSplitter>,
    ) -> Self {
        Self {
            document_source,
            embedding_provider,
            chunk_repository,
            splitter,
        }
    }

    /// Ingests every supported file below `root`. Only a failure to list the
    /// directory is returned as an error; per-file failures are logged and
    /// counted in the report.
    pub async fn ingest_directory(&self, root: &Path) -> Result<IngestionReport, IngestionError> {
        let paths = self
            .document_source
            .list_documents(root)
            .await
            .map_err(|e| IngestionError::SourceError(e.to_string()))?;

        let mut report = IngestionReport::default();

        for path in paths {
            report.files_seen += 1;
            tracing::info!("Ingesting file: {}", path.display());

            match self.ingest_file(&path).await {
                Ok(stored) => {
                    report.files_ingested += 1;
                    report.chunks_stored += stored;
                    tracing::info!("Ingested {} chunks from {}", stored, path.display());
                }
                Err(IngestionError::UnsupportedFileType(ext)) => {
                    report.files_skipped += 1;
                    tracing::warn!("Skipped unsupported file type: {} ({})", ext, path.display());
                }
                Err(e) => {
                    report.files_failed += 1;
                    tracing::error!("Failed to ingest {}: {}", path.display(), e);
                }
            }
        }

        Ok(report)
    }

    /// Splits, embeds and stores one file. All of the file's chunks are
    /// embedded before anything is written, so a failed embedding call leaves
    /// no rows behind.
    pub async fn ingest_file(&self, path: &Path) -> Result<usize, IngestionError> {
        if !is_supported(path) {
            return Err(IngestionError::UnsupportedFileType(extension_label(path)));
        }

        let text = self
            .document_source
            .read_document(path)
            .await
            .map_err(|e| IngestionError::ReadError(e.to_string()))?;

        let pieces = self.splitter.split_text(&text);
        if pieces.is_empty() {
            return Ok(0);
        }

        let source = path.to_string_lossy().to_string();
        let mut chunks = Vec::with_capacity(pieces.len());

        for piece in pieces {
            let response = self
                .embedding_provider
                .generate_embedding(EmbeddingRequest::new(piece.as_str()))
                .await
                .map_err(|e| IngestionError::EmbeddingError(e.to_string()))?;

            chunks.push(NewDocChunk::new(
                piece,
                response.embedding,
                Some(source.clone()),
            ));
        }

        let stored = self
            .chunk_repository
            .save_batch(&chunks)
            .await
            .map_err(|e| IngestionError::RepositoryError(e.to_string()))?;

        Ok(stored.len())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::services::text_splitter::CharacterTextSplitter;
    use crate::infrastructure::file_system::LocalDocumentSource;
    use crate::test_support::{InMemoryDocChunkRepository, StubEmbeddingProvider};
    use std::fs;

    fn service(
        embedding_provider: Arc<StubEmbeddingProvider>,
        repository: Arc<InMemoryDocChunkRepository>,
    ) -> IngestionService {
        IngestionService::new(
            Arc::new(LocalDocumentSource::new()),
            embedding_provider,
            repository,
            Arc::new(CharacterTextSplitter::default()),
        )
    }

    #[test]
    fn test_supported_extensions() {
        assert!(is_supported(Path::new("docs/readme.md")));
        assert!(is_supported(Path::new("docs/NOTES.TXT")));
        assert!(!is_supported(Path::new("docs/manual.pdf")));
        assert!(!is_supported(Path::new("docs/Makefile")));
    }

    #[tokio::test]
    async fn test_ingest_file_chunk_count_and_source() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("guide.md");
        let text: String = "lorem ipsum ".repeat(100); // 1200 chars
        fs::write(&path, &text).unwrap();

        let repository = Arc::new(InMemoryDocChunkRepository::new());
        let service = service(Arc::new(StubEmbeddingProvider::new(4)), repository.clone());

        let stored = service.ingest_file(&path).await.unwrap();

        // ceil((1200 - 50) / 450)
        assert_eq!(stored, 3);
        let chunks = repository.stored();
        assert_eq!(chunks.len(), 3);
        let expected_source = path.to_string_lossy().to_string();
        for chunk in &chunks {
            assert_eq!(chunk.source(), Some(expected_source.as_str()));
            assert_eq!(chunk.dimension(), 4);
            assert!(chunk.content().chars().count() <= 500);
        }
    }

    #[tokio::test]
    async fn test_embedding_failure_stores_nothing_for_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.txt");
        let mut text = "a".repeat(600);
        text.push_str(" EXPLODE");
        fs::write(&path, &text).unwrap();

        let repository = Arc::new(InMemoryDocChunkRepository::new());
        let provider = Arc::new(StubEmbeddingProvider::new(4).failing_on("EXPLODE"));
        let service = service(provider, repository.clone());

        let result = service.ingest_file(&path).await;

        assert!(matches!(result, Err(IngestionError::EmbeddingError(_))));
        assert!(repository.stored().is_empty());
    }

    #[tokio::test]
    async fn test_ingest_directory_walks_recursively_and_skips() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("nested").join("deeper");
        fs::create_dir_all(&nested).unwrap();
        fs::write(dir.path().join("a.txt"), "alpha document").unwrap();
        fs::write(nested.join("b.md"), "# Beta\n\nbeta document").unwrap();
        fs::write(dir.path().join("c.pdf"), "%PDF-1.4").unwrap();
        fs::write(nested.join("bad.md"), "contains EXPLODE marker").unwrap();

        let repository = Arc::new(InMemoryDocChunkRepository::new());
        let provider = Arc::new(StubEmbeddingProvider::new(4).failing_on("EXPLODE"));
        let service = service(provider, repository.clone());

        let report = service.ingest_directory(dir.path()).await.unwrap();

        assert_eq!(
            report,
            IngestionReport {
                files_seen: 4,
                files_ingested: 2,
                files_skipped: 1,
                files_failed: 1,
                chunks_stored: 2,
            }
        );
        let mut contents: Vec<String> = repository
            .stored()
            .iter()
            .map(|c| c.content().to_string())
            .collect();
        contents.sort();
        assert_eq!(contents, vec!["# Beta\n\nbeta document", "alpha document"]);
    }

    #[tokio::test]
    async fn test_rerun_appends_duplicates() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.txt"), "same content").unwrap();

        let repository = Arc::new(InMemoryDocChunkRepository::new());
        let service = service(Arc::new(StubEmbeddingProvider::new(4)), repository.clone());

        service.ingest_directory(dir.path()).await.unwrap();
        service.ingest_directory(dir.path()).await.unwrap();

        assert_eq!(repository.stored().len(), 2);
    }

    #[tokio::test]
    async fn test_missing_root_is_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let repository = Arc::new(InMemoryDocChunkRepository::new());
        let service = service(Arc::new(StubEmbeddingProvider::new(4)), repository);

        let result = service.ingest_directory(&dir.path().join("nope")).await;

        assert!(matches!(result, Err(IngestionError::SourceError(_))));
    }

    #[tokio::test]
    async fn test_empty_file_stores_no_chunks() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("empty.md");
        fs::write(&path, "").unwrap();

        let repository = Arc::new(InMemoryDocChunkRepository::new());
        let service = service(Arc::new(StubEmbeddingProvider::new(4)), repository.clone());

        assert_eq!(service.ingest_file(&path).await.unwrap(), 0);
        assert!(repository.stored().is_empty());
    }
}
