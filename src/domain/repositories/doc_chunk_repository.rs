use async_trait::async_trait;
use pgvector::Vector;

use crate::domain::entities::{ChunkMatch, DocChunk, NewDocChunk};

#[derive(Debug)]
pub enum DocChunkRepositoryError {
    DatabaseError(String),
    ValidationError(String),
}

impl std::fmt::Display for DocChunkRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocChunkRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
            DocChunkRepositoryError::ValidationError(msg) => {
                write!(f, "Validation error: {}", msg)
            }
        }
    }
}

impl std::error::Error for DocChunkRepositoryError {}

#[async_trait]
pub trait DocChunkRepository: Send + Sync {
    /// Stores all chunks in a single transaction and returns the stored rows.
    /// Either every row is written or none is.
    async fn save_batch(
        &self,
        chunks: &[NewDocChunk],
    ) -> Result<Vec<DocChunk>, DocChunkRepositoryError>;

    /// Nearest chunks to `query_vector` by cosine distance, closest first.
    async fn nearest(
        &self,
        query_vector: &Vector,
        limit: i64,
    ) -> Result<Vec<ChunkMatch>, DocChunkRepositoryError>;

    async fn count(&self) -> Result<i64, DocChunkRepositoryError>;
}
