use std::sync::Arc;

use crate::application::ports::embedding_provider::{EmbeddingProvider, EmbeddingRequest};
use crate::domain::entities::ChunkMatch;
use crate::domain::repositories::DocChunkRepository;

/// Number of chunks fetched for every question.
pub const RETRIEVAL_LIMIT: i64 = 5;

#[derive(Debug)]
pub enum RetrievalError {
    EmbeddingError(String),
    RepositoryError(String),
}

impl std::fmt::Display for RetrievalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RetrievalError::EmbeddingError(msg) => write!(f, "Embedding failed: {}", msg),
            RetrievalError::RepositoryError(msg) => {
                write!(f, "Similarity search failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for RetrievalError {}

pub struct RetrievalService {
    embedding_provider: Arc<dyn EmbeddingProvider>,
    chunk_repository: Arc<dyn DocChunkRepository>,
}

impl RetrievalService {
    pub fn new(
        embedding_provider: Arc<dyn EmbeddingProvider>,
        chunk_repository: Arc<dyn DocChunkRepository>,
    ) -> Self {
        Self {
            embedding_provider,
            chunk_repository,
        }
    }

    pub async fn retrieve(
        &self,
        question: &str,
        limit: i64,
    ) -> Result<Vec<ChunkMatch>, RetrievalError> {
        let embedding_response = self
            .embedding_provider
            .generate_embedding(EmbeddingRequest::new(question))
            .await
            .map_err(|e| RetrievalError::EmbeddingError(e.to_string()))?;

        let matches = self
            .chunk_repository
            .nearest(&embedding_response.embedding, limit)
            .await
            .map_err(|e| RetrievalError::RepositoryError(e.to_string()))?;

        tracing::debug!(
            "Retrieved {} chunks for question ({} chars)",
            matches.len(),
            question.len()
        );

        Ok(matches)
    }
}
