use std::sync::Arc;

use crate::application::services::RetrievalService;
use crate::application::services::retrieval_service::{RETRIEVAL_LIMIT, RetrievalError};
use crate::domain::entities::ChunkMatch;

#[derive(Debug)]
pub enum SearchDocsError {
    ValidationError(String),
    EmbeddingError(String),
    RepositoryError(String),
}

impl std::fmt::Display for SearchDocsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchDocsError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            SearchDocsError::EmbeddingError(msg) => write!(f, "Embedding failed: {}", msg),
            SearchDocsError::RepositoryError(msg) => {
                write!(f, "Similarity search failed: {}", msg)
            }
        }
    }
}

impl std::error::Error for SearchDocsError {}

impl From<RetrievalError> for SearchDocsError {
    fn from(error: RetrievalError) -> Self {
        match error {
            RetrievalError::EmbeddingError(msg) => SearchDocsError::EmbeddingError(msg),
            RetrievalError::RepositoryError(msg) => SearchDocsError::RepositoryError(msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct SearchDocsRequest {
    pub question: String,
}

#[derive(Debug, Clone)]
pub struct SearchDocsResponse {
    pub question: String,
    pub matches: Vec<ChunkMatch>,
}

pub struct SearchDocsUseCase {
    retrieval_service: Arc<RetrievalService>,
}

impl SearchDocsUseCase {
    pub fn new(retrieval_service: Arc<RetrievalService>) -> Self {
        Self { retrieval_service }
    }

    pub async fn execute(
        &self,
        request: SearchDocsRequest,
    ) -> Result<SearchDocsResponse, SearchDocsError> {
        let question = request.question.trim();
        if question.is_empty() {
            return Err(SearchDocsError::ValidationError(
                "question is required".to_string(),
            ));
        }

        let matches = self
            .retrieval_service
            .retrieve(question, RETRIEVAL_LIMIT)
            .await?;

        Ok(SearchDocsResponse {
            question: question.to_string(),
            matches,
        })
    }
}
