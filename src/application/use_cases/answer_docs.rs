use std::sync::Arc;

use crate::application::ports::ChatProvider;
use crate::application::ports::chat_provider::ChatRequest;
use crate::application::services::RetrievalService;
use crate::application::services::retrieval_service::{RETRIEVAL_LIMIT, RetrievalError};

const DOCS_SYSTEM_PROMPT: &str = "You are a helpful assistant that answers questions about the \
documentation. Use only the provided context. If the context does not contain the answer, say so.";

const CONTEXT_SEPARATOR: &str = "\n\n---\n\n";

#[derive(Debug)]
pub enum AnswerDocsError {
    ValidationError(String),
    EmbeddingError(String),
    RepositoryError(String),
    ChatError(String),
}

impl std::fmt::Display for AnswerDocsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AnswerDocsError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AnswerDocsError::EmbeddingError(msg) => write!(f, "Embedding failed: {}", msg),
            AnswerDocsError::RepositoryError(msg) => {
                write!(f, "Similarity search failed: {}", msg)
            }
            AnswerDocsError::ChatError(msg) => write!(f, "Chat completion failed: {}", msg),
        }
    }
}

impl std::error::Error for AnswerDocsError {}

impl From<RetrievalError> for AnswerDocsError {
    fn from(error: RetrievalError) -> Self {
        match error {
            RetrievalError::EmbeddingError(msg) => AnswerDocsError::EmbeddingError(msg),
            RetrievalError::RepositoryError(msg) => AnswerDocsError::RepositoryError(msg),
        }
    }
}

#[derive(Debug, Clone)]
pub struct AnswerDocsRequest {
    pub question: String,
}

#[derive(Debug, Clone)]
pub struct AnswerDocsResponse {
    pub answer: String,
    pub chunks_used: usize,
}

pub struct AnswerDocsUseCase {
    retrieval_service: Arc<RetrievalService>,
    chat_provider: Arc<dyn ChatProvider>,
}

impl AnswerDocsUseCase {
    pub fn new(retrieval_service: Arc<RetrievalService>, chat_provider: Arc<dyn ChatProvider>) -> Self {
        Self {
            retrieval_service,
            chat_provider,
        }
    }

    pub async fn execute(
        &self,
        request: AnswerDocsRequest,
    ) -> Result<AnswerDocsResponse, AnswerDocsError> {
        let question = request.question.trim();
        if question.is_empty() {
            return Err(AnswerDocsError::ValidationError(
                "question is required".to_string(),
            ));
        }

        let matches = self
            .retrieval_service
            .retrieve(question, RETRIEVAL_LIMIT)
            .await?;

        let context = matches
            .iter()
            .map(|m| m.content.as_str())
            .collect::<Vec<_>>()
            .join(CONTEXT_SEPARATOR);

        let answer = self
            .chat_provider
            .complete(ChatRequest::with_context(
                DOCS_SYSTEM_PROMPT,
                &context,
                question,
            ))
            .await
            .map_err(|e| AnswerDocsError::ChatError(e.to_string()))?;

        Ok(AnswerDocsResponse {
            answer,
            chunks_used: matches.len(),
        })
    }
}
