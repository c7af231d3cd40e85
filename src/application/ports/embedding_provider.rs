use async_trait::async_trait;
use pgvector::Vector;

#[derive(Debug)]
pub enum EmbeddingProviderError {
    NetworkError(String),
    ApiError(String),
    InvalidInput(String),
    DimensionMismatch { expected: usize, actual: usize },
}

impl std::fmt::Display for EmbeddingProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            EmbeddingProviderError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            EmbeddingProviderError::ApiError(msg) => write!(f, "API error: {}", msg),
            EmbeddingProviderError::InvalidInput(msg) => write!(f, "Invalid input: {}", msg),
            EmbeddingProviderError::DimensionMismatch { expected, actual } => write!(
                f,
                "Embedding has {} dimensions, expected {}",
                actual, expected
            ),
        }
    }
}

impl std::error::Error for EmbeddingProviderError {}

#[derive(Debug, Clone)]
pub struct EmbeddingRequest {
    pub text: String,
}

impl EmbeddingRequest {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }
}

#[derive(Debug, Clone)]
pub struct EmbeddingResponse {
    pub embedding: Vector,
    pub model_name: String,
    pub token_count: Option<i32>,
}

#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    /// Embeds a single text. Implementations must reject vectors whose length
    /// differs from [`EmbeddingProvider::embedding_dimension`].
    async fn generate_embedding(
        &self,
        request: EmbeddingRequest,
    ) -> Result<EmbeddingResponse, EmbeddingProviderError>;

    fn model_name(&self) -> &str;

    fn embedding_dimension(&self) -> usize;
}
