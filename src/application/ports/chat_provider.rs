use async_trait::async_trait;

#[derive(Debug)]
pub enum ChatProviderError {
    NetworkError(String),
    ApiError(String),
    EmptyResponse,
}

impl std::fmt::Display for ChatProviderError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChatProviderError::NetworkError(msg) => write!(f, "Network error: {}", msg),
            ChatProviderError::ApiError(msg) => write!(f, "API error: {}", msg),
            ChatProviderError::EmptyResponse => write!(f, "Model returned no choices"),
        }
    }
}

impl std::error::Error for ChatProviderError {}

#[derive(Debug, Clone, PartialEq)]
pub struct ChatRequest {
    pub system_prompt: String,
    pub user_prompt: String,
}

impl ChatRequest {
    /// Builds the user message as the retrieved context followed by the
    /// question.
    pub fn with_context(system_prompt: &str, context: &str, question: &str) -> Self {
        Self {
            system_prompt: system_prompt.to_string(),
            user_prompt: format!("Context:\n{}\n\nQuestion: {}", context, question),
        }
    }
}

#[async_trait]
pub trait ChatProvider: Send + Sync {
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatProviderError>;

    fn model_name(&self) -> &str;
}
