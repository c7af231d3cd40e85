use async_trait::async_trait;
use pgvector::Vector;
use reqwest::Client;
use reqwest::header::{AUTHORIZATION, CONTENT_TYPE, HeaderMap, HeaderValue};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use std::time::Duration;

use crate::application::ports::chat_provider::{ChatProvider, ChatProviderError, ChatRequest};
use crate::application::ports::embedding_provider::{
    EmbeddingProvider, EmbeddingProviderError, EmbeddingRequest, EmbeddingResponse,
};
use crate::infrastructure::config::OpenAiConfig;

#[derive(Serialize)]
struct EmbeddingsRequest<'a> {
    model: &'a str,
    input: Vec<&'a str>,
}

#[derive(Deserialize)]
struct EmbeddingsResponse {
    data: Vec<EmbeddingData>,
    usage: Option<Usage>,
}

#[derive(Deserialize)]
struct EmbeddingData {
    embedding: Vec<f32>,
}

#[derive(Deserialize)]
struct Usage {
    prompt_tokens: Option<i32>,
}

#[derive(Serialize)]
struct ChatCompletionRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatCompletionResponse {
    choices: Vec<ChatChoice>,
}

#[derive(Deserialize)]
struct ChatChoice {
    message: AssistantMessage,
}

#[derive(Deserialize)]
struct AssistantMessage {
    content: Option<String>,
}

#[derive(Deserialize)]
struct ApiErrorBody {
    error: ApiErrorDetail,
}

#[derive(Deserialize)]
struct ApiErrorDetail {
    message: String,
}

#[derive(Debug)]
pub enum OpenAiError {
    ClientError(String),
    RequestError(String),
    ApiError { status: u16, message: String },
    ParseError(String),
}

impl std::fmt::Display for OpenAiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OpenAiError::ClientError(msg) => write!(f, "Client error: {}", msg),
            OpenAiError::RequestError(msg) => write!(f, "Request error: {}", msg),
            OpenAiError::ApiError { status, message } => {
                write!(f, "Service returned {}: {}", status, message)
            }
            OpenAiError::ParseError(msg) => write!(f, "Parse error: {}", msg),
        }
    }
}

impl std::error::Error for OpenAiError {}

/// HTTP client for OpenAI-compatible `/embeddings` and `/chat/completions`
/// endpoints. Calls are made once; failures are returned to the caller.
#[derive(Debug, Clone)]
pub struct OpenAiClient {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiClient {
    pub fn new(config: OpenAiConfig) -> Result<Self, OpenAiError> {
        let mut headers = HeaderMap::new();
        let auth = format!("Bearer {}", config.api_key.trim());
        headers.insert(
            AUTHORIZATION,
            HeaderValue::from_str(&auth)
                .map_err(|_| OpenAiError::ClientError("invalid API key".to_string()))?,
        );
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_secs))
            .default_headers(headers)
            .build()
            .map_err(|e| OpenAiError::ClientError(e.to_string()))?;

        Ok(Self { client, config })
    }

    pub fn config(&self) -> &OpenAiConfig {
        &self.config
    }

    pub async fn create_embedding(&self, text: &str) -> Result<(Vec<f32>, Option<i32>), OpenAiError> {
        let request = EmbeddingsRequest {
            model: &self.config.embedding_model,
            input: vec![text],
        };

        let response: EmbeddingsResponse = self.post_json("embeddings", &request).await?;
        let token_count = response.usage.and_then(|usage| usage.prompt_tokens);

        response
            .data
            .into_iter()
            .next()
            .map(|data| (data.embedding, token_count))
            .ok_or_else(|| OpenAiError::ParseError("response contained no embeddings".to_string()))
    }

    pub async fn create_chat_completion(
        &self,
        system_prompt: &str,
        user_prompt: &str,
    ) -> Result<Option<String>, OpenAiError> {
        let request = ChatCompletionRequest {
            model: &self.config.chat_model,
            messages: vec![
                ChatMessage {
                    role: "system",
                    content: system_prompt,
                },
                ChatMessage {
                    role: "user",
                    content: user_prompt,
                },
            ],
        };

        let response: ChatCompletionResponse =
            self.post_json("chat/completions", &request).await?;

        Ok(response
            .choices
            .into_iter()
            .next()
            .and_then(|choice| choice.message.content))
    }

    async fn post_json<Req, Resp>(&self, path: &str, body: &Req) -> Result<Resp, OpenAiError>
    where
        Req: Serialize + ?Sized,
        Resp: DeserializeOwned,
    {
        let url = format!("{}/{}", self.config.base_url, path);

        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .map_err(|e| OpenAiError::RequestError(e.without_url().to_string()))?;

        let status = response.status();
        if !status.is_success() {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "<body unavailable>".to_string());
            let message = serde_json::from_str::<ApiErrorBody>(&text)
                .map(|body| body.error.message)
                .unwrap_or(text);

            return Err(OpenAiError::ApiError {
                status: status.as_u16(),
                message,
            });
        }

        response
            .json::<Resp>()
            .await
            .map_err(|e| OpenAiError::ParseError(e.to_string()))
    }
}

// Adapter to implement the EmbeddingProvider trait
pub struct OpenAiEmbeddingProvider {
    client: Arc<OpenAiClient>,
}

impl OpenAiEmbeddingProvider {
    pub fn new(client: Arc<OpenAiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl EmbeddingProvider for OpenAiEmbeddingProvider {
    async fn generate_embedding(
        &self,
        request: EmbeddingRequest,
    ) -> Result<EmbeddingResponse, EmbeddingProviderError> {
        if request.text.trim().is_empty() {
            return Err(EmbeddingProviderError::InvalidInput(
                "Cannot embed empty text".to_string(),
            ));
        }

        let (values, token_count) = self
            .client
            .create_embedding(&request.text)
            .await
            .map_err(|e| match e {
                OpenAiError::RequestError(msg) => EmbeddingProviderError::NetworkError(msg),
                other => EmbeddingProviderError::ApiError(other.to_string()),
            })?;

        let expected = self.embedding_dimension();
        if values.len() != expected {
            return Err(EmbeddingProviderError::DimensionMismatch {
                expected,
                actual: values.len(),
            });
        }

        Ok(EmbeddingResponse {
            embedding: Vector::from(values),
            model_name: self.model_name().to_string(),
            token_count,
        })
    }

    fn model_name(&self) -> &str {
        &self.client.config().embedding_model
    }

    fn embedding_dimension(&self) -> usize {
        self.client.config().embedding_dimension
    }
}

// Adapter to implement the ChatProvider trait
pub struct OpenAiChatProvider {
    client: Arc<OpenAiClient>,
}

impl OpenAiChatProvider {
    pub fn new(client: Arc<OpenAiClient>) -> Self {
        Self { client }
    }
}

#[async_trait]
impl ChatProvider for OpenAiChatProvider {
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatProviderError> {
        self.client
            .create_chat_completion(&request.system_prompt, &request.user_prompt)
            .await
            .map_err(|e| match e {
                OpenAiError::RequestError(msg) => ChatProviderError::NetworkError(msg),
                other => ChatProviderError::ApiError(other.to_string()),
            })?
            .ok_or(ChatProviderError::EmptyResponse)
    }

    fn model_name(&self) -> &str {
        &self.client.config().chat_model
    }
}
