//! In-memory fakes for the repository and provider ports.

use async_trait::async_trait;
use pgvector::Vector;
use std::collections::HashMap;
use std::sync::Mutex;

use crate::application::ports::chat_provider::{ChatProvider, ChatProviderError, ChatRequest};
use crate::application::ports::embedding_provider::{
    EmbeddingProvider, EmbeddingProviderError, EmbeddingRequest, EmbeddingResponse,
};
use crate::domain::entities::{ChunkMatch, DocChunk, NewDocChunk, NewPost, Post, uniform_dimension};
use crate::domain::repositories::doc_chunk_repository::{
    DocChunkRepository, DocChunkRepositoryError,
};
use crate::domain::repositories::post_repository::{PostRepository, PostRepositoryError};

/// Every call fails with the configured message once `failing` is used.
#[derive(Default)]
pub struct InMemoryPostRepository {
    posts: Mutex<Vec<Post>>,
    next_id: Mutex<i32>,
    failure: Option<String>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), PostRepositoryError> {
        match &self.failure {
            Some(message) => Err(PostRepositoryError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn create(&self, post: &NewPost) -> Result<Post, PostRepositoryError> {
        self.check()?;
        let mut next_id = self.next_id.lock().unwrap();
        *next_id += 1;
        let created = post.clone().into_post(*next_id);
        self.posts.lock().unwrap().push(created.clone());
        Ok(created)
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, PostRepositoryError> {
        self.check()?;
        let posts = self.posts.lock().unwrap();
        Ok(posts.iter().find(|p| p.id() == id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Post>, PostRepositoryError> {
        self.check()?;
        let mut posts = self.posts.lock().unwrap().clone();
        posts.sort_by_key(|p| p.id());
        Ok(posts)
    }

    async fn update(&self, id: i32, post: &NewPost) -> Result<Option<Post>, PostRepositoryError> {
        self.check()?;
        let mut posts = self.posts.lock().unwrap();
        match posts.iter_mut().find(|p| p.id() == id) {
            Some(existing) => {
                *existing = post.clone().into_post(id);
                Ok(Some(existing.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, PostRepositoryError> {
        self.check()?;
        let mut posts = self.posts.lock().unwrap();
        let before = posts.len();
        posts.retain(|p| p.id() != id);
        Ok(posts.len() != before)
    }
}

#[derive(Default)]
pub struct InMemoryDocChunkRepository {
    chunks: Mutex<Vec<DocChunk>>,
    failure: Option<String>,
}

impl InMemoryDocChunkRepository {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing(message: &str) -> Self {
        Self {
            failure: Some(message.to_string()),
            ..Self::default()
        }
    }

    fn check(&self) -> Result<(), DocChunkRepositoryError> {
        match &self.failure {
            Some(message) => Err(DocChunkRepositoryError::DatabaseError(message.clone())),
            None => Ok(()),
        }
    }

    pub fn stored(&self) -> Vec<DocChunk> {
        self.chunks.lock().unwrap().clone()
    }
}

fn cosine_distance(a: &[f32], b: &[f32]) -> f64 {
    let dot: f64 = a.iter().zip(b).map(|(x, y)| *x as f64 * *y as f64).sum();
    let norm_a: f64 = a.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();
    let norm_b: f64 = b.iter().map(|x| (*x as f64).powi(2)).sum::<f64>().sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        return 1.0;
    }
    1.0 - dot / (norm_a * norm_b)
}

#[async_trait]
impl DocChunkRepository for InMemoryDocChunkRepository {
    async fn save_batch(
        &self,
        chunks: &[NewDocChunk],
    ) -> Result<Vec<DocChunk>, DocChunkRepositoryError> {
        self.check()?;
        uniform_dimension(chunks).map_err(DocChunkRepositoryError::ValidationError)?;

        let mut stored = self.chunks.lock().unwrap();
        let mut next_id = stored.len() as i32;
        let mut saved = Vec::with_capacity(chunks.len());

        for chunk in chunks {
            next_id += 1;
            saved.push(DocChunk::new(
                next_id,
                chunk.content().to_string(),
                chunk.embedding().clone(),
                chunk.source().map(str::to_string),
            ));
        }

        stored.extend(saved.iter().cloned());
        Ok(saved)
    }

    async fn nearest(
        &self,
        query_vector: &Vector,
        limit: i64,
    ) -> Result<Vec<ChunkMatch>, DocChunkRepositoryError> {
        self.check()?;
        let stored = self.chunks.lock().unwrap();
        let mut ranked: Vec<(f64, &DocChunk)> = stored
            .iter()
            .map(|chunk| {
                (
                    cosine_distance(chunk.embedding().as_slice(), query_vector.as_slice()),
                    chunk,
                )
            })
            .collect();
        ranked.sort_by(|a, b| a.0.partial_cmp(&b.0).unwrap_or(std::cmp::Ordering::Equal));

        Ok(ranked
            .into_iter()
            .take(limit.max(0) as usize)
            .map(|(distance, chunk)| {
                ChunkMatch::from_distance(
                    chunk.id(),
                    chunk.content().to_string(),
                    chunk.source().map(str::to_string),
                    distance,
                )
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, DocChunkRepositoryError> {
        self.check()?;
        Ok(self.chunks.lock().unwrap().len() as i64)
    }
}

/// Returns `[1.0; dimension]` unless a vector was registered for the exact
/// text. Fails for any text containing the configured marker.
pub struct StubEmbeddingProvider {
    dimension: usize,
    fail_marker: Option<String>,
    vectors: HashMap<String, Vec<f32>>,
}

impl StubEmbeddingProvider {
    pub fn new(dimension: usize) -> Self {
        Self {
            dimension,
            fail_marker: None,
            vectors: HashMap::new(),
        }
    }

    pub fn failing_on(mut self, marker: &str) -> Self {
        self.fail_marker = Some(marker.to_string());
        self
    }

    pub fn with_vector(mut self, text: &str, vector: Vec<f32>) -> Self {
        self.vectors.insert(text.to_string(), vector);
        self
    }
}

#[async_trait]
impl EmbeddingProvider for StubEmbeddingProvider {
    async fn generate_embedding(
        &self,
        request: EmbeddingRequest,
    ) -> Result<EmbeddingResponse, EmbeddingProviderError> {
        if let Some(marker) = &self.fail_marker {
            if request.text.contains(marker.as_str()) {
                return Err(EmbeddingProviderError::ApiError(
                    "stub embedding failure".to_string(),
                ));
            }
        }

        let values = self
            .vectors
            .get(&request.text)
            .cloned()
            .unwrap_or_else(|| vec![1.0; self.dimension]);

        Ok(EmbeddingResponse {
            embedding: Vector::from(values),
            model_name: self.model_name().to_string(),
            token_count: None,
        })
    }

    fn model_name(&self) -> &str {
        "stub-embedding"
    }

    fn embedding_dimension(&self) -> usize {
        self.dimension
    }
}

pub struct StubChatProvider {
    outcome: Result<String, String>,
    last_request: Mutex<Option<ChatRequest>>,
}

impl StubChatProvider {
    pub fn answering(answer: &str) -> Self {
        Self {
            outcome: Ok(answer.to_string()),
            last_request: Mutex::new(None),
        }
    }

    pub fn failing(message: &str) -> Self {
        Self {
            outcome: Err(message.to_string()),
            last_request: Mutex::new(None),
        }
    }

    pub fn last_request(&self) -> Option<ChatRequest> {
        self.last_request.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for StubChatProvider {
    async fn complete(&self, request: ChatRequest) -> Result<String, ChatProviderError> {
        *self.last_request.lock().unwrap() = Some(request);

        self.outcome
            .clone()
            .map_err(ChatProviderError::ApiError)
    }

    fn model_name(&self) -> &str {
        "stub-chat"
    }
}
