use std::sync::Arc;

use crate::domain::entities::{NewPost, Post};
use crate::domain::repositories::PostRepository;

#[derive(Debug)]
pub enum CreatePostError {
    RepositoryError(String),
}

impl std::fmt::Display for CreatePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatePostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreatePostError {}

#[derive(Debug, Clone)]
pub struct CreatePostRequest {
    pub post: NewPost,
}

#[derive(Debug, Clone)]
pub struct CreatePostResponse {
    pub post: Post,
}

pub struct CreatePostUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl CreatePostUseCase {
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    pub async fn execute(
        &self,
        request: CreatePostRequest,
    ) -> Result<CreatePostResponse, CreatePostError> {
        let post = self
            .post_repository
            .create(&request.post)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        tracing::info!("Created post {}", post.id());

        Ok(CreatePostResponse { post })
    }
}
