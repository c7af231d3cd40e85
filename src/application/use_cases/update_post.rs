use std::sync::Arc;

use crate::domain::entities::{NewPost, Post};
use crate::domain::repositories::PostRepository;

#[derive(Debug)]
pub enum UpdatePostError {
    PostNotFound(i32),
    RepositoryError(String),
}

impl std::fmt::Display for UpdatePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdatePostError::PostNotFound(id) => write!(f, "Post not found: {}", id),
            UpdatePostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdatePostError {}

#[derive(Debug, Clone)]
pub struct UpdatePostRequest {
    pub post_id: i32,
    pub changes: NewPost,
}

#[derive(Debug, Clone)]
pub struct UpdatePostResponse {
    pub post: Post,
}

pub struct UpdatePostUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl UpdatePostUseCase {
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    pub async fn execute(
        &self,
        request: UpdatePostRequest,
    ) -> Result<UpdatePostResponse, UpdatePostError> {
        let post = self
            .post_repository
            .update(request.post_id, &request.changes)
            .await
            .map_err(|e| UpdatePostError::RepositoryError(e.to_string()))?
            .ok_or(UpdatePostError::PostNotFound(request.post_id))?;

        tracing::info!("Updated post {}", post.id());

        Ok(UpdatePostResponse { post })
    }
}
