use std::sync::Arc;

use crate::domain::repositories::PostRepository;

#[derive(Debug)]
pub enum DeletePostError {
    PostNotFound(i32),
    RepositoryError(String),
}

impl std::fmt::Display for DeletePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeletePostError::PostNotFound(id) => write!(f, "Post not found: {}", id),
            DeletePostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeletePostError {}

#[derive(Debug, Clone)]
pub struct DeletePostRequest {
    pub post_id: i32,
}

pub struct DeletePostUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl DeletePostUseCase {
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    pub async fn execute(&self, request: DeletePostRequest) -> Result<(), DeletePostError> {
        let deleted = self
            .post_repository
            .delete(request.post_id)
            .await
            .map_err(|e| DeletePostError::RepositoryError(e.to_string()))?;

        if !deleted {
            return Err(DeletePostError::PostNotFound(request.post_id));
        }

        tracing::info!("Deleted post {}", request.post_id);

        Ok(())
    }
}
