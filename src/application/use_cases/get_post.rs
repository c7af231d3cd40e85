use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repositories::{PostRepository, post_repository::PostRepositoryError};

#[derive(Debug)]
pub enum GetPostError {
    PostNotFound(i32),
    RepositoryError(String),
}

impl std::fmt::Display for GetPostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GetPostError::PostNotFound(id) => write!(f, "Post not found: {}", id),
            GetPostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for GetPostError {}

impl From<PostRepositoryError> for GetPostError {
    fn from(error: PostRepositoryError) -> Self {
        GetPostError::RepositoryError(error.to_string())
    }
}

#[derive(Debug, Clone)]
pub struct GetPostRequest {
    pub post_id: i32,
}

#[derive(Debug, Clone)]
pub struct GetPostResponse {
    pub post: Post,
}

pub struct GetPostUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl GetPostUseCase {
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    pub async fn execute(&self, request: GetPostRequest) -> Result<GetPostResponse, GetPostError> {
        let post = self
            .post_repository
            .find_by_id(request.post_id)
            .await?
            .ok_or(GetPostError::PostNotFound(request.post_id))?;

        Ok(GetPostResponse { post })
    }
}
