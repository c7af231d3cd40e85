use std::sync::Arc;

use crate::domain::entities::Post;
use crate::domain::repositories::PostRepository;

#[derive(Debug)]
pub enum ListPostsError {
    RepositoryError(String),
}

impl std::fmt::Display for ListPostsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListPostsError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ListPostsError {}

#[derive(Debug, Clone)]
pub struct ListPostsResponse {
    pub posts: Vec<Post>,
}

pub struct ListPostsUseCase {
    post_repository: Arc<dyn PostRepository>,
}

impl ListPostsUseCase {
    pub fn new(post_repository: Arc<dyn PostRepository>) -> Self {
        Self { post_repository }
    }

    pub async fn execute(&self) -> Result<ListPostsResponse, ListPostsError> {
        let posts = self
            .post_repository
            .find_all()
            .await
            .map_err(|e| ListPostsError::RepositoryError(e.to_string()))?;

        Ok(ListPostsResponse { posts })
    }
}
