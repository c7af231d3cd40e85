use async_trait::async_trait;

use crate::domain::entities::{NewPost, Post};

#[derive(Debug)]
pub enum PostRepositoryError {
    DatabaseError(String),
}

impl std::fmt::Display for PostRepositoryError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PostRepositoryError::DatabaseError(msg) => write!(f, "Database error: {}", msg),
        }
    }
}

impl std::error::Error for PostRepositoryError {}

#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn create(&self, post: &NewPost) -> Result<Post, PostRepositoryError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, PostRepositoryError>;
    async fn find_all(&self) -> Result<Vec<Post>, PostRepositoryError>;
    /// Returns `None` when no post has the given id.
    async fn update(&self, id: i32, post: &NewPost) -> Result<Option<Post>, PostRepositoryError>;
    async fn delete(&self, id: i32) -> Result<bool, PostRepositoryError>;
}
