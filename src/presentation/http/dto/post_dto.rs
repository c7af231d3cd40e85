use serde::{Deserialize, Serialize};

use crate::domain::entities::{NewPost, Post};

#[derive(Debug, Serialize, Deserialize)]
pub struct PostDto {
    pub id: i32,
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<Post> for PostDto {
    fn from(post: Post) -> Self {
        Self {
            id: post.id(),
            title: post.title().to_string(),
            content: post.content().to_string(),
            created_at: post.created_at().to_string(),
        }
    }
}

/// Body of `POST /posts` and `PUT /posts/{id}`.
#[derive(Debug, Serialize, Deserialize)]
pub struct PostCreateDto {
    pub title: String,
    pub content: String,
    #[serde(rename = "createdAt")]
    pub created_at: String,
}

impl From<PostCreateDto> for NewPost {
    fn from(dto: PostCreateDto) -> Self {
        NewPost::new(dto.title, dto.content, dto.created_at)
    }
}
