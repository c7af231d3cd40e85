use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Post {
    id: i32,
    title: String,
    content: String,
    created_at: String,
}

impl Post {
    pub fn new(id: i32, title: String, content: String, created_at: String) -> Self {
        Self {
            id,
            title,
            content,
            created_at,
        }
    }

    // Getters
    pub fn id(&self) -> i32 {
        self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn content(&self) -> &str {
        &self.content
    }

    pub fn created_at(&self) -> &str {
        &self.created_at
    }

    /// Renders the post the way it is fed to the chat model as context.
    pub fn as_context(&self) -> String {
        format!("Title: {}\nContent: {}", self.title, self.content)
    }
}

/// Field values for creating or fully replacing a post. The id is always
/// assigned by storage.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub created_at: String,
}

impl NewPost {
    pub fn new(title: String, content: String, created_at: String) -> Self {
        Self {
            title,
            content,
            created_at,
        }
    }

    pub fn into_post(self, id: i32) -> Post {
        Post::new(id, self.title, self.content, self.created_at)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_into_post_keeps_fields() {
        let new_post = NewPost::new(
            "Hello".to_string(),
            "First post".to_string(),
            "2024-05-01".to_string(),
        );
        let post = new_post.into_post(7);

        assert_eq!(post.id(), 7);
        assert_eq!(post.title(), "Hello");
        assert_eq!(post.content(), "First post");
        assert_eq!(post.created_at(), "2024-05-01");
    }

    #[test]
    fn test_as_context() {
        let post = Post::new(1, "Rust".to_string(), "Ownership".to_string(), "now".to_string());
        assert_eq!(post.as_context(), "Title: Rust\nContent: Ownership");
    }
}
