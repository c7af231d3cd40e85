use std::sync::Arc;

use crate::application::ports::ChatProvider;
use crate::application::ports::chat_provider::ChatRequest;
use crate::domain::repositories::PostRepository;

const POSTS_SYSTEM_PROMPT: &str =
    "You are a helpful assistant. Answer the question using the blog posts provided as context.";

#[derive(Debug)]
pub enum AskPostsError {
    ValidationError(String),
    RepositoryError(String),
    ChatError(String),
}

impl std::fmt::Display for AskPostsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            AskPostsError::ValidationError(msg) => write!(f, "Validation error: {}", msg),
            AskPostsError::RepositoryError(msg) => write!(f, "Loading posts failed: {}", msg),
            AskPostsError::ChatError(msg) => write!(f, "Chat completion failed: {}", msg),
        }
    }
}

impl std::error::Error for AskPostsError {}

#[derive(Debug, Clone)]
pub struct AskPostsRequest {
    pub question: String,
}

#[derive(Debug, Clone)]
pub struct AskPostsResponse {
    pub answer: String,
    pub posts_used: usize,
}

pub struct AskPostsUseCase {
    post_repository: Arc<dyn PostRepository>,
    chat_provider: Arc<dyn ChatProvider>,
}

impl AskPostsUseCase {
    pub fn new(
        post_repository: Arc<dyn PostRepository>,
        chat_provider: Arc<dyn ChatProvider>,
    ) -> Self {
        Self {
            post_repository,
            chat_provider,
        }
    }

    pub async fn execute(&self, request: AskPostsRequest) -> Result<AskPostsResponse, AskPostsError> {
        let question = request.question.trim();
        if question.is_empty() {
            return Err(AskPostsError::ValidationError(
                "question is required".to_string(),
            ));
        }

        let posts = self
            .post_repository
            .find_all()
            .await
            .map_err(|e| AskPostsError::RepositoryError(e.to_string()))?;

        let context = posts
            .iter()
            .map(|post| post.as_context())
            .collect::<Vec<_>>()
            .join("\n\n");

        let answer = self
            .chat_provider
            .complete(ChatRequest::with_context(
                POSTS_SYSTEM_PROMPT,
                &context,
                question,
            ))
            .await
            .map_err(|e| AskPostsError::ChatError(e.to_string()))?;

        Ok(AskPostsResponse {
            answer,
            posts_used: posts.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::NewPost;
    use crate::test_support::{InMemoryPostRepository, StubChatProvider};

    #[tokio::test]
    async fn test_all_posts_are_sent_as_context() {
        let posts = Arc::new(InMemoryPostRepository::new());
        posts
            .create(&NewPost::new("One".into(), "first".into(), "d1".into()))
            .await
            .unwrap();
        posts
            .create(&NewPost::new("Two".into(), "second".into(), "d2".into()))
            .await
            .unwrap();
        let chat = Arc::new(StubChatProvider::answering("42"));
        let use_case = AskPostsUseCase::new(posts, chat.clone());

        let response = use_case
            .execute(AskPostsRequest {
                question: "  What is there?  ".to_string(),
            })
            .await
            .unwrap();

        assert_eq!(response.answer, "42");
        assert_eq!(response.posts_used, 2);
        let sent = chat.last_request().unwrap();
        assert_eq!(
            sent.user_prompt,
            "Context:\nTitle: One\nContent: first\n\nTitle: Two\nContent: second\n\nQuestion: What is there?"
        );
    }

    #[tokio::test]
    async fn test_blank_question_is_rejected_before_any_call() {
        let chat = Arc::new(StubChatProvider::answering("unused"));
        let use_case = AskPostsUseCase::new(Arc::new(InMemoryPostRepository::new()), chat.clone());

        let result = use_case
            .execute(AskPostsRequest {
                question: "   ".to_string(),
            })
            .await;

        assert!(matches!(result, Err(AskPostsError::ValidationError(_))));
        assert!(chat.last_request().is_none());
    }
}
