pub mod answer_docs;
pub mod ask_posts;
pub mod create_post;
pub mod delete_post;
pub mod get_post;
pub mod ingest_documents;
pub mod list_posts;
pub mod search_docs;
pub mod update_post;

pub use answer_docs::AnswerDocsUseCase;
pub use ask_posts::AskPostsUseCase;
pub use create_post::CreatePostUseCase;
pub use delete_post::DeletePostUseCase;
pub use get_post::GetPostUseCase;
pub use ingest_documents::IngestDocumentsUseCase;
pub use list_posts::ListPostsUseCase;
pub use search_docs::SearchDocsUseCase;
pub use update_post::UpdatePostUseCase;
