pub mod chat_provider;
pub mod document_source;
pub mod embedding_provider;

pub use chat_provider::ChatProvider;
pub use document_source::DocumentSource;
pub use embedding_provider::EmbeddingProvider;
