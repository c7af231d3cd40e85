pub mod openai_client;

pub use openai_client::{OpenAiChatProvider, OpenAiClient, OpenAiEmbeddingProvider};
