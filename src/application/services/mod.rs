pub mod ingestion_service;
pub mod retrieval_service;
pub mod text_splitter;

pub use ingestion_service::{IngestionReport, IngestionService};
pub use retrieval_service::RetrievalService;
pub use text_splitter::CharacterTextSplitter;
