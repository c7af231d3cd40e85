pub mod doc_chunk_repository;
pub mod post_repository;

pub use doc_chunk_repository::DocChunkRepository;
pub use post_repository::PostRepository;
