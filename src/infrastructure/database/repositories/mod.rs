pub mod postgres_doc_chunk_repository;
pub mod postgres_post_repository;

pub use postgres_doc_chunk_repository::PostgresDocChunkRepository;
pub use postgres_post_repository::PostgresPostRepository;
