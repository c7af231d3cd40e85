pub mod doc_chunk;
pub mod post;

pub use doc_chunk::{ChunkMatch, DocChunk, NewDocChunk, uniform_dimension};
pub use post::{NewPost, Post};
