pub mod doc_chunk_model;
pub mod post_model;

pub use doc_chunk_model::*;
pub use post_model::*;
