use diesel::prelude::*;
use pgvector::Vector;

use crate::domain::entities::{DocChunk, NewDocChunk};
use crate::infrastructure::database::schema::doc_chunks;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = doc_chunks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct DocChunkModel {
    pub id: i32,
    pub content: String,
    pub embedding: Vector,
    pub source: Option<String>,
}

#[derive(Debug, Insertable)]
#[diesel(table_name = doc_chunks)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewDocChunkModel {
    pub content: String,
    pub embedding: Vector,
    pub source: Option<String>,
}

impl From<&NewDocChunk> for NewDocChunkModel {
    fn from(chunk: &NewDocChunk) -> Self {
        Self {
            content: chunk.content().to_string(),
            embedding: chunk.embedding().clone(),
            source: chunk.source().map(|s| s.to_string()),
        }
    }
}

impl From<DocChunkModel> for DocChunk {
    fn from(model: DocChunkModel) -> Self {
        DocChunk::new(model.id, model.content, model.embedding, model.source)
    }
}
