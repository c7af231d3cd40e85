use async_trait::async_trait;
use diesel::prelude::*;
use pgvector::{Vector, VectorExpressionMethods};

use crate::domain::entities::{ChunkMatch, DocChunk, NewDocChunk, uniform_dimension};
use crate::domain::repositories::{
    DocChunkRepository, doc_chunk_repository::DocChunkRepositoryError,
};
use crate::infrastructure::database::models::{DocChunkModel, NewDocChunkModel};
use crate::infrastructure::database::schema::doc_chunks::dsl::*;
use crate::infrastructure::database::{DatabaseError, DbPool, with_connection};

pub struct PostgresDocChunkRepository {
    pool: DbPool,
}

impl PostgresDocChunkRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_repository_error(error: DatabaseError) -> DocChunkRepositoryError {
    DocChunkRepositoryError::DatabaseError(error.to_string())
}

#[async_trait]
impl DocChunkRepository for PostgresDocChunkRepository {
    async fn save_batch(
        &self,
        chunks: &[NewDocChunk],
    ) -> Result<Vec<DocChunk>, DocChunkRepositoryError> {
        if uniform_dimension(chunks)
            .map_err(DocChunkRepositoryError::ValidationError)?
            .is_none()
        {
            return Ok(Vec::new());
        }

        let new_chunks: Vec<NewDocChunkModel> =
            chunks.iter().map(NewDocChunkModel::from).collect();

        let models = with_connection(&self.pool, move |conn| {
            conn.transaction(|conn| {
                diesel::insert_into(doc_chunks)
                    .values(&new_chunks)
                    .returning(DocChunkModel::as_returning())
                    .get_results(conn)
            })
        })
        .await
        .map_err(to_repository_error)?;

        Ok(models.into_iter().map(DocChunk::from).collect())
    }

    async fn nearest(
        &self,
        query_vector: &Vector,
        limit: i64,
    ) -> Result<Vec<ChunkMatch>, DocChunkRepositoryError> {
        let query_vector = query_vector.clone();

        let rows = with_connection(&self.pool, move |conn| {
            doc_chunks
                .select((
                    id,
                    content,
                    source,
                    embedding.cosine_distance(query_vector.clone()),
                ))
                .order(embedding.cosine_distance(query_vector))
                .limit(limit)
                .load::<(i32, String, Option<String>, f64)>(conn)
        })
        .await
        .map_err(to_repository_error)?;

        Ok(rows
            .into_iter()
            .map(|(chunk_id, chunk_content, chunk_source, distance)| {
                ChunkMatch::from_distance(chunk_id, chunk_content, chunk_source, distance)
            })
            .collect())
    }

    async fn count(&self) -> Result<i64, DocChunkRepositoryError> {
        with_connection(&self.pool, |conn| doc_chunks.count().get_result(conn))
            .await
            .map_err(to_repository_error)
    }
}
