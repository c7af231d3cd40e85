use async_trait::async_trait;
use diesel::prelude::*;

use crate::domain::entities::{NewPost, Post};
use crate::domain::repositories::{PostRepository, post_repository::PostRepositoryError};
use crate::infrastructure::database::models::{NewPostModel, PostModel};
use crate::infrastructure::database::schema::posts::dsl::*;
use crate::infrastructure::database::{DatabaseError, DbPool, with_connection};

pub struct PostgresPostRepository {
    pool: DbPool,
}

impl PostgresPostRepository {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

fn to_repository_error(error: DatabaseError) -> PostRepositoryError {
    PostRepositoryError::DatabaseError(error.to_string())
}

#[async_trait]
impl PostRepository for PostgresPostRepository {
    async fn create(&self, post: &NewPost) -> Result<Post, PostRepositoryError> {
        let post = post.clone();

        let model = with_connection(&self.pool, move |conn| {
            diesel::insert_into(posts)
                .values(&NewPostModel::from(&post))
                .returning(PostModel::as_returning())
                .get_result(conn)
        })
        .await
        .map_err(to_repository_error)?;

        Ok(Post::from(model))
    }

    async fn find_by_id(&self, post_id: i32) -> Result<Option<Post>, PostRepositoryError> {
        let result = with_connection(&self.pool, move |conn| {
            posts
                .find(post_id)
                .select(PostModel::as_select())
                .first(conn)
                .optional()
        })
        .await
        .map_err(to_repository_error)?;

        Ok(result.map(Post::from))
    }

    async fn find_all(&self) -> Result<Vec<Post>, PostRepositoryError> {
        let models = with_connection(&self.pool, |conn| {
            posts
                .order(id.asc())
                .select(PostModel::as_select())
                .load(conn)
        })
        .await
        .map_err(to_repository_error)?;

        Ok(models.into_iter().map(Post::from).collect())
    }

    async fn update(
        &self,
        post_id: i32,
        changes: &NewPost,
    ) -> Result<Option<Post>, PostRepositoryError> {
        let changes = changes.clone();

        let result = with_connection(&self.pool, move |conn| {
            diesel::update(posts.find(post_id))
                .set(&NewPostModel::from(&changes))
                .returning(PostModel::as_returning())
                .get_result(conn)
                .optional()
        })
        .await
        .map_err(to_repository_error)?;

        Ok(result.map(Post::from))
    }

    async fn delete(&self, post_id: i32) -> Result<bool, PostRepositoryError> {
        let deleted_count = with_connection(&self.pool, move |conn| {
            diesel::delete(posts.find(post_id)).execute(conn)
        })
        .await
        .map_err(to_repository_error)?;

        Ok(deleted_count > 0)
    }
}
