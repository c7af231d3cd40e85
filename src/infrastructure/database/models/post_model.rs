use diesel::prelude::*;

use crate::domain::entities::{NewPost, Post as DomainPost};
use crate::infrastructure::database::schema::posts;

#[derive(Debug, Clone, Queryable, Selectable, Identifiable)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct PostModel {
    pub id: i32,
    pub title: String,
    pub content: String,
    pub created_at: String,
}

#[derive(Debug, Insertable, AsChangeset)]
#[diesel(table_name = posts)]
#[diesel(check_for_backend(diesel::pg::Pg))]
pub struct NewPostModel<'a> {
    pub title: &'a str,
    pub content: &'a str,
    pub created_at: &'a str,
}

impl<'a> From<&'a NewPost> for NewPostModel<'a> {
    fn from(post: &'a NewPost) -> Self {
        Self {
            title: &post.title,
            content: &post.content,
            created_at: &post.created_at,
        }
    }
}

impl From<PostModel> for DomainPost {
    fn from(model: PostModel) -> Self {
        DomainPost::new(model.id, model.title, model.content, model.created_at)
    }
}
