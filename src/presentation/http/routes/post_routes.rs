use axum::{Router, routing::get};
use std::sync::Arc;

use crate::presentation::http::handlers::PostHandler;

pub fn post_routes(post_handler: Arc<PostHandler>) -> Router {
    Router::new()
        .route(
            "/posts",
            get(PostHandler::list_posts).post(PostHandler::create_post),
        )
        .route(
            "/posts/{post_id}",
            get(PostHandler::get_post)
                .put(PostHandler::update_post)
                .delete(PostHandler::delete_post),
        )
        .with_state(post_handler)
}
