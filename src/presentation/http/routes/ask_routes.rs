use axum::{Router, routing::post};
use std::sync::Arc;

use crate::presentation::http::handlers::AskHandler;

pub fn ask_routes(ask_handler: Arc<AskHandler>) -> Router {
    Router::new()
        .route("/ask", post(AskHandler::ask))
        .route("/ask-docs", post(AskHandler::ask_docs))
        .route("/answer-docs", post(AskHandler::answer_docs))
        .with_state(ask_handler)
}
