use axum::Router;
use axum::http::{HeaderValue, Method, header};
use std::{net::SocketAddr, sync::Arc};
use tokio::net::TcpListener;
use tower_http::classify::ServerErrorsFailureClass;
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::trace::TraceLayer;

use crate::presentation::http::{
    handlers::{AskHandler, PostHandler},
    routes::{ask_routes, health_routes, post_routes},
};

const REQUEST_BODY_LIMIT: usize = 2 * 1024 * 1024;

pub struct HttpServer {
    post_handler: Arc<PostHandler>,
    ask_handler: Arc<AskHandler>,
    allowed_origins: Vec<String>,
    port: u16,
}

impl HttpServer {
    pub fn new(
        post_handler: Arc<PostHandler>,
        ask_handler: Arc<AskHandler>,
        allowed_origins: Vec<String>,
        port: u16,
    ) -> Self {
        Self {
            post_handler,
            ask_handler,
            allowed_origins,
            port,
        }
    }

    fn cors_layer(&self) -> CorsLayer {
        let origins: Vec<HeaderValue> = self
            .allowed_origins
            .iter()
            .filter_map(|origin| match HeaderValue::from_str(origin) {
                Ok(value) => Some(value),
                Err(_) => {
                    tracing::warn!("Ignoring invalid CORS origin: {}", origin);
                    None
                }
            })
            .collect();

        CorsLayer::new()
            .allow_origin(AllowOrigin::list(origins))
            .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
            .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
    }

    pub fn router(&self) -> Router {
        Router::new()
            .merge(health_routes())
            .merge(post_routes(self.post_handler.clone()))
            .merge(ask_routes(self.ask_handler.clone()))
            .layer(self.cors_layer())
            .layer(RequestBodyLimitLayer::new(REQUEST_BODY_LIMIT))
            .layer(
                TraceLayer::new_for_http()
                    .on_request(
                        |request: &axum::http::Request<_>, _span: &tracing::Span| {
                            tracing::info!(
                                "Received request: {} {}",
                                request.method(),
                                request.uri()
                            );
                        },
                    )
                    .on_response(
                        |response: &axum::http::Response<_>,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::info!(
                                "Response: {} (took {} ms)",
                                response.status(),
                                latency.as_millis()
                            );
                        },
                    )
                    .on_failure(
                        |error: ServerErrorsFailureClass,
                         latency: std::time::Duration,
                         _span: &tracing::Span| {
                            tracing::error!(
                                "Request failed: {:?} (took {} ms)",
                                error,
                                latency.as_millis()
                            );
                        },
                    ),
            )
    }

    pub async fn run(self) -> Result<(), Box<dyn std::error::Error>> {
        let app = self.router();
        let addr = SocketAddr::from(([0, 0, 0, 0], self.port));

        let listener = TcpListener::bind(addr).await?;
        tracing::info!("Listening on {}", addr);
        axum::serve(listener, app).await?;

        Ok(())
    }
}
