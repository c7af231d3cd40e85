use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::{Deserialize, Serialize};

/// Envelope returned for every failed request. `data` is always null.
#[derive(Debug, Serialize, Deserialize)]
pub struct ApiResponse {
    pub success: bool,
    pub data: Option<()>,
    pub error: Option<ApiError>,
    pub timestamp: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub message: String,
    pub details: Option<String>,
}

impl ApiResponse {
    pub fn error(code: String, message: String, details: Option<String>) -> Self {
        Self {
            success: false,
            data: None,
            error: Some(ApiError {
                code,
                message,
                details,
            }),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

pub fn error_response(
    status: StatusCode,
    code: &str,
    message: impl Into<String>,
    details: Option<String>,
) -> Response {
    (
        status,
        Json(ApiResponse::error(code.to_string(), message.into(), details)),
    )
        .into_response()
}

#[derive(Debug, Serialize, Deserialize)]
pub struct HealthResponseDto {
    pub status: String,
    pub version: String,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct MessageResponseDto {
    pub message: String,
}

impl MessageResponseDto {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
