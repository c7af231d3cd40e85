use axum::{
    Json,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use crate::application::use_cases::{
    AnswerDocsUseCase, AskPostsUseCase, SearchDocsUseCase, answer_docs::AnswerDocsError,
    answer_docs::AnswerDocsRequest, ask_posts::AskPostsError, ask_posts::AskPostsRequest,
    search_docs::SearchDocsError, search_docs::SearchDocsRequest,
};
use crate::presentation::http::dto::{
    AnswerResponseDto, AskDocsResponseDto, AskRequestDto, ChunkMatchDto, error_response,
};

fn missing_question() -> Response {
    error_response(
        StatusCode::BAD_REQUEST,
        "QUESTION_REQUIRED",
        "question is required",
        Some("Send a JSON body with a non-empty \"question\" field".to_string()),
    )
}

pub struct AskHandler {
    ask_posts_use_case: Arc<AskPostsUseCase>,
    search_docs_use_case: Arc<SearchDocsUseCase>,
    answer_docs_use_case: Arc<AnswerDocsUseCase>,
}

impl AskHandler {
    pub fn new(
        ask_posts_use_case: Arc<AskPostsUseCase>,
        search_docs_use_case: Arc<SearchDocsUseCase>,
        answer_docs_use_case: Arc<AnswerDocsUseCase>,
    ) -> Self {
        Self {
            ask_posts_use_case,
            search_docs_use_case,
            answer_docs_use_case,
        }
    }

    pub async fn ask(
        State(handler): State<Arc<AskHandler>>,
        Json(body): Json<AskRequestDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let Some(question) = body.question() else {
            return Ok(missing_question());
        };

        let request = AskPostsRequest {
            question: question.to_string(),
        };

        match handler.ask_posts_use_case.execute(request).await {
            Ok(response) => Ok((
                StatusCode::OK,
                Json(AnswerResponseDto {
                    answer: response.answer,
                }),
            )
                .into_response()),
            Err(AskPostsError::ValidationError(_)) => Ok(missing_question()),
            Err(e) => {
                tracing::error!("Answering from posts failed: {}", e);
                Ok(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ASK_FAILED",
                    e.to_string(),
                    None,
                ))
            }
        }
    }

    pub async fn ask_docs(
        State(handler): State<Arc<AskHandler>>,
        Json(body): Json<AskRequestDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let Some(question) = body.question() else {
            return Ok(missing_question());
        };

        let request = SearchDocsRequest {
            question: question.to_string(),
        };

        match handler.search_docs_use_case.execute(request).await {
            Ok(response) => {
                let dto = AskDocsResponseDto {
                    question: response.question,
                    matches: response
                        .matches
                        .into_iter()
                        .map(ChunkMatchDto::from)
                        .collect(),
                };
                Ok((StatusCode::OK, Json(dto)).into_response())
            }
            Err(SearchDocsError::ValidationError(_)) => Ok(missing_question()),
            Err(e) => {
                tracing::error!("Document search failed: {}", e);
                Ok(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "SEARCH_FAILED",
                    e.to_string(),
                    None,
                ))
            }
        }
    }

    pub async fn answer_docs(
        State(handler): State<Arc<AskHandler>>,
        Json(body): Json<AskRequestDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let Some(question) = body.question() else {
            return Ok(missing_question());
        };

        let request = AnswerDocsRequest {
            question: question.to_string(),
        };

        match handler.answer_docs_use_case.execute(request).await {
            Ok(response) => Ok((
                StatusCode::OK,
                Json(AnswerResponseDto {
                    answer: response.answer,
                }),
            )
                .into_response()),
            Err(AnswerDocsError::ValidationError(_)) => Ok(missing_question()),
            Err(e) => {
                tracing::error!("Answering from documents failed: {}", e);
                Ok(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "ANSWER_FAILED",
                    e.to_string(),
                    None,
                ))
            }
        }
    }
}
