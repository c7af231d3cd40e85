use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use std::sync::Arc;

use crate::application::use_cases::{
    CreatePostUseCase, DeletePostUseCase, GetPostUseCase, ListPostsUseCase, UpdatePostUseCase,
    create_post::CreatePostRequest, delete_post::DeletePostError, delete_post::DeletePostRequest,
    get_post::GetPostError, get_post::GetPostRequest, update_post::UpdatePostError,
    update_post::UpdatePostRequest,
};
use crate::presentation::http::dto::{
    MessageResponseDto, PostCreateDto, PostDto, error_response,
};

pub struct PostHandler {
    create_post_use_case: Arc<CreatePostUseCase>,
    get_post_use_case: Arc<GetPostUseCase>,
    list_posts_use_case: Arc<ListPostsUseCase>,
    update_post_use_case: Arc<UpdatePostUseCase>,
    delete_post_use_case: Arc<DeletePostUseCase>,
}

impl PostHandler {
    pub fn new(
        create_post_use_case: Arc<CreatePostUseCase>,
        get_post_use_case: Arc<GetPostUseCase>,
        list_posts_use_case: Arc<ListPostsUseCase>,
        update_post_use_case: Arc<UpdatePostUseCase>,
        delete_post_use_case: Arc<DeletePostUseCase>,
    ) -> Self {
        Self {
            create_post_use_case,
            get_post_use_case,
            list_posts_use_case,
            update_post_use_case,
            delete_post_use_case,
        }
    }

    pub async fn list_posts(
        State(handler): State<Arc<PostHandler>>,
    ) -> Result<impl IntoResponse, StatusCode> {
        match handler.list_posts_use_case.execute().await {
            Ok(response) => {
                let posts: Vec<PostDto> = response.posts.into_iter().map(PostDto::from).collect();
                Ok((StatusCode::OK, Json(posts)).into_response())
            }
            Err(e) => {
                tracing::error!("Listing posts failed: {}", e);
                Ok(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "LIST_POSTS_FAILED",
                    e.to_string(),
                    None,
                ))
            }
        }
    }

    pub async fn create_post(
        State(handler): State<Arc<PostHandler>>,
        Json(body): Json<PostCreateDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let request = CreatePostRequest { post: body.into() };

        match handler.create_post_use_case.execute(request).await {
            Ok(response) => {
                Ok((StatusCode::CREATED, Json(PostDto::from(response.post))).into_response())
            }
            Err(e) => {
                tracing::error!("Creating post failed: {}", e);
                Ok(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "CREATE_POST_FAILED",
                    e.to_string(),
                    None,
                ))
            }
        }
    }

    pub async fn get_post(
        State(handler): State<Arc<PostHandler>>,
        Path(post_id): Path<i32>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let request = GetPostRequest { post_id };

        match handler.get_post_use_case.execute(request).await {
            Ok(response) => Ok((StatusCode::OK, Json(PostDto::from(response.post))).into_response()),
            Err(e @ GetPostError::PostNotFound(_)) => Ok(error_response(
                StatusCode::NOT_FOUND,
                "POST_NOT_FOUND",
                "Post not found",
                Some(e.to_string()),
            )),
            Err(e) => Ok(error_response(
                StatusCode::INTERNAL_SERVER_ERROR,
                "GET_POST_FAILED",
                e.to_string(),
                None,
            )),
        }
    }

    pub async fn update_post(
        State(handler): State<Arc<PostHandler>>,
        Path(post_id): Path<i32>,
        Json(body): Json<PostCreateDto>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let request = UpdatePostRequest {
            post_id,
            changes: body.into(),
        };

        match handler.update_post_use_case.execute(request).await {
            Ok(response) => Ok((StatusCode::OK, Json(PostDto::from(response.post))).into_response()),
            Err(e @ UpdatePostError::PostNotFound(_)) => Ok(error_response(
                StatusCode::NOT_FOUND,
                "POST_NOT_FOUND",
                "Post not found",
                Some(e.to_string()),
            )),
            Err(e) => {
                tracing::error!("Updating post {} failed: {}", post_id, e);
                Ok(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "UPDATE_POST_FAILED",
                    e.to_string(),
                    None,
                ))
            }
        }
    }

    pub async fn delete_post(
        State(handler): State<Arc<PostHandler>>,
        Path(post_id): Path<i32>,
    ) -> Result<impl IntoResponse, StatusCode> {
        let request = DeletePostRequest { post_id };

        match handler.delete_post_use_case.execute(request).await {
            Ok(()) => Ok((StatusCode::OK, Json(MessageResponseDto::new("Post deleted"))).into_response()),
            Err(e @ DeletePostError::PostNotFound(_)) => Ok(error_response(
                StatusCode::NOT_FOUND,
                "POST_NOT_FOUND",
                "Post not found",
                Some(e.to_string()),
            )),
            Err(e) => {
                tracing::error!("Deleting post {} failed: {}", post_id, e);
                Ok(error_response(
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "DELETE_POST_FAILED",
                    e.to_string(),
                    None,
                ))
            }
        }
    }
}
