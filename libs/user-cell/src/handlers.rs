use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::clinic::User;
use shared_models::error::AppError;
use shared_utils::extractor::ApiJson;

use crate::models::{UserError, UserRequest};
use crate::services::UserService;

fn map_user_error(e: UserError) -> AppError {
    match e {
        UserError::MissingName => AppError::ValidationError(e.to_string()),
        UserError::Database(inner) => AppError::Database(format!("{:#}", inner)),
    }
}

#[axum::debug_handler]
pub async fn list_users(
    State(service): State<Arc<UserService>>,
) -> Result<Json<Vec<User>>, AppError> {
    let users = service.list_users().await.map_err(map_user_error)?;
    Ok(Json(users))
}

#[axum::debug_handler]
pub async fn create_user(
    State(service): State<Arc<UserService>>,
    ApiJson(request): ApiJson<UserRequest>,
) -> Result<Json<User>, AppError> {
    let user = service.create_user(request).await.map_err(map_user_error)?;
    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn update_user(
    State(service): State<Arc<UserService>>,
    Path(user_id): Path<i64>,
    ApiJson(request): ApiJson<UserRequest>,
) -> Result<Json<User>, AppError> {
    let user = service
        .update_user(user_id, request)
        .await
        .map_err(map_user_error)?;
    Ok(Json(user))
}

#[axum::debug_handler]
pub async fn delete_user(
    State(service): State<Arc<UserService>>,
    Path(user_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    service.delete_user(user_id).await.map_err(map_user_error)?;
    Ok(Json(json!({ "message": "User eliminado" })))
}
