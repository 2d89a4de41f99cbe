use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::clinic::Professional;
use shared_models::error::AppError;
use shared_utils::extractor::ApiJson;

use crate::models::{ProfessionalError, ProfessionalRequest, ProfessionalSearchQuery};
use crate::services::ProfessionalService;

fn map_professional_error(e: ProfessionalError) -> AppError {
    match e {
        ProfessionalError::MissingName => AppError::ValidationError(e.to_string()),
        ProfessionalError::Database(inner) => AppError::Database(format!("{:#}", inner)),
    }
}

#[axum::debug_handler]
pub async fn list_professionals(
    State(service): State<Arc<ProfessionalService>>,
    Query(query): Query<ProfessionalSearchQuery>,
) -> Result<Json<Vec<Professional>>, AppError> {
    let professionals = service
        .list_professionals(query.specialty())
        .await
        .map_err(map_professional_error)?;
    Ok(Json(professionals))
}

#[axum::debug_handler]
pub async fn create_professional(
    State(service): State<Arc<ProfessionalService>>,
    ApiJson(request): ApiJson<ProfessionalRequest>,
) -> Result<Json<Professional>, AppError> {
    let professional = service
        .create_professional(request)
        .await
        .map_err(map_professional_error)?;
    Ok(Json(professional))
}

#[axum::debug_handler]
pub async fn update_professional(
    State(service): State<Arc<ProfessionalService>>,
    Path(professional_id): Path<i64>,
    ApiJson(request): ApiJson<ProfessionalRequest>,
) -> Result<Json<Professional>, AppError> {
    let professional = service
        .update_professional(professional_id, request)
        .await
        .map_err(map_professional_error)?;
    Ok(Json(professional))
}

#[axum::debug_handler]
pub async fn delete_professional(
    State(service): State<Arc<ProfessionalService>>,
    Path(professional_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    service
        .delete_professional(professional_id)
        .await
        .map_err(map_professional_error)?;
    Ok(Json(json!({ "message": "Professional eliminado" })))
}
