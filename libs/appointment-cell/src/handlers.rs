// libs/appointment-cell/src/handlers.rs
use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};
use serde_json::{json, Value};

use shared_models::clinic::Appointment;
use shared_models::error::AppError;
use shared_utils::extractor::ApiJson;

use crate::models::{
    AppointmentError, CreateAppointmentRequest, CreatedAppointment, UpdateAppointmentRequest,
    UpdatedAppointment,
};
use crate::services::AppointmentWriter;

fn map_appointment_error(e: AppointmentError) -> AppError {
    match e {
        AppointmentError::MissingReference(_) => AppError::BadRequest(e.to_string()),
        AppointmentError::Database(inner) => AppError::Database(format!("{:#}", inner)),
    }
}

#[axum::debug_handler]
pub async fn list_appointments(
    State(writer): State<Arc<AppointmentWriter>>,
) -> Result<Json<Vec<Appointment>>, AppError> {
    let appointments = writer.list().await.map_err(map_appointment_error)?;
    Ok(Json(appointments))
}

#[axum::debug_handler]
pub async fn create_appointment(
    State(writer): State<Arc<AppointmentWriter>>,
    ApiJson(request): ApiJson<CreateAppointmentRequest>,
) -> Result<Json<CreatedAppointment>, AppError> {
    let appointment = writer.create(request).await.map_err(map_appointment_error)?;
    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn update_appointment(
    State(writer): State<Arc<AppointmentWriter>>,
    Path(appointment_id): Path<i64>,
    ApiJson(request): ApiJson<UpdateAppointmentRequest>,
) -> Result<Json<UpdatedAppointment>, AppError> {
    let appointment = writer
        .update(appointment_id, request)
        .await
        .map_err(map_appointment_error)?;
    Ok(Json(appointment))
}

#[axum::debug_handler]
pub async fn delete_appointment(
    State(writer): State<Arc<AppointmentWriter>>,
    Path(appointment_id): Path<i64>,
) -> Result<Json<Value>, AppError> {
    writer
        .delete(appointment_id)
        .await
        .map_err(map_appointment_error)?;
    Ok(Json(json!({ "message": "Appointment eliminado" })))
}
