use axum::{
    extract::{Query, State},
    Json,
};
use serde_json::Value;
use tracing::error;

use shared_models::error::AppError;

use crate::models::{HolidayError, RainOutlook, WeatherError, WeatherQuery};
use crate::router::ExternalDataState;

fn map_weather_error(e: WeatherError) -> AppError {
    match e {
        WeatherError::MissingDate => AppError::BadRequest(e.to_string()),
        WeatherError::DateNotInForecast => AppError::NotFound(e.to_string()),
        WeatherError::Upstream(_) => AppError::Internal(e.to_string()),
    }
}

fn map_holiday_error(e: HolidayError) -> AppError {
    let HolidayError::Upstream(source) = &e;
    error!("Holiday lookup failed: {}", source);
    AppError::Internal(e.to_string())
}

#[axum::debug_handler]
pub async fn get_rain_outlook(
    State(state): State<ExternalDataState>,
    Query(query): Query<WeatherQuery>,
) -> Result<Json<RainOutlook>, AppError> {
    let outlook = state
        .weather
        .rain_outlook(query.fecha.as_deref())
        .await
        .map_err(map_weather_error)?;
    Ok(Json(outlook))
}

#[axum::debug_handler]
pub async fn list_holidays(
    State(state): State<ExternalDataState>,
) -> Result<Json<Value>, AppError> {
    let holidays = state
        .holidays
        .list_holidays()
        .await
        .map_err(map_holiday_error)?;
    Ok(Json(holidays))
}
