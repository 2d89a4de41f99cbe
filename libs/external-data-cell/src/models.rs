use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Rain probability above which the high-probability alert is raised.
pub const RAIN_ALERT_THRESHOLD: f64 = 60.0;

pub const HIGH_RAIN_ALERT: &str = "Alta probabilidad de lluvia";
pub const LOW_RAIN_ALERT: &str = "Baja probabilidad de lluvia";

// ==============================================================================
// REQUEST MODELS
// ==============================================================================

#[derive(Debug, Clone, Default, Deserialize)]
pub struct WeatherQuery {
    pub fecha: Option<String>,
}

// ==============================================================================
// RESPONSE MODELS
// ==============================================================================

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RainOutlook {
    #[serde(rename = "ciudad")]
    pub location: String,
    #[serde(rename = "fecha")]
    pub date: String,
    #[serde(rename = "probabilidad_lluvia")]
    pub probability: f64,
    #[serde(rename = "alerta_lluvia")]
    pub alert: String,
}

// ==============================================================================
// PROVIDER MODELS
// ==============================================================================

/// Subset of the forecast provider's body requested with `timeformat=unixtime`.
#[derive(Debug, Clone, Deserialize)]
pub struct ForecastResponse {
    pub daily: DailyForecast,
}

/// Parallel series: `precipitation_probability_max[i]` belongs to `time[i]`.
#[derive(Debug, Clone, Deserialize)]
pub struct DailyForecast {
    pub time: Vec<i64>,
    pub precipitation_probability_max: Vec<Option<f64>>,
}

// ==============================================================================
// ERRORS
// ==============================================================================

#[derive(Error, Debug)]
pub enum WeatherError {
    #[error("Debe enviar la fecha en formato YYYY-MM-DD")]
    MissingDate,

    #[error("La fecha solicitada no está disponible en el pronóstico")]
    DateNotInForecast,

    #[error("Error al obtener datos del clima")]
    Upstream(String),
}

#[derive(Error, Debug)]
pub enum HolidayError {
    #[error("Error al obtener feriados")]
    Upstream(#[from] reqwest::Error),
}
