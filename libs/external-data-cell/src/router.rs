use std::sync::Arc;

use axum::{routing::get, Router};
use reqwest::Client;

use shared_config::AppConfig;

use crate::handlers;
use crate::services::{HolidayService, WeatherService};

#[derive(Clone)]
pub struct ExternalDataState {
    pub holidays: Arc<HolidayService>,
    pub weather: Arc<WeatherService>,
}

pub fn external_data_routes(config: Arc<AppConfig>, client: Client) -> Router {
    let state = ExternalDataState {
        holidays: Arc::new(HolidayService::new(config.clone(), client.clone())),
        weather: Arc::new(WeatherService::new(config, client)),
    };

    Router::new()
        .route("/clima", get(handlers::get_rain_outlook))
        .route("/feriados", get(handlers::list_holidays))
        .with_state(state)
}
