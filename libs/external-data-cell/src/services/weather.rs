use std::sync::Arc;

use chrono::DateTime;
use reqwest::Client;
use tracing::{debug, error, info};

use shared_config::AppConfig;
use shared_utils::datetime::parse_calendar_date;

use crate::models::{
    ForecastResponse, RainOutlook, WeatherError, HIGH_RAIN_ALERT, LOW_RAIN_ALERT,
    RAIN_ALERT_THRESHOLD,
};

pub struct WeatherService {
    client: Client,
    config: Arc<AppConfig>,
}

impl WeatherService {
    pub fn new(config: Arc<AppConfig>, client: Client) -> Self {
        Self { client, config }
    }

    /// Rain outlook for one day of the configured location's forecast window.
    pub async fn rain_outlook(&self, fecha: Option<&str>) -> Result<RainOutlook, WeatherError> {
        let date = fecha
            .map(str::trim)
            .and_then(parse_calendar_date)
            .ok_or(WeatherError::MissingDate)?
            .format("%Y-%m-%d")
            .to_string();

        let forecast = self.fetch_forecast().await.map_err(|e| {
            error!("Forecast request failed: {:#}", e);
            WeatherError::Upstream(e.to_string())
        })?;

        let dates = forecast_dates(&forecast.daily.time)?;
        let index = dates
            .iter()
            .position(|d| *d == date)
            .ok_or(WeatherError::DateNotInForecast)?;

        let probability = forecast
            .daily
            .precipitation_probability_max
            .get(index)
            .copied()
            .flatten()
            .ok_or_else(|| {
                error!("Forecast has no precipitation probability for {}", date);
                WeatherError::Upstream(format!("no precipitation probability for {}", date))
            })?;

        info!("Rain probability for {} is {}", date, probability);

        Ok(RainOutlook {
            location: self.config.weather_location_name.clone(),
            date,
            probability,
            alert: rain_alert(probability).to_string(),
        })
    }

    async fn fetch_forecast(&self) -> anyhow::Result<ForecastResponse> {
        let url = self.config.forecast_url();
        debug!("Requesting forecast from {}", url);

        let response = self
            .client
            .get(&url)
            .query(&[
                ("latitude", self.config.weather_latitude.to_string()),
                ("longitude", self.config.weather_longitude.to_string()),
                ("daily", "precipitation_probability_max".to_string()),
                ("timezone", self.config.weather_timezone.clone()),
                ("timeformat", "unixtime".to_string()),
            ])
            .send()
            .await?
            .error_for_status()?;

        Ok(response.json::<ForecastResponse>().await?)
    }
}

/// Strictly above the threshold is "high"; exactly 60 is still "low".
pub fn rain_alert(probability: f64) -> &'static str {
    if probability > RAIN_ALERT_THRESHOLD {
        HIGH_RAIN_ALERT
    } else {
        LOW_RAIN_ALERT
    }
}

/// Epoch seconds to `YYYY-MM-DD`, read as UTC calendar dates.
fn forecast_dates(times: &[i64]) -> Result<Vec<String>, WeatherError> {
    times
        .iter()
        .map(|&t| {
            DateTime::from_timestamp(t, 0)
                .map(|dt| dt.format("%Y-%m-%d").to_string())
                .ok_or_else(|| WeatherError::Upstream(format!("timestamp out of range: {}", t)))
        })
        .collect()
}
