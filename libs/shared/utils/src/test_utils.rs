use chrono::NaiveDate;
use serde_json::{json, Value};

use shared_config::AppConfig;

/// Seconds the forecast provider's reporting timezone sits behind UTC.
pub const FORECAST_UTC_OFFSET_SECONDS: i64 = -3 * 3600;

pub struct TestConfig {
    pub database_url: String,
    pub external_api_url: String,
}

impl Default for TestConfig {
    fn default() -> Self {
        Self {
            database_url: "memory".to_string(),
            external_api_url: "http://localhost:54321".to_string(),
        }
    }
}

impl TestConfig {
    /// Points both external providers at the same mock server.
    pub fn with_external_api(url: impl Into<String>) -> Self {
        Self {
            external_api_url: url.into(),
            ..Self::default()
        }
    }

    pub fn to_app_config(&self) -> AppConfig {
        AppConfig {
            database_url: self.database_url.clone(),
            holidays_api_url: self.external_api_url.clone(),
            weather_api_url: self.external_api_url.clone(),
            ..AppConfig::default()
        }
    }
}

pub struct MockForecastResponses;

impl MockForecastResponses {
    /// Unix timestamp of local midnight for `date` in the provider timezone.
    pub fn day_start(date: &str) -> i64 {
        let date = NaiveDate::parse_from_str(date, "%Y-%m-%d").expect("fixture date is YYYY-MM-DD");
        let midnight = date.and_hms_opt(0, 0, 0).expect("midnight exists");
        midnight.and_utc().timestamp() - FORECAST_UTC_OFFSET_SECONDS
    }

    /// Daily forecast body in the provider's unixtime format.
    pub fn daily(days: &[(&str, Option<f64>)]) -> Value {
        let time: Vec<i64> = days.iter().map(|(date, _)| Self::day_start(date)).collect();
        let probabilities: Vec<Option<f64>> = days.iter().map(|(_, p)| *p).collect();

        json!({
            "latitude": -27.5,
            "longitude": -58.875,
            "generationtime_ms": 0.05,
            "utc_offset_seconds": FORECAST_UTC_OFFSET_SECONDS,
            "timezone": "America/Argentina/Buenos_Aires",
            "timezone_abbreviation": "GMT-3",
            "elevation": 60.0,
            "daily_units": {
                "time": "unixtime",
                "precipitation_probability_max": "%"
            },
            "daily": {
                "time": time,
                "precipitation_probability_max": probabilities
            }
        })
    }

    /// A seven day window starting on 2025-06-01.
    pub fn june_week() -> Value {
        Self::daily(&[
            ("2025-06-01", Some(10.0)),
            ("2025-06-02", Some(60.0)),
            ("2025-06-03", Some(61.0)),
            ("2025-06-04", Some(95.0)),
            ("2025-06-05", Some(0.0)),
            ("2025-06-06", Some(35.0)),
            ("2025-06-07", None),
        ])
    }
}

pub struct MockHolidayResponses;

impl MockHolidayResponses {
    pub fn holidays() -> Value {
        json!([
            { "fecha": "2025-01-01", "tipo": "inamovible", "nombre": "Año nuevo" },
            { "fecha": "2025-03-24", "tipo": "inamovible", "nombre": "Día Nacional de la Memoria por la Verdad y la Justicia" },
            { "fecha": "2025-05-25", "tipo": "inamovible", "nombre": "Día de la Revolución de Mayo" }
        ])
    }
}
