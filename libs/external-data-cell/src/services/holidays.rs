use std::sync::Arc;

use reqwest::Client;
use serde_json::Value;
use tracing::debug;

use shared_config::AppConfig;

use crate::models::HolidayError;

pub struct HolidayService {
    client: Client,
    config: Arc<AppConfig>,
}

impl HolidayService {
    pub fn new(config: Arc<AppConfig>, client: Client) -> Self {
        Self { client, config }
    }

    /// The provider's holiday list for the configured year, untouched.
    pub async fn list_holidays(&self) -> Result<Value, HolidayError> {
        let url = self.config.holidays_url();
        debug!("Requesting holidays from {}", url);

        let body = self
            .client
            .get(&url)
            .send()
            .await?
            .error_for_status()?
            .json::<Value>()
            .await?;

        Ok(body)
    }
}
