use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::http::{build_http_client, get_json, trim_base};
use crate::Result;

pub const WEATHERBIT_API_BASE: &str = "https://api.weatherbit.io/v2.0";

/// Daily forecasts from Weatherbit
pub struct WeatherbitClient {
    client: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl WeatherbitClient {
    pub fn new(api_key: String) -> Result<Self> {
        Self::with_base_url(api_key, WEATHERBIT_API_BASE.to_string())
    }

    pub fn with_base_url(api_key: String, base_url: String) -> Result<Self> {
        Ok(Self::with_client(build_http_client(None)?, api_key, base_url))
    }

    pub fn with_client(client: reqwest::Client, api_key: String, base_url: String) -> Self {
        Self {
            client,
            api_key,
            base_url: trim_base(base_url),
        }
    }

    /// Multi-day forecast for a city name
    pub async fn daily_forecast(&self, city: &str) -> Result<Vec<WeatherbitDay>> {
        let url = format!("{}/forecast/daily", self.base_url);
        debug!("Fetching forecast for '{}' via {}", city, url);

        let request = self
            .client
            .get(&url)
            .query(&[("city", city), ("key", self.api_key.as_str())]);

        let forecast: WeatherbitForecast = get_json(request).await?;
        Ok(forecast.data)
    }
}

#[derive(Debug, Deserialize)]
struct WeatherbitForecast {
    data: Vec<WeatherbitDay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherbitDay {
    pub valid_date: String,
    pub weather: WeatherbitDescription,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherbitDescription {
    pub description: String,
}
