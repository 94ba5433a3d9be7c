// Weatherbit provider - one WeatherDay per forecast day
use async_trait::async_trait;
use cityscout_api::{WeatherbitClient, WeatherbitDay};

use crate::{models::WeatherDay, providers::Provider, Result};

pub struct WeatherbitProvider {
    client: WeatherbitClient,
}

impl WeatherbitProvider {
    pub fn new(client: WeatherbitClient) -> Self {
        Self { client }
    }
}

#[async_trait]
impl Provider<Vec<WeatherDay>> for WeatherbitProvider {
    async fn fetch(&self, term: &str) -> Result<Vec<WeatherDay>> {
        let days = self.client.daily_forecast(term).await?;
        Ok(days.into_iter().map(day_to_weather).collect())
    }
}

fn day_to_weather(day: WeatherbitDay) -> WeatherDay {
    WeatherDay {
        forecast: day.weather.description,
        date: day.valid_date,
    }
}
