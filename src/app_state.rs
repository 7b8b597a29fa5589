use std::sync::Arc;

use anyhow::Result;

use crate::config::WeatherConfig;
use crate::core::client::openweather_client::OpenWeatherClient;
use crate::domain::weather::service::weather_service::WeatherService;

/// Shared application state. Everything inside is immutable after startup;
/// requests only read through the `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub weather_service: Arc<WeatherService>,
}

pub fn build_app_state(config: &WeatherConfig) -> Result<AppState> {
    let client = OpenWeatherClient::new(
        &config.base_url,
        &config.api_key,
        config.upstream_timeout,
    )?;

    Ok(AppState {
        weather_service: Arc::new(WeatherService::new(client)),
    })
}
