use tracing::info;

use crate::api::dto::weather_query_dto::ResolvedQuery;
use crate::core::client::openweather_client::{Endpoint, OpenWeatherClient};
use crate::errors::AppError;

/// Validates resolved queries and forwards them to the upstream client.
/// Holds no per-request state; the response body passes through untouched.
pub struct WeatherService {
    client: OpenWeatherClient,
}

impl WeatherService {
    pub fn new(client: OpenWeatherClient) -> Self {
        Self { client }
    }

    pub async fn current(&self, query: ResolvedQuery) -> Result<String, AppError> {
        match query {
            ResolvedQuery::City(city) => self.current_by_city(&city).await,
            ResolvedQuery::Coordinates { lat, lon } => {
                self.current_by_coordinates(lat, lon).await
            }
        }
    }

    pub async fn forecast(&self, query: ResolvedQuery) -> Result<String, AppError> {
        match query {
            ResolvedQuery::City(city) => self.forecast_by_city(&city).await,
            ResolvedQuery::Coordinates { lat, lon } => {
                self.forecast_by_coordinates(lat, lon).await
            }
        }
    }

    pub async fn current_by_city(&self, city: &str) -> Result<String, AppError> {
        self.by_city(Endpoint::Weather, city).await
    }

    pub async fn forecast_by_city(&self, city: &str) -> Result<String, AppError> {
        self.by_city(Endpoint::Forecast, city).await
    }

    pub async fn current_by_coordinates(&self, lat: f64, lon: f64) -> Result<String, AppError> {
        self.by_coordinates(Endpoint::Weather, lat, lon).await
    }

    pub async fn forecast_by_coordinates(&self, lat: f64, lon: f64) -> Result<String, AppError> {
        self.by_coordinates(Endpoint::Forecast, lat, lon).await
    }

    async fn by_city(&self, endpoint: Endpoint, city: &str) -> Result<String, AppError> {
        let city = city.trim();
        if city.is_empty() {
            return Err(AppError::InvalidInput("city must not be empty".to_string()));
        }

        info!(endpoint = endpoint.path(), city, "fetching weather by city");
        self.client
            .fetch(endpoint, &[("q", city.to_string())])
            .await
    }

    async fn by_coordinates(
        &self,
        endpoint: Endpoint,
        lat: f64,
        lon: f64,
    ) -> Result<String, AppError> {
        // "NaN" and "inf" parse as valid f64s; they are not valid coordinates.
        if !lat.is_finite() || !lon.is_finite() {
            return Err(AppError::InvalidInput(
                "lat and lon must be finite numbers".to_string(),
            ));
        }

        info!(endpoint = endpoint.path(), lat, lon, "fetching weather by coordinates");
        self.client
            .fetch(
                endpoint,
                &[("lat", lat.to_string()), ("lon", lon.to_string())],
            )
            .await
    }
}
