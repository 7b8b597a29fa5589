//! Weather routes (e.g., /api/weather/*)

use axum::{routing::get, Router};

use crate::api::controller::weather::WeatherController;
use crate::app_state::AppState;

/// Build the router for weather endpoints under /api/weather
pub fn weather_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(WeatherController::get_current))
        .route("/coordinates", get(WeatherController::get_current_by_coordinates))
        .route("/forecast", get(WeatherController::get_forecast))
        .route(
            "/forecast/coordinates",
            get(WeatherController::get_forecast_by_coordinates),
        )
}
