//! Weather controller: connects routes to the weather service

use axum::extract::{Query, State};
use axum::http::header;
use axum::response::{IntoResponse, Response};

use crate::api::dto::weather_query_dto::{CoordinatesQuery, WeatherQuery};
use crate::app_state::AppState;
use crate::errors::AppError;

pub struct WeatherController;

impl WeatherController {
    /// Combined entry: `?city=` wins, else `?lat=&lon=`, else 400.
    pub async fn get_current(
        State(state): State<AppState>,
        Query(q): Query<WeatherQuery>,
    ) -> Result<Response, AppError> {
        let body = state.weather_service.current(q.resolve()?).await?;
        Ok(upstream_json(body))
    }

    pub async fn get_current_by_coordinates(
        State(state): State<AppState>,
        Query(q): Query<CoordinatesQuery>,
    ) -> Result<Response, AppError> {
        let (lat, lon) = q.parsed()?;
        let body = state
            .weather_service
            .current_by_coordinates(lat, lon)
            .await?;
        Ok(upstream_json(body))
    }

    pub async fn get_forecast(
        State(state): State<AppState>,
        Query(q): Query<WeatherQuery>,
    ) -> Result<Response, AppError> {
        let body = state.weather_service.forecast(q.resolve()?).await?;
        Ok(upstream_json(body))
    }

    pub async fn get_forecast_by_coordinates(
        State(state): State<AppState>,
        Query(q): Query<CoordinatesQuery>,
    ) -> Result<Response, AppError> {
        let (lat, lon) = q.parsed()?;
        let body = state
            .weather_service
            .forecast_by_coordinates(lat, lon)
            .await?;
        Ok(upstream_json(body))
    }
}

/// The upstream payload is already JSON text; forward it verbatim and only
/// pin down the content type.
fn upstream_json(body: String) -> Response {
    ([(header::CONTENT_TYPE, "application/json")], body).into_response()
}
