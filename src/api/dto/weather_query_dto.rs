//! Weather API DTOs

use serde::Deserialize;

use crate::errors::AppError;

/// Combined query accepted by `/api/weather` and `/api/weather/forecast`.
///
/// Coordinates arrive as strings and are parsed here so that a non-numeric
/// value gets the same 400 contract as a missing one, instead of an
/// extractor-level rejection.
#[derive(Deserialize, Debug, Default)]
pub struct WeatherQuery {
    pub city: Option<String>,
    pub lat: Option<String>,
    pub lon: Option<String>,
}

/// A query with exactly one form resolved: city or coordinate pair.
#[derive(Debug, Clone, PartialEq)]
pub enum ResolvedQuery {
    City(String),
    Coordinates { lat: f64, lon: f64 },
}

impl WeatherQuery {
    /// Precedence: city wins when present; else both coordinates must be
    /// present and numeric; else the request is invalid.
    pub fn resolve(self) -> Result<ResolvedQuery, AppError> {
        if let Some(city) = self.city {
            return Ok(ResolvedQuery::City(city));
        }

        match (self.lat, self.lon) {
            (Some(lat), Some(lon)) => Ok(ResolvedQuery::Coordinates {
                lat: parse_coordinate("lat", &lat)?,
                lon: parse_coordinate("lon", &lon)?,
            }),
            _ => Err(AppError::MissingQuery),
        }
    }
}

/// Query for the explicit `/coordinates` paths, where both values are required.
#[derive(Deserialize, Debug, Default)]
pub struct CoordinatesQuery {
    pub lat: Option<String>,
    pub lon: Option<String>,
}

impl CoordinatesQuery {
    pub fn parsed(self) -> Result<(f64, f64), AppError> {
        let lat = self
            .lat
            .ok_or_else(|| AppError::InvalidInput("lat is required".to_string()))?;
        let lon = self
            .lon
            .ok_or_else(|| AppError::InvalidInput("lon is required".to_string()))?;

        Ok((parse_coordinate("lat", &lat)?, parse_coordinate("lon", &lon)?))
    }
}

fn parse_coordinate(name: &str, raw: &str) -> Result<f64, AppError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| AppError::InvalidInput(format!("{name} must be numeric, got {raw:?}")))
}
