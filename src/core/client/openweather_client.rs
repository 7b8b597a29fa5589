use std::time::Duration;

use reqwest::Client;
use tracing::{debug, warn};

use crate::errors::AppError;

// Keep upstream error bodies in our message without echoing huge payloads.
const ERROR_BODY_LIMIT: usize = 512;

/// Upstream path segment selecting current weather vs forecast data.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Weather,
    Forecast,
}

impl Endpoint {
    pub fn path(self) -> &'static str {
        match self {
            Endpoint::Weather => "weather",
            Endpoint::Forecast => "forecast",
        }
    }
}

/// Thin client for the OpenWeatherMap data API.
///
/// Builds `{base_url}/{endpoint}?{params}&appid={key}&units=metric`, issues a
/// single GET, and returns the raw body text on any 2xx status. The body is
/// never parsed here; callers forward it verbatim.
pub struct OpenWeatherClient {
    http: Client,
    base_url: String,
    api_key: String,
}

impl OpenWeatherClient {
    pub fn new(base_url: &str, api_key: &str, timeout: Duration) -> anyhow::Result<Self> {
        let http = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
            api_key: api_key.to_string(),
        })
    }

    /// One GET round trip. `params` go first so the query reads
    /// `?q=...&appid=...&units=metric`, matching the provider's documented shape.
    pub async fn fetch(
        &self,
        endpoint: Endpoint,
        params: &[(&str, String)],
    ) -> Result<String, AppError> {
        let url = format!("{}/{}", self.base_url, endpoint.path());

        let mut query: Vec<(&str, &str)> =
            params.iter().map(|(k, v)| (*k, v.as_str())).collect();
        query.push(("appid", self.api_key.as_str()));
        query.push(("units", "metric"));

        debug!(url = %url, endpoint = endpoint.path(), "calling upstream provider");

        let resp = self
            .http
            .get(&url)
            .query(&query)
            .send()
            .await
            .map_err(|e| {
                warn!(url = %url, error = %e, "upstream request failed");
                AppError::UpstreamUnreachable(e.to_string())
            })?;

        let status = resp.status();
        let body = resp
            .text()
            .await
            .map_err(|e| AppError::UpstreamUnreachable(e.to_string()))?;

        if !status.is_success() {
            warn!(url = %url, status = status.as_u16(), "upstream returned error status");
            return Err(AppError::UpstreamStatus {
                status: status.as_u16(),
                body: clip(&body),
            });
        }

        Ok(body)
    }
}

fn clip(body: &str) -> String {
    body.chars().take(ERROR_BODY_LIMIT).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use wiremock::matchers::{method, path, query_param};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn client_for(server: &MockServer) -> OpenWeatherClient {
        OpenWeatherClient::new(&server.uri(), "test-key", Duration::from_secs(5)).unwrap()
    }

    #[tokio::test]
    async fn city_query_hits_weather_endpoint_once() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .and(query_param("q", "London"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"name":"London"}"#))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .fetch(Endpoint::Weather, &[("q", "London".to_string())])
            .await
            .unwrap();

        assert_eq!(body, r#"{"name":"London"}"#);
    }

    #[tokio::test]
    async fn coordinate_query_hits_forecast_endpoint() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/forecast"))
            .and(query_param("lat", "51.5"))
            .and(query_param("lon", "-0.12"))
            .and(query_param("appid", "test-key"))
            .and(query_param("units", "metric"))
            .respond_with(ResponseTemplate::new(200).set_body_string(r#"{"list":[]}"#))
            .expect(1)
            .mount(&server)
            .await;

        let body = client_for(&server)
            .fetch(
                Endpoint::Forecast,
                &[("lat", "51.5".to_string()), ("lon", "-0.12".to_string())],
            )
            .await
            .unwrap();

        assert_eq!(body, r#"{"list":[]}"#);
    }

    #[tokio::test]
    async fn non_2xx_maps_to_upstream_status() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/weather"))
            .respond_with(
                ResponseTemplate::new(401).set_body_string(r#"{"cod":401,"message":"Invalid API key"}"#),
            )
            .mount(&server)
            .await;

        let err = client_for(&server)
            .fetch(Endpoint::Weather, &[("q", "London".to_string())])
            .await
            .unwrap_err();

        match err {
            AppError::UpstreamStatus { status, body } => {
                assert_eq!(status, 401);
                assert!(body.contains("Invalid API key"));
            }
            other => panic!("expected UpstreamStatus, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn unreachable_upstream_maps_to_transport_error() {
        // Nothing listens on this port.
        let client =
            OpenWeatherClient::new("http://127.0.0.1:9", "test-key", Duration::from_secs(1))
                .unwrap();

        let err = client
            .fetch(Endpoint::Weather, &[("q", "London".to_string())])
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::UpstreamUnreachable(_)));
    }

    #[test]
    fn base_url_trailing_slash_is_normalized() {
        let client =
            OpenWeatherClient::new("http://example.test/data/2.5/", "k", Duration::from_secs(1))
                .unwrap();
        assert_eq!(client.base_url, "http://example.test/data/2.5");
    }
}
