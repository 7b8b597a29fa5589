//! Process-wide configuration, read once at startup.

use std::env;
use std::time::Duration;

use anyhow::{bail, Context, Result};

pub const DEFAULT_BASE_URL: &str = "https://api.openweathermap.org/data/2.5";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 10;

/// Immutable settings shared by the whole process. The API key comes from the
/// environment only; it is never compiled into the binary.
#[derive(Debug, Clone)]
pub struct WeatherConfig {
    pub api_key: String,
    pub base_url: String,
    pub bind_addr: String,
    pub upstream_timeout: Duration,
    pub log_dir: Option<String>,
}

impl WeatherConfig {
    pub fn from_env() -> Result<Self> {
        let api_key =
            env::var("WEATHER_API_KEY").context("WEATHER_API_KEY must be set")?;
        if api_key.trim().is_empty() {
            bail!("WEATHER_API_KEY must not be empty");
        }

        let base_url =
            env::var("WEATHER_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string());
        let bind_addr =
            env::var("WEATHER_BIND_ADDR").unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string());

        let upstream_timeout = match env::var("WEATHER_UPSTREAM_TIMEOUT_SECS") {
            Ok(raw) => parse_timeout(&raw)?,
            Err(_) => Duration::from_secs(DEFAULT_UPSTREAM_TIMEOUT_SECS),
        };

        let log_dir = env::var("WEATHER_LOG_DIR").ok();

        Ok(Self {
            api_key,
            base_url,
            bind_addr,
            upstream_timeout,
            log_dir,
        })
    }
}

fn parse_timeout(raw: &str) -> Result<Duration> {
    let secs: u64 = raw
        .trim()
        .parse()
        .with_context(|| format!("WEATHER_UPSTREAM_TIMEOUT_SECS must be an integer, got {raw:?}"))?;
    if secs == 0 {
        bail!("WEATHER_UPSTREAM_TIMEOUT_SECS must be greater than zero");
    }
    Ok(Duration::from_secs(secs))
}
