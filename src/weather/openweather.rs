//! OpenWeatherMap current-conditions client

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, USER_AGENT};
use serde::Deserialize;
use std::time::Duration;
use tracing::debug;

use super::{WeatherError, WeatherProvider};
use crate::config::WeatherConfig;
use crate::domain::WeatherObservation;

/// Placeholder shipped in sample configs; treated the same as no key
pub const PLACEHOLDER_API_KEY: &str = "PUT_YOUR_OPENWEATHER_KEY";

/// A blank or placeholder key counts as no key at all
pub fn usable_api_key(key: Option<&str>) -> Option<&str> {
    key.map(str::trim)
        .filter(|k| !k.is_empty() && *k != PLACEHOLDER_API_KEY)
}

#[derive(Clone)]
pub struct OpenWeatherClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl OpenWeatherClient {
    pub fn new(
        base_url: String,
        api_key: Option<String>,
        timeout: Duration,
    ) -> anyhow::Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(USER_AGENT, HeaderValue::from_static("grid-guardian/0.1"));
        let client = reqwest::Client::builder()
            .timeout(timeout)
            .default_headers(headers)
            .build()?;
        Ok(Self {
            base_url,
            api_key,
            client,
        })
    }

    pub fn from_config(cfg: &WeatherConfig) -> anyhow::Result<Self> {
        Self::new(cfg.base_url.clone(), cfg.api_key.clone(), cfg.timeout())
    }

    fn usable_key(&self) -> Option<&str> {
        usable_api_key(self.api_key.as_deref())
    }

    fn url(&self) -> String {
        format!("{}/data/2.5/weather", self.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl WeatherProvider for OpenWeatherClient {
    async fn current(&self, city: &str) -> Result<WeatherObservation, WeatherError> {
        let key = self.usable_key().ok_or(WeatherError::MissingApiKey)?;

        debug!(city, "fetching current weather");
        let resp = self
            .client
            .get(self.url())
            .query(&[("q", city), ("appid", key), ("units", "metric")])
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(WeatherError::Status(status.as_u16()));
        }

        let body = resp.text().await?;
        let raw: RawCurrentWeather =
            serde_json::from_str(&body).map_err(|e| WeatherError::Malformed(e.to_string()))?;

        let condition = raw
            .weather
            .into_iter()
            .next()
            .map(|w| w.main)
            .ok_or_else(|| WeatherError::Malformed("empty weather list".to_string()))?;

        Ok(WeatherObservation {
            city: city.to_string(),
            temp_c: raw.main.temp,
            condition,
        })
    }
}

// Only the fields the dashboard reads
#[derive(Debug, Deserialize)]
struct RawCurrentWeather {
    main: RawMain,
    weather: Vec<RawCondition>,
}

#[derive(Debug, Deserialize)]
struct RawMain {
    temp: f64,
}

#[derive(Debug, Deserialize)]
struct RawCondition {
    main: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client(key: Option<&str>) -> OpenWeatherClient {
        OpenWeatherClient::new(
            "http://127.0.0.1:1/".to_string(),
            key.map(str::to_string),
            Duration::from_secs(1),
        )
        .unwrap()
    }

    #[test]
    fn test_url_trims_trailing_slash() {
        assert_eq!(client(None).url(), "http://127.0.0.1:1/data/2.5/weather");
    }

    #[test]
    fn test_placeholder_and_blank_keys_are_unusable() {
        assert!(client(None).usable_key().is_none());
        assert!(client(Some("")).usable_key().is_none());
        assert!(client(Some("  ")).usable_key().is_none());
        assert!(client(Some(PLACEHOLDER_API_KEY)).usable_key().is_none());
        assert_eq!(client(Some("abc123")).usable_key(), Some("abc123"));
    }

    #[tokio::test]
    async fn test_missing_key_short_circuits() {
        // Port 1 is never contacted: the key check comes first
        let err = client(None).current("Agartala").await.unwrap_err();
        assert!(matches!(err, WeatherError::MissingApiKey));
    }

    #[tokio::test]
    async fn test_connection_refused_is_network_error() {
        let err = client(Some("abc123")).current("Agartala").await.unwrap_err();
        assert!(matches!(err, WeatherError::Network(_) | WeatherError::Timeout));
    }
}
