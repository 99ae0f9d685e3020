//! Weather risk integration
//!
//! The weather lookup is the only call in a refresh that can fail. Failures are
//! reported as a typed [`WeatherError`] and folded into
//! [`WeatherStatus::Unavailable`] so the dashboard keeps rendering in demo mode.

pub mod openweather;

pub use openweather::OpenWeatherClient;

use async_trait::async_trait;
use serde::Serialize;
use thiserror::Error;
use tracing::{debug, warn};

use crate::domain::WeatherObservation;

#[derive(Debug, Error)]
pub enum WeatherError {
    #[error("no weather API key configured")]
    MissingApiKey,

    #[error("weather request timed out")]
    Timeout,

    #[error("weather request failed: {0}")]
    Network(#[source] reqwest::Error),

    #[error("weather API returned HTTP {0}")]
    Status(u16),

    #[error("unexpected weather response: {0}")]
    Malformed(String),
}

impl WeatherError {
    /// Stable machine-readable tag for API consumers
    pub fn kind(&self) -> &'static str {
        match self {
            WeatherError::MissingApiKey => "missing_api_key",
            WeatherError::Timeout => "timeout",
            WeatherError::Network(_) => "network",
            WeatherError::Status(_) => "status",
            WeatherError::Malformed(_) => "malformed",
        }
    }
}

impl From<reqwest::Error> for WeatherError {
    fn from(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            WeatherError::Timeout
        } else {
            WeatherError::Network(error)
        }
    }
}

/// Source of current conditions for a city
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    async fn current(&self, city: &str) -> Result<WeatherObservation, WeatherError>;
}

/// Outcome of the weather lookup as exposed to the dashboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum WeatherStatus {
    Available(WeatherObservation),
    Unavailable { kind: String, reason: String },
}

impl WeatherStatus {
    pub fn observation(&self) -> Option<&WeatherObservation> {
        match self {
            WeatherStatus::Available(obs) => Some(obs),
            WeatherStatus::Unavailable { .. } => None,
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, WeatherStatus::Available(_))
    }
}

impl From<Result<WeatherObservation, WeatherError>> for WeatherStatus {
    fn from(result: Result<WeatherObservation, WeatherError>) -> Self {
        match result {
            Ok(obs) => WeatherStatus::Available(obs),
            Err(e) => WeatherStatus::Unavailable {
                kind: e.kind().to_string(),
                reason: e.to_string(),
            },
        }
    }
}

/// Look up the weather, never failing: errors become `Unavailable`.
pub async fn lookup(provider: &dyn WeatherProvider, city: &str) -> WeatherStatus {
    let result = provider.current(city).await;
    match &result {
        Ok(obs) => {
            debug!(city, condition = %obs.condition, temp_c = obs.temp_c, "weather lookup ok")
        }
        Err(WeatherError::MissingApiKey) => debug!(city, "weather lookup skipped: no API key"),
        Err(e) => {
            warn!(city, error = %e, kind = e.kind(), "weather lookup failed, using demo mode")
        }
    }
    result.into()
}
