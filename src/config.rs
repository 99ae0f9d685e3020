use anyhow::{Context, Result};
use figment::{providers::{Env, Format, Toml}, Figment};
use serde::Deserialize;
use std::net::SocketAddr;
use std::time::Duration;
use validator::Validate;

use crate::domain::Region;

pub const DEFAULT_CONFIG_PATH: &str = "config/default.toml";
pub const ENV_PREFIX: &str = "GRID_GUARDIAN__";

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct Config {
    #[validate(nested)]
    pub server: ServerConfig,
    #[validate(nested)]
    pub weather: WeatherConfig,
    #[serde(default)]
    pub simulation: SimulationConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct ServerConfig {
    pub host: String,
    #[validate(range(min = 1))]
    pub port: u16,
    #[serde(default = "default_request_timeout")]
    #[validate(range(min = 1))]
    pub request_timeout_secs: u64,
}

impl ServerConfig {
    pub fn socket_addr(&self) -> Result<SocketAddr> {
        Ok(format!("{}:{}", self.host, self.port).parse()?)
    }
}

fn default_request_timeout() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Validate)]
pub struct WeatherConfig {
    pub base_url: String,
    #[validate(length(min = 1))]
    pub city: String,
    /// OpenWeatherMap `appid`. Left unset, the weather panel runs in demo mode.
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default = "default_weather_timeout")]
    #[validate(range(min = 1))]
    pub timeout_seconds: u64,
}

impl WeatherConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_seconds)
    }
}

fn default_weather_timeout() -> u64 {
    5
}

#[derive(Debug, Clone, Deserialize)]
pub struct SimulationConfig {
    /// Fixed seed for reproducible demos (None = entropy)
    #[serde(default)]
    pub random_seed: Option<u64>,
    #[serde(default = "default_inject_theft")]
    pub inject_theft: bool,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            random_seed: None,
            inject_theft: true,
        }
    }
}

fn default_inject_theft() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct DashboardConfig {
    #[serde(default)]
    pub default_region: Region,
}

impl Config {
    pub fn load() -> Result<Self> {
        Self::from_figment(
            Figment::new()
                .merge(Toml::file(DEFAULT_CONFIG_PATH))
                .merge(Env::prefixed(ENV_PREFIX).split("__")),
        )
    }

    pub fn from_figment(figment: Figment) -> Result<Self> {
        let cfg: Config = figment.extract().context("invalid configuration")?;
        cfg.validate().context("configuration failed validation")?;
        Ok(cfg)
    }
}
