use anyhow::Result;
use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use rand::{rngs::StdRng, SeedableRng};
use serde::Serialize;
use std::sync::Arc;
use tracing::info;
use uuid::Uuid;

use crate::advisor;
use crate::config::Config;
use crate::domain::{PowerBar, Region};
use crate::evaluator::{evaluate, Evaluation};
use crate::simulation::{GridMetrics, MetricsSimulator, SimulationProfile};
use crate::weather::{self, OpenWeatherClient, WeatherProvider, WeatherStatus};

#[derive(Clone)]
pub struct AppState {
    pub cfg: Config,
    pub dashboard: Arc<Dashboard>,
}

impl AppState {
    pub fn new(cfg: Config) -> Result<Self> {
        let dashboard = Arc::new(Dashboard::from_config(&cfg)?);
        Ok(Self { cfg, dashboard })
    }
}

/// Everything one page render needs, computed from scratch per refresh
#[derive(Debug, Clone, Serialize)]
pub struct DashboardSnapshot {
    pub id: Uuid,
    pub generated_at: DateTime<Utc>,
    /// Echo of the selector; no value below depends on it
    pub region: Region,
    pub metrics: GridMetrics,
    pub chart: [PowerBar; 2],
    pub weather: WeatherStatus,
    pub evaluation: Evaluation,
}

/// Runs the simulate → weather → evaluate pass for each refresh
pub struct Dashboard {
    simulator: MetricsSimulator,
    weather: Arc<dyn WeatherProvider>,
    city: String,
    default_region: Region,
    rng: Mutex<StdRng>,
}

impl Dashboard {
    pub fn new(
        simulator: MetricsSimulator,
        weather: Arc<dyn WeatherProvider>,
        city: impl Into<String>,
        default_region: Region,
        rng: StdRng,
    ) -> Self {
        Self {
            simulator,
            weather,
            city: city.into(),
            default_region,
            rng: Mutex::new(rng),
        }
    }

    pub fn from_config(cfg: &Config) -> Result<Self> {
        let profile = SimulationProfile {
            inject_theft: cfg.simulation.inject_theft,
            ..Default::default()
        };
        let rng = match cfg.simulation.random_seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        let client = OpenWeatherClient::from_config(&cfg.weather)?;

        Ok(Self::new(
            MetricsSimulator::new(profile),
            Arc::new(client),
            cfg.weather.city.clone(),
            cfg.dashboard.default_region,
            rng,
        ))
    }

    pub fn city(&self) -> &str {
        &self.city
    }

    pub fn default_region(&self) -> Region {
        self.default_region
    }

    pub async fn refresh(&self, region: Option<Region>) -> DashboardSnapshot {
        // Lock is released before the weather call
        let metrics = {
            let mut rng = self.rng.lock();
            self.simulator.sample(&mut *rng)
        };

        let weather = weather::lookup(self.weather.as_ref(), &self.city).await;
        let evaluation = evaluate(&metrics, weather.observation());

        let snapshot = DashboardSnapshot {
            id: Uuid::new_v4(),
            generated_at: Utc::now(),
            region: region.unwrap_or(self.default_region),
            chart: metrics.grid.chart_series(),
            metrics,
            weather,
            evaluation,
        };

        info!(
            refresh_id = %snapshot.id,
            region = %snapshot.region,
            loss_mw = snapshot.evaluation.loss_mw,
            alerts = snapshot.evaluation.alerts.len(),
            weather_available = snapshot.weather.is_available(),
            "dashboard refreshed"
        );
        snapshot
    }

    pub fn recommend(&self) -> &'static str {
        let mut rng = self.rng.lock();
        advisor::recommend(&mut *rng)
    }
}
