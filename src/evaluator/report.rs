use serde::{Deserialize, Serialize};

use super::{loss_alert, storm_risk, theft_alerts, transformer_risk, TRANSFORMER_TEMP_LIMIT_C};
use crate::domain::WeatherObservation;
use crate::simulation::GridMetrics;

pub const LOSS_ALERT: &str = "High Loss Detected";
pub const TRANSFORMER_ALERT: &str = "Transformer Failure Risk - Maintenance Required";
pub const STORM_ALERT: &str = "Storm Risk - Line Damage Probability High";

const LOSS_OK: &str = "Loss within safe range";
const THEFT_OK: &str = "No theft detected";
const TRANSFORMER_OK: &str = "Transformer Healthy";
const WEATHER_DEMO_MODE: &str = "Weather API Not Connected (Demo Mode)";

const DIGEST_LOSS: &str = "Transmission Loss Alert";
const DIGEST_OVERHEATING: &str = "Transformer Overheating";
const DIGEST_THEFT: &str = "Possible Electricity Theft";

/// Ordered alert messages for one refresh
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AlertSet(Vec<String>);

impl AlertSet {
    pub fn push(&mut self, alert: impl Into<String>) {
        self.0.push(alert.into());
    }

    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn contains(&self, alert: &str) -> bool {
        self.0.iter().any(|a| a == alert)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BannerLevel {
    Success,
    Info,
    Warning,
    Error,
}

impl BannerLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            BannerLevel::Success => "success",
            BannerLevel::Info => "info",
            BannerLevel::Warning => "warning",
            BannerLevel::Error => "error",
        }
    }
}

/// Status line rendered under one dashboard panel
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Banner {
    pub panel: String,
    pub level: BannerLevel,
    pub message: String,
}

impl Banner {
    fn new(panel: &str, level: BannerLevel, message: impl Into<String>) -> Self {
        Self {
            panel: panel.to_string(),
            level,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Evaluation {
    pub loss_mw: i64,
    pub loss_alert: bool,
    pub theft_alerts: Vec<String>,
    pub transformer_risk: bool,
    /// None when no weather observation was available
    pub storm_risk: Option<bool>,
    pub alerts: AlertSet,
    pub banners: Vec<Banner>,
    /// Short summary for the control room panel
    pub control_room: Vec<String>,
}

/// Run every check and collect alerts in the order loss, theft, transformer, storm.
pub fn evaluate(metrics: &GridMetrics, weather: Option<&WeatherObservation>) -> Evaluation {
    let loss_mw = metrics.grid.loss_mw();
    let loss = loss_alert(loss_mw);
    let theft = theft_alerts(&metrics.meters);
    let transformer = transformer_risk(metrics.transformer.temp_c, metrics.transformer.load_pct);
    let storm = weather.map(|w| storm_risk(&w.condition));

    let mut alerts = AlertSet::default();
    let mut banners = Vec::new();

    if loss {
        alerts.push(LOSS_ALERT);
        banners.push(Banner::new("loss", BannerLevel::Error, LOSS_ALERT));
    } else {
        banners.push(Banner::new("loss", BannerLevel::Success, LOSS_OK));
    }

    if theft.is_empty() {
        banners.push(Banner::new("theft", BannerLevel::Success, THEFT_OK));
    }
    for message in &theft {
        alerts.push(message.clone());
        banners.push(Banner::new("theft", BannerLevel::Warning, message.clone()));
    }

    if transformer {
        alerts.push(TRANSFORMER_ALERT);
        banners.push(Banner::new("transformer", BannerLevel::Error, TRANSFORMER_ALERT));
    } else {
        banners.push(Banner::new("transformer", BannerLevel::Success, TRANSFORMER_OK));
    }

    match storm {
        Some(true) => {
            alerts.push(STORM_ALERT);
            banners.push(Banner::new("weather", BannerLevel::Warning, STORM_ALERT));
        }
        Some(false) => {}
        None => banners.push(Banner::new("weather", BannerLevel::Info, WEATHER_DEMO_MODE)),
    }

    let mut control_room = Vec::new();
    if loss {
        control_room.push(DIGEST_LOSS.to_string());
    }
    // Overheating is the transformer temperature only, never the ambient
    // weather temperature; load alone does not count here
    if metrics.transformer.temp_c > TRANSFORMER_TEMP_LIMIT_C {
        control_room.push(DIGEST_OVERHEATING.to_string());
    }
    if !theft.is_empty() {
        control_room.push(DIGEST_THEFT.to_string());
    }

    Evaluation {
        loss_mw,
        loss_alert: loss,
        theft_alerts: theft,
        transformer_risk: transformer,
        storm_risk: storm,
        alerts,
        banners,
        control_room,
    }
}
