use serde::{Deserialize, Serialize};

/// Current conditions for the monitored city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeatherObservation {
    pub city: String,
    pub temp_c: f64,
    /// Condition keyword as reported upstream, e.g. "Rain" or "Clear"
    pub condition: String,
}
