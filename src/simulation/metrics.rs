use rand::Rng;
use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

use crate::domain::{GridReading, MeterReadings, TransformerState};

/// House whose reading is replaced by the scripted theft value
pub const THEFT_HOUSE: usize = 4;

/// Value ranges for one simulated refresh (all bounds inclusive)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationProfile {
    pub generated_mw: RangeInclusive<u32>,
    pub delivered_mw: RangeInclusive<u32>,
    pub house_count: usize,
    pub house_units: RangeInclusive<u32>,
    /// Replace `THEFT_HOUSE` with a draw from `theft_units`
    pub inject_theft: bool,
    pub theft_units: RangeInclusive<u32>,
    pub transformer_temp_c: RangeInclusive<u32>,
    pub transformer_load_pct: RangeInclusive<u32>,
}

impl Default for SimulationProfile {
    fn default() -> Self {
        Self {
            generated_mw: 900..=1100,
            delivered_mw: 750..=900,
            house_count: 10,
            house_units: 80..=130,
            inject_theft: true,
            theft_units: 300..=400,
            transformer_temp_c: 60..=100,
            transformer_load_pct: 50..=100,
        }
    }
}

impl SimulationProfile {
    pub fn without_theft() -> Self {
        Self {
            inject_theft: false,
            ..Default::default()
        }
    }
}

/// One refresh worth of simulated readings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridMetrics {
    pub grid: GridReading,
    pub meters: MeterReadings,
    pub transformer: TransformerState,
}

/// Draws independent uniform readings for each metric group
#[derive(Debug, Clone, Default)]
pub struct MetricsSimulator {
    profile: SimulationProfile,
}

impl MetricsSimulator {
    pub fn new(profile: SimulationProfile) -> Self {
        Self { profile }
    }

    pub fn profile(&self) -> &SimulationProfile {
        &self.profile
    }

    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> GridMetrics {
        GridMetrics {
            grid: self.sample_grid(rng),
            meters: self.sample_meters(rng),
            transformer: self.sample_transformer(rng),
        }
    }

    pub fn sample_grid<R: Rng + ?Sized>(&self, rng: &mut R) -> GridReading {
        GridReading::new(
            rng.gen_range(self.profile.generated_mw.clone()),
            rng.gen_range(self.profile.delivered_mw.clone()),
        )
    }

    pub fn sample_meters<R: Rng + ?Sized>(&self, rng: &mut R) -> MeterReadings {
        let mut meters = MeterReadings::from_units(
            (0..self.profile.house_count).map(|_| rng.gen_range(self.profile.house_units.clone())),
        );

        // Scripted anomaly so the theft panel always has something to show
        if self.profile.inject_theft && self.profile.house_count >= THEFT_HOUSE {
            meters.set(
                MeterReadings::house_label(THEFT_HOUSE),
                rng.gen_range(self.profile.theft_units.clone()),
            );
        }
        meters
    }

    pub fn sample_transformer<R: Rng + ?Sized>(&self, rng: &mut R) -> TransformerState {
        TransformerState::new(
            rng.gen_range(self.profile.transformer_temp_c.clone()),
            rng.gen_range(self.profile.transformer_load_pct.clone()),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_readings_within_ranges() {
        let simulator = MetricsSimulator::default();
        let mut rng = StdRng::seed_from_u64(42);

        for _ in 0..500 {
            let m = simulator.sample(&mut rng);
            assert!((900..=1100).contains(&m.grid.generated_mw));
            assert!((750..=900).contains(&m.grid.delivered_mw));
            assert!((60..=100).contains(&m.transformer.temp_c));
            assert!((50..=100).contains(&m.transformer.load_pct));
            assert_eq!(m.meters.len(), 10);

            for reading in &m.meters {
                if reading.house == "House 4" {
                    assert!((300..=400).contains(&reading.units));
                } else {
                    assert!((80..=130).contains(&reading.units));
                }
            }
        }
    }

    #[test]
    fn test_house_labels_in_index_order() {
        let simulator = MetricsSimulator::default();
        let mut rng = StdRng::seed_from_u64(7);
        let labels: Vec<String> = simulator
            .sample_meters(&mut rng)
            .iter()
            .map(|r| r.house.clone())
            .collect();
        let expected: Vec<String> = (1..=10).map(|i| format!("House {i}")).collect();
        assert_eq!(labels, expected);
    }

    #[test]
    fn test_without_theft_keeps_house_4_in_normal_range() {
        let simulator = MetricsSimulator::new(SimulationProfile::without_theft());
        let mut rng = StdRng::seed_from_u64(3);
        for _ in 0..200 {
            let units = simulator.sample_meters(&mut rng).get("House 4").unwrap();
            assert!((80..=130).contains(&units));
        }
    }

    #[test]
    fn test_same_seed_same_readings() {
        let simulator = MetricsSimulator::default();
        let a = simulator.sample(&mut StdRng::seed_from_u64(99));
        let b = simulator.sample(&mut StdRng::seed_from_u64(99));
        assert_eq!(a, b);
    }

    #[test]
    fn test_fewer_houses_than_theft_index_skips_injection() {
        let simulator = MetricsSimulator::new(SimulationProfile {
            house_count: 3,
            ..Default::default()
        });
        let meters = simulator.sample_meters(&mut StdRng::seed_from_u64(1));
        assert_eq!(meters.len(), 3);
        assert!(meters.get("House 4").is_none());
    }
}
