use serde::{Deserialize, Serialize};

/// Consumption of one metered house
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MeterReading {
    pub house: String,
    pub units: u32,
}

/// Smart-meter readings in house-index order.
///
/// Labels are unique; setting an existing label replaces its value in place
/// so the original position is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct MeterReadings(Vec<MeterReading>);

impl MeterReadings {
    pub fn new() -> Self {
        Self(Vec::new())
    }

    /// Canonical label for the 1-based house index
    pub fn house_label(index: usize) -> String {
        format!("House {index}")
    }

    /// Build readings labelled "House 1".."House N" from consumption values
    pub fn from_units<I>(units: I) -> Self
    where
        I: IntoIterator<Item = u32>,
    {
        let mut readings = Self::new();
        for (i, u) in units.into_iter().enumerate() {
            readings.set(Self::house_label(i + 1), u);
        }
        readings
    }

    pub fn set(&mut self, house: impl Into<String>, units: u32) {
        let house = house.into();
        match self.0.iter_mut().find(|r| r.house == house) {
            Some(existing) => existing.units = units,
            None => self.0.push(MeterReading { house, units }),
        }
    }

    pub fn get(&self, house: &str) -> Option<u32> {
        self.0.iter().find(|r| r.house == house).map(|r| r.units)
    }

    pub fn iter(&self) -> impl Iterator<Item = &MeterReading> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Mean consumption, None when there are no readings
    pub fn mean(&self) -> Option<f64> {
        if self.0.is_empty() {
            return None;
        }
        let total: u64 = self.0.iter().map(|r| u64::from(r.units)).sum();
        Some(total as f64 / self.0.len() as f64)
    }
}

impl<'a> IntoIterator for &'a MeterReadings {
    type Item = &'a MeterReading;
    type IntoIter = std::slice::Iter<'a, MeterReading>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_units_labels_in_order() {
        let readings = MeterReadings::from_units([100, 110, 120]);
        let labels: Vec<_> = readings.iter().map(|r| r.house.as_str()).collect();
        assert_eq!(labels, vec!["House 1", "House 2", "House 3"]);
    }

    #[test]
    fn test_set_existing_keeps_position() {
        let mut readings = MeterReadings::from_units([100; 10]);
        readings.set("House 4", 350);
        assert_eq!(readings.len(), 10);
        assert_eq!(readings.iter().nth(3).unwrap().house, "House 4");
        assert_eq!(readings.get("House 4"), Some(350));
    }

    #[test]
    fn test_mean() {
        let mut readings = MeterReadings::from_units([100; 10]);
        readings.set("House 4", 350);
        assert_eq!(readings.mean(), Some(125.0));
        assert_eq!(MeterReadings::new().mean(), None);
    }

    #[test]
    fn test_serializes_as_list() {
        let readings = MeterReadings::from_units([90]);
        let json = serde_json::to_value(&readings).unwrap();
        assert_eq!(json, serde_json::json!([{ "house": "House 1", "units": 90 }]));
    }
}
