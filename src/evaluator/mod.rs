//! Threshold checks over one refresh of readings.
//!
//! Every check is a pure function of its inputs. The checks are independent of
//! each other; [`evaluate`] only fixes the order in which their alerts are
//! reported.

pub mod report;

pub use report::{evaluate, AlertSet, Banner, BannerLevel, Evaluation};

use crate::domain::MeterReadings;

/// Loss above this many MW raises the transmission loss alert
pub const LOSS_THRESHOLD_MW: i64 = 150;
/// A house consuming more than this multiple of the mean is flagged
pub const THEFT_MEAN_MULTIPLIER: f64 = 2.0;
pub const TRANSFORMER_TEMP_LIMIT_C: u32 = 90;
pub const TRANSFORMER_LOAD_LIMIT_PCT: u32 = 85;
/// Weather conditions that put overhead lines at risk (exact match)
pub const STORM_CONDITIONS: [&str; 2] = ["Rain", "Storm"];

pub fn loss_alert(loss_mw: i64) -> bool {
    loss_mw > LOSS_THRESHOLD_MW
}

/// Houses whose consumption exceeds twice the mean of all monitored houses,
/// in house-index order.
pub fn theft_alerts(readings: &MeterReadings) -> Vec<String> {
    let Some(mean) = readings.mean() else {
        return Vec::new();
    };
    let limit = mean * THEFT_MEAN_MULTIPLIER;

    readings
        .iter()
        .filter(|r| f64::from(r.units) > limit)
        .map(|r| theft_message(&r.house))
        .collect()
}

pub fn theft_message(house: &str) -> String {
    format!("{house} abnormal consumption detected")
}

pub fn transformer_risk(temp_c: u32, load_pct: u32) -> bool {
    temp_c > TRANSFORMER_TEMP_LIMIT_C || load_pct > TRANSFORMER_LOAD_LIMIT_PCT
}

/// Case-sensitive: "rain" does not count.
pub fn storm_risk(condition: &str) -> bool {
    STORM_CONDITIONS.contains(&condition)
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, false)]
    #[case(150, false)]
    #[case(151, true)]
    #[case(350, true)]
    #[case(-150, false)]
    fn test_loss_alert_boundary(#[case] loss: i64, #[case] expected: bool) {
        assert_eq!(loss_alert(loss), expected);
    }

    #[rstest]
    #[case(91, 50, true)]
    #[case(90, 50, false)]
    #[case(80, 86, true)]
    #[case(80, 85, false)]
    #[case(95, 95, true)]
    fn test_transformer_risk(#[case] temp: u32, #[case] load: u32, #[case] expected: bool) {
        assert_eq!(transformer_risk(temp, load), expected);
    }

    #[rstest]
    #[case("Rain", true)]
    #[case("Storm", true)]
    #[case("rain", false)]
    #[case("STORM", false)]
    #[case("Clear", false)]
    #[case("Thunderstorm", false)]
    #[case("", false)]
    fn test_storm_risk(#[case] condition: &str, #[case] expected: bool) {
        assert_eq!(storm_risk(condition), expected);
    }

    #[test]
    fn test_theft_flags_injected_house() {
        let mut readings = MeterReadings::from_units([100; 10]);
        readings.set("House 4", 350);
        assert_eq!(
            theft_alerts(&readings),
            vec!["House 4 abnormal consumption detected".to_string()]
        );
    }

    #[test]
    fn test_theft_uniform_readings_flag_nothing() {
        let readings = MeterReadings::from_units([100; 10]);
        assert!(theft_alerts(&readings).is_empty());
    }

    #[test]
    fn test_theft_exactly_twice_mean_not_flagged() {
        // mean = 20, House 1 = 40 = 2 x mean
        let readings = MeterReadings::from_units([40, 10, 10, 20]);
        assert!(theft_alerts(&readings).is_empty());
    }

    #[test]
    fn test_theft_empty_readings() {
        assert!(theft_alerts(&MeterReadings::new()).is_empty());
    }

    #[test]
    fn test_theft_alerts_keep_house_order() {
        let readings = MeterReadings::from_units([1000, 10, 10, 10, 10, 10, 10, 10, 10, 1000]);
        assert_eq!(
            theft_alerts(&readings),
            vec![
                "House 1 abnormal consumption detected".to_string(),
                "House 10 abnormal consumption detected".to_string(),
            ]
        );
    }

    proptest! {
        #[test]
        fn prop_injected_house_is_the_only_flag(
            others in proptest::collection::vec(80u32..=130, 9),
            injected in 300u32..=400,
        ) {
            let mut units = others;
            units.insert(3, injected);
            let readings = MeterReadings::from_units(units);
            prop_assert_eq!(
                theft_alerts(&readings),
                vec!["House 4 abnormal consumption detected".to_string()]
            );
        }

        #[test]
        fn prop_normal_range_never_flags(units in proptest::collection::vec(80u32..=130, 10)) {
            prop_assert!(theft_alerts(&MeterReadings::from_units(units)).is_empty());
        }

        #[test]
        fn prop_loss_alert_matches_difference(
            generated in 900u32..=1100,
            delivered in 750u32..=900,
        ) {
            let loss = i64::from(generated) - i64::from(delivered);
            prop_assert!(loss >= 0);
            prop_assert_eq!(loss_alert(loss), loss > 150);
        }
    }
}
