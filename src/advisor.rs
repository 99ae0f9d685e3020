//! Policy recommendations for the control room.
//!
//! The pick is a plain uniform choice. It does not look at any reading.

use rand::seq::SliceRandom;
use rand::Rng;

pub const RECOMMENDATIONS: [&str; 4] = [
    "Deploy smart meters in rural feeders",
    "Upgrade aging transformers",
    "Introduce AI drone inspection",
    "Underground cabling in high theft zones",
];

pub fn recommend<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    RECOMMENDATIONS
        .choose(rng)
        .copied()
        .unwrap_or(RECOMMENDATIONS[0])
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::{rngs::StdRng, SeedableRng};
    use std::collections::HashSet;

    #[test]
    fn test_recommendation_is_from_fixed_list() {
        let mut rng = StdRng::seed_from_u64(1);
        for _ in 0..50 {
            assert!(RECOMMENDATIONS.contains(&recommend(&mut rng)));
        }
    }

    #[test]
    fn test_every_recommendation_reachable() {
        let mut rng = StdRng::seed_from_u64(2024);
        let seen: HashSet<&str> = (0..400).map(|_| recommend(&mut rng)).collect();
        assert_eq!(seen.len(), RECOMMENDATIONS.len());
    }
}
