use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Grid region offered by the dashboard selector.
///
/// Cosmetic only: the selection is echoed back but no reading or threshold
/// depends on it.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
)]
pub enum Region {
    #[default]
    Assam,
    Tripura,
    Delhi,
    Gujarat,
}

impl Region {
    pub fn all() -> Vec<Region> {
        use strum::IntoEnumIterator;
        Region::iter().collect()
    }
}
