use serde::{Deserialize, Serialize};

/// Bulk power balance for one refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridReading {
    pub generated_mw: u32,
    pub delivered_mw: u32,
}

impl GridReading {
    pub fn new(generated_mw: u32, delivered_mw: u32) -> Self {
        Self {
            generated_mw,
            delivered_mw,
        }
    }

    /// Transmission loss in MW.
    ///
    /// Signed: the simulator does not enforce delivered <= generated, so a
    /// negative loss is representable rather than wrapping.
    pub fn loss_mw(&self) -> i64 {
        i64::from(self.generated_mw) - i64::from(self.delivered_mw)
    }

    /// Series for the generated-vs-delivered bar chart
    pub fn chart_series(&self) -> [PowerBar; 2] {
        [
            PowerBar {
                label: "Generated",
                power_mw: self.generated_mw,
            },
            PowerBar {
                label: "Delivered",
                power_mw: self.delivered_mw,
            },
        ]
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PowerBar {
    pub label: &'static str,
    pub power_mw: u32,
}

/// Distribution transformer health sample
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TransformerState {
    pub temp_c: u32,
    pub load_pct: u32,
}

impl TransformerState {
    pub fn new(temp_c: u32, load_pct: u32) -> Self {
        Self { temp_c, load_pct }
    }
}
