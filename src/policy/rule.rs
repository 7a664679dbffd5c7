use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Cost-pressure collapse: once the multiplier passes `threshold`, player
/// one's adjusted profit under `strategy` is scaled by `factor`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Crash {
    pub threshold: Multiplier,
    pub factor: Utility,
    pub strategy: Strategy,
}

impl Crash {
    pub fn applies(&self, row: &Observation, multiplier: Multiplier) -> bool {
        multiplier > self.threshold && row.one == self.strategy
    }
}

impl Default for Crash {
    fn default() -> Self {
        Self {
            threshold: 1.2,
            factor: 0.4,
            strategy: Strategy::Aggressive,
        }
    }
}

/// Market saturation: in `period`, player one's adjusted profit under
/// `strategy` is scaled by `factor` regardless of cost pressure.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Saturation {
    pub period: Period,
    pub factor: Utility,
    pub strategy: Strategy,
}

impl Saturation {
    pub fn applies(&self, row: &Observation) -> bool {
        row.period == self.period && row.one == self.strategy
    }
}

impl Default for Saturation {
    fn default() -> Self {
        Self {
            period: Period::from(2025),
            factor: 0.5,
            strategy: Strategy::Aggressive,
        }
    }
}
