use super::*;
use crate::*;
use anyhow::Context;
use serde::Deserialize;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Business-scenario tuning applied to raw observed profits before any
/// equilibrium is computed. The solver never sees these constants; it only
/// sees the matrices they produce.
///
/// Per row, in order:
/// 1. both profits scale by the period's `profit_scale`
/// 2. player one pays `spend × spend_scale × spend_unit × multiplier`
/// 3. `crash` then `saturation` rescale player one's result when they apply
///
/// Player two's payoff is the scaled profit alone.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Policy {
    pub profit_scale: BTreeMap<Period, Utility>,
    pub spend_scale: BTreeMap<Period, Utility>,
    pub spend_unit: Utility,
    pub crash: Option<Crash>,
    pub saturation: Option<Saturation>,
}

impl Policy {
    /// Read a policy from JSON. Omitted fields keep their defaults.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read policy from {}", path.display()))?;
        serde_json::from_str::<Self>(&text)
            .with_context(|| format!("decode policy in {}", path.display()))
    }

    /// Raw profits with every rule switched off: unit scales, no rescaling.
    pub fn neutral() -> Self {
        Self {
            profit_scale: BTreeMap::new(),
            spend_scale: BTreeMap::new(),
            spend_unit: 1000.,
            crash: None,
            saturation: None,
        }
    }

    pub fn profit_scale(&self, period: Period) -> Utility {
        self.profit_scale.get(&period).copied().unwrap_or(1.)
    }
    pub fn spend_scale(&self, period: Period) -> Utility {
        self.spend_scale.get(&period).copied().unwrap_or(1.)
    }

    /// Both players' payoffs for one row at the given cost multiplier,
    /// before demand-probability weighting.
    pub fn payoffs(&self, row: &Observation, multiplier: Multiplier) -> Cell {
        let scale = self.profit_scale(row.period);
        let spend = row.spend * self.spend_scale(row.period);
        let mut one = row.profit_one * scale - spend * self.spend_unit * multiplier;
        let two = row.profit_two * scale;
        if let Some(crash) = self.crash.as_ref().filter(|c| c.applies(row, multiplier)) {
            one *= crash.factor;
        }
        if let Some(saturation) = self.saturation.as_ref().filter(|s| s.applies(row)) {
            one *= saturation.factor;
        }
        Cell::new(one, two)
    }
}

impl Default for Policy {
    fn default() -> Self {
        Self {
            profit_scale: [(2021, 1.00), (2022, 1.15), (2023, 1.30), (2024, 0.90), (2025, 0.60)]
                .into_iter()
                .map(|(year, scale)| (Period::from(year), scale))
                .collect(),
            spend_scale: [(2025, 1.5)]
                .into_iter()
                .map(|(year, scale)| (Period::from(year), scale))
                .collect(),
            spend_unit: 1000.,
            crash: Some(Crash::default()),
            saturation: Some(Saturation::default()),
        }
    }
}
