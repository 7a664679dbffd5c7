use super::*;
use anyhow::Context;
use std::path::Path;

/// Immutable, ordered snapshot of every observation loaded for a session.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Dataset(Vec<Observation>);

impl Dataset {
    /// Read a JSON array of observations.
    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("read observations from {}", path.display()))?;
        let rows = serde_json::from_str::<Vec<Observation>>(&text)
            .with_context(|| format!("decode observations in {}", path.display()))?;
        log::info!("loaded {} observations from {}", rows.len(), path.display());
        Ok(Self(rows))
    }
    /// Distinct periods, ascending.
    pub fn periods(&self) -> Vec<Period> {
        periods(&self.0)
    }
    pub fn len(&self) -> usize {
        self.0.len()
    }
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Distinct periods present in a set of observations, ascending.
pub fn periods(observations: &[Observation]) -> Vec<Period> {
    observations
        .iter()
        .map(|o| o.period)
        .collect::<std::collections::BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Rows of a single period, preserving input order.
pub fn within(observations: &[Observation], period: Period) -> impl Iterator<Item = &Observation> {
    observations.iter().filter(move |o| o.period == period)
}

impl From<Vec<Observation>> for Dataset {
    fn from(rows: Vec<Observation>) -> Self {
        Self(rows)
    }
}

impl AsRef<[Observation]> for Dataset {
    fn as_ref(&self) -> &[Observation] {
        &self.0
    }
}

/// Five festival periods, every profile under every demand state, with
/// demand weights that sum to one per profile.
impl crate::Arbitrary for Dataset {
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let mut rows = Vec::new();
        for year in 2021..=2025 {
            for pair in Pair::all() {
                let weights = Demand::all().map(|_| rng.random_range(0.05..1.0));
                let total = weights.iter().sum::<crate::Probability>();
                let spend = rng.random_range(0.0..6000.0);
                for (demand, weight) in Demand::all().into_iter().zip(weights) {
                    rows.push(Observation {
                        period: Period::from(year),
                        one: pair.one(),
                        two: pair.two(),
                        demand,
                        probability: weight / total,
                        profit_one: rng.random_range(-5e6..2e7),
                        profit_two: rng.random_range(-5e6..2e7),
                        spend,
                    });
                }
            }
        }
        Self(rows)
    }
}
