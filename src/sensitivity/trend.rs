use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Player one's expected value per strategy in one period, with the opponent
/// held at [`TREND_OPPONENT`]. Feeds trend charts, not equilibrium solving.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Trend {
    pub period: Period,
    pub values: [Utility; 3],
}

impl Trend {
    /// One point per distinct period, ascending.
    pub fn curve(policy: &Policy, observations: &[Observation], multiplier: Multiplier) -> Vec<Self> {
        periods(observations)
            .into_iter()
            .map(|period| Self {
                period,
                values: Strategy::all().map(|strategy| {
                    within(observations, period)
                        .filter(|row| row.one == strategy && row.two == TREND_OPPONENT)
                        .map(|row| policy.payoffs(row, multiplier).one * row.probability)
                        .sum()
                }),
            })
            .collect()
    }
    pub fn value(&self, strategy: Strategy) -> Utility {
        self.values[strategy.index()]
    }
}
