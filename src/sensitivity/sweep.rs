use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Player one's payoff per strategy against an Aggressive opponent at one
/// cost multiplier, with the strategy that earns the most.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sweep {
    pub multiplier: Multiplier,
    pub values: [Utility; 3],
    pub optimal: Strategy,
}

impl Sweep {
    /// Rebuild the period's matrix at each multiplier. Ties go to the
    /// strategy enumerated first.
    pub fn range(
        policy: &Policy,
        observations: &[Observation],
        period: Period,
        multipliers: impl IntoIterator<Item = Multiplier>,
    ) -> Vec<Self> {
        multipliers
            .into_iter()
            .map(|multiplier| {
                let matrix = Builder::new(policy, multiplier).build(within(observations, period));
                let values = Strategy::all().map(|s| matrix.cell(Pair(s, TREND_OPPONENT)).one);
                let optimal = Strategy::all()
                    .into_iter()
                    .skip(1)
                    .fold(Strategy::all()[0], |best, s| match values[s.index()] > values[best.index()] {
                        true => s,
                        false => best,
                    });
                Self {
                    multiplier,
                    values,
                    optimal,
                }
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn optimal_follows_cost_pressure() {
        let period = Period::from(2021);
        let rows = fixtures::escalation(period);
        let sweep = Sweep::range(&Policy::default(), &rows, period, [1.0, 1.25, 5.0]);
        assert_eq!(sweep.len(), 3);
        assert_eq!(sweep[0].optimal, Strategy::Aggressive);
        assert_eq!(sweep[1].optimal, Strategy::Moderate);
        assert_eq!(sweep[2].optimal, Strategy::Conservative);
    }

    #[test]
    fn blank_period_defaults_to_first_strategy() {
        let sweep = Sweep::range(&Policy::default(), &[], Period::from(2021), scan());
        assert_eq!(sweep.len(), SCAN_STEPS + 1);
        assert!(sweep.iter().all(|s| s.optimal == Strategy::Aggressive && s.values == [0.; 3]));
    }
}
