use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Demand uncertainty beneath one strategy pair, seen by one player.
///
/// Player one's branches carry the full policy adjustment (scaling, spend,
/// crash, saturation). Player two's carry the scaled profit only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DecisionTree {
    pub period: Period,
    pub pair: Pair,
    pub perspective: Player,
    pub multiplier: Multiplier,
    pub branches: Vec<Branch>,
    pub emv: Utility,
}

impl DecisionTree {
    /// Branches follow observation order. `None` when the period has no rows for `pair`.
    pub fn grow(
        policy: &Policy,
        observations: &[Observation],
        period: Period,
        pair: Pair,
        multiplier: Multiplier,
        perspective: Player,
    ) -> Option<Self> {
        let branches = within(observations, period)
            .filter(|row| row.pair() == pair)
            .map(|row| Branch {
                demand: row.demand,
                probability: row.probability,
                payoff: policy.payoffs(row, multiplier).get(perspective),
            })
            .collect::<Vec<Branch>>();
        if branches.is_empty() {
            return None;
        }
        let emv = branches.iter().map(Branch::expected).sum();
        log::debug!("{} tree for {} in {}: emv {}", perspective, pair, period, Crores(emv));
        Some(Self {
            period,
            pair,
            perspective,
            multiplier,
            branches,
            emv,
        })
    }
}

impl std::fmt::Display for DecisionTree {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        writeln!(f, "{} {} @ {:.2}x ({})", self.period, self.pair, self.multiplier, self.perspective)?;
        for (i, branch) in self.branches.iter().enumerate() {
            let stem = if i + 1 == self.branches.len() { "└──" } else { "├──" };
            writeln!(f, "{} {}", stem, branch)?;
        }
        write!(f, "EMV {}", Crores(self.emv))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    const AM: Pair = Pair(Strategy::Aggressive, Strategy::Moderate);

    #[test]
    fn player_one_branches() {
        let period = Period::from(2021);
        let rows = fixtures::spread(period);
        let tree = DecisionTree::grow(&Policy::default(), &rows, period, AM, 1., Player::One).unwrap();
        assert_eq!(tree.branches.iter().map(|b| b.demand).collect::<Vec<_>>(), Demand::all().to_vec());
        assert_eq!(tree.branches.iter().map(|b| b.payoff).collect::<Vec<_>>(), vec![12e6, 9e6, 6e6]);
        assert!((tree.emv - 9e6).abs() < 1e-6);
    }

    #[test]
    fn player_two_ignores_adjustments() {
        let period = Period::from(2025);
        let rows = fixtures::spread(period);
        let policy = Policy::default();
        let one = DecisionTree::grow(&policy, &rows, period, AM, 1., Player::One).unwrap();
        let two = DecisionTree::grow(&policy, &rows, period, AM, 1., Player::Two).unwrap();
        // scale 0.6, then saturation halves player one's aggressive play
        assert!((one.emv - 2.7e6).abs() < 1e-6);
        assert!((two.emv - 3.0e6).abs() < 1e-6);
    }

    #[test]
    fn emv_matches_matrix_cell() {
        let policy = Policy::default();
        let period = Period::from(2023);
        let rows = fixtures::escalation(period);
        let matrix = Builder::new(&policy, 1.3).build(within(&rows, period));
        for pair in Pair::all() {
            for player in Player::all() {
                let tree = DecisionTree::grow(&policy, &rows, period, pair, 1.3, player).unwrap();
                assert!((tree.emv - matrix.cell(pair).get(player)).abs() < 1e-6);
            }
        }
    }

    #[test]
    fn absent_pair_or_period() {
        let period = Period::from(2021);
        let rows = fixtures::flat(period, 1.);
        let policy = Policy::default();
        assert!(DecisionTree::grow(&policy, &rows, Period::from(2022), AM, 1., Player::One).is_none());
        assert!(DecisionTree::grow(&policy, &[], period, AM, 1., Player::One).is_none());
    }
}
