use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One player's best-response table: for each opponent strategy, every own
/// strategy attaining the maximum payoff, in enumeration order.
///
/// Ties are exact floating-point equality. A NaN payoff never compares equal
/// to the maximum, so it is never a best response.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Responses([Vec<Strategy>; 3]);

impl Responses {
    pub fn of(matrix: &Matrix, player: Player) -> Self {
        Self(Strategy::all().map(|opponent| {
            let payoff = |own: Strategy| matrix.payoff(player, own, opponent);
            let best = Strategy::all()
                .into_iter()
                .map(payoff)
                .fold(Utility::NEG_INFINITY, Utility::max);
            Strategy::all()
                .into_iter()
                .filter(|own| payoff(*own) == best)
                .collect()
        }))
    }
    /// Best responses to a fixed opponent strategy.
    pub fn against(&self, opponent: Strategy) -> &[Strategy] {
        &self.0[opponent.index()]
    }
    pub fn contains(&self, opponent: Strategy, own: Strategy) -> bool {
        self.against(opponent).contains(&own)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn ties_are_kept_in_order() {
        let matrix = fixtures::coordination();
        let responses = Responses::of(&matrix, Player::One);
        assert_eq!(responses.against(Strategy::Aggressive), &[Strategy::Moderate]);
        assert_eq!(responses.against(Strategy::Conservative), &[Strategy::Aggressive, Strategy::Moderate]);
    }

    #[test]
    fn blank_matrix_ties_everything() {
        let responses = Responses::of(&Matrix::default(), Player::Two);
        for opponent in Strategy::all() {
            assert_eq!(responses.against(opponent), &Strategy::all());
        }
    }

    #[test]
    fn never_empty_for_finite_payoffs() {
        for _ in 0..512 {
            let matrix = Matrix::random();
            for player in Player::all() {
                let responses = Responses::of(&matrix, player);
                assert!(Strategy::all().iter().all(|s| !responses.against(*s).is_empty()));
            }
        }
    }

    #[test]
    fn column_player_reads_rows() {
        let matrix = fixtures::dilemma();
        let responses = Responses::of(&matrix, Player::Two);
        for opponent in Strategy::all() {
            assert_eq!(responses.against(opponent), &[Strategy::Aggressive]);
        }
    }
}
