use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Mixed equilibrium restricted to the {Aggressive, Moderate} support,
/// solved by the method of indifference.
///
/// Conservative always receives probability zero. This is exact only when the
/// true equilibrium never uses Conservative, which nothing here verifies; see
/// [`Mixed::CAVEAT`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Mixed {
    /// A pure equilibrium exists, so the weights below carry no advice.
    pub pure: bool,
    pub support: [Strategy; 2],
    pub one: [Probability; 3],
    pub two: [Probability; 3],
    pub payoffs: Cell,
}

impl Mixed {
    pub const SUPPORT: [Strategy; 2] = [Strategy::Aggressive, Strategy::Moderate];
    pub const CAVEAT: &'static str =
        "support restricted to Aggressive/Moderate; Conservative is assumed unused";

    /// Solve the reduced 2×2 game. The weights are computed even when a pure
    /// equilibrium exists; `pure` records whether one does.
    pub fn indifferent(matrix: &Matrix) -> Self {
        let p = Self::weight(matrix, Player::One);
        let q = Self::weight(matrix, Player::Two);
        let one = [p, 1. - p, 0.];
        let two = [q, 1. - q, 0.];
        let payoffs = Self::SUPPORT
            .into_iter()
            .flat_map(|a| Self::SUPPORT.into_iter().map(move |b| Pair(a, b)))
            .map(|pair| matrix.cell(pair) * (one[pair.one().index()] * two[pair.two().index()]))
            .fold(Cell::default(), |mut sum, cell| {
                sum += cell;
                sum
            });
        log::debug!("indifference weights p={:.4} q={:.4}", p, q);
        Self {
            pure: Analysis::from(matrix).has_pure(),
            support: Self::SUPPORT,
            one,
            two,
            payoffs,
        }
    }

    /// Probability `player` puts on the first support strategy so that the
    /// opponent is indifferent between the two support strategies.
    ///
    /// With opponent payoffs D₁..D₄ at (first, first), (second, first),
    /// (first, second), (second, second) from `player`'s side:
    /// p·D₁ + (1−p)·D₂ = p·D₃ + (1−p)·D₄.
    fn weight(matrix: &Matrix, player: Player) -> Probability {
        let [first, second] = Self::SUPPORT;
        let opponent = player.opponent();
        let d = |own: Strategy, theirs: Strategy| matrix.payoff(opponent, theirs, own);
        let d1 = d(first, first);
        let d2 = d(second, first);
        let d3 = d(first, second);
        let d4 = d(second, second);
        let denominator = d1 - d2 - d3 + d4;
        let numerator = d4 - d2;
        match denominator != 0. {
            true => (numerator / denominator).clamp(0., 1.),
            false => INDIFFERENCE_DEFAULT,
        }
    }

    pub fn mixing(&self, player: Player) -> &[Probability; 3] {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Mixed {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Mixed strategy ({})", Self::CAVEAT)?;
        writeln!(f, "┌────────┬────────┬────────┬────────┬────────────┐")?;
        writeln!(f, "│ Player │     HD │     MD │     LD │   Expected │")?;
        writeln!(f, "├────────┼────────┼────────┼────────┼────────────┤")?;
        for player in Player::all() {
            let [a, m, c] = self.mixing(player);
            writeln!(f, "│ {:>6} │ {:>5.1}% │ {:>5.1}% │ {:>5.1}% │ {:>10} │", player, a * 100., m * 100., c * 100., Crores(self.payoffs.get(player)))?;
        }
        writeln!(f, "└────────┴────────┴────────┴────────┴────────────┘")?;
        Ok(())
    }
}
