use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Payoff a player would get by switching to `strategy` while the opponent
/// stays at the equilibrium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Deviation {
    pub strategy: Strategy,
    pub payoff: Utility,
    pub chosen: bool,
}

/// Unilateral-deviation table at the primary equilibrium, one row per
/// alternative strategy for each player.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Verification {
    pub equilibrium: Pair,
    pub one: [Deviation; 3],
    pub two: [Deviation; 3],
}

impl Verification {
    pub fn at(matrix: &Matrix, analysis: &Analysis) -> Option<Self> {
        let equilibrium = analysis.primary()?;
        let deviations = |player: Player| {
            let opponent = equilibrium.get(player.opponent());
            Strategy::all().map(|strategy| Deviation {
                strategy,
                payoff: matrix.payoff(player, strategy, opponent),
                chosen: strategy == equilibrium.get(player),
            })
        };
        Some(Self {
            equilibrium,
            one: deviations(Player::One),
            two: deviations(Player::Two),
        })
    }
    pub fn deviations(&self, player: Player) -> &[Deviation; 3] {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
    /// No player gains by deviating alone.
    pub fn holds(&self) -> bool {
        Player::all().into_iter().all(|player| {
            let deviations = self.deviations(player);
            let chosen = deviations
                .iter()
                .find(|d| d.chosen)
                .map(|d| d.payoff)
                .unwrap_or(Utility::NAN);
            deviations.iter().all(|d| d.payoff <= chosen)
        })
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Verification {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Deviation check at {}", self.equilibrium)?;
        writeln!(f, "┌────────┬──────────┬────────────┬───┐")?;
        writeln!(f, "│ Player │ Strategy │     Payoff │ * │")?;
        writeln!(f, "├────────┼──────────┼────────────┼───┤")?;
        for player in Player::all() {
            for d in self.deviations(player) {
                writeln!(f, "│ {:>6} │ {:>8} │ {:>10} │ {} │", player, d.strategy.code(), Crores(d.payoff), if d.chosen { "*" } else { " " })?;
            }
        }
        writeln!(f, "└────────┴──────────┴────────────┴───┘")?;
        Ok(())
    }
}
