use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Equilibrium structure of one payoff matrix.
///
/// Derived fresh from a [`Matrix`] and never shared across matrices.
/// `equilibria` lists every pure Nash profile in row-major order, so the
/// first entry is the same on every call for the same matrix.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Analysis {
    pub equilibria: Vec<Pair>,
    pub dominant_one: Option<Strategy>,
    pub dominant_two: Option<Strategy>,
    pub responses_one: Responses,
    pub responses_two: Responses,
}

impl From<&Matrix> for Analysis {
    fn from(matrix: &Matrix) -> Self {
        let responses_one = Responses::of(matrix, Player::One);
        let responses_two = Responses::of(matrix, Player::Two);
        let equilibria = Pair::all()
            .filter(|pair| responses_one.contains(pair.two(), pair.one()))
            .filter(|pair| responses_two.contains(pair.one(), pair.two()))
            .collect();
        Self {
            equilibria,
            dominant_one: Self::dominant(matrix, Player::One),
            dominant_two: Self::dominant(matrix, Player::Two),
            responses_one,
            responses_two,
        }
    }
}

impl Analysis {
    /// The first equilibrium found, used wherever a single outcome is needed.
    pub fn primary(&self) -> Option<Pair> {
        self.equilibria.first().copied()
    }
    pub fn has_pure(&self) -> bool {
        !self.equilibria.is_empty()
    }
    pub fn responses(&self, player: Player) -> &Responses {
        match player {
            Player::One => &self.responses_one,
            Player::Two => &self.responses_two,
        }
    }
    pub fn dominant_for(&self, player: Player) -> Option<Strategy> {
        match player {
            Player::One => self.dominant_one,
            Player::Two => self.dominant_two,
        }
    }
    pub fn is_equilibrium(&self, pair: Pair) -> bool {
        self.equilibria.contains(&pair)
    }

    /// Weakly dominant strategy: never worse than any alternative against any
    /// opponent choice. When several qualify at once (only possible through
    /// exact ties) the last in enumeration order is reported.
    fn dominant(matrix: &Matrix, player: Player) -> Option<Strategy> {
        let all = Strategy::all();
        all.into_iter()
            .rev()
            .find(|candidate| {
                all.iter()
                    .filter(|other| *other != candidate)
                    .all(|other| {
                        all.iter().all(|opponent| {
                            matrix.payoff(player, *candidate, *opponent)
                                >= matrix.payoff(player, *other, *opponent)
                        })
                    })
            })
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Analysis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let dominant = |s: Option<Strategy>| s.map(|s| s.to_string()).unwrap_or_else(|| "none".to_string());
        let equilibria = self.equilibria.iter().map(|p| p.to_string()).collect::<Vec<_>>();
        writeln!(f, "Nash equilibria: {}", if equilibria.is_empty() { "none".to_string() } else { equilibria.join(", ") })?;
        writeln!(f, "Dominant P1: {}  Dominant P2: {}", dominant(self.dominant_one), dominant(self.dominant_two))?;
        writeln!(f, "┌──────────┬────────────────┬────────────────┐")?;
        writeln!(f, "│ Opponent │  P1 best reply │  P2 best reply │")?;
        writeln!(f, "├──────────┼────────────────┼────────────────┤")?;
        for opponent in Strategy::all() {
            let codes = |r: &Responses| r.against(opponent).iter().map(|s| s.code()).collect::<Vec<_>>().join(" ");
            writeln!(f, "│ {:>8} │ {:>14} │ {:>14} │", opponent.code(), codes(&self.responses_one), codes(&self.responses_two))?;
        }
        writeln!(f, "└──────────┴────────────────┴────────────────┘")?;
        Ok(())
    }
}
