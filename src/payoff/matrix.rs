use super::*;
use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Expected-value payoff matrix over the 3×3 strategy profiles of one period.
///
/// Rows are player one's strategy, columns player two's. Every cell exists;
/// profiles absent from the data stay at zero. Matrices are built once per
/// (period, multiplier) and never mutated afterwards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Matrix([[Cell; 3]; 3]);

impl Matrix {
    pub fn cell(&self, pair: Pair) -> Cell {
        self.0[pair.one().index()][pair.two().index()]
    }
    /// What `player` earns playing `own` against `opponent`.
    pub fn payoff(&self, player: Player, own: Strategy, opponent: Strategy) -> Utility {
        self.cell(Pair::seen(player, own, opponent)).get(player)
    }
    /// Cells in row-major order alongside their profiles.
    pub fn cells(&self) -> impl Iterator<Item = (Pair, Cell)> + '_ {
        Pair::all().map(|pair| (pair, self.cell(pair)))
    }
    /// The profile maximizing joint profit, first in row-major order on ties.
    /// Absent only when no joint profit compares above −∞ (all NaN).
    pub fn optimum(&self) -> Option<Pair> {
        self.cells()
            .fold((None, Utility::NEG_INFINITY), |(best, top), (pair, cell)| {
                match cell.joint() {
                    joint if joint > top => (Some(pair), joint),
                    _ => (best, top),
                }
            })
            .0
    }
    /// True when every cell is zero, i.e. the period had no usable rows.
    pub fn is_blank(&self) -> bool {
        self.cells().all(|(_, cell)| cell == Cell::default())
    }
    pub(crate) fn accumulate(&mut self, pair: Pair, cell: Cell) {
        self.0[pair.one().index()][pair.two().index()] += cell;
    }
}

impl From<[[(Utility, Utility); 3]; 3]> for Matrix {
    fn from(rows: [[(Utility, Utility); 3]; 3]) -> Self {
        Self(rows.map(|row| row.map(Cell::from)))
    }
}

impl Arbitrary for Matrix {
    /// Payoffs drawn from a coarse integer grid so that ties are common.
    fn random() -> Self {
        use rand::Rng;
        let ref mut rng = rand::rng();
        let mut matrix = Self::default();
        for pair in Pair::all() {
            let one = rng.random_range(-3i32..=3) as Utility * 1e6;
            let two = rng.random_range(-3i32..=3) as Utility * 1e6;
            matrix.accumulate(pair, Cell::new(one, two));
        }
        matrix
    }
}

#[rustfmt::skip]
impl std::fmt::Display for Matrix {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "┌───────┬───────────────────────┬───────────────────────┬───────────────────────┐")?;
        writeln!(f, "│ P1\\P2 │ {:^21} │ {:^21} │ {:^21} │", "HD", "MD", "LD")?;
        writeln!(f, "├───────┼───────────────────────┼───────────────────────┼───────────────────────┤")?;
        for one in Strategy::all() {
            write!(f, "│ {:>5} │", one.code())?;
            for two in Strategy::all() {
                let cell = self.cell(Pair(one, two));
                write!(f, " {:>10} {:>10} │", Crores(cell.one), Crores(cell.two))?;
            }
            writeln!(f)?;
        }
        writeln!(f, "└───────┴───────────────────────┴───────────────────────┴───────────────────────┘")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn payoff_reads_from_each_perspective() {
        let matrix = fixtures::coordination();
        let (a, m) = (Strategy::Aggressive, Strategy::Moderate);
        assert_eq!(matrix.payoff(Player::One, a, m), -2_000_000.);
        assert_eq!(matrix.payoff(Player::Two, a, m), -2_000_000.);
        assert_eq!(matrix.payoff(Player::Two, m, a), 6_000_000.);
        assert_eq!(matrix.cell(Pair(a, m)).two, 6_000_000.);
    }

    #[test]
    fn optimum_prefers_first_on_ties() {
        let matrix = Matrix::from([[(1., 1.), (2., 0.), (0., 0.)], [(0., 2.), (0., 0.), (0., 0.)], [(0., 0.), (0., 0.), (0., 0.)]]);
        assert_eq!(matrix.optimum(), Some(Pair(Strategy::Aggressive, Strategy::Aggressive)));
    }

    #[test]
    fn blank_detection() {
        assert!(Matrix::default().is_blank());
        assert!(!fixtures::coordination().is_blank());
    }
}
