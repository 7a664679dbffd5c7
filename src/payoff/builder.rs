use super::*;
use crate::*;

/// Folds one period's observations into an expected-value [`Matrix`]
/// at a fixed cost multiplier.
///
/// The multiplier's nominal domain is [1, 5] but any value is accepted.
pub struct Builder<'p> {
    policy: &'p Policy,
    multiplier: Multiplier,
}

impl<'p> Builder<'p> {
    pub fn new(policy: &'p Policy, multiplier: Multiplier) -> Self {
        Self { policy, multiplier }
    }
    /// Accumulate `payoff × probability` per profile, starting from zero cells.
    /// Callers pass rows from a single period.
    pub fn build<'o>(&self, rows: impl IntoIterator<Item = &'o Observation>) -> Matrix {
        rows.into_iter().fold(Matrix::default(), |mut matrix, row| {
            let cell = self.policy.payoffs(row, self.multiplier) * row.probability;
            matrix.accumulate(row.pair(), cell);
            matrix
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::fixtures;

    #[test]
    fn weights_payoffs_by_demand_probability() {
        let policy = Policy::neutral();
        let rows = vec![
            fixtures::row(2021, "HD", "MD", "High", 0.25, 8_000_000., 4_000_000., 0.),
            fixtures::row(2021, "HD", "MD", "Medium", 0.50, 4_000_000., 2_000_000., 0.),
            fixtures::row(2021, "HD", "MD", "Low", 0.25, 0., 0., 0.),
        ];
        let matrix = Builder::new(&policy, 1.).build(&rows);
        let cell = matrix.cell(Pair(Strategy::Aggressive, Strategy::Moderate));
        assert_eq!(cell, Cell::new(4_000_000., 2_000_000.));
    }

    #[test]
    fn absent_profiles_are_zero() {
        let policy = Policy::default();
        let rows = vec![fixtures::row(2021, "LD", "HD", "High", 1., 1e6, 1e6, 0.)];
        let matrix = Builder::new(&policy, 1.).build(&rows);
        for (pair, cell) in matrix.cells() {
            match pair == Pair(Strategy::Conservative, Strategy::Aggressive) {
                true => assert_eq!(cell, Cell::new(1e6, 1e6)),
                false => assert_eq!(cell, Cell::default()),
            }
        }
    }

    #[test]
    fn empty_input_is_blank() {
        let policy = Policy::default();
        assert!(Builder::new(&policy, 2.5).build(std::iter::empty()).is_blank());
    }

    #[test]
    fn deterministic_to_the_bit() {
        let policy = Policy::default();
        let rows = fixtures::spread(Period::from(2025));
        let a = Builder::new(&policy, 1.35).build(&rows);
        let b = Builder::new(&policy, 1.35).build(&rows);
        for ((_, x), (_, y)) in a.cells().zip(b.cells()) {
            assert_eq!(x.one.to_bits(), y.one.to_bits());
            assert_eq!(x.two.to_bits(), y.two.to_bits());
        }
    }

    #[test]
    fn higher_cost_never_helps_player_one() {
        let policy = Policy::neutral();
        let rows = fixtures::escalation(Period::from(2021));
        let cheap = Builder::new(&policy, 1.);
        let pricey = Builder::new(&policy, 3.);
        let (cheap, pricey) = (cheap.build(&rows), pricey.build(&rows));
        for pair in Pair::all() {
            assert!(pricey.cell(pair).one <= cheap.cell(pair).one);
            assert_eq!(pricey.cell(pair).two, cheap.cell(pair).two);
        }
    }
}
