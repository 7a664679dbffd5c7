use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Which way demand is tilted when stress-testing an equilibrium.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Direction {
    /// High demand more likely, Low less.
    Boom = 1isize,
    /// Low demand more likely, High less.
    Bust = -1isize,
}

impl Direction {
    pub const fn all() -> [Self; 2] {
        [Self::Boom, Self::Bust]
    }
    /// Multiplicative tilt on a demand state's probability. Medium is untouched.
    pub const fn factor(&self, demand: Demand) -> Probability {
        match (self, demand) {
            (_, Demand::Medium) => 1.,
            (Self::Boom, Demand::High) | (Self::Bust, Demand::Low) => PERTURB_BOOST,
            (Self::Boom, Demand::Low) | (Self::Bust, Demand::High) => PERTURB_DAMPEN,
        }
    }
}

impl TryFrom<isize> for Direction {
    type Error = anyhow::Error;
    fn try_from(n: isize) -> Result<Self, Self::Error> {
        match n {
            1 => Ok(Self::Boom),
            -1 => Ok(Self::Bust),
            _ => Err(anyhow::anyhow!("direction is ±1, not {}", n)),
        }
    }
}

/// Tilt every row's demand probability, then renormalize within each strategy
/// profile so its probabilities again sum to one. Row order is preserved.
pub fn perturb(rows: &[Observation], direction: Direction) -> Vec<Observation> {
    let tilted = rows
        .iter()
        .map(|row| row.reweighted(row.probability * direction.factor(row.demand)))
        .collect::<Vec<_>>();
    let mut totals = std::collections::BTreeMap::<Pair, Probability>::new();
    for row in tilted.iter() {
        *totals.entry(row.pair()).or_default() += row.probability;
    }
    tilted
        .iter()
        .map(|row| row.reweighted(row.probability / totals[&row.pair()]))
        .collect()
}

/// Re-solves one period under demand tilts in both directions to see whether
/// the baseline equilibrium survives.
pub struct Robustness<'p> {
    policy: &'p Policy,
    rows: Vec<Observation>,
    multiplier: Multiplier,
}

impl<'p> Robustness<'p> {
    pub fn new(policy: &'p Policy, observations: &[Observation], period: Period, multiplier: Multiplier) -> Self {
        Self {
            policy,
            rows: within(observations, period).cloned().collect(),
            multiplier,
        }
    }
    pub fn perturbed(&self, direction: Direction) -> Vec<Observation> {
        perturb(&self.rows, direction)
    }
    pub fn matrix(&self, direction: Direction) -> Matrix {
        Builder::new(self.policy, self.multiplier).build(&self.perturbed(direction))
    }
    pub fn analysis(&self, direction: Direction) -> Analysis {
        Analysis::from(&self.matrix(direction))
    }
    /// True iff both tilts leave the primary equilibrium exactly at `baseline`.
    pub fn is_robust(&self, baseline: Pair) -> bool {
        Direction::all().into_iter().all(|direction| {
            let primary = self.analysis(direction).primary();
            log::debug!("{:?} tilt → {:?} (baseline {})", direction, primary, baseline);
            primary == Some(baseline)
        })
    }
}
