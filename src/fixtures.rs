//! Hand-built observations and matrices shared by unit tests.
use crate::*;

const M: Utility = 1e6;

#[allow(clippy::too_many_arguments)]
pub fn row(
    year: u16,
    one: &str,
    two: &str,
    demand: &str,
    probability: Probability,
    profit_one: Utility,
    profit_two: Utility,
    spend: Utility,
) -> Observation {
    Observation {
        period: Period::from(year),
        one: Strategy::try_from(one).unwrap(),
        two: Strategy::try_from(two).unwrap(),
        demand: Demand::try_from(demand).unwrap(),
        probability,
        profit_one,
        profit_two,
        spend,
    }
}

/// Every row across all nine profiles and three demand states, with profits
/// supplied per (own strategy, demand) and spend per player-one strategy.
fn grid(
    period: Period,
    weights: [Probability; 3],
    one: impl Fn(Strategy, Demand) -> Utility,
    two: impl Fn(Strategy, Demand) -> Utility,
    spend: impl Fn(Strategy) -> Utility,
) -> Vec<Observation> {
    Pair::all()
        .flat_map(|pair| Demand::all().into_iter().zip(weights).map(move |(d, p)| (pair, d, p)))
        .map(|(pair, demand, probability)| Observation {
            period,
            one: pair.one(),
            two: pair.two(),
            demand,
            probability,
            profit_one: one(pair.one(), demand),
            profit_two: two(pair.two(), demand),
            spend: spend(pair.one()),
        })
        .collect()
}

fn rank(s: Strategy) -> Utility {
    (3 - s.index()) as Utility
}

/// One certain-demand row per profile; both players prefer Aggressive.
pub fn flat(period: Period, probability: Probability) -> Vec<Observation> {
    Pair::all()
        .map(|pair| Observation {
            period,
            one: pair.one(),
            two: pair.two(),
            demand: Demand::High,
            probability,
            profit_one: rank(pair.one()) * M,
            profit_two: rank(pair.two()) * M,
            spend: 0.,
        })
        .collect()
}

/// Player one's Aggressive play carries the heaviest spend, so rising costs
/// push it first toward Moderate. Player two always prefers Aggressive.
pub fn escalation(period: Period) -> Vec<Observation> {
    grid(
        period,
        [0.2, 0.5, 0.3],
        |s, _| match s {
            Strategy::Aggressive => 10. * M,
            Strategy::Moderate => 6. * M,
            Strategy::Conservative => 2. * M,
        },
        |s, _| match s {
            Strategy::Aggressive => 4. * M,
            Strategy::Moderate => 3. * M,
            Strategy::Conservative => 1. * M,
        },
        |s| match s {
            Strategy::Aggressive => 5000.,
            Strategy::Moderate => 3000.,
            Strategy::Conservative => 0.,
        },
    )
}

/// Demand-sensitive profits with a wide margin between strategies.
pub fn spread(period: Period) -> Vec<Observation> {
    let profit = |s: Strategy, d: Demand| match (s, d) {
        (Strategy::Aggressive, Demand::High) => 12. * M,
        (Strategy::Aggressive, Demand::Medium) => 9. * M,
        (Strategy::Aggressive, Demand::Low) => 6. * M,
        (Strategy::Moderate, Demand::High) => 7. * M,
        (Strategy::Moderate, Demand::Medium) => 5. * M,
        (Strategy::Moderate, Demand::Low) => 3. * M,
        (Strategy::Conservative, Demand::High) => 4. * M,
        (Strategy::Conservative, Demand::Medium) => 3. * M,
        (Strategy::Conservative, Demand::Low) => 2. * M,
    };
    grid(period, [0.3, 0.4, 0.3], profit, profit, |_| 0.)
}

/// Player one is exactly indifferent between Aggressive (a bet on High demand)
/// and Moderate (flat) against every opponent; any tilt in demand breaks the tie.
pub fn knife(period: Period) -> Vec<Observation> {
    grid(
        period,
        [0.5, 0., 0.5],
        |s, d| match (s, d) {
            (Strategy::Aggressive, Demand::High) => 10. * M,
            (Strategy::Aggressive, _) => 0.,
            (Strategy::Moderate, _) => 5. * M,
            (Strategy::Conservative, _) => 1. * M,
        },
        |s, _| rank(s) * M,
        |_| 0.,
    )
}

fn scaled(rows: [[(Utility, Utility); 3]; 3]) -> Matrix {
    Matrix::from(rows.map(|row| row.map(|(a, b)| (a * M, b * M))))
}

/// Unique equilibrium at Moderate-Moderate, which is also the social optimum.
pub fn coordination() -> Matrix {
    scaled([
        [(-5., -5.), (-2., 6.), (1., 1.)],
        [(6., -2.), (8., 8.), (1., 1.)],
        [(1., 1.), (1., 1.), (0., 0.)],
    ])
}

/// Aggressive strictly dominates for both; Moderate-Moderate earns more jointly.
pub fn dilemma() -> Matrix {
    scaled([
        [(1., 1.), (5., 0.), (2., -10.)],
        [(0., 5.), (3., 3.), (1., -10.)],
        [(-10., 2.), (-10., 1.), (-10., -10.)],
    ])
}

/// Matching pennies on {Aggressive, Moderate}; Conservative is never a best reply.
pub fn pennies() -> Matrix {
    scaled([
        [(1., -1.), (-1., 1.), (0., -5.)],
        [(-1., 1.), (1., -1.), (-1., -5.)],
        [(-5., 0.), (-5., -1.), (-5., -5.)],
    ])
}

/// Zero-sum cycle whose indifference weights are 1/3 on Aggressive.
pub fn skewed() -> Matrix {
    scaled([
        [(2., -2.), (0., 0.), (0., -5.)],
        [(0., 0.), (1., -1.), (-1., -5.)],
        [(-5., 0.), (-5., -1.), (-5., -5.)],
    ])
}
