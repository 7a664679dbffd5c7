//! Equilibrium Analysis Binary
//!
//! Loads festival observations and prints payoff matrices, equilibria,
//! tipping points and decision trees for the requested period.

fn main() -> anyhow::Result<()> {
    pricewar::log()?;
    pricewar::cli::run()
}
