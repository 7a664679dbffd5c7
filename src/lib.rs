//! Game-theoretic analysis of a repeated two-player discount competition.
//!
//! Two market players each pick one of three discount intensities per period.
//! From observed demand-state outcomes we build expected-value payoff matrices
//! and derive best responses, equilibria, dominance, tipping points, robustness
//! and a structural label for the game.
//!
//! # Module Structure
//!
//! - `market`: Observation records and the strategy/demand/period vocabulary
//! - `policy`: Scenario scaling and forced adjustments applied to raw profits
//! - `payoff`: Cells, matrices, and the matrix builder
//! - `solver`: Best responses, pure equilibria, dominance, mixed equilibria
//! - `sensitivity`: Tipping points, trend curves, sweeps, robustness
//! - `classify`: Game classification, joint profits, deviation checks
//! - `tree`: Per-pair demand branches and expected monetary value
//! - `session`: Observation snapshot with memoized matrices and reports
#![allow(clippy::module_inception)]

mod classify;
mod market;
mod payoff;
mod policy;
mod sensitivity;
mod session;
mod solver;
mod tree;

#[cfg(feature = "cli")]
pub mod cli;

#[cfg(test)]
pub(crate) mod fixtures;

pub use classify::*;
pub use market::*;
pub use payoff::*;
pub use policy::*;
pub use sensitivity::*;
pub use session::*;
pub use solver::*;
pub use tree::*;

// ============================================================================
// TYPE ALIASES
// ============================================================================
/// Profits, expected values, and payoffs in currency units.
pub type Utility = f64;
/// Demand-state probabilities and mixing weights.
pub type Probability = f64;
/// Cost multiplier applied to marketing spend.
pub type Multiplier = f64;

// ============================================================================
// TRAITS
// ============================================================================
/// Random instance generation for property tests and benchmarks.
pub trait Arbitrary {
    /// Generate a uniformly random instance.
    fn random() -> Self;
}

// ============================================================================
// TIPPING POINT SCAN
// Multiplier grid is 1.00 + i × 0.05 for i in 0..=80, computed by index.
// ============================================================================
/// Lowest cost multiplier scanned.
pub const SCAN_FLOOR: Multiplier = 1.00;
/// Grid spacing between scanned multipliers.
pub const SCAN_STEP: Multiplier = 0.05;
/// Number of steps above the floor (ceiling = 5.00).
pub const SCAN_STEPS: usize = 80;

// ============================================================================
// ROBUSTNESS PERTURBATION
// High and Low demand move in opposite directions; Medium is untouched.
// ============================================================================
/// Factor applied to the favored extreme demand state.
pub const PERTURB_BOOST: Probability = 1.05;
/// Factor applied to the disfavored extreme demand state.
pub const PERTURB_DAMPEN: Probability = 0.95;

// ============================================================================
// MIXED STRATEGY
// ============================================================================
/// Fallback mixing weight when the indifference equation degenerates.
pub const INDIFFERENCE_DEFAULT: Probability = 0.5;

// ============================================================================
// TREND CURVES
// ============================================================================
/// Opponent strategy held fixed when tracing player one's expected values.
pub const TREND_OPPONENT: Strategy = Strategy::Aggressive;

/// Cost multipliers visited by the tipping point scan, floor to ceiling.
pub fn scan() -> impl Iterator<Item = Multiplier> {
    (0..=SCAN_STEPS).map(|i| SCAN_FLOOR + i as Multiplier * SCAN_STEP)
}

// ============================================================================
// RUNTIME UTILITIES
// ============================================================================
/// Initialize dual logging (terminal + file) with timestamped log files.
/// Creates `logs/` directory and writes DEBUG level to file, INFO to terminal.
#[cfg(feature = "cli")]
pub fn log() -> anyhow::Result<()> {
    use anyhow::Context;
    std::fs::create_dir_all("logs").context("create logs directory")?;
    let config = simplelog::ConfigBuilder::new()
        .set_location_level(log::LevelFilter::Off)
        .set_target_level(log::LevelFilter::Off)
        .set_thread_level(log::LevelFilter::Off)
        .build();
    let time = std::time::SystemTime::now()
        .duration_since(std::time::UNIX_EPOCH)
        .context("time moves slow")?
        .as_secs();
    let file = simplelog::WriteLogger::new(
        log::LevelFilter::Debug,
        config.clone(),
        std::fs::File::create(format!("logs/{}.log", time)).context("create log file")?,
    );
    let term = simplelog::TermLogger::new(
        log::LevelFilter::Info,
        config.clone(),
        simplelog::TerminalMode::Mixed,
        simplelog::ColorChoice::Auto,
    );
    simplelog::CombinedLogger::init(vec![term, file]).context("initialize logger")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scan_covers_floor_to_ceiling() {
        let grid = scan().collect::<Vec<_>>();
        assert_eq!(grid.len(), 81);
        assert_eq!(grid[0], 1.00);
        assert!((grid[80] - 5.00).abs() < 1e-12);
        assert!(grid.windows(2).all(|w| (w[1] - w[0] - SCAN_STEP).abs() < 1e-12));
    }
}
