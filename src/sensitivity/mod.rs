//! How equilibria respond to cost pressure and demand uncertainty.
//!
//! - `tipping`: first multiplier where player one's equilibrium strategy moves
//! - `trend`: per-period expected values against a fixed opponent
//! - `sweep`: per-multiplier expected values and the optimal reply
//! - `robustness`: demand tilts in both directions, re-solved

mod robustness;
mod sweep;
mod tipping;
mod trend;

pub use robustness::*;
pub use sweep::*;
pub use tipping::*;
pub use trend::*;
