//! Structural reading of a solved game: its label, its joint-profit
//! efficiency, and a deviation check at the equilibrium.

mod classification;
mod verification;
mod welfare;

pub use classification::*;
pub use verification::*;
pub use welfare::*;
