//! Expected-value payoff matrices and how they are assembled from observations.

mod builder;
mod cell;
mod crores;
mod matrix;

pub use builder::*;
pub use cell::*;
pub use crores::*;
pub use matrix::*;
