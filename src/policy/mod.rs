//! Scenario constants that shape raw profits into payoffs.

mod policy;
mod rule;

pub use policy::*;
pub use rule::*;
