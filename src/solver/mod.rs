//! Best responses, pure and mixed equilibria, and dominance for 3×3 games.

mod analysis;
mod mixed;
mod responses;
mod solution;

pub use analysis::*;
pub use mixed::*;
pub use responses::*;
pub use solution::*;
