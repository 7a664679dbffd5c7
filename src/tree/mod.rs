mod branch;
mod decision;

pub use branch::*;
pub use decision::*;
