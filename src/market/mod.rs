//! Observation records and the vocabulary they are written in.

mod dataset;
mod demand;
mod observation;
mod pair;
mod period;
mod player;
mod strategy;

pub use dataset::*;
pub use demand::*;
pub use observation::*;
pub use pair::*;
pub use period::*;
pub use player::*;
pub use strategy::*;
