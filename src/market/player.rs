use serde::Deserialize;
use serde::Serialize;

/// One of the two competing market players.
/// Player one is the row player and the only one carrying marketing spend.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum Player {
    One,
    Two,
}

impl Player {
    pub const fn all() -> [Self; 2] {
        [Self::One, Self::Two]
    }
    pub const fn opponent(&self) -> Self {
        match self {
            Self::One => Self::Two,
            Self::Two => Self::One,
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::One => f.pad("P1"),
            Self::Two => f.pad("P2"),
        }
    }
}
