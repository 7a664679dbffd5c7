use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Expected value for each player at one strategy profile.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct Cell {
    pub one: Utility,
    pub two: Utility,
}

impl Cell {
    pub const fn new(one: Utility, two: Utility) -> Self {
        Self { one, two }
    }
    pub const fn get(&self, player: Player) -> Utility {
        match player {
            Player::One => self.one,
            Player::Two => self.two,
        }
    }
    /// Combined profit of both players.
    pub fn joint(&self) -> Utility {
        self.one + self.two
    }
}

impl From<(Utility, Utility)> for Cell {
    fn from((one, two): (Utility, Utility)) -> Self {
        Self::new(one, two)
    }
}

impl std::ops::Mul<Probability> for Cell {
    type Output = Self;
    fn mul(self, p: Probability) -> Self {
        Self::new(self.one * p, self.two * p)
    }
}

impl std::ops::AddAssign for Cell {
    fn add_assign(&mut self, other: Self) {
        self.one += other.one;
        self.two += other.two;
    }
}
