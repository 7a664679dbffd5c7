use super::*;
use serde::Deserialize;
use serde::Serialize;

/// A strategy profile: player one's choice, then player two's.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Pair(pub Strategy, pub Strategy);

impl Pair {
    /// All nine profiles in row-major order (player one outer, player two inner).
    pub fn all() -> impl Iterator<Item = Self> {
        Strategy::all()
            .into_iter()
            .flat_map(|one| Strategy::all().into_iter().map(move |two| Self(one, two)))
    }
    pub const fn one(&self) -> Strategy {
        self.0
    }
    pub const fn two(&self) -> Strategy {
        self.1
    }
    pub const fn get(&self, player: Player) -> Strategy {
        match player {
            Player::One => self.0,
            Player::Two => self.1,
        }
    }
    /// Assemble a profile from one player's own choice and their opponent's.
    pub const fn seen(player: Player, own: Strategy, opponent: Strategy) -> Self {
        match player {
            Player::One => Self(own, opponent),
            Player::Two => Self(opponent, own),
        }
    }
}

impl TryFrom<&str> for Pair {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        let (one, two) = s
            .split_once(['-', '/', ','])
            .ok_or_else(|| anyhow::anyhow!("broken delimiter in pair: {}", s))?;
        Ok(Self(Strategy::try_from(one)?, Strategy::try_from(two)?))
    }
}

impl std::fmt::Display for Pair {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}-{}", self.0.code(), self.1.code())
    }
}
