use serde::Deserialize;
use serde::Serialize;

/// Discount intensity a player commits to for one period.
///
/// The dataset codes these as HD (heavy), MD (medium) and LD (light) discounting.
/// Declaration order is the canonical enumeration order used everywhere a
/// matrix is scanned, so tie-breaking follows it.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub enum Strategy {
    Aggressive = 0isize,
    Moderate = 1isize,
    Conservative = 2isize,
}

impl Strategy {
    pub const fn all() -> [Self; 3] {
        [Self::Aggressive, Self::Moderate, Self::Conservative]
    }
    pub const fn index(&self) -> usize {
        *self as usize
    }
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Aggressive => "HD",
            Self::Moderate => "MD",
            Self::Conservative => "LD",
        }
    }
}

impl From<usize> for Strategy {
    fn from(n: usize) -> Self {
        match n {
            0 => Self::Aggressive,
            1 => Self::Moderate,
            2 => Self::Conservative,
            _ => panic!("no other strategies"),
        }
    }
}

impl TryFrom<&str> for Strategy {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        match s.trim().to_uppercase().as_str() {
            "HD" | "AGGRESSIVE" => Ok(Self::Aggressive),
            "MD" | "MODERATE" => Ok(Self::Moderate),
            "LD" | "CONSERVATIVE" => Ok(Self::Conservative),
            _ => Err(anyhow::anyhow!("unknown strategy: {}", s)),
        }
    }
}

impl TryFrom<String> for Strategy {
    type Error = anyhow::Error;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::try_from(s.as_str())
    }
}

impl std::fmt::Display for Strategy {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            Self::Aggressive => f.pad("Aggressive"),
            Self::Moderate => f.pad("Moderate"),
            Self::Conservative => f.pad("Conservative"),
        }
    }
}
