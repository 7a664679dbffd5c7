use serde::Deserialize;
use serde::Serialize;

/// Festival year an observation belongs to.
///
/// Accepts either a JSON number or a numeric string, since tabular exports
/// are inconsistent about quoting.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "Raw", into = "u16")]
pub struct Period(u16);

#[derive(Deserialize)]
#[serde(untagged)]
enum Raw {
    Number(u16),
    Text(String),
}

impl TryFrom<Raw> for Period {
    type Error = anyhow::Error;
    fn try_from(raw: Raw) -> Result<Self, Self::Error> {
        match raw {
            Raw::Number(n) => Ok(Self(n)),
            Raw::Text(s) => Self::try_from(s.as_str()),
        }
    }
}

impl TryFrom<&str> for Period {
    type Error = anyhow::Error;
    fn try_from(s: &str) -> Result<Self, Self::Error> {
        s.trim()
            .parse::<u16>()
            .map(Self)
            .map_err(|e| anyhow::anyhow!("invalid period {:?}: {}", s, e))
    }
}

impl From<u16> for Period {
    fn from(year: u16) -> Self {
        Self(year)
    }
}

impl From<Period> for u16 {
    fn from(period: Period) -> Self {
        period.0
    }
}

impl std::fmt::Display for Period {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}
