use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Structural label for a solved game.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq, Serialize, Deserialize)]
pub enum Classification {
    #[serde(rename = "Competitive Margin Game")]
    CompetitiveMargin,
    #[serde(rename = "Coordination Game")]
    Coordination,
    #[serde(rename = "Prisoner's Dilemma")]
    PrisonersDilemma,
    /// No matrix or analysis to judge; never produced by [`Classification::from`].
    #[serde(rename = "Undetermined")]
    Undetermined,
}

/// - no pure equilibrium → competitive margin
/// - primary equilibrium is the joint-profit optimum → coordination
/// - otherwise, both players hold dominant strategies → prisoner's dilemma
/// - anything else → competitive margin
impl From<(&Matrix, &Analysis)> for Classification {
    fn from((matrix, analysis): (&Matrix, &Analysis)) -> Self {
        let Some(primary) = analysis.primary() else {
            return Self::CompetitiveMargin;
        };
        let dominated = analysis.dominant_one.is_some() && analysis.dominant_two.is_some();
        match matrix.optimum() == Some(primary) {
            true => Self::Coordination,
            false if dominated => Self::PrisonersDilemma,
            false => Self::CompetitiveMargin,
        }
    }
}

impl Classification {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::CompetitiveMargin => "Competitive Margin Game",
            Self::Coordination => "Coordination Game",
            Self::PrisonersDilemma => "Prisoner's Dilemma",
            Self::Undetermined => "Undetermined",
        }
    }
}

impl std::fmt::Display for Classification {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.pad(self.label())
    }
}
