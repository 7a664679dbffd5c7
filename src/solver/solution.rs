use super::*;
use crate::*;
use serde::Serialize;

/// What a player should do in a period: follow a pure equilibrium when one
/// exists, otherwise mix over the restricted support.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Solution {
    Pure { equilibria: Vec<Pair> },
    Mixed(Mixed),
}

impl Solution {
    pub fn solve(matrix: &Matrix, analysis: &Analysis) -> Self {
        match analysis.has_pure() {
            true => Self::Pure {
                equilibria: analysis.equilibria.clone(),
            },
            false => Self::Mixed(Mixed::indifferent(matrix)),
        }
    }
    pub fn has_pure(&self) -> bool {
        matches!(self, Self::Pure { .. })
    }
    pub fn mixed(&self) -> Option<&Mixed> {
        match self {
            Self::Mixed(mixed) => Some(mixed),
            Self::Pure { .. } => None,
        }
    }
    pub fn recommendation(&self) -> &'static str {
        match self {
            Self::Pure { .. } => "Pure strategy Nash equilibrium exists. Mixed strategy solution not required.",
            Self::Mixed(_) => "No pure Nash equilibrium. Use mixed strategy for optimal play.",
        }
    }
}
