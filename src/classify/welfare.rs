use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Combined profit at one profile, flagged if the profile is an equilibrium.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Joint {
    pub pair: Pair,
    pub profit: Utility,
    pub nash: bool,
}

/// Joint-profit view of a matrix: what the players earn together at every
/// profile, and how far the equilibrium outcome falls short of the best one.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Welfare {
    pub joints: Vec<Joint>,
    pub optimum: Option<Pair>,
    pub nash: Option<Pair>,
}

impl From<(&Matrix, &Analysis)> for Welfare {
    fn from((matrix, analysis): (&Matrix, &Analysis)) -> Self {
        Self {
            joints: matrix
                .cells()
                .map(|(pair, cell)| Joint {
                    pair,
                    profit: cell.joint(),
                    nash: analysis.is_equilibrium(pair),
                })
                .collect(),
            optimum: matrix.optimum(),
            nash: analysis.primary(),
        }
    }
}

impl Welfare {
    fn profit(&self, pair: Pair) -> Option<Utility> {
        self.joints.iter().find(|j| j.pair == pair).map(|j| j.profit)
    }
    /// Joint profit left on the table by settling at the equilibrium.
    pub fn shortfall(&self) -> Option<Utility> {
        let best = self.profit(self.optimum?)?;
        let nash = self.profit(self.nash?)?;
        Some(best - nash)
    }
    /// True when the equilibrium earns strictly less jointly than the optimum.
    pub fn is_suboptimal(&self) -> bool {
        self.shortfall().is_some_and(|gap| gap > 0.)
    }
    /// Profiles ranked by joint profit, best first; row-major order breaks ties.
    pub fn ranked(&self) -> Vec<Joint> {
        let mut joints = self.joints.clone();
        joints.sort_by(|a, b| b.profit.total_cmp(&a.profit));
        joints
    }
}
