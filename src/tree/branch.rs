use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// One chance node under a fixed strategy pair: a demand state, its
/// likelihood, and the payoff it realizes for the chosen perspective.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Branch {
    pub demand: Demand,
    pub probability: Probability,
    pub payoff: Utility,
}

impl Branch {
    pub fn expected(&self) -> Utility {
        self.probability * self.payoff
    }
}

impl std::fmt::Display for Branch {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{:<6} {:>5.1}% {:>14}", self.demand, self.probability * 100., Crores(self.payoff))
    }
}
