use super::*;
use crate::Probability;
use crate::Utility;
use serde::Deserialize;
use serde::Serialize;

/// One dataset row: a strategy profile, one demand state it may meet,
/// and the profits each player realizes there.
///
/// Field aliases accept the raw festival dataset's column names, so an
/// exported table can be deserialized without renaming.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    #[serde(alias = "Festival_Year")]
    pub period: Period,
    #[serde(alias = "Amazon_Strategy")]
    pub one: Strategy,
    #[serde(alias = "Flipkart_Strategy")]
    pub two: Strategy,
    #[serde(alias = "Market_Demand")]
    pub demand: Demand,
    #[serde(alias = "Demand_Probability")]
    pub probability: Probability,
    #[serde(alias = "Amazon_Profit")]
    pub profit_one: Utility,
    #[serde(alias = "Flipkart_Profit")]
    pub profit_two: Utility,
    /// Player one's marketing spend, in thousands.
    #[serde(alias = "Amazon_Ad_Spend", default)]
    pub spend: Utility,
}

impl Observation {
    pub fn pair(&self) -> Pair {
        Pair(self.one, self.two)
    }
    pub fn reweighted(&self, probability: Probability) -> Self {
        Self {
            probability,
            ..self.clone()
        }
    }
}
