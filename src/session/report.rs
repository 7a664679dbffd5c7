use crate::*;
use serde::Serialize;

/// One period at one cost multiplier, analyzed end to end.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub period: Period,
    pub multiplier: Multiplier,
    pub matrix: Matrix,
    pub analysis: Analysis,
    pub solution: Solution,
    pub classification: Classification,
    pub welfare: Welfare,
    pub verification: Option<Verification>,
    /// Absent when there is no pure equilibrium to test.
    pub robust: Option<bool>,
    pub tipping: Option<TippingPoint>,
}
