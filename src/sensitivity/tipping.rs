use crate::*;
use serde::Deserialize;
use serde::Serialize;

/// Cost multiplier at which player one's equilibrium strategy first changes.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TippingPoint {
    pub multiplier: Multiplier,
    pub from: Strategy,
    pub to: Strategy,
    pub period: Period,
}

impl TippingPoint {
    /// Walk the multiplier grid from 1.00 to 5.00. The first step with any
    /// equilibrium fixes the baseline strategy; steps without one are skipped.
    /// The first later step whose primary equilibrium moves player one off the
    /// baseline is the tipping point.
    ///
    /// Steps are `1.00 + i × 0.05`, not a running sum, so the 1.20 step equals
    /// the literal `1.2` and a `> 1.2` crash rule first fires at 1.25. A scan
    /// that accumulates 0.05 reaches 1.2000000000000002 instead and would
    /// report the same crash one step earlier, at 1.20.
    pub fn scan(policy: &Policy, observations: &[Observation], period: Period) -> Option<Self> {
        let rows = within(observations, period).collect::<Vec<_>>();
        if rows.is_empty() {
            return None;
        }
        let mut baseline = None;
        for multiplier in crate::scan() {
            let matrix = Builder::new(policy, multiplier).build(rows.iter().copied());
            let current = Analysis::from(&matrix).primary().map(|pair| pair.one());
            match (baseline, current) {
                (None, Some(strategy)) => baseline = Some(strategy),
                (Some(from), Some(to)) if from != to => {
                    log::debug!("period {} tips {} → {} at {:.2}", period, from, to, multiplier);
                    return Some(Self {
                        multiplier,
                        from,
                        to,
                        period,
                    });
                }
                _ => continue,
            }
        }
        log::debug!("period {} holds across the scan", period);
        None
    }
}

impl std::fmt::Display for TippingPoint {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(
            f,
            "{}: {} → {} at {:.2}x",
            self.period, self.from, self.to, self.multiplier
        )
    }
}
