use crate::*;

/// Everything that can change a memoized matrix. Multipliers are keyed by
/// bit pattern so that `1.2` and `1.2000000000000002` stay distinct.
#[derive(Debug, Clone, Copy, Hash, PartialEq, Eq)]
pub(super) struct Key {
    version: u64,
    period: Period,
    multiplier: u64,
    direction: Option<Direction>,
}

impl Key {
    pub fn new(version: u64, period: Period, multiplier: Multiplier, direction: Option<Direction>) -> Self {
        Self {
            version,
            period,
            multiplier: multiplier.to_bits(),
            direction,
        }
    }
}
