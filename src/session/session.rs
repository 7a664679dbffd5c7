use super::*;
use crate::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// A loaded observation snapshot under one policy, with matrices memoized
/// per (snapshot version, period, multiplier, tilt).
///
/// Replacing the snapshot bumps the version and drops every cached matrix.
/// The cache lives behind a `RefCell`, so a session stays on one thread.
pub struct Session {
    policy: Policy,
    dataset: Dataset,
    version: u64,
    cache: RefCell<HashMap<Key, Matrix>>,
}

impl Session {
    pub fn new(policy: Policy, dataset: Dataset) -> Self {
        log::info!("session over {} observations", dataset.len());
        Self {
            policy,
            dataset,
            version: 0,
            cache: RefCell::new(HashMap::new()),
        }
    }

    pub fn policy(&self) -> &Policy {
        &self.policy
    }
    pub fn observations(&self) -> &[Observation] {
        self.dataset.as_ref()
    }
    pub fn periods(&self) -> Vec<Period> {
        self.dataset.periods()
    }
    pub fn version(&self) -> u64 {
        self.version
    }
    pub fn cached(&self) -> usize {
        self.cache.borrow().len()
    }

    /// Swap in a new snapshot. Nothing computed from the old one survives.
    pub fn replace(&mut self, dataset: Dataset) {
        self.version += 1;
        self.dataset = dataset;
        self.cache.get_mut().clear();
        log::info!("session v{} over {} observations", self.version, self.dataset.len());
    }

    fn memo(&self, key: Key, build: impl FnOnce() -> Matrix) -> Matrix {
        if let Some(matrix) = self.cache.borrow().get(&key) {
            return *matrix;
        }
        log::trace!("cache miss {:?}", key);
        let matrix = build();
        self.cache.borrow_mut().insert(key, matrix);
        matrix
    }

    pub fn matrix(&self, period: Period, multiplier: Multiplier) -> Matrix {
        let key = Key::new(self.version, period, multiplier, None);
        self.memo(key, || {
            Builder::new(&self.policy, multiplier).build(within(self.observations(), period))
        })
    }
    pub fn perturbed(&self, period: Period, multiplier: Multiplier, direction: Direction) -> Matrix {
        let key = Key::new(self.version, period, multiplier, Some(direction));
        self.memo(key, || {
            Robustness::new(&self.policy, self.observations(), period, multiplier).matrix(direction)
        })
    }
    pub fn analysis(&self, period: Period, multiplier: Multiplier) -> Analysis {
        Analysis::from(&self.matrix(period, multiplier))
    }

    /// Both demand tilts keep the primary equilibrium at `baseline`.
    pub fn is_robust(&self, period: Period, multiplier: Multiplier, baseline: Pair) -> bool {
        Direction::all().into_iter().all(|direction| {
            Analysis::from(&self.perturbed(period, multiplier, direction)).primary() == Some(baseline)
        })
    }

    pub fn tipping(&self, period: Period) -> Option<TippingPoint> {
        TippingPoint::scan(&self.policy, self.observations(), period)
    }
    pub fn trend(&self, multiplier: Multiplier) -> Vec<Trend> {
        Trend::curve(&self.policy, self.observations(), multiplier)
    }
    pub fn sweep(&self, period: Period) -> Vec<Sweep> {
        Sweep::range(&self.policy, self.observations(), period, crate::scan())
    }
    pub fn tree(
        &self,
        period: Period,
        pair: Pair,
        multiplier: Multiplier,
        perspective: Player,
    ) -> Option<DecisionTree> {
        DecisionTree::grow(&self.policy, self.observations(), period, pair, multiplier, perspective)
    }

    /// Every view of one period at one multiplier.
    pub fn report(&self, period: Period, multiplier: Multiplier) -> Report {
        let matrix = self.matrix(period, multiplier);
        let analysis = Analysis::from(&matrix);
        if matrix.is_blank() {
            log::warn!("no observations for {}", period);
        }
        Report {
            period,
            multiplier,
            solution: Solution::solve(&matrix, &analysis),
            classification: Classification::from((&matrix, &analysis)),
            welfare: Welfare::from((&matrix, &analysis)),
            verification: Verification::at(&matrix, &analysis),
            robust: analysis.primary().map(|baseline| self.is_robust(period, multiplier, baseline)),
            tipping: self.tipping(period),
            matrix,
            analysis,
        }
    }
}
