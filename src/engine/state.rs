use crate::value::{ExpressionValue, ValueKey};

/// Order-independent identity of a pool of values
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct PoolKey(Vec<ValueKey>);

impl PoolKey {
    pub fn from_pool(pool: &[ExpressionValue]) -> Self {
        let mut keys: Vec<ValueKey> = pool.iter().map(ExpressionValue::key).collect();
        keys.sort();
        Self(keys)
    }

    pub(crate) fn len(&self) -> usize {
        self.0.len()
    }

    pub(crate) fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Identity of a pending search state
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct StateKey {
    pool: PoolKey,
    current: ValueKey,
}

impl StateKey {
    pub fn new(remaining: &[ExpressionValue], current: &ExpressionValue) -> Self {
        Self {
            pool: PoolKey::from_pool(remaining),
            current: current.key(),
        }
    }
}

/// A unit of pending work: the values not folded in yet and the running value
#[derive(Debug, Clone)]
pub struct SearchState {
    pub remaining: Vec<ExpressionValue>,
    pub current: ExpressionValue,
}

impl SearchState {
    pub fn new(remaining: Vec<ExpressionValue>, current: ExpressionValue) -> Self {
        Self { remaining, current }
    }

    pub fn key(&self) -> StateKey {
        StateKey::new(&self.remaining, &self.current)
    }

    pub fn is_complete(&self) -> bool {
        self.remaining.is_empty()
    }
}

/// A partner for the running value and the pool left over after taking it
#[derive(Debug, Clone)]
pub struct Candidate {
    pub remaining: Vec<ExpressionValue>,
    pub partner: ExpressionValue,
}

impl Candidate {
    pub fn key(&self) -> StateKey {
        StateKey::new(&self.remaining, &self.partner)
    }
}

/// Every way to pull one element out of `pool`, each with its own copy of the rest
pub fn extractions(pool: &[ExpressionValue]) -> impl Iterator<Item = SearchState> + '_ {
    (0..pool.len()).map(move |i| {
        let mut remaining = pool.to_vec();
        let current = remaining.remove(i);
        SearchState::new(remaining, current)
    })
}
