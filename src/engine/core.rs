use std::collections::{HashMap, HashSet, VecDeque};
use std::rc::Rc;

use log::{debug, trace};

use crate::engine::operations::operate;
use crate::engine::state::{Candidate, PoolKey, SearchState, StateKey, extractions};
use crate::value::ExpressionValue;

/// Memoization cache for completed sub-pool searches
type SearchCache = HashMap<PoolKey, Rc<[ExpressionValue]>>;

/// Counters collected while searching
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct EngineStats {
    /// Searches actually run (cache misses)
    pub searches: usize,
    pub cache_hits: usize,
    pub states_expanded: usize,
    pub end_states: usize,
}

/// Exhaustive breadth-first search over every way to fold a pool of values
/// into one.
///
/// A running value is combined either with a single pooled value or with any
/// value buildable from the whole remaining pool, through all six directional
/// operations, until nothing is left. Results for a pool depend only on its
/// contents, so they are cached for the lifetime of the engine.
pub struct CombinationEngine {
    cache: SearchCache,
    stats: EngineStats,
}

impl CombinationEngine {
    pub fn new() -> Self {
        Self {
            cache: HashMap::new(),
            stats: EngineStats::default(),
        }
    }

    pub fn stats(&self) -> EngineStats {
        self.stats
    }

    /// All fully reduced values reachable from `pool`, in discovery order.
    ///
    /// Every returned value consumes each pooled value exactly once. The list
    /// may contain equal values reached along different paths.
    pub fn search(&mut self, pool: &[ExpressionValue]) -> Rc<[ExpressionValue]> {
        let pool_key = PoolKey::from_pool(pool);
        if let Some(cached) = self.cache.get(&pool_key) {
            self.stats.cache_hits += 1;
            trace!("Cache hit for pool of {} values", pool_key.len());
            return Rc::clone(cached);
        }

        self.stats.searches += 1;
        debug!("Searching pool of {} values", pool.len());

        let mut frontier: VecDeque<SearchState> = VecDeque::new();
        let mut queued: HashSet<StateKey> = HashSet::new();
        let mut ends: Vec<ExpressionValue> = Vec::new();

        for seed in extractions(pool) {
            if !queued.insert(seed.key()) {
                continue;
            }
            if seed.is_complete() {
                ends.push(seed.current);
            } else {
                frontier.push_back(seed);
            }
        }

        while let Some(SearchState { remaining, current }) = frontier.pop_front() {
            self.stats.states_expanded += 1;

            for candidate in self.expand_candidates(&remaining) {
                let Candidate {
                    remaining: next_remaining,
                    partner,
                } = candidate;

                for result in operate(&current, &partner) {
                    if next_remaining.is_empty() {
                        ends.push(result);
                        continue;
                    }

                    if queued.insert(StateKey::new(&next_remaining, &result)) {
                        frontier.push_back(SearchState::new(next_remaining.clone(), result));
                    }
                }
            }
        }

        debug!(
            "Pool of {} values produced {} end states",
            pool.len(),
            ends.len()
        );
        self.stats.end_states += ends.len();

        let ends: Rc<[ExpressionValue]> = ends.into();
        self.cache.insert(pool_key, Rc::clone(&ends));
        ends
    }

    /// Every partner the running value can be combined with, given the pool
    /// still available.
    ///
    /// Single pooled values come first, each leaving the rest of the pool
    /// behind. They are followed by every value buildable from the entire pool,
    /// which leave nothing behind. Duplicate pairs are dropped.
    pub fn expand_candidates(&mut self, pool: &[ExpressionValue]) -> Vec<Candidate> {
        let mut seen: HashSet<StateKey> = HashSet::new();
        let mut candidates = Vec::new();

        for SearchState { remaining, current } in extractions(pool) {
            let candidate = Candidate {
                remaining,
                partner: current,
            };
            if seen.insert(candidate.key()) {
                candidates.push(candidate);
            }
        }

        for derived in self.search(pool).iter() {
            let candidate = Candidate {
                remaining: Vec::new(),
                partner: derived.clone(),
            };
            if seen.insert(candidate.key()) {
                candidates.push(candidate);
            }
        }

        trace!(
            "Pool of {} values offers {} candidates",
            pool.len(),
            candidates.len()
        );
        candidates
    }
}

impl Default for CombinationEngine {
    fn default() -> Self {
        Self::new()
    }
}
