//! Breadth-first combination engine

mod core;
pub mod operations;
pub mod state;

pub use self::core::{CombinationEngine, EngineStats};
pub use operations::{DirectionalOp, operate};
pub use state::{Candidate, PoolKey, SearchState, StateKey};
