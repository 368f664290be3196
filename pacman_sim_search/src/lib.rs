#![cfg_attr(not(test), forbid(clippy::unwrap_used))]

use instant::Instant;

/// Single-agent graph search: depth-first, breadth-first, uniform cost and A*
pub mod graph_search;

/// Adversarial search over multi-agent games: minimax, alpha-beta and expectimax
pub mod multi_agent;

pub mod prelude {
    pub use crate::graph_search::{
        astar_search, breadth_first_search, depth_first_search, search, uniform_cost_search, GraphSearch,
        GraphSearchConfig, PathResult, SearchError, Strategy,
    };
    pub use crate::multi_agent::{
        choose_action, Decision, GameTreeError, MultiAgentConfig, MultiAgentSearch, SearchMode,
    };
    pub use crate::{SearchCounter, SearchLimits};
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchCounter {
    /// Number of states produced through successor generation.
    pub states_visited: u64,
    /// Number of nodes whose successors were generated.
    pub expansions: u64,
    /// Number of stale frontier entries discarded because their state was already expanded.
    pub skipped: u64,
    /// Number of heuristic or evaluation function calls.
    pub evals: u64,
    /// Number of times the alpha-beta pruning condition has been reached.
    pub prunes: u64,
}

impl SearchCounter {
    pub const ZERO: SearchCounter = SearchCounter {
        states_visited: 0,
        expansions: 0,
        skipped: 0,
        evals: 0,
        prunes: 0,
    };

    #[inline]
    pub fn add_in_place(&mut self, c: &SearchCounter) {
        self.states_visited += c.states_visited;
        self.expansions += c.expansions;
        self.skipped += c.skipped;
        self.evals += c.evals;
        self.prunes += c.prunes;
    }

    pub fn summary(&self, dt_ns: u128) -> String {
        let dt_ms: f64 = 1e-6 * (dt_ns as f64);
        let rate: f64 = (1e-6_f64 * 1e9_f64) * (self.states_visited as f64) / (dt_ns.max(1) as f64);
        format!(
            "dt={dt_ms:.2}ms rate={rate:.4} Mstates/s expanded={} visited={} evals={} prunes={}",
            self.expansions, self.states_visited, self.evals, self.prunes
        )
    }
}

/// Caller-imposed budget for a single search.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchLimits {
    pub max_time_ms: Option<u128>,
    pub max_expansions: Option<u64>,
}

impl SearchLimits {
    pub fn should_terminate(&self, start_time: Instant, expansions: u64) -> bool {
        if let Some(max_time_ms) = self.max_time_ms {
            if start_time.elapsed().as_millis() >= max_time_ms {
                return true;
            }
        }
        if let Some(max_expansions) = self.max_expansions {
            return expansions >= max_expansions;
        }

        false
    }
}

#[cfg(test)]
mod tests;
