//! Error types for graph search.
//!
//! An unreachable goal is not an error: strategies report it as an empty path.
//! Everything here is a deterministic function of the input graph or a broken
//! internal invariant, and is returned immediately.

use crate::Cost;
use thiserror::Error;

/// Errors that can occur while building a state graph or searching it
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SearchError {
    // Graph inconsistencies (caller supplied an incomplete graph)
    #[error("state {state} has no entry in the state graph")]
    MissingState { state: String },

    #[error("no edge from {from} to {to} in the state graph")]
    MissingEdge { from: String, to: String },

    // Invalid input
    #[error("edge from {from} to {to} has invalid cost {cost} (expected finite and >= 0)")]
    InvalidEdgeCost { from: String, to: String, cost: Cost },

    #[error("heuristic estimate {estimate} for state {state} is invalid (expected finite and >= 0)")]
    InvalidEstimate { state: String, estimate: Cost },

    // Internal invariant violations
    #[error("frontier has no live entry left while the search expected a candidate")]
    FrontierUnderflow,

    #[error("state {state} was never recorded in the predecessor map")]
    UnrecordedState { state: String },

    #[error("predecessor chain starting at {state} never reaches the start state")]
    PredecessorCycle { state: String },

    // Cancellation
    #[error("search stopped after expanding {expanded} states (expansion budget exhausted)")]
    BudgetExhausted { expanded: usize },
}

impl SearchError {
    pub fn missing_state(state: &impl std::fmt::Debug) -> Self {
        SearchError::MissingState {
            state: format!("{:?}", state),
        }
    }

    pub fn missing_edge(from: &impl std::fmt::Debug, to: &impl std::fmt::Debug) -> Self {
        SearchError::MissingEdge {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
        }
    }

    pub fn invalid_edge_cost(
        from: &impl std::fmt::Debug,
        to: &impl std::fmt::Debug,
        cost: Cost,
    ) -> Self {
        SearchError::InvalidEdgeCost {
            from: format!("{:?}", from),
            to: format!("{:?}", to),
            cost,
        }
    }

    pub fn invalid_estimate(state: &impl std::fmt::Debug, estimate: Cost) -> Self {
        SearchError::InvalidEstimate {
            state: format!("{:?}", state),
            estimate,
        }
    }

    pub fn unrecorded_state(state: &impl std::fmt::Debug) -> Self {
        SearchError::UnrecordedState {
            state: format!("{:?}", state),
        }
    }

    /// True for errors caused by the caller's graph rather than by the search itself
    pub fn is_graph_inconsistency(&self) -> bool {
        matches!(
            self,
            SearchError::MissingState { .. } | SearchError::MissingEdge { .. }
        )
    }
}

pub type Result<T, E = SearchError> = std::result::Result<T, E>;
