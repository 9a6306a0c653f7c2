use super::best_first::best_first_search;
use super::utils::SearchOutcome;
use crate::error::Result;
use crate::graph::StateGraph;
use crate::heuristic::Zero;
use crate::search_config::SearchConfig;
use crate::state::State;

/// Uniform-cost search.
///
/// Expands states in order of accumulated cost and stops when the goal is
/// extracted, so the returned path is a cheapest one.
pub fn ucs_find_path<S: State>(
    start: S,
    goal: S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
) -> Result<SearchOutcome<S>> {
    best_first_search(start, goal, graph, &Zero, config)
}
