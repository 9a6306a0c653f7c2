use super::discovery::{Discipline, discovery_search};
use super::utils::SearchOutcome;
use crate::error::Result;
use crate::graph::StateGraph;
use crate::search_config::SearchConfig;
use crate::state::State;

/// Depth-first search. Finds some path if one exists; no length guarantee.
pub fn dfs_find_path<S: State>(
    start: S,
    goal: S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
) -> Result<SearchOutcome<S>> {
    discovery_search(start, goal, graph, config, Discipline::Lifo)
}
