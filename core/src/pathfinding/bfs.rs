use super::discovery::{Discipline, discovery_search};
use super::utils::SearchOutcome;
use crate::error::Result;
use crate::graph::StateGraph;
use crate::search_config::SearchConfig;
use crate::state::State;

/// Breadth-first search.
///
/// The goal is checked when it is generated rather than when it is dequeued.
/// The path is shortest by edge count; edge weights are ignored except for
/// the reported cost.
pub fn bfs_find_path<S: State>(
    start: S,
    goal: S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
) -> Result<SearchOutcome<S>> {
    discovery_search(start, goal, graph, config, Discipline::Fifo)
}
