use super::best_first::best_first_search;
use super::utils::SearchOutcome;
use crate::error::Result;
use crate::graph::StateGraph;
use crate::heuristic::{Coordinates, Euclidean, Heuristic, Manhattan};
use crate::search_config::SearchConfig;
use crate::state::State;

/// A* search with a caller-supplied heuristic.
///
/// The returned path is a cheapest one when `heuristic` is admissible and
/// consistent for `graph`. The reported cost is the accumulated edge cost,
/// never the heuristic-inflated priority.
pub fn astar_find_path<S: State, H: Heuristic<S>>(
    start: S,
    goal: S,
    graph: &StateGraph<S>,
    heuristic: &H,
    config: &SearchConfig,
) -> Result<SearchOutcome<S>> {
    best_first_search(start, goal, graph, heuristic, config)
}

/// A* guided by straight-line distance
pub fn astar_euclidean_find_path<S: State + Coordinates>(
    start: S,
    goal: S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
) -> Result<SearchOutcome<S>> {
    best_first_search(start, goal, graph, &Euclidean, config)
}

/// A* guided by row plus column distance
pub fn astar_manhattan_find_path<S: State + Coordinates>(
    start: S,
    goal: S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
) -> Result<SearchOutcome<S>> {
    best_first_search(start, goal, graph, &Manhattan, config)
}
