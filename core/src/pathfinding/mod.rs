pub mod astar;
pub mod bfs;
mod best_first;
pub mod dfs;
mod discovery;
pub mod ucs;
pub mod utils;

// Re-export the public functions
pub use astar::{astar_euclidean_find_path, astar_find_path, astar_manhattan_find_path};
pub use bfs::bfs_find_path;
pub use dfs::dfs_find_path;
pub use ucs::ucs_find_path;
pub use utils::{SearchOutcome, SearchStats, path_cost, reconstruct_path};

use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::graph::StateGraph;
use crate::heuristic::Coordinates;
use crate::search_config::SearchConfig;
use crate::state::State;

/// Run the strategy named by `algorithm` over coordinate-valued states
pub fn find_path<S: State + Coordinates>(
    algorithm: Algorithm,
    start: S,
    goal: S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
) -> Result<SearchOutcome<S>> {
    tracing::debug!(%algorithm, ?start, ?goal, "starting search");

    match algorithm {
        Algorithm::Bfs => bfs_find_path(start, goal, graph, config),
        Algorithm::Dfs => dfs_find_path(start, goal, graph, config),
        Algorithm::Ucs => ucs_find_path(start, goal, graph, config),
        Algorithm::AStarEuclidean => astar_euclidean_find_path(start, goal, graph, config),
        Algorithm::AStarManhattan => astar_manhattan_find_path(start, goal, graph, config),
    }
}

/// Run an uninformed or uniform-cost strategy over any state type.
///
/// Returns `None` for the A* variants, which need coordinates.
pub fn find_path_uninformed<S: State>(
    algorithm: Algorithm,
    start: S,
    goal: S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
) -> Option<Result<SearchOutcome<S>>> {
    tracing::debug!(%algorithm, ?start, ?goal, "starting search");

    match algorithm {
        Algorithm::Bfs => Some(bfs_find_path(start, goal, graph, config)),
        Algorithm::Dfs => Some(dfs_find_path(start, goal, graph, config)),
        Algorithm::Ucs => Some(ucs_find_path(start, goal, graph, config)),
        Algorithm::AStarEuclidean | Algorithm::AStarManhattan => None,
    }
}
