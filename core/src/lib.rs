pub mod algorithm;
pub mod comparison;
pub mod error;
pub mod frontier;
pub mod graph;
pub mod heuristic;
pub mod pathfinding;
pub mod search_config;
pub mod state;

// Re-export commonly used items
pub use algorithm::{Algorithm, ParseAlgorithmError};
pub use comparison::{
    StrategyReport, compare_selected_strategies, compare_strategies, compare_uninformed_strategies,
};
pub use error::SearchError;
pub use frontier::PriorityFrontier;
pub use graph::StateGraph;
pub use heuristic::{Coordinates, Euclidean, Heuristic, Manhattan, Zero};
pub use pathfinding::{
    SearchOutcome, SearchStats, astar_euclidean_find_path, astar_find_path,
    astar_manhattan_find_path, bfs_find_path, dfs_find_path, find_path, find_path_uninformed,
    path_cost, reconstruct_path, ucs_find_path,
};
pub use search_config::SearchConfig;
pub use state::{Cost, Predecessors, State};
