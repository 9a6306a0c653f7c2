//! Side-by-side runs of every strategy on one search problem.

use crate::algorithm::Algorithm;
use crate::error::Result;
use crate::graph::StateGraph;
use crate::heuristic::Coordinates;
use crate::pathfinding::{SearchOutcome, SearchStats, find_path, find_path_uninformed};
use crate::search_config::SearchConfig;
use crate::state::{Cost, State};
use serde::Serialize;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct StrategyReport {
    pub algorithm: Algorithm,
    pub path_found: bool,
    /// Number of edges along the path
    pub path_length: usize,
    pub cost: Cost,
    pub stats: SearchStats,
    /// Set when the strategy failed instead of finishing
    pub error: Option<String>,
}

impl<S> From<(Algorithm, &Result<SearchOutcome<S>>)> for StrategyReport {
    fn from((algorithm, result): (Algorithm, &Result<SearchOutcome<S>>)) -> Self {
        match result {
            Ok(outcome) => Self {
                algorithm,
                path_found: outcome.found(),
                path_length: outcome.steps(),
                cost: outcome.cost.unwrap_or(0.0),
                stats: outcome.stats,
                error: None,
            },
            Err(error) => Self {
                algorithm,
                path_found: false,
                path_length: 0,
                cost: 0.0,
                stats: SearchStats::default(),
                error: Some(error.to_string()),
            },
        }
    }
}

/// Run all five strategies on coordinate-valued states, always reporting cost
pub fn compare_strategies<S: State + Coordinates>(
    start: &S,
    goal: &S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
) -> Vec<StrategyReport> {
    compare_selected_strategies(&Algorithm::ALL, start, goal, graph, config)
}

/// Run `algorithms` in the given order, always reporting cost
pub fn compare_selected_strategies<S: State + Coordinates>(
    algorithms: &[Algorithm],
    start: &S,
    goal: &S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
) -> Vec<StrategyReport> {
    let config = config.with_cost();

    algorithms
        .iter()
        .copied()
        .map(|algorithm| {
            let result = find_path(algorithm, start.clone(), goal.clone(), graph, &config);
            StrategyReport::from((algorithm, &result))
        })
        .collect()
}

/// Run the strategies that need no coordinates (BFS, DFS, UCS)
pub fn compare_uninformed_strategies<S: State>(
    start: &S,
    goal: &S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
) -> Vec<StrategyReport> {
    let config = config.with_cost();

    Algorithm::ALL
        .into_iter()
        .filter_map(|algorithm| {
            let result =
                find_path_uninformed(algorithm, start.clone(), goal.clone(), graph, &config)?;
            Some(StrategyReport::from((algorithm, &result)))
        })
        .collect()
}
