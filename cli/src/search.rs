use serde::Serialize;
use statepath_core::{
    Algorithm, Cost, SearchConfig, SearchOutcome, SearchStats, StrategyReport,
    compare_selected_strategies, compare_uninformed_strategies, find_path, find_path_uninformed,
};

use crate::app::{Problem, position_label};
use crate::args::{AlgorithmChoice, Args};
use crate::error::CliError;

pub struct SearchRequest {
    pub problem: Problem,
    pub algorithm: AlgorithmChoice,
    pub config: SearchConfig,
    pub from_label: String,
    pub to_label: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct SearchResult {
    pub algorithm: Algorithm,
    pub path_found: bool,
    pub path: Vec<String>,
    pub steps: usize,
    pub cost: Option<Cost>,
    pub stats: SearchStats,
    /// Grid with the path drawn over it; grids only
    #[serde(skip)]
    pub overlay: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum SearchReport {
    Single(SearchResult),
    Comparison { strategies: Vec<StrategyReport> },
}

impl SearchRequest {
    pub fn new(
        problem: Problem,
        algorithm: AlgorithmChoice,
        config: SearchConfig,
    ) -> Result<Self, CliError> {
        if let AlgorithmChoice::One(chosen) = algorithm {
            if let Some(reason) = problem.unsupported(chosen) {
                return Err(CliError::usage(reason));
            }
        }

        Ok(Self {
            from_label: problem.start_label(),
            to_label: problem.goal_label(),
            problem,
            algorithm,
            config,
        })
    }

    pub fn from_args(args: &Args) -> Result<Self, CliError> {
        let problem = Problem::load(args)?;
        let algorithm = args
            .algorithm
            .unwrap_or_else(|| AlgorithmChoice::One(problem.default_algorithm()));
        Self::new(problem, algorithm, search_config(args))
    }
}

pub fn search_config(args: &Args) -> SearchConfig {
    SearchConfig::new(args.cost || args.json, args.budget)
}

pub fn execute_search(request: &SearchRequest) -> Result<SearchReport, CliError> {
    let config = &request.config;

    match (&request.problem, request.algorithm) {
        (Problem::Grid { graph, start, goal, .. }, AlgorithmChoice::All) => {
            Ok(SearchReport::Comparison {
                strategies: compare_selected_strategies(
                    &request.problem.applicable_algorithms(),
                    start,
                    goal,
                    graph,
                    config,
                ),
            })
        }
        (Problem::Named { graph, start, goal }, AlgorithmChoice::All) => {
            Ok(SearchReport::Comparison {
                strategies: compare_uninformed_strategies(start, goal, graph, config),
            })
        }
        (
            Problem::Grid {
                map,
                graph,
                start,
                goal,
                ..
            },
            AlgorithmChoice::One(algorithm),
        ) => {
            let outcome = find_path(algorithm, *start, *goal, graph, config)?;
            let overlay = map.render(&outcome.path);
            let labels = outcome.path.iter().copied().map(position_label).collect();
            Ok(SearchReport::Single(search_result(algorithm, &outcome, labels, Some(overlay))))
        }
        (Problem::Named { graph, start, goal }, AlgorithmChoice::One(algorithm)) => {
            let outcome =
                find_path_uninformed(algorithm, start.clone(), goal.clone(), graph, config)
                    .ok_or_else(|| CliError::usage(format!("{algorithm} needs coordinates")))??;
            let labels = outcome.path.clone();
            Ok(SearchReport::Single(search_result(algorithm, &outcome, labels, None)))
        }
    }
}

fn search_result<S>(
    algorithm: Algorithm,
    outcome: &SearchOutcome<S>,
    path: Vec<String>,
    overlay: Option<String>,
) -> SearchResult {
    SearchResult {
        algorithm,
        path_found: outcome.found(),
        path,
        steps: outcome.steps(),
        cost: outcome.cost,
        stats: outcome.stats,
        overlay,
    }
}
