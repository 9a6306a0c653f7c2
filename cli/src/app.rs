use statepath_core::{Algorithm, StateGraph};
use std::{fs, path::Path};

use crate::args::Args;
use crate::error::CliError;
use crate::graph_file::load_graph;
use crate::grid::{GridMap, Position, parse_position};

/// A loaded search problem: the graph plus its start and goal
pub enum Problem {
    Grid {
        map: GridMap,
        graph: StateGraph<Position>,
        start: Position,
        goal: Position,
        diagonal: bool,
    },
    Named {
        graph: StateGraph<String>,
        start: String,
        goal: String,
    },
}

impl Problem {
    pub fn load(args: &Args) -> Result<Self, CliError> {
        if args.graph {
            let graph = load_graph(&args.map)?;
            Self::from_graph(graph, args.from.as_deref(), args.to.as_deref())
        } else {
            let map = read_grid(&args.map)?;
            Self::from_grid(map, args.from.as_deref(), args.to.as_deref(), args.diagonal)
        }
    }

    /// Grid problem; `from`/`to` override the map's `S` and `G` cells
    pub fn from_grid(
        map: GridMap,
        from: Option<&str>,
        to: Option<&str>,
        diagonal: bool,
    ) -> Result<Self, CliError> {
        let start = grid_endpoint(&map, from, map.start, "start", "--from", 'S')?;
        let goal = grid_endpoint(&map, to, map.goal, "goal", "--to", 'G')?;
        let graph = map.to_state_graph(diagonal)?;

        tracing::debug!(
            cells = graph.state_count(),
            moves = graph.edge_count(),
            diagonal,
            "built grid graph"
        );

        Ok(Problem::Grid {
            map,
            graph,
            start,
            goal,
            diagonal,
        })
    }

    pub fn from_graph(
        graph: StateGraph<String>,
        from: Option<&str>,
        to: Option<&str>,
    ) -> Result<Self, CliError> {
        let start = from.ok_or_else(|| CliError::usage("graph searches need --from"))?;
        let goal = to.ok_or_else(|| CliError::usage("graph searches need --to"))?;

        if !graph.contains_state(&start.to_string()) {
            return Err(CliError::usage(format!("start state {start:?} is not in the graph")));
        }

        tracing::debug!(
            states = graph.state_count(),
            edges = graph.edge_count(),
            "loaded graph"
        );

        Ok(Problem::Named {
            graph,
            start: start.to_string(),
            goal: goal.to_string(),
        })
    }

    pub fn start_label(&self) -> String {
        match self {
            Problem::Grid { start, .. } => position_label(*start),
            Problem::Named { start, .. } => start.clone(),
        }
    }

    pub fn goal_label(&self) -> String {
        match self {
            Problem::Grid { goal, .. } => position_label(*goal),
            Problem::Named { goal, .. } => goal.clone(),
        }
    }

    /// Strategy used when none is named on the command line
    pub fn default_algorithm(&self) -> Algorithm {
        match self {
            Problem::Grid {
                diagonal: false, ..
            } => Algorithm::AStarManhattan,
            Problem::Grid { diagonal: true, .. } => Algorithm::AStarEuclidean,
            Problem::Named { .. } => Algorithm::Ucs,
        }
    }

    /// Why `algorithm` cannot run on this problem, if it cannot.
    ///
    /// Named states have no coordinates, and Manhattan distance overestimates
    /// a diagonal move, so A* with it would return costlier paths than UCS.
    pub fn unsupported(&self, algorithm: Algorithm) -> Option<String> {
        match self {
            Problem::Named { .. } if algorithm.needs_coordinates() => Some(format!(
                "{algorithm} needs coordinates; use bfs, dfs or ucs on graph files"
            )),
            Problem::Grid { diagonal: true, .. } if algorithm == Algorithm::AStarManhattan => {
                Some(format!(
                    "{algorithm} overestimates diagonal moves; use astar-euclidean with --diagonal"
                ))
            }
            _ => None,
        }
    }

    pub fn applicable_algorithms(&self) -> Vec<Algorithm> {
        Algorithm::ALL
            .into_iter()
            .filter(|&algorithm| self.unsupported(algorithm).is_none())
            .collect()
    }
}

pub fn position_label((row, col): Position) -> String {
    format!("{row},{col}")
}

fn read_grid(path: &Path) -> Result<GridMap, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::io(path, source))?;
    GridMap::parse(&text)
}

fn grid_endpoint(
    map: &GridMap,
    given: Option<&str>,
    marked: Option<Position>,
    role: &str,
    flag: &str,
    marker: char,
) -> Result<Position, CliError> {
    let position = match given {
        Some(text) => parse_position(text)?,
        None => marked.ok_or_else(|| {
            CliError::usage(format!("no {role}: pass {flag} or mark a {marker} cell"))
        })?,
    };

    if !map.is_open(position) {
        return Err(CliError::usage(format!(
            "{role} {} is a wall or outside the map",
            position_label(position)
        )));
    }
    Ok(position)
}
