use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};
use thiserror::Error;

/// The interchangeable search strategies
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Algorithm {
    #[default]
    Bfs,
    Dfs,
    Ucs,
    #[serde(rename = "astar-euclidean")]
    AStarEuclidean,
    #[serde(rename = "astar-manhattan")]
    AStarManhattan,
}

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("unknown algorithm: {0} (expected: bfs, dfs, ucs, astar-euclidean, or astar-manhattan)")]
pub struct ParseAlgorithmError(pub String);

impl Algorithm {
    pub const ALL: [Algorithm; 5] = [
        Algorithm::Bfs,
        Algorithm::Dfs,
        Algorithm::Ucs,
        Algorithm::AStarEuclidean,
        Algorithm::AStarManhattan,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Algorithm::Bfs => "bfs",
            Algorithm::Dfs => "dfs",
            Algorithm::Ucs => "ucs",
            Algorithm::AStarEuclidean => "astar-euclidean",
            Algorithm::AStarManhattan => "astar-manhattan",
        }
    }

    /// Whether the strategy orders its frontier by path cost
    pub fn is_cost_aware(&self) -> bool {
        !matches!(self, Algorithm::Bfs | Algorithm::Dfs)
    }

    /// Whether the strategy needs coordinate-valued states
    pub fn needs_coordinates(&self) -> bool {
        matches!(self, Algorithm::AStarEuclidean | Algorithm::AStarManhattan)
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Algorithm {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('_', "-").as_str() {
            "bfs" | "breadth-first" => Ok(Algorithm::Bfs),
            "dfs" | "depth-first" => Ok(Algorithm::Dfs),
            "ucs" | "uniform-cost" | "dijkstra" => Ok(Algorithm::Ucs),
            "astar-euclidean" | "a*-euclidean" | "euclidean" => Ok(Algorithm::AStarEuclidean),
            "astar-manhattan" | "a*-manhattan" | "manhattan" | "astar" | "a*" => {
                Ok(Algorithm::AStarManhattan)
            }
            _ => Err(ParseAlgorithmError(s.to_string())),
        }
    }
}
