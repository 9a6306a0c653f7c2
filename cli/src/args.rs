use clap::Parser;
use statepath_core::{Algorithm, ParseAlgorithmError};
use std::{path::PathBuf, str::FromStr};

/// A single strategy, or every strategy side by side
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlgorithmChoice {
    One(Algorithm),
    All,
}

impl FromStr for AlgorithmChoice {
    type Err = ParseAlgorithmError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(AlgorithmChoice::All);
        }
        s.parse().map(AlgorithmChoice::One)
    }
}

#[derive(Parser, Debug, Clone)]
#[command(name = "statepath")]
#[command(about = "Find a path through a grid map or weighted graph with BFS, DFS, UCS or A*")]
pub struct Args {
    /// Grid map file, or JSON graph file with --graph
    pub map: PathBuf,

    /// Read MAP as a JSON graph ({"A": [["B", 1.0]]}) instead of a grid
    #[arg(short, long)]
    pub graph: bool,

    /// Start state: ROW,COL on grids (default: the S cell), a name on graphs
    #[arg(short, long, value_name = "STATE")]
    pub from: Option<String>,

    /// Goal state: ROW,COL on grids (default: the G cell), a name on graphs
    #[arg(short, long, value_name = "STATE")]
    pub to: Option<String>,

    /// bfs, dfs, ucs, astar-euclidean, astar-manhattan, or all
    /// [default: astar-manhattan, astar-euclidean with --diagonal, ucs with --graph]
    #[arg(short, long, value_name = "ALGORITHM")]
    pub algorithm: Option<AlgorithmChoice>,

    /// Allow diagonal moves on grids (cost x sqrt 2, no corner cutting)
    #[arg(short, long)]
    pub diagonal: bool,

    /// Report the total path cost
    #[arg(short, long)]
    pub cost: bool,

    /// Give up after expanding this many states
    #[arg(short, long, value_name = "COUNT")]
    pub budget: Option<usize>,

    /// Print a JSON report instead of human output
    #[arg(long)]
    pub json: bool,

    /// Disable colored output
    #[arg(long)]
    pub no_color: bool,

    /// Verbose mode - show search info and statistics
    #[arg(short, long)]
    pub verbose: bool,

    /// Quiet mode - only show the path flow
    #[arg(short, long)]
    pub quiet: bool,

    /// Log filter, e.g. "debug" or "statepath_core=trace"
    #[arg(long, value_name = "LEVEL", env = "STATEPATH_LOG_LEVEL")]
    pub log_level: Option<String>,
}
