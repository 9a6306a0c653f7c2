pub mod app;
pub mod args;
pub mod colors;
pub mod display;
pub mod error;
pub mod graph_file;
pub mod grid;
pub mod logging;
pub mod report;
pub mod search;

// Re-export commonly used items
pub use app::Problem;
pub use args::{AlgorithmChoice, Args};
pub use error::CliError;
pub use grid::{GridMap, Position};
pub use search::{SearchReport, SearchRequest, SearchResult, execute_search};
