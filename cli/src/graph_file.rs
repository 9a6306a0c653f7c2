use crate::error::CliError;
use statepath_core::StateGraph;
use std::{fs, path::Path};

/// Load a JSON adjacency map such as `{"A": [["B", 1.0], ["C", 5.0]]}`
pub fn load_graph(path: &Path) -> Result<StateGraph<String>, CliError> {
    let text = fs::read_to_string(path).map_err(|source| CliError::io(path, source))?;
    parse_graph(&text).map_err(|source| CliError::GraphFile {
        path: path.to_path_buf(),
        source,
    })
}

pub fn parse_graph(text: &str) -> Result<StateGraph<String>, serde_json::Error> {
    serde_json::from_str(text)
}
