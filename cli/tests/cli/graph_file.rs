use super::fixtures::{WEIGHTED_GRAPH, temp_file};
use statepath::CliError;
use statepath::graph_file::{load_graph, parse_graph};
use std::path::Path;

#[test]
fn test_load_weighted_graph() {
    let file = temp_file(WEIGHTED_GRAPH);
    let graph = load_graph(file.path()).unwrap();

    assert_eq!(graph.state_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.edge_cost(&"A".to_string(), &"C".to_string()), Some(5.0));

    // Neighbor order follows the file
    let neighbors: Vec<_> = graph.neighbors(&"A".to_string()).unwrap().iter().map(|(s, _)| s.as_str()).collect();
    assert_eq!(neighbors, vec!["B", "C"]);
}

#[test]
fn test_negative_weight_is_rejected() {
    let error = parse_graph(r#"{"A": [["B", -1.0]], "B": []}"#).unwrap_err();
    assert!(error.to_string().contains("-1"));

    let file = temp_file(r#"{"A": [["B", -1.0]]}"#);
    assert!(matches!(load_graph(file.path()), Err(CliError::GraphFile { .. })));
}

#[test]
fn test_malformed_graph_is_rejected() {
    assert!(parse_graph(r#"{"A": ["B"]}"#).is_err());
    assert!(parse_graph("[1, 2]").is_err());
}

#[test]
fn test_missing_file() {
    let result = load_graph(Path::new("/definitely/not/here.json"));
    assert!(matches!(result, Err(CliError::Io { .. })));
}
