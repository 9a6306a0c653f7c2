use super::fixtures::detour_map;
use statepath::report::JsonReport;
use statepath::{AlgorithmChoice, Problem, SearchRequest, execute_search};
use statepath_core::{Algorithm, SearchConfig};

fn report_json(algorithm: AlgorithmChoice, config: SearchConfig) -> serde_json::Value {
    let problem = Problem::from_grid(detour_map(), None, None, false).unwrap();
    let request = SearchRequest::new(problem, algorithm, config).unwrap();
    let report = execute_search(&request).unwrap();

    let text = JsonReport::new(&request, &report).to_json().unwrap();
    serde_json::from_str(&text).unwrap()
}

#[test]
fn test_single_report() {
    let json = report_json(
        AlgorithmChoice::One(Algorithm::AStarManhattan),
        SearchConfig::default().with_cost(),
    );

    assert_eq!(json["from"], "0,0");
    assert_eq!(json["to"], "2,3");
    assert_eq!(json["result"]["mode"], "single");
    assert_eq!(json["result"]["algorithm"], "astar-manhattan");
    assert_eq!(json["result"]["path_found"], true);
    assert_eq!(json["result"]["steps"], 5);
    assert_eq!(json["result"]["cost"], 5.0);
    assert_eq!(json["result"]["path"][0], "0,0");
    assert!(json["result"]["stats"]["elapsed_ms"].is_number());
    assert!(json["result"].get("overlay").is_none());
}

#[test]
fn test_cost_is_null_when_not_requested() {
    let json = report_json(AlgorithmChoice::One(Algorithm::Bfs), SearchConfig::default());
    assert!(json["result"]["cost"].is_null());
}

#[test]
fn test_comparison_report() {
    let json = report_json(AlgorithmChoice::All, SearchConfig::default());

    assert_eq!(json["result"]["mode"], "comparison");
    let strategies = json["result"]["strategies"].as_array().unwrap();
    assert_eq!(strategies.len(), 5);
    assert_eq!(strategies[2]["algorithm"], "ucs");
    assert_eq!(strategies[2]["cost"], 5.0);
    assert!(strategies[2]["error"].is_null());
}
