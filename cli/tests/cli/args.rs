use clap::Parser;
use statepath::{AlgorithmChoice, Args};
use statepath_core::Algorithm;

#[test]
fn test_algorithm_choice_parsing() {
    assert_eq!("all".parse::<AlgorithmChoice>().unwrap(), AlgorithmChoice::All);
    assert_eq!(" ALL ".parse::<AlgorithmChoice>().unwrap(), AlgorithmChoice::All);
    assert_eq!(
        "ucs".parse::<AlgorithmChoice>().unwrap(),
        AlgorithmChoice::One(Algorithm::Ucs)
    );
    assert_eq!(
        "astar_euclidean".parse::<AlgorithmChoice>().unwrap(),
        AlgorithmChoice::One(Algorithm::AStarEuclidean)
    );
    assert!("greedy".parse::<AlgorithmChoice>().is_err());
}

#[test]
fn test_defaults() {
    let args = Args::try_parse_from(["statepath", "maze.txt"]).unwrap();

    assert_eq!(args.algorithm, None);
    assert!(!args.graph);
    assert!(!args.diagonal);
    assert!(!args.cost);
    assert_eq!(args.budget, None);
    assert_eq!(args.from, None);
}

#[test]
fn test_flags() {
    let args = Args::try_parse_from([
        "statepath", "roads.json", "--graph", "--from", "A", "--to", "C", "-a", "all", "-c",
        "-b", "10", "--json", "-q",
    ])
    .unwrap();

    assert!(args.graph);
    assert_eq!(args.from.as_deref(), Some("A"));
    assert_eq!(args.to.as_deref(), Some("C"));
    assert_eq!(args.algorithm, Some(AlgorithmChoice::All));
    assert!(args.cost);
    assert_eq!(args.budget, Some(10));
    assert!(args.json);
    assert!(args.quiet);
}

#[test]
fn test_unknown_algorithm_is_rejected() {
    assert!(Args::try_parse_from(["statepath", "maze.txt", "-a", "greedy"]).is_err());
}
