use crate::fixtures::{Cell, brute_force, grid, random_graph};
use rand::{Rng, SeedableRng, rngs::StdRng};
use statepath_core::{
    Algorithm, SearchConfig, StateGraph, bfs_find_path, dfs_find_path, find_path, path_cost,
    ucs_find_path,
};

const SEEDS: std::ops::Range<u64> = 0..60;

fn random_grid(seed: u64) -> StateGraph<Cell> {
    let mut rng = StdRng::seed_from_u64(seed);
    let rows: Vec<String> = (0..6)
        .map(|_| {
            (0..7)
                .map(|_| match rng.random_range(0..10) {
                    0 | 1 => '#',
                    2 => char::from_digit(rng.random_range(2..=9), 10).unwrap_or('.'),
                    _ => '.',
                })
                .collect()
        })
        .collect();
    let rows: Vec<&str> = rows.iter().map(String::as_str).collect();
    grid(&rows)
}

#[test]
fn test_ucs_cost_matches_brute_force() {
    let config = SearchConfig::default().with_cost();

    for seed in SEEDS {
        let graph = random_graph(seed, 7, 0.3);
        let outcome = ucs_find_path(0, 6, &graph, &config).unwrap();

        match brute_force(&graph, 0, 6) {
            Some((cheapest, _)) => {
                assert_eq!(outcome.cost, Some(cheapest), "seed {seed}");
                assert_eq!(path_cost(&outcome.path, &graph).unwrap(), cheapest, "seed {seed}");
            }
            None => {
                assert!(outcome.path.is_empty(), "seed {seed}");
                assert_eq!(outcome.cost, Some(0.0), "seed {seed}");
            }
        }
    }
}

#[test]
fn test_bfs_edge_count_is_minimal() {
    for seed in SEEDS {
        let graph = random_graph(seed, 7, 0.3);
        let outcome = bfs_find_path(0, 6, &graph, &SearchConfig::default()).unwrap();

        match brute_force(&graph, 0, 6) {
            Some((_, fewest_edges)) => assert_eq!(outcome.steps(), fewest_edges, "seed {seed}"),
            None => assert!(!outcome.found(), "seed {seed}"),
        }
    }
}

#[test]
fn test_dfs_finds_a_valid_path_whenever_one_exists() {
    for seed in SEEDS {
        let graph = random_graph(seed, 7, 0.3);
        let outcome = dfs_find_path(0, 6, &graph, &SearchConfig::default().with_cost()).unwrap();

        assert_eq!(outcome.found(), brute_force(&graph, 0, 6).is_some(), "seed {seed}");
        if outcome.found() {
            assert_eq!(outcome.path.first(), Some(&0));
            assert_eq!(outcome.path.last(), Some(&6));
            assert_eq!(outcome.cost, Some(path_cost(&outcome.path, &graph).unwrap()));
        }
    }
}

#[test]
fn test_astar_matches_ucs_on_random_grids() {
    let config = SearchConfig::default().with_cost();

    for seed in SEEDS {
        let graph = random_grid(seed);
        let mut states: Vec<Cell> = graph.states().copied().collect();
        if states.len() < 2 {
            continue;
        }
        states.sort();
        let (start, goal) = (states[0], states[states.len() - 1]);

        let ucs = find_path(Algorithm::Ucs, start, goal, &graph, &config).unwrap();
        for algorithm in [Algorithm::AStarManhattan, Algorithm::AStarEuclidean] {
            let informed = find_path(algorithm, start, goal, &graph, &config).unwrap();
            assert_eq!(informed.cost, ucs.cost, "{algorithm} on seed {seed}");
            assert_eq!(informed.found(), ucs.found());
        }
    }
}

#[test]
fn test_start_equals_goal_for_every_strategy() {
    let graph = grid(&["...", ".#."]);
    let config = SearchConfig::default().with_cost();

    for algorithm in Algorithm::ALL {
        let outcome = find_path(algorithm, (1, 2), (1, 2), &graph, &config).unwrap();
        assert_eq!(outcome.path, vec![(1, 2)], "{algorithm}");
        assert_eq!(outcome.cost, Some(0.0), "{algorithm}");
        assert_eq!(outcome.stats.states_expanded, 0);
    }
}

#[test]
fn test_start_equals_goal_outside_graph() {
    let graph = grid(&["..."]);

    for algorithm in Algorithm::ALL {
        let outcome =
            find_path(algorithm, (9, 9), (9, 9), &graph, &SearchConfig::default()).unwrap();
        assert_eq!(outcome.path, vec![(9, 9)], "{algorithm}");
    }
}

#[test]
fn test_unreachable_goal_for_every_strategy() {
    let graph = grid(&["..#..", "..#..", "..#.."]);
    let config = SearchConfig::default().with_cost();

    for algorithm in Algorithm::ALL {
        let outcome = find_path(algorithm, (0, 0), (2, 4), &graph, &config).unwrap();
        assert!(outcome.path.is_empty(), "{algorithm}");
        assert_eq!(outcome.cost, Some(0.0), "{algorithm}");
    }
}

#[test]
fn test_returned_paths_are_walkable() {
    let config = SearchConfig::default().with_cost();

    for seed in SEEDS {
        let graph = random_graph(seed, 8, 0.35);
        for algorithm in [Algorithm::Bfs, Algorithm::Dfs, Algorithm::Ucs] {
            let outcome = statepath_core::find_path_uninformed(algorithm, 0, 7, &graph, &config)
                .unwrap()
                .unwrap();
            if !outcome.found() {
                continue;
            }

            assert_eq!(outcome.path.first(), Some(&0), "{algorithm} on seed {seed}");
            assert_eq!(outcome.path.last(), Some(&7), "{algorithm} on seed {seed}");
            for step in outcome.path.windows(2) {
                assert!(
                    graph.edge_cost(&step[0], &step[1]).is_some(),
                    "{algorithm} on seed {seed} steps off the graph"
                );
            }
            assert_eq!(outcome.cost, Some(path_cost(&outcome.path, &graph).unwrap()));
        }
    }
}
