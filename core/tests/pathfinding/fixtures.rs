use rand::{Rng, SeedableRng, rngs::StdRng};
use statepath_core::{Cost, StateGraph};

pub type Cell = (i32, i32);

/// `A -> B -> C`, unit weights
pub fn line_graph() -> StateGraph<&'static str> {
    StateGraph::from_adjacency([
        ("A", vec![("B", 1.0)]),
        ("B", vec![("C", 1.0)]),
        ("C", vec![]),
    ])
    .unwrap()
}

/// Direct `A -> C` costing 5 next to the two-hop `A -> B -> C` costing 2
pub fn shortcut_graph() -> StateGraph<&'static str> {
    StateGraph::from_adjacency([
        ("A", vec![("C", 5.0), ("B", 1.0)]),
        ("B", vec![("C", 1.0)]),
        ("C", vec![]),
    ])
    .unwrap()
}

/// Two components: `A <-> B` and `X <-> Y`
pub fn split_graph() -> StateGraph<&'static str> {
    StateGraph::unweighted([
        ("A", vec!["B"]),
        ("B", vec!["A"]),
        ("X", vec!["Y"]),
        ("Y", vec!["X"]),
    ])
}

/// 4-connected grid from ASCII rows; `#` is a wall, a digit is the cost of
/// entering that cell, anything else costs 1
pub fn grid(rows: &[&str]) -> StateGraph<Cell> {
    let cells: Vec<Vec<char>> = rows.iter().map(|row| row.chars().collect()).collect();
    let entry_cost = |(r, c): Cell| -> Option<Cost> {
        let ch = *cells.get(usize::try_from(r).ok()?)?.get(usize::try_from(c).ok()?)?;
        match ch {
            '#' => None,
            d if d.is_ascii_digit() => Some(d.to_digit(10)? as Cost),
            _ => Some(1.0),
        }
    };

    let mut adjacency = Vec::new();
    for (r, row) in cells.iter().enumerate() {
        for c in 0..row.len() {
            let cell = (r as i32, c as i32);
            if entry_cost(cell).is_none() {
                continue;
            }
            let neighbors: Vec<(Cell, Cost)> = [(-1, 0), (1, 0), (0, -1), (0, 1)]
                .into_iter()
                .map(|(dr, dc)| (cell.0 + dr, cell.1 + dc))
                .filter_map(|next| entry_cost(next).map(|cost| (next, cost)))
                .collect();
            adjacency.push((cell, neighbors));
        }
    }

    StateGraph::from_adjacency(adjacency).unwrap()
}

/// Random sparse digraph over `0..size` with weights in `1..=9`
pub fn random_graph(seed: u64, size: u32, edge_probability: f64) -> StateGraph<u32> {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut adjacency: Vec<(u32, Vec<(u32, Cost)>)> = Vec::new();
    for from in 0..size {
        let mut edges = Vec::new();
        for to in (0..size).filter(|&to| to != from) {
            if rng.random_bool(edge_probability) {
                edges.push((to, rng.random_range(1..=9) as Cost));
            }
        }
        adjacency.push((from, edges));
    }
    StateGraph::from_adjacency(adjacency).unwrap()
}

/// Cheapest cost and fewest edges over every simple path, by exhaustive enumeration
pub fn brute_force(graph: &StateGraph<u32>, start: u32, goal: u32) -> Option<(Cost, usize)> {
    fn walk(
        graph: &StateGraph<u32>,
        current: u32,
        goal: u32,
        cost: Cost,
        visited: &mut Vec<u32>,
        best: &mut Option<(Cost, usize)>,
    ) {
        if current == goal {
            let edges = visited.len() - 1;
            *best = Some(match *best {
                Some((best_cost, best_edges)) => (best_cost.min(cost), best_edges.min(edges)),
                None => (cost, edges),
            });
            return;
        }
        for &(next, weight) in graph.neighbors(&current).unwrap_or(&[]) {
            if !visited.contains(&next) {
                visited.push(next);
                walk(graph, next, goal, cost + weight, visited, best);
                visited.pop();
            }
        }
    }

    let mut best = None;
    walk(graph, start, goal, 0.0, &mut vec![start], &mut best);
    best
}
