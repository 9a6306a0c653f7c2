//! Read-only weighted state graph.
//!
//! Neighbor lists keep the order in which they were supplied; BFS and DFS
//! expand neighbors in exactly that order.

use crate::error::{Result, SearchError};
use crate::state::{Cost, State};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Mapping from each state to its outgoing `(neighbor, cost)` edges
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(
    try_from = "FxHashMap<S, Vec<(S, Cost)>>",
    into = "FxHashMap<S, Vec<(S, Cost)>>",
    bound(
        serialize = "S: State + Serialize",
        deserialize = "S: State + Deserialize<'de>"
    )
)]
pub struct StateGraph<S: State> {
    adjacency: FxHashMap<S, Vec<(S, Cost)>>,
}

impl<S: State> StateGraph<S> {
    /// Build a graph from weighted adjacency lists.
    ///
    /// Costs must be finite and non-negative. A neighbor listed twice for the
    /// same state keeps its first position and the cheaper of the two costs.
    /// Adjacency entries for the same state are merged.
    pub fn from_adjacency<I, N>(adjacency: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, N)>,
        N: IntoIterator<Item = (S, Cost)>,
    {
        let mut graph = Self {
            adjacency: FxHashMap::default(),
        };

        for (state, neighbors) in adjacency {
            let mut edges = graph.adjacency.remove(&state).unwrap_or_default();
            for (neighbor, cost) in neighbors {
                if !cost.is_finite() || cost < 0.0 {
                    return Err(SearchError::invalid_edge_cost(&state, &neighbor, cost));
                }
                push_edge(&mut edges, neighbor, cost);
            }
            graph.adjacency.insert(state, edges);
        }

        Ok(graph)
    }

    /// Build a graph from plain neighbor lists, every edge costing 1
    pub fn unweighted<I, N>(adjacency: I) -> Self
    where
        I: IntoIterator<Item = (S, N)>,
        N: IntoIterator<Item = S>,
    {
        let mut graph = Self {
            adjacency: FxHashMap::default(),
        };

        for (state, neighbors) in adjacency {
            let edges = graph.adjacency.entry(state).or_default();
            for neighbor in neighbors {
                push_edge(edges, neighbor, 1.0);
            }
        }

        graph
    }

    /// Outgoing edges of `state`, or `None` when the graph has no entry for it
    pub fn neighbors(&self, state: &S) -> Option<&[(S, Cost)]> {
        self.adjacency.get(state).map(Vec::as_slice)
    }

    pub fn edge_cost(&self, from: &S, to: &S) -> Option<Cost> {
        self.adjacency
            .get(from)?
            .iter()
            .find(|(neighbor, _)| neighbor == to)
            .map(|&(_, cost)| cost)
    }

    pub fn contains_state(&self, state: &S) -> bool {
        self.adjacency.contains_key(state)
    }

    /// Number of states with an adjacency entry
    pub fn state_count(&self) -> usize {
        self.adjacency.len()
    }

    pub fn edge_count(&self) -> usize {
        self.adjacency.values().map(Vec::len).sum()
    }

    pub fn states(&self) -> impl Iterator<Item = &S> {
        self.adjacency.keys()
    }
}

fn push_edge<S: State>(edges: &mut Vec<(S, Cost)>, neighbor: S, cost: Cost) {
    match edges.iter_mut().find(|(existing, _)| *existing == neighbor) {
        Some((_, existing_cost)) => *existing_cost = existing_cost.min(cost),
        None => edges.push((neighbor, cost)),
    }
}

impl<S: State> TryFrom<FxHashMap<S, Vec<(S, Cost)>>> for StateGraph<S> {
    type Error = SearchError;

    fn try_from(adjacency: FxHashMap<S, Vec<(S, Cost)>>) -> Result<Self> {
        Self::from_adjacency(adjacency)
    }
}

impl<S: State> From<StateGraph<S>> for FxHashMap<S, Vec<(S, Cost)>> {
    fn from(graph: StateGraph<S>) -> Self {
        graph.adjacency
    }
}
