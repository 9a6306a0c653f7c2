use crate::error::{Result, SearchError};
use crate::graph::StateGraph;
use crate::search_config::SearchConfig;
use crate::state::{Cost, Predecessors, State};
use serde::Serialize;
use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct SearchStats {
    /// Frontier extractions that were expanded
    pub states_expanded: usize,
    /// States recorded in the predecessor map
    pub states_discovered: usize,
    #[serde(rename = "elapsed_ms", serialize_with = "serialize_millis")]
    pub elapsed: Duration,
}

fn serialize_millis<Ser: serde::Serializer>(
    elapsed: &Duration,
    serializer: Ser,
) -> std::result::Result<Ser::Ok, Ser::Error> {
    serializer.serialize_f64(elapsed.as_secs_f64() * 1000.0)
}

/// Result of one search invocation.
///
/// An empty `path` means the goal is unreachable. `cost` is only filled in
/// when the search was asked for it, and is `0.0` for an empty path.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchOutcome<S> {
    pub path: Vec<S>,
    pub cost: Option<Cost>,
    pub stats: SearchStats,
}

impl<S> SearchOutcome<S> {
    pub fn found(&self) -> bool {
        !self.path.is_empty()
    }

    /// Number of edges along the path
    pub fn steps(&self) -> usize {
        self.path.len().saturating_sub(1)
    }
}

/// Wall-clock timing for one search run
pub(crate) struct SearchTimer {
    started: Instant,
}

impl SearchTimer {
    pub(crate) fn start() -> Self {
        Self {
            started: Instant::now(),
        }
    }

    pub(crate) fn finish<S>(
        &self,
        path: Vec<S>,
        cost: Option<Cost>,
        states_expanded: usize,
        states_discovered: usize,
    ) -> SearchOutcome<S> {
        SearchOutcome {
            path,
            cost,
            stats: SearchStats {
                states_expanded,
                states_discovered,
                elapsed: self.started.elapsed(),
            },
        }
    }
}

/// Outcome for `start == goal`, which every strategy answers without searching
pub(crate) fn trivial_outcome<S: State>(
    start: &S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
    timer: &SearchTimer,
) -> Result<SearchOutcome<S>> {
    let path = vec![start.clone()];
    let cost = if config.want_cost {
        Some(path_cost(&path, graph)?)
    } else {
        None
    };
    Ok(timer.finish(path, cost, 0, 1))
}

pub(crate) fn check_budget(config: &SearchConfig, expanded: usize) -> Result<()> {
    if config.budget_exhausted(expanded) {
        return Err(SearchError::BudgetExhausted { expanded });
    }
    Ok(())
}

/// Walk the predecessor chain back from `terminal` and return it start-first.
///
/// `None` as the terminal yields the empty path.
pub fn reconstruct_path<S: State>(
    previous: &Predecessors<S>,
    terminal: Option<&S>,
) -> Result<Vec<S>> {
    let mut path = Vec::new();
    let mut current = terminal;

    while let Some(state) = current {
        if path.len() > previous.len() {
            return Err(SearchError::PredecessorCycle {
                state: format!("{:?}", state),
            });
        }

        let predecessor = previous
            .get(state)
            .ok_or_else(|| SearchError::unrecorded_state(state))?;

        path.push(state.clone());
        current = predecessor.as_ref();
    }

    path.reverse();
    Ok(path)
}

/// Sum the edge costs along `path`
pub fn path_cost<S: State>(path: &[S], graph: &StateGraph<S>) -> Result<Cost> {
    path.windows(2).try_fold(0.0, |total, step| {
        graph
            .edge_cost(&step[0], &step[1])
            .map(|cost| total + cost)
            .ok_or_else(|| SearchError::missing_edge(&step[0], &step[1]))
    })
}
