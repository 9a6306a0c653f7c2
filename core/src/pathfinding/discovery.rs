use super::utils::{
    SearchOutcome, SearchTimer, check_budget, path_cost, reconstruct_path, trivial_outcome,
};
use crate::error::{Result, SearchError};
use crate::graph::StateGraph;
use crate::search_config::SearchConfig;
use crate::state::{Predecessors, State};
use std::collections::VecDeque;

/// Which end of the frontier the next state is taken from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Discipline {
    Fifo,
    Lifo,
}

/// Bookkeeping for BFS and DFS.
///
/// A state enters the predecessor map when it is first generated and is never
/// overwritten, so the map doubles as the seen-set.
pub(crate) struct DiscoveryState<S: State> {
    frontier: VecDeque<S>,
    pub(crate) previous: Predecessors<S>,
    discipline: Discipline,
    expanded: usize,
}

impl<S: State> DiscoveryState<S> {
    pub(crate) fn new(start: S, discipline: Discipline) -> Self {
        let mut frontier = VecDeque::new();
        let mut previous = Predecessors::default();

        previous.insert(start.clone(), None);
        frontier.push_back(start);

        Self {
            frontier,
            previous,
            discipline,
            expanded: 0,
        }
    }

    fn next_state(&mut self) -> Option<S> {
        match self.discipline {
            Discipline::Fifo => self.frontier.pop_front(),
            Discipline::Lifo => self.frontier.pop_back(),
        }
    }

    /// Record a newly generated state; returns `false` if it was seen before
    fn visit_neighbor(&mut self, neighbor: &S, current: &S) -> bool {
        if self.previous.contains_key(neighbor) {
            return false;
        }
        self.previous.insert(neighbor.clone(), Some(current.clone()));
        self.frontier.push_back(neighbor.clone());
        true
    }

    /// Run until the goal is generated or the frontier is exhausted.
    ///
    /// Returns whether the goal was found.
    pub(crate) fn find_goal(
        &mut self,
        goal: &S,
        graph: &StateGraph<S>,
        config: &SearchConfig,
    ) -> Result<bool> {
        while let Some(current) = self.next_state() {
            check_budget(config, self.expanded)?;
            self.expanded += 1;

            let neighbors = graph
                .neighbors(&current)
                .ok_or_else(|| SearchError::missing_state(&current))?;
            tracing::trace!(state = ?current, neighbors = neighbors.len(), "expanding");

            for (neighbor, _) in neighbors {
                if self.visit_neighbor(neighbor, &current) && neighbor == goal {
                    return Ok(true);
                }
            }
        }

        Ok(false)
    }
}

pub(crate) fn discovery_search<S: State>(
    start: S,
    goal: S,
    graph: &StateGraph<S>,
    config: &SearchConfig,
    discipline: Discipline,
) -> Result<SearchOutcome<S>> {
    let timer = SearchTimer::start();

    if start == goal {
        return trivial_outcome(&start, graph, config, &timer);
    }

    let mut state = DiscoveryState::new(start, discipline);
    let found = state.find_goal(&goal, graph, config)?;

    let path = reconstruct_path(&state.previous, found.then_some(&goal))?;
    let cost = if config.want_cost {
        Some(path_cost(&path, graph)?)
    } else {
        None
    };

    tracing::debug!(
        ?discipline,
        found,
        expanded = state.expanded,
        discovered = state.previous.len(),
        "discovery search finished"
    );

    Ok(timer.finish(path, cost, state.expanded, state.previous.len()))
}
