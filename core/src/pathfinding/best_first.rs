use super::utils::{SearchOutcome, SearchTimer, check_budget, reconstruct_path, trivial_outcome};
use crate::error::{Result, SearchError};
use crate::frontier::PriorityFrontier;
use crate::graph::StateGraph;
use crate::heuristic::Heuristic;
use crate::search_config::SearchConfig;
use crate::state::{Cost, Predecessors, State};
use rustc_hash::FxHashMap;

/// Bookkeeping for UCS and A*.
///
/// The frontier is keyed by `f = g + h`. `g` of every open state is kept in
/// `path_costs` so explored and returned costs never have `h` subtracted back
/// out of a float.
pub(crate) struct BestFirstState<'h, S: State, H> {
    frontier: PriorityFrontier<S>,
    pub(crate) previous: Predecessors<S>,
    pub(crate) explored: FxHashMap<S, Cost>,
    path_costs: FxHashMap<S, Cost>,
    heuristic: &'h H,
    goal: S,
}

impl<'h, S: State, H: Heuristic<S>> BestFirstState<'h, S, H> {
    pub(crate) fn new(start: S, goal: S, heuristic: &'h H) -> Result<Self> {
        let start_estimate = checked_estimate(heuristic, &start, &goal)?;

        let mut previous = Predecessors::default();
        let mut path_costs = FxHashMap::default();
        previous.insert(start.clone(), None);
        path_costs.insert(start.clone(), 0.0);

        Ok(Self {
            frontier: PriorityFrontier::new(start, start_estimate),
            previous,
            explored: FxHashMap::default(),
            path_costs,
            heuristic,
            goal,
        })
    }

    fn visit_neighbor(&mut self, neighbor: &S, current: &S, path_cost: Cost) -> Result<()> {
        if self.explored.contains_key(neighbor) {
            return Ok(());
        }

        let estimate = checked_estimate(self.heuristic, neighbor, &self.goal)?;
        let priority = path_cost + estimate;

        if !self.frontier.contains(neighbor) {
            self.frontier.insert(neighbor.clone(), priority);
        } else if !self.frontier.replace(neighbor.clone(), priority) {
            return Ok(());
        }

        self.path_costs.insert(neighbor.clone(), path_cost);
        self.previous.insert(neighbor.clone(), Some(current.clone()));
        Ok(())
    }

    /// Run until the goal is extracted or the frontier is exhausted.
    ///
    /// Returns the goal's path cost when it was reached.
    pub(crate) fn find_goal(
        &mut self,
        graph: &StateGraph<S>,
        config: &SearchConfig,
    ) -> Result<Option<Cost>> {
        while !self.frontier.is_empty() {
            check_budget(config, self.explored.len())?;

            let (current, _) = self.frontier.extract_min()?;
            let current_cost = self
                .path_costs
                .remove(&current)
                .ok_or_else(|| SearchError::unrecorded_state(&current))?;

            if current == self.goal {
                return Ok(Some(current_cost));
            }

            self.explored.insert(current.clone(), current_cost);

            let neighbors = graph
                .neighbors(&current)
                .ok_or_else(|| SearchError::missing_state(&current))?;
            tracing::trace!(state = ?current, cost = current_cost, "expanding");

            for (neighbor, edge_cost) in neighbors {
                self.visit_neighbor(neighbor, &current, current_cost + edge_cost)?;
            }
        }

        Ok(None)
    }
}

fn checked_estimate<S: State, H: Heuristic<S>>(heuristic: &H, state: &S, goal: &S) -> Result<Cost> {
    let estimate = heuristic.estimate(state, goal);
    if !estimate.is_finite() || estimate < 0.0 {
        return Err(SearchError::invalid_estimate(state, estimate));
    }
    Ok(estimate)
}

pub(crate) fn best_first_search<S: State, H: Heuristic<S>>(
    start: S,
    goal: S,
    graph: &StateGraph<S>,
    heuristic: &H,
    config: &SearchConfig,
) -> Result<SearchOutcome<S>> {
    let timer = SearchTimer::start();

    if start == goal {
        return trivial_outcome(&start, graph, config, &timer);
    }

    let mut state = BestFirstState::new(start, goal.clone(), heuristic)?;
    let goal_cost = state.find_goal(graph, config)?;

    let path = reconstruct_path(&state.previous, goal_cost.map(|_| &goal))?;
    let cost = config.want_cost.then(|| goal_cost.unwrap_or(0.0));

    tracing::debug!(
        found = goal_cost.is_some(),
        cost = goal_cost.unwrap_or(0.0),
        expanded = state.explored.len(),
        discovered = state.previous.len(),
        frontier_high_water = state.frontier.high_water(),
        "best-first search finished"
    );

    Ok(timer.finish(path, cost, state.explored.len(), state.previous.len()))
}
