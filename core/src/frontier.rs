//! Priority frontier with lazy deletion.
//!
//! The open set maps every live state to its best tentative cost. The heap may
//! hold several entries for one state; only the entry whose cost matches the
//! open set is live, the rest are stale and dropped when they surface.

use crate::error::{Result, SearchError};
use crate::state::{Cost, State};
use rustc_hash::FxHashMap;
use std::{cmp::Ordering, collections::BinaryHeap};

#[derive(Debug, Clone)]
struct FrontierEntry<S> {
    cost: Cost,
    state: S,
}

impl<S: State> PartialEq for FrontierEntry<S> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<S: State> Eq for FrontierEntry<S> {}

impl<S: State> PartialOrd for FrontierEntry<S> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<S: State> Ord for FrontierEntry<S> {
    fn cmp(&self, other: &Self) -> Ordering {
        // Reversed on both keys: BinaryHeap is a max-heap and we want the
        // cheapest entry, then the smallest state, on top
        other
            .cost
            .total_cmp(&self.cost)
            .then_with(|| other.state.cmp(&self.state))
    }
}

/// Min-priority frontier keyed by tentative cost, supporting cost decrease
#[derive(Debug, Clone)]
pub struct PriorityFrontier<S: State> {
    open: FxHashMap<S, Cost>,
    heap: BinaryHeap<FrontierEntry<S>>,
    high_water: usize,
}

impl<S: State> PriorityFrontier<S> {
    pub fn new(start: S, initial_cost: Cost) -> Self {
        let mut frontier = Self {
            open: FxHashMap::default(),
            heap: BinaryHeap::new(),
            high_water: 0,
        };
        frontier.insert(start, initial_cost);
        frontier
    }

    /// Record `state` at `cost`.
    ///
    /// Inserting a state that is already open leaves its older heap entry in
    /// place; the open set keeps the cost given here.
    pub fn insert(&mut self, state: S, cost: Cost) {
        self.open.insert(state.clone(), cost);
        self.push_entry(state, cost);
    }

    /// Pop the cheapest live state, discarding stale entries on the way
    pub fn extract_min(&mut self) -> Result<(S, Cost)> {
        while let Some(FrontierEntry { cost, state }) = self.heap.pop() {
            let is_live = self
                .open
                .get(&state)
                .is_some_and(|recorded| recorded.total_cmp(&cost).is_eq());

            if is_live {
                self.open.remove(&state);
                return Ok((state, cost));
            }
        }

        Err(SearchError::FrontierUnderflow)
    }

    /// Lower the recorded cost of an open state.
    ///
    /// Returns `false` without touching the frontier when the state is not
    /// open or `new_cost` is not strictly below its recorded cost.
    pub fn replace(&mut self, state: S, new_cost: Cost) -> bool {
        match self.open.get_mut(&state) {
            Some(recorded) if new_cost < *recorded => {
                *recorded = new_cost;
                self.push_entry(state, new_cost);
                true
            }
            _ => false,
        }
    }

    pub fn contains(&self, state: &S) -> bool {
        self.open.contains_key(state)
    }

    pub fn cost_of(&self, state: &S) -> Option<Cost> {
        self.open.get(state).copied()
    }

    /// Number of live states
    pub fn len(&self) -> usize {
        self.open.len()
    }

    /// Whether no live state remains (stale heap entries do not count)
    pub fn is_empty(&self) -> bool {
        self.open.is_empty()
    }

    /// Number of heap entries, stale ones included
    pub fn heap_len(&self) -> usize {
        self.heap.len()
    }

    /// Largest heap size seen so far
    pub fn high_water(&self) -> usize {
        self.high_water
    }

    fn push_entry(&mut self, state: S, cost: Cost) {
        self.heap.push(FrontierEntry { cost, state });
        self.high_water = self.high_water.max(self.heap.len());
    }
}
