/// Configuration shared by every search strategy
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchConfig {
    /// Report the total path cost alongside the path
    pub want_cost: bool,
    /// Stop with an error once this many states have been expanded
    pub expansion_budget: Option<usize>,
}

impl SearchConfig {
    pub fn new(want_cost: bool, expansion_budget: Option<usize>) -> Self {
        Self {
            want_cost,
            expansion_budget,
        }
    }

    pub fn with_cost(mut self) -> Self {
        self.want_cost = true;
        self
    }

    pub fn with_budget(mut self, expansion_budget: usize) -> Self {
        self.expansion_budget = Some(expansion_budget);
        self
    }

    pub(crate) fn budget_exhausted(&self, expanded: usize) -> bool {
        self.expansion_budget
            .is_some_and(|budget| expanded >= budget)
    }
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            want_cost: false,
            expansion_budget: None,
        }
    }
}
