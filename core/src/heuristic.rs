//! Heuristic estimates for A*.
//!
//! A* only returns optimal paths when the heuristic is admissible and
//! consistent for the graph it is paired with. Nothing here checks that.

use crate::state::Cost;

/// Estimate of the remaining cost from `state` to `goal`
pub trait Heuristic<S> {
    fn estimate(&self, state: &S, goal: &S) -> Cost;
}

impl<S, F> Heuristic<S> for F
where
    F: Fn(&S, &S) -> Cost,
{
    fn estimate(&self, state: &S, goal: &S) -> Cost {
        self(state, goal)
    }
}

/// States that sit on a plane, read as `(row, col)`
pub trait Coordinates {
    fn coordinates(&self) -> (f64, f64);
}

macro_rules! impl_coordinates {
    ($($t:ty),*) => {
        $(
            impl Coordinates for ($t, $t) {
                fn coordinates(&self) -> (f64, f64) {
                    (self.0 as f64, self.1 as f64)
                }
            }
        )*
    };
}

impl_coordinates!(i32, i64, u32, u64, usize, isize);

/// Always 0; turns A* into uniform-cost search
#[derive(Debug, Clone, Copy, Default)]
pub struct Zero;

impl<S> Heuristic<S> for Zero {
    fn estimate(&self, _state: &S, _goal: &S) -> Cost {
        0.0
    }
}

/// Straight-line distance
#[derive(Debug, Clone, Copy, Default)]
pub struct Euclidean;

impl<S: Coordinates> Heuristic<S> for Euclidean {
    fn estimate(&self, state: &S, goal: &S) -> Cost {
        let (row, col) = state.coordinates();
        let (goal_row, goal_col) = goal.coordinates();
        (goal_row - row).hypot(goal_col - col)
    }
}

/// Sum of absolute row and column differences
#[derive(Debug, Clone, Copy, Default)]
pub struct Manhattan;

impl<S: Coordinates> Heuristic<S> for Manhattan {
    fn estimate(&self, state: &S, goal: &S) -> Cost {
        let (row, col) = state.coordinates();
        let (goal_row, goal_col) = goal.coordinates();
        (goal_row - row).abs() + (goal_col - col).abs()
    }
}
