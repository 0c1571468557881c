mod dp;
mod greedy;

use std::fmt::Debug;

use serde::Serialize;

use crate::entities::KnapsackInstance;
use crate::error::InstanceError;

#[doc(inline)]
pub use dp::{DpStorage, DpTable, ExactSolver, knapsack_dp};

#[doc(inline)]
pub use greedy::{GreedySolver, ZeroWeightPolicy, knapsack_greedy, rank_by_density};

/// A stateless solver for the 0-1 knapsack problem.
/// Every call to [`Solver::solve`] is a pure function of the instance.
pub trait Solver {
    /// The (approximate) total value reported by the solver
    type Value: Copy + Debug + PartialOrd + Serialize;

    /// Short identifier used in logs and reports
    fn name(&self) -> &'static str;

    fn solve(&self, instance: &KnapsackInstance) -> Result<Self::Value, InstanceError>;
}
