use std::cmp::Reverse;

use log::debug;
use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};

use crate::entities::KnapsackInstance;
use crate::entities::instance::check_dimensions;
use crate::error::InstanceError;
use crate::solvers::Solver;
use crate::util::assertions;

/// How the greedy solver treats items with zero weight, whose value density is undefined
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ZeroWeightPolicy {
    /// Zero-weight items get an infinite density and are taken first at no capacity cost.
    /// A knapsack without capacity still holds nothing.
    #[default]
    Prioritize,
    /// Fail with [`InstanceError::ZeroWeightItem`]
    Reject,
}

/// Approximates the optimal value by taking items in order of descending value density.
/// The first item that does not fit is credited fractionally for the remaining capacity,
/// after which the search stops.
///
/// The reported value is the optimum of the fractional relaxation and may not be achievable
/// by any 0-1 selection.
#[derive(Debug, Clone, Copy, Default)]
pub struct GreedySolver {
    pub zero_weight_policy: ZeroWeightPolicy,
}

impl GreedySolver {
    pub fn new(zero_weight_policy: ZeroWeightPolicy) -> Self {
        Self { zero_weight_policy }
    }
}

impl Solver for GreedySolver {
    type Value = f64;

    fn name(&self) -> &'static str {
        "greedy"
    }

    fn solve(&self, instance: &KnapsackInstance) -> Result<f64, InstanceError> {
        greedy_value(
            instance.values(),
            instance.weights(),
            instance.capacity(),
            self.zero_weight_policy,
        )
    }
}

/// Greedy value-density approximation, zero-weight items are prioritized.
pub fn knapsack_greedy(
    values: &[u64],
    weights: &[u64],
    capacity: u64,
    item_count: usize,
) -> Result<f64, InstanceError> {
    check_dimensions(values, weights, item_count)?;
    greedy_value(values, weights, capacity, ZeroWeightPolicy::Prioritize)
}

/// Ranks all items of the instance by value density (descending).
/// Ties are broken by descending index.
pub fn rank_by_density(instance: &KnapsackInstance) -> Vec<(OrderedFloat<f64>, usize)> {
    rank(instance.values(), instance.weights())
}

fn rank(values: &[u64], weights: &[u64]) -> Vec<(OrderedFloat<f64>, usize)> {
    debug_assert_eq!(values.len(), weights.len());
    let mut ranked = values
        .iter()
        .zip(weights)
        .enumerate()
        .map(|(i, (&v, &w))| (density(v, w), i))
        .collect::<Vec<_>>();
    ranked.sort_unstable_by_key(|&entry| Reverse(entry));
    ranked
}

fn greedy_value(
    values: &[u64],
    weights: &[u64],
    capacity: u64,
    policy: ZeroWeightPolicy,
) -> Result<f64, InstanceError> {
    if policy == ZeroWeightPolicy::Reject {
        if let Some(index) = weights.iter().position(|&w| w == 0) {
            return Err(InstanceError::ZeroWeightItem { index });
        }
    }

    //nothing fits, not even the fraction of an item
    if capacity == 0 {
        return Ok(0.0);
    }

    let ranked = rank(values, weights);
    debug_assert!(assertions::ranking_is_sorted(&ranked));

    let mut remaining = capacity;
    let mut total = 0.0;
    let mut n_taken = 0;
    for (ratio, i) in ranked {
        let (value, weight) = (values[i], weights[i]);
        if weight <= remaining {
            total += value as f64;
            remaining -= weight;
            n_taken += 1;
        } else {
            //a zero-weight item always fits, so the ratio here is finite
            total += ratio.0 * remaining as f64;
            remaining = 0;
            break;
        }
    }
    debug!(
        "[GREEDY] took {n_taken}/{} items entirely, unused capacity: {remaining}, value: {total:.3}",
        values.len()
    );
    Ok(total)
}

fn density(value: u64, weight: u64) -> OrderedFloat<f64> {
    match weight {
        0 => OrderedFloat(f64::INFINITY),
        _ => OrderedFloat(value as f64 / weight as f64),
    }
}
