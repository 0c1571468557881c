use log::{debug, trace};
use ndarray::{Array2, ArrayView1};
use serde::{Deserialize, Serialize};

use crate::entities::KnapsackInstance;
use crate::entities::instance::check_dimensions;
use crate::error::InstanceError;
use crate::solvers::Solver;
use crate::util::assertions;

/// Memory layout used by the [`ExactSolver`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DpStorage {
    /// Full `(n_items + 1) x (capacity + 1)` table
    #[default]
    Table,
    /// Single row of length `capacity + 1`, updated in descending capacity order
    RollingRow,
}

/// Computes the optimal total value of a 0-1 knapsack instance by bottom-up dynamic programming.
#[derive(Debug, Clone, Copy, Default)]
pub struct ExactSolver {
    pub storage: DpStorage,
}

impl ExactSolver {
    pub fn new(storage: DpStorage) -> Self {
        Self { storage }
    }
}

impl Solver for ExactSolver {
    type Value = u64;

    fn name(&self) -> &'static str {
        "dynamic programming"
    }

    fn solve(&self, instance: &KnapsackInstance) -> Result<u64, InstanceError> {
        let (values, weights, capacity) =
            (instance.values(), instance.weights(), instance.capacity());
        match self.storage {
            DpStorage::Table => Ok(DpTable::build(values, weights, capacity)?.optimum()),
            DpStorage::RollingRow => rolling_row_optimum(values, weights, capacity),
        }
    }
}

/// Optimal total value over all subsets of items whose summed weight does not exceed `capacity`.
/// Each item is used at most once.
pub fn knapsack_dp(
    values: &[u64],
    weights: &[u64],
    capacity: u64,
    item_count: usize,
) -> Result<u64, InstanceError> {
    check_dimensions(values, weights, item_count)?;
    Ok(DpTable::build(values, weights, capacity)?.optimum())
}

/// Table `K` where `K[i][w]` is the optimal value achievable with the first `i` items and capacity `w`.
#[derive(Debug, Clone)]
pub struct DpTable {
    k: Array2<u64>,
}

impl DpTable {
    pub fn build(values: &[u64], weights: &[u64], capacity: u64) -> Result<Self, InstanceError> {
        check_dimensions(values, weights, values.len())?;
        let width = table_width(capacity)?;
        check_value_sum(values)?;

        let n_items = values.len();
        let cells = zeroed_cells((n_items + 1).checked_mul(width), capacity)?;
        let mut k = Array2::from_shape_vec((n_items + 1, width), cells)
            .map_err(|_| InstanceError::CapacityTooLarge { capacity })?;

        //row 0 and column 0 stay zero, every row only depends on the previous one
        for i in 1..=n_items {
            let (value, weight) = (values[i - 1], weights[i - 1]);
            for w in 1..width {
                let excluded = k[[i - 1, w]];
                k[[i, w]] = match fits(weight, w) {
                    Some(rest) => u64::max(excluded, value + k[[i - 1, rest]]),
                    None => excluded,
                };
            }
        }
        let table = DpTable { k };

        debug_assert!(assertions::dp_table_is_consistent(&table));
        debug!(
            "[DP] filled {}x{} table, optimum: {}",
            n_items + 1,
            width,
            table.optimum()
        );
        Ok(table)
    }

    /// `K[i][w]`
    pub fn value(&self, i: usize, w: usize) -> u64 {
        self.k[[i, w]]
    }

    pub fn row(&self, i: usize) -> ArrayView1<'_, u64> {
        self.k.row(i)
    }

    pub fn n_items(&self) -> usize {
        self.k.nrows() - 1
    }

    pub fn capacity(&self) -> usize {
        self.k.ncols() - 1
    }

    /// `K[n_items][capacity]`
    pub fn optimum(&self) -> u64 {
        self.k[[self.n_items(), self.capacity()]]
    }
}

fn rolling_row_optimum(
    values: &[u64],
    weights: &[u64],
    capacity: u64,
) -> Result<u64, InstanceError> {
    let width = table_width(capacity)?;
    check_value_sum(values)?;

    let mut row = zeroed_cells(Some(width), capacity)?;
    for (&value, &weight) in values.iter().zip(weights) {
        //descending order, so row[rest] still holds the value without this item
        for w in (1..width).rev() {
            if let Some(rest) = fits(weight, w) {
                row[w] = u64::max(row[w], value + row[rest]);
            }
        }
    }
    trace!("[DP] rolling row: {row:?}");
    Ok(row[width - 1])
}

/// Remaining capacity after placing an item of `weight` in a knapsack of capacity `w`, if it fits
fn fits(weight: u64, w: usize) -> Option<usize> {
    usize::try_from(weight)
        .ok()
        .and_then(|weight| w.checked_sub(weight))
}

fn table_width(capacity: u64) -> Result<usize, InstanceError> {
    usize::try_from(capacity)
        .ok()
        .and_then(|c| c.checked_add(1))
        .ok_or(InstanceError::CapacityTooLarge { capacity })
}

/// Allocates `n_cells` zeroed cells, failing instead of aborting when the allocation is impossible
fn zeroed_cells(n_cells: Option<usize>, capacity: u64) -> Result<Vec<u64>, InstanceError> {
    let too_large = InstanceError::CapacityTooLarge { capacity };
    let n_cells = n_cells.ok_or(too_large)?;
    let mut cells = Vec::new();
    cells.try_reserve_exact(n_cells).map_err(|_| too_large)?;
    cells.resize(n_cells, 0);
    Ok(cells)
}

fn check_value_sum(values: &[u64]) -> Result<(), InstanceError> {
    values
        .iter()
        .try_fold(0u64, |acc, &v| acc.checked_add(v))
        .map(|_| ())
        .ok_or(InstanceError::ValueOverflow)
}
