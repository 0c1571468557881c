use itertools::Itertools;
use log::error;
use ordered_float::OrderedFloat;

use crate::solvers::DpTable;
use crate::util::FPA;
//Various checks to verify correctness of the state of the system
//Used in debug_assertion!() blocks

/// Checks the base cases of the table and that `K[i][w]` never decreases in `i` or `w`.
pub fn dp_table_is_consistent(table: &DpTable) -> bool {
    let (n_items, capacity) = (table.n_items(), table.capacity());

    if table.row(0).iter().any(|&v| v != 0) {
        error!("[DP] row for zero items is not zero");
        return false;
    }
    if (0..=n_items).any(|i| table.value(i, 0) != 0) {
        error!("[DP] column for zero capacity is not zero");
        return false;
    }
    for i in 1..=n_items {
        let row = table.row(i);
        if let Some((w, _)) = row.iter().tuple_windows().find_position(|(a, b)| a > b) {
            error!("[DP] K[{i}] decreases between w={w} and w={}", w + 1);
            return false;
        }
        if let Some(w) = (0..=capacity).find(|&w| table.value(i - 1, w) > table.value(i, w)) {
            error!("[DP] K[{i}][{w}] is smaller than K[{}][{w}]", i - 1);
            return false;
        }
    }
    true
}

/// Checks the ranking is descending in density, with ties in descending index.
pub fn ranking_is_sorted(ranked: &[(OrderedFloat<f64>, usize)]) -> bool {
    ranked.iter().tuple_windows().all(|(a, b)| a > b)
}

/// The greedy value solves the fractional relaxation, so it can never fall below the 0-1 optimum.
pub fn greedy_bounds_optimum(greedy: f64, optimum: u64) -> bool {
    FPA(greedy) >= FPA::from(optimum)
}
