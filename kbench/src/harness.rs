use std::hint::black_box;
use std::time::Instant;

use anyhow::{Context, Result};
use itertools::Itertools;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use thousands::Separable;

use knapsack_rs::solvers::Solver;

use crate::generator::InstanceGenerator;

/// A single timed solver invocation
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct Sample<V> {
    pub n_items: usize,
    pub capacity: u64,
    /// Wall-clock duration of the solver call, in milliseconds
    pub elapsed_ms: f64,
    /// Value reported by the solver
    pub value: V,
}

/// All samples collected for one solver
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
pub struct BenchRun<V> {
    pub solver: String,
    pub harder_for_greedy: bool,
    pub samples: Vec<Sample<V>>,
}

#[derive(Serialize, Deserialize, Clone, Copy, Debug, PartialEq)]
pub struct TimingSummary {
    pub min_ms: f64,
    pub mean_ms: f64,
    pub max_ms: f64,
    pub total_ms: f64,
}

impl<V> BenchRun<V> {
    /// Sequence of durations in the order the test cases were run
    pub fn elapsed_ms(&self) -> Vec<f64> {
        self.samples.iter().map(|s| s.elapsed_ms).collect()
    }

    /// `None` if no samples were collected
    pub fn summary(&self) -> Option<TimingSummary> {
        let times = self.elapsed_ms();
        let (min_ms, max_ms) = times.iter().copied().minmax().into_option()?;
        let total_ms = times.iter().sum::<f64>();
        Some(TimingSummary {
            min_ms,
            mean_ms: total_ms / times.len() as f64,
            max_ms,
            total_ms,
        })
    }
}

/// Times `solver` on `n_test_cases` freshly generated instances.
pub fn run<S: Solver>(
    solver: &S,
    generator: &mut InstanceGenerator,
    n_test_cases: usize,
    harder_for_greedy: bool,
) -> Result<BenchRun<S::Value>> {
    info!(
        "[BENCH] timing {} solver on {} test cases (harder for greedy: {})",
        solver.name(),
        n_test_cases,
        harder_for_greedy
    );

    let mut samples = Vec::with_capacity(n_test_cases);
    let mut dp_cells = 0u64;
    for i in 0..n_test_cases {
        let instance = generator
            .generate(harder_for_greedy)
            .with_context(|| format!("could not generate test case {i}"))?;

        let start = Instant::now();
        let value = solver.solve(black_box(&instance));
        let elapsed_ms = start.elapsed().as_secs_f64() * 1000.0;

        let value = value.with_context(|| {
            format!("{} solver failed on test case {i}", solver.name())
        })?;
        debug!(
            "[BENCH] test case {i}: {} items, capacity {}, value {value:?} in {elapsed_ms:.3}ms",
            instance.n_items(),
            instance.capacity()
        );

        let n_cells = (instance.n_items() as u64 + 1)
            .saturating_mul(instance.capacity().saturating_add(1));
        dp_cells = dp_cells.saturating_add(n_cells);
        samples.push(Sample {
            n_items: instance.n_items(),
            capacity: instance.capacity(),
            elapsed_ms,
            value,
        });
    }

    let run = BenchRun {
        solver: solver.name().to_string(),
        harder_for_greedy,
        samples,
    };

    if let Some(summary) = run.summary() {
        info!(
            "[BENCH] {} finished in {:.3}ms (min: {:.3}ms, mean: {:.3}ms, max: {:.3}ms), {} table cells spanned",
            run.solver,
            summary.total_ms,
            summary.min_ms,
            summary.mean_ms,
            summary.max_ms,
            dp_cells.separate_with_commas()
        );
    }
    Ok(run)
}
