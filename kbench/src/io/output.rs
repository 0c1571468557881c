use serde::{Deserialize, Serialize};

use crate::config::BenchConfig;
use crate::harness::{BenchRun, TimingSummary};

/// Everything a benchmark produces, written to `bench_results.json`
#[derive(Serialize, Deserialize, Clone, Debug)]
pub struct BenchOutput {
    pub config: BenchConfig,
    pub exact: BenchRun<u64>,
    pub exact_summary: Option<TimingSummary>,
    pub greedy: BenchRun<f64>,
    pub greedy_summary: Option<TimingSummary>,
}

impl BenchOutput {
    pub fn new(config: BenchConfig, exact: BenchRun<u64>, greedy: BenchRun<f64>) -> Self {
        Self {
            config,
            exact_summary: exact.summary(),
            exact,
            greedy_summary: greedy.summary(),
            greedy,
        }
    }
}
