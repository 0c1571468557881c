use serde::{Deserialize, Serialize};

use knapsack_rs::solvers::{DpStorage, ZeroWeightPolicy};

use crate::chart::ChartOptions;
use crate::generator::GeneratorConfig;

/// Configuration of a benchmark run
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct BenchConfig {
    /// Seed for the PRNG. If undefined, instances are generated in non-deterministic mode using entropy
    pub prng_seed: Option<u64>,
    /// Number of random instances each solver is timed on
    pub n_test_cases: usize,
    /// Bounds of the randomly generated instances
    pub generator: GeneratorConfig,
    /// Memory layout of the exact solver
    #[serde(default)]
    pub dp_storage: DpStorage,
    /// Treatment of zero-weight items by the greedy solver
    #[serde(default)]
    pub zero_weight_policy: ZeroWeightPolicy,
    /// Time the exact solver on instances with compressed value densities
    pub exact_harder_for_greedy: bool,
    /// Time the greedy solver on instances with compressed value densities
    pub greedy_harder_for_greedy: bool,
    /// Optional chart drawing options
    #[serde(default)]
    pub chart_options: ChartOptions,
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self {
            prng_seed: Some(0),
            n_test_cases: 50,
            generator: GeneratorConfig::default(),
            dp_storage: DpStorage::default(),
            zero_weight_policy: ZeroWeightPolicy::default(),
            exact_harder_for_greedy: false,
            greedy_harder_for_greedy: true,
            chart_options: ChartOptions::default(),
        }
    }
}
