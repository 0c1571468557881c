use log::trace;
use rand::Rng;
use rand::rngs::SmallRng;
use serde::{Deserialize, Serialize};

use knapsack_rs::entities::KnapsackInstance;
use knapsack_rs::error::InstanceError;

/// Bounds of the randomly generated instances, all inclusive
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub max_items: usize,
    pub max_value: u64,
    pub max_weight: u64,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            max_items: 200,
            max_value: 100,
            max_weight: 1000,
        }
    }
}

/// Range of the factor applied to both value and weight of an item in harder instances
const HARDER_ADJUSTMENT: std::ops::Range<f64> = 0.8..1.2;

/// Generates random knapsack instances.
/// The number of items, every value and weight, and the capacity are drawn uniformly,
/// with the capacity bounded by the maximum weight.
pub struct InstanceGenerator {
    pub config: GeneratorConfig,
    /// SmallRng is a fast, non-cryptographic PRNG <https://rust-random.github.io/book/guide-rngs.html>
    pub rng: SmallRng,
}

impl InstanceGenerator {
    pub fn new(config: GeneratorConfig, rng: SmallRng) -> Self {
        assert!(config.max_items > 0, "at least one item is required");
        assert!(config.max_value > 0 && config.max_weight > 0);
        Self { config, rng }
    }

    /// Generates a new instance.
    /// If `harder_for_greedy` is set, every item is scaled by a random factor in [0.8, 1.2),
    /// which makes the value densities of the items more alike.
    pub fn generate(&mut self, harder_for_greedy: bool) -> Result<KnapsackInstance, InstanceError> {
        let GeneratorConfig {
            max_items,
            max_value,
            max_weight,
        } = self.config;
        let rng = &mut self.rng;

        let n_items = rng.random_range(1..=max_items);
        let mut values = (0..n_items)
            .map(|_| rng.random_range(1..=max_value))
            .collect::<Vec<_>>();
        let mut weights = (0..n_items)
            .map(|_| rng.random_range(1..=max_weight))
            .collect::<Vec<_>>();

        if harder_for_greedy {
            for (value, weight) in values.iter_mut().zip(weights.iter_mut()) {
                let adjustment = rng.random_range(HARDER_ADJUSTMENT);
                *value = (*value as f64 * adjustment) as u64;
                //weights stay strictly positive
                *weight = u64::max(1, (*weight as f64 * adjustment) as u64);
            }
        }

        let capacity = rng.random_range(1..=max_weight);
        trace!("[GEN] generated instance with {n_items} items and capacity {capacity}");

        KnapsackInstance::try_new(values, weights, capacity, n_items)
    }
}
