use crate::error::InstanceError;

/// Instance of the 0-1 knapsack problem.
/// Values and weights are index-aligned: item `i` has value `values[i]` and weight `weights[i]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KnapsackInstance {
    values: Vec<u64>,
    weights: Vec<u64>,
    capacity: u64,
}

impl KnapsackInstance {
    /// Creates a new instance, `item_count` is checked against the lengths of both sequences.
    pub fn try_new(
        values: Vec<u64>,
        weights: Vec<u64>,
        capacity: u64,
        item_count: usize,
    ) -> Result<Self, InstanceError> {
        check_dimensions(&values, &weights, item_count)?;
        Ok(Self {
            values,
            weights,
            capacity,
        })
    }

    pub fn values(&self) -> &[u64] {
        &self.values
    }

    pub fn weights(&self) -> &[u64] {
        &self.weights
    }

    pub fn capacity(&self) -> u64 {
        self.capacity
    }

    pub fn n_items(&self) -> usize {
        self.values.len()
    }

    /// Returns the `(value, weight)` pair of item `i`
    pub fn item(&self, i: usize) -> (u64, u64) {
        (self.values[i], self.weights[i])
    }

    pub fn has_zero_weight_item(&self) -> bool {
        self.weights.contains(&0)
    }

    /// Returns a copy of this instance with a different capacity
    pub fn with_capacity(&self, capacity: u64) -> Self {
        Self {
            capacity,
            ..self.clone()
        }
    }
}

pub(crate) fn check_dimensions(
    values: &[u64],
    weights: &[u64],
    item_count: usize,
) -> Result<(), InstanceError> {
    match values.len() == item_count && weights.len() == item_count {
        true => Ok(()),
        false => Err(InstanceError::InvalidDimension {
            item_count,
            n_values: values.len(),
            n_weights: weights.len(),
        }),
    }
}
