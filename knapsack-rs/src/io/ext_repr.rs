use serde::{Deserialize, Serialize};

/// External representation of a [`KnapsackInstance`](crate::entities::KnapsackInstance).
/// Numbers are signed so that malformed input can be rejected with a meaningful error.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct ExtInstance {
    /// Value of every item
    pub values: Vec<i64>,
    /// Weight of every item, index-aligned with `values`
    pub weights: Vec<i64>,
    /// Capacity of the knapsack
    pub capacity: i64,
    /// Number of items.
    /// Defaults to the number of values if not specified
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub item_count: Option<usize>,
}
