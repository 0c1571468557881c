use crate::entities::KnapsackInstance;
use crate::io::ext_repr::ExtInstance;

/// Exports a [`KnapsackInstance`] into its external representation.
pub fn export(instance: &KnapsackInstance) -> ExtInstance {
    ExtInstance {
        values: instance.values().iter().map(|&v| to_ext(v)).collect(),
        weights: instance.weights().iter().map(|&w| to_ext(w)).collect(),
        capacity: to_ext(instance.capacity()),
        item_count: Some(instance.n_items()),
    }
}

fn to_ext(n: u64) -> i64 {
    //values beyond i64::MAX are not representable externally
    i64::try_from(n).unwrap_or(i64::MAX)
}
