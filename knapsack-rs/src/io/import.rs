use crate::entities::KnapsackInstance;
use crate::error::{Field, InstanceError};
use crate::io::ext_repr::ExtInstance;

/// Converts the external representation into a [`KnapsackInstance`].
/// Rejects negative numbers and mismatched dimensions.
pub fn import(ext_instance: &ExtInstance) -> Result<KnapsackInstance, InstanceError> {
    let values = import_sequence(&ext_instance.values, Field::Value)?;
    let weights = import_sequence(&ext_instance.weights, Field::Weight)?;
    let capacity = u64::try_from(ext_instance.capacity).map_err(|_| InstanceError::NegativeValue {
        field: Field::Capacity,
        index: None,
        value: ext_instance.capacity,
    })?;
    let item_count = ext_instance.item_count.unwrap_or(values.len());

    KnapsackInstance::try_new(values, weights, capacity, item_count)
}

fn import_sequence(seq: &[i64], field: Field) -> Result<Vec<u64>, InstanceError> {
    seq.iter()
        .enumerate()
        .map(|(i, &n)| {
            u64::try_from(n).map_err(|_| InstanceError::NegativeValue {
                field,
                index: Some(i),
                value: n,
            })
        })
        .collect()
}
