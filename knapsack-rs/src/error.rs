use std::error::Error;
use std::fmt::{Display, Formatter};

/// Precondition violations detected at the boundary of a solver or during import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstanceError {
    /// `item_count`, the number of values and the number of weights do not agree
    InvalidDimension {
        item_count: usize,
        n_values: usize,
        n_weights: usize,
    },
    /// A value, weight or the capacity is negative.
    /// `index` is `None` for the capacity.
    NegativeValue {
        field: Field,
        index: Option<usize>,
        value: i64,
    },
    /// An item without weight was rejected by the greedy solver
    ZeroWeightItem { index: usize },
    /// The dynamic programming table cannot be addressed on this platform
    CapacityTooLarge { capacity: u64 },
    /// The sum of all values does not fit in a `u64`
    ValueOverflow,
}

/// The part of an instance an [`InstanceError::NegativeValue`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Field {
    Value,
    Weight,
    Capacity,
}

impl Display for Field {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Field::Value => write!(f, "value"),
            Field::Weight => write!(f, "weight"),
            Field::Capacity => write!(f, "capacity"),
        }
    }
}

impl Display for InstanceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            InstanceError::InvalidDimension {
                item_count,
                n_values,
                n_weights,
            } => write!(
                f,
                "invalid dimensions: item count {item_count}, {n_values} values, {n_weights} weights"
            ),
            InstanceError::NegativeValue {
                field,
                index: Some(index),
                value,
            } => write!(f, "negative {field} {value} for item {index}"),
            InstanceError::NegativeValue {
                field,
                index: None,
                value,
            } => write!(f, "negative {field} {value}"),
            InstanceError::ZeroWeightItem { index } => {
                write!(f, "item {index} has zero weight, its value density is undefined")
            }
            InstanceError::CapacityTooLarge { capacity } => {
                write!(f, "capacity {capacity} exceeds the addressable table size")
            }
            InstanceError::ValueOverflow => write!(f, "sum of item values overflows u64"),
        }
    }
}

impl Error for InstanceError {}
