use thiserror::Error;

use crate::Axis;

/// Invalid engine configuration, reported by constructors.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum ConfigError {
    #[error("the {axis} axis needs a fixed size or an estimate_size function")]
    MissingSizing { axis: Axis },

    #[error("neither axis has a fixed size or an estimate_size function")]
    NoSizingStrategy,

    #[error("item height must be a finite positive number, got {0}")]
    InvalidItemHeight(f64),
}

/// A measurement that could not be attributed to an item or carried an unusable size.
///
/// The cache is left untouched when one of these is returned.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum MeasureError {
    #[error("{axis} index {index} is out of range (count={count})")]
    IndexOutOfRange {
        axis: Axis,
        index: usize,
        count: usize,
    },

    #[error("measured {axis} size {size} for index {index} is not a finite non-negative number")]
    InvalidSize { axis: Axis, index: usize, size: f64 },
}
