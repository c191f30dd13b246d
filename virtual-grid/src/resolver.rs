use crate::cache::{ColumnWidthCache, RowHeightCache};
use crate::key::KeyCacheKey;
use crate::options::Sizing;
use crate::{Axis, AxisOptions};

/// Resolves item sizes from the configured sizing strategy and the measurement caches.
///
/// Resolution order, per axis:
/// 1. a fixed size function, if configured;
/// 2. the cached measurement for the item's key;
/// 3. the estimate.
///
/// Column widths come from the widest cell measured in that column, over every row.
pub struct SizeResolver<'a, RK, CK> {
    pub(crate) rows: &'a AxisOptions<RK>,
    pub(crate) row_sizing: &'a Sizing,
    pub(crate) row_heights: &'a RowHeightCache<RK>,
    pub(crate) columns: &'a AxisOptions<CK>,
    pub(crate) column_sizing: &'a Sizing,
    pub(crate) column_widths: &'a ColumnWidthCache<RK, CK>,
}

impl<RK: KeyCacheKey, CK: KeyCacheKey> SizeResolver<'_, RK, CK> {
    pub fn resolve(&self, axis: Axis, index: usize) -> f64 {
        match axis {
            Axis::Row => self.row_height(index, &(self.rows.get_key)(index)),
            Axis::Column => self.column_width(index, &(self.columns.get_key)(index)),
        }
    }

    /// Same as `resolve(Axis::Row, index)` when the caller already holds the key.
    pub(crate) fn row_height(&self, index: usize, key: &RK) -> f64 {
        match self.row_sizing {
            Sizing::Fixed(size) => size(index),
            Sizing::Estimate(estimate) => self
                .row_heights
                .get(key)
                .unwrap_or_else(|| estimate(index)),
        }
    }

    /// Same as `resolve(Axis::Column, index)` when the caller already holds the key.
    pub(crate) fn column_width(&self, index: usize, key: &CK) -> f64 {
        match self.column_sizing {
            Sizing::Fixed(size) => size(index),
            Sizing::Estimate(estimate) => self
                .column_widths
                .widest(key)
                .unwrap_or_else(|| estimate(index)),
        }
    }
}
