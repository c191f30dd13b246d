use crate::key::KeyCacheKey;
use crate::options::Sizing;
use crate::{Axis, DynamicSizeGrid, MeasureError, ScrollAdjustment};

/// Which item a measurement belongs to.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureTarget {
    /// A row element; its block size is the row height.
    Row(usize),
    /// A cell element; its inline size contributes to the column width.
    Cell { row: usize, column: usize },
}

impl MeasureTarget {
    pub fn axis(&self) -> Axis {
        match self {
            Self::Row(_) => Axis::Row,
            Self::Cell { .. } => Axis::Column,
        }
    }
}

/// Where a measurement came from.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MeasureSource {
    /// First measurement when the element is attached.
    Attach,
    /// A resize notification for an element that is already attached.
    LiveResize,
}

/// What [`DynamicSizeGrid::on_measured`] did with a measurement.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum MeasureOutcome {
    /// Attach measurement for an item that already has a cached size; nothing written.
    AlreadyMeasured,
    /// Same size as the cached one; nothing written.
    Unchanged,
    /// Cache updated; no scroll compensation needed.
    Stored { delta: f64 },
    /// Cache updated and a scroll adjustment was queued.
    ///
    /// When `schedule_tick` is `true` the host must request a paint tick.
    Compensated {
        adjustment: ScrollAdjustment,
        schedule_tick: bool,
    },
}

impl<RK: KeyCacheKey, CK: KeyCacheKey> DynamicSizeGrid<RK, CK> {
    /// Applies a measured size to the cache and queues scroll compensation when the item lies
    /// before the current scroll offset.
    ///
    /// The size delta is taken against the item's last known size: its size in the last
    /// computed layout, updated by every measurement applied since. The layout is marked
    /// dirty; call [`Self::compute_frame`] to reflow offsets and totals.
    pub fn on_measured(
        &mut self,
        target: MeasureTarget,
        size: f64,
        source: MeasureSource,
    ) -> Result<MeasureOutcome, MeasureError> {
        let axis = target.axis();
        let (index, count) = match target {
            MeasureTarget::Row(row) => (row, self.options.rows.count),
            MeasureTarget::Cell { row, column } => {
                if row >= self.options.rows.count {
                    return Err(self.reject_index(Axis::Row, row, self.options.rows.count));
                }
                (column, self.options.columns.count)
            }
        };
        if index >= count {
            return Err(self.reject_index(axis, index, count));
        }
        if !size.is_finite() || size < 0.0 {
            vwarn!(%axis, index, size, "on_measured: invalid size");
            return Err(MeasureError::InvalidSize { axis, index, size });
        }

        let cached = match target {
            MeasureTarget::Row(row) => {
                let key = (self.options.rows.get_key)(row);
                self.row_heights.get(&key)
            }
            MeasureTarget::Cell { row, column } => {
                let row_key = (self.options.rows.get_key)(row);
                let column_key = (self.options.columns.get_key)(column);
                self.column_widths.get(&row_key, &column_key)
            }
        };

        if source == MeasureSource::Attach && cached.is_some() {
            return Ok(MeasureOutcome::AlreadyMeasured);
        }
        if cached.is_some_and(|c| c.to_bits() == size.to_bits()) {
            return Ok(MeasureOutcome::Unchanged);
        }

        vtrace!(%axis, index, size, ?source, "on_measured");
        let resolved = match target {
            MeasureTarget::Row(row) => {
                let key = (self.options.rows.get_key)(row);
                self.row_heights.insert(key, size);
                match &self.row_sizing {
                    Sizing::Fixed(f) => f(row),
                    Sizing::Estimate(_) => size,
                }
            }
            MeasureTarget::Cell { row, column } => {
                let row_key = (self.options.rows.get_key)(row);
                let column_key = (self.options.columns.get_key)(column);
                self.column_widths.insert(row_key, column_key, size);
                self.resolve_size(Axis::Column, column)
            }
        };
        self.dirty = true;

        // Items the last layout never saw (count grew since) have no recorded offset yet.
        let Some((offset, previous)) = self.record_resolved(axis, index, resolved) else {
            return Ok(MeasureOutcome::Stored { delta: 0.0 });
        };
        let delta = resolved - previous;
        if delta == 0.0 || self.tracker.offsets().on(axis) <= offset {
            return Ok(MeasureOutcome::Stored { delta });
        }

        let schedule_tick = self.compensator.compensate(axis, delta);
        Ok(MeasureOutcome::Compensated {
            adjustment: ScrollAdjustment { axis, delta },
            schedule_tick,
        })
    }

    /// Writes `resolved` into the last layout and returns the item's `(offset, previous size)`.
    ///
    /// Later measurements in the same burst then compare against this size, so their deltas
    /// add up to the item's net change. Offsets and totals wait for the next reflow.
    fn record_resolved(&mut self, axis: Axis, index: usize, resolved: f64) -> Option<(f64, f64)> {
        let item_size = match axis {
            Axis::Row => self.rows.items.get_mut(index).map(|it| (it.offset, &mut it.size)),
            Axis::Column => self.columns.items.get_mut(index).map(|it| (it.offset, &mut it.size)),
        };
        let (offset, size) = item_size?;
        let previous = core::mem::replace(size, resolved);
        Some((offset, previous))
    }

    fn reject_index(&self, axis: Axis, index: usize, count: usize) -> MeasureError {
        vwarn!(%axis, index, count, "on_measured: index out of range");
        MeasureError::IndexOutOfRange { axis, index, count }
    }
}
