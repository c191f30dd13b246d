use alloc::sync::Arc;
use alloc::vec::Vec;

use crate::cache::{ColumnWidthCache, RowHeightCache};
use crate::key::KeyCacheKey;
use crate::options::Sizing;
use crate::range::{AxisLayout, EndBoundary, compute_range};
use crate::resolver::SizeResolver;
use crate::scroll::ScrollTracker;
use crate::{
    Axis, AxisItem, AxisViewport, ConfigError, GridOptions, ItemKey, ScrollAdjustment,
    ScrollCompensator, ScrollOffsets, Size, ViewportState, VisibleWindow,
};

/// A headless two-axis windowing engine for items whose sizes are measured after render.
///
/// The grid owns the measurement caches, the scroll state and the last computed layout.
/// Hosts drive it with:
/// - [`Self::on_scroll`] / [`Self::set_viewport`] when the scroll surface changes;
/// - [`Self::on_measured`] when a rendered row or cell reports its size;
/// - [`Self::take_tick`] at each paint tick, applying the returned scroll adjustments;
/// - [`Self::update_scrolling`] from a timer to end the `is_scrolling` state.
///
/// For a host-side wiring of these calls, see the `virtual-grid-adapter` crate.
#[derive(Clone, Debug)]
pub struct DynamicSizeGrid<RK = ItemKey, CK = ItemKey> {
    pub(crate) options: GridOptions<RK, CK>,
    pub(crate) row_sizing: Sizing,
    pub(crate) column_sizing: Sizing,
    pub(crate) row_heights: RowHeightCache<RK>,
    pub(crate) column_widths: ColumnWidthCache<RK, CK>,
    pub(crate) tracker: ScrollTracker,
    pub(crate) viewport: Size,
    pub(crate) compensator: ScrollCompensator,
    pub(crate) rows: AxisLayout<RK>,
    pub(crate) columns: AxisLayout<CK>,
    pub(crate) dirty: bool,
}

/// A borrowed view of the grid's current layout.
#[derive(Debug)]
pub struct GridFrame<'a, RK, CK> {
    pub rows: &'a AxisLayout<RK>,
    pub columns: &'a AxisLayout<CK>,
    pub is_scrolling: bool,
}

impl<'a, RK, CK> GridFrame<'a, RK, CK> {
    pub fn virtual_rows(&self) -> &'a [AxisItem<RK>] {
        self.rows.visible()
    }

    pub fn virtual_columns(&self) -> &'a [AxisItem<CK>] {
        self.columns.visible()
    }

    pub fn all_rows(&self) -> &'a [AxisItem<RK>] {
        &self.rows.items
    }

    pub fn all_columns(&self) -> &'a [AxisItem<CK>] {
        &self.columns.items
    }

    pub fn total_height(&self) -> f64 {
        self.rows.total_extent
    }

    pub fn total_width(&self) -> f64 {
        self.columns.total_extent
    }

    pub fn row_window(&self) -> VisibleWindow {
        self.rows.window
    }

    pub fn column_window(&self) -> VisibleWindow {
        self.columns.window
    }
}

impl<RK: KeyCacheKey, CK: KeyCacheKey> DynamicSizeGrid<RK, CK> {
    /// Validates `options` and builds the initial layout (zero offsets, zero viewport).
    pub fn new(options: GridOptions<RK, CK>) -> Result<Self, ConfigError> {
        let (row_sizing, column_sizing) = options.validate()?;
        vdebug!(
            rows = options.rows.count,
            columns = options.columns.count,
            overscan_y = options.rows.overscan,
            overscan_x = options.columns.overscan,
            "DynamicSizeGrid::new"
        );
        let mut grid = Self {
            tracker: ScrollTracker::new(options.scrolling_delay_ms),
            options,
            row_sizing,
            column_sizing,
            row_heights: RowHeightCache::new(),
            column_widths: ColumnWidthCache::new(),
            viewport: Size::default(),
            compensator: ScrollCompensator::new(),
            rows: AxisLayout::empty(),
            columns: AxisLayout::empty(),
            dirty: true,
        };
        grid.recompute();
        Ok(grid)
    }

    pub fn options(&self) -> &GridOptions<RK, CK> {
        &self.options
    }

    pub fn resolver(&self) -> SizeResolver<'_, RK, CK> {
        SizeResolver {
            rows: &self.options.rows,
            row_sizing: &self.row_sizing,
            row_heights: &self.row_heights,
            columns: &self.options.columns,
            column_sizing: &self.column_sizing,
            column_widths: &self.column_widths,
        }
    }

    /// Resolves an item's size from the current caches (not the last computed layout).
    pub fn resolve_size(&self, axis: Axis, index: usize) -> f64 {
        self.resolver().resolve(axis, index)
    }

    pub fn row_count(&self) -> usize {
        self.options.rows.count
    }

    pub fn column_count(&self) -> usize {
        self.options.columns.count
    }

    pub fn set_row_count(&mut self, count: usize) {
        if self.options.rows.count == count {
            return;
        }
        self.options.rows.count = count;
        self.dirty = true;
    }

    pub fn set_column_count(&mut self, count: usize) {
        if self.options.columns.count == count {
            return;
        }
        self.options.columns.count = count;
        self.dirty = true;
    }

    /// Replaces the row key mapping. Cached measurements follow their keys.
    pub fn set_row_key(&mut self, f: impl Fn(usize) -> RK + Send + Sync + 'static) {
        self.options.rows.get_key = Arc::new(f);
        self.dirty = true;
    }

    /// Replaces the column key mapping. Cached measurements follow their keys.
    pub fn set_column_key(&mut self, f: impl Fn(usize) -> CK + Send + Sync + 'static) {
        self.options.columns.get_key = Arc::new(f);
        self.dirty = true;
    }

    pub fn set_overscan(&mut self, overscan_y: usize, overscan_x: usize) {
        self.options.rows.overscan = overscan_y;
        self.options.columns.overscan = overscan_x;
        self.dirty = true;
    }

    pub fn set_scrolling_delay_ms(&mut self, delay_ms: u64) {
        self.options.scrolling_delay_ms = delay_ms;
        self.tracker.set_quiet_period_ms(delay_ms);
    }

    /// Records a scroll notification and recomputes the window right away.
    pub fn on_scroll(&mut self, offsets: ScrollOffsets, now_ms: u64) {
        vtrace!(left = offsets.left, top = offsets.top, now_ms, "on_scroll");
        self.tracker.on_scroll(offsets, now_ms);
        self.recompute();
    }

    /// Records offsets read outside a scroll notification (e.g. on mount).
    ///
    /// Unlike [`Self::on_scroll`], this does not mark the grid as scrolling.
    pub fn sync_scroll_offsets(&mut self, offsets: ScrollOffsets) {
        if self.tracker.offsets() == offsets {
            return;
        }
        self.tracker.sync_offsets(offsets);
        self.dirty = true;
    }

    pub fn scroll_offsets(&self) -> ScrollOffsets {
        self.tracker.offsets()
    }

    /// Sets the visible size of the scroll surface.
    pub fn set_viewport(&mut self, viewport: Size) {
        if self.viewport == viewport {
            return;
        }
        vtrace!(
            width = viewport.width,
            height = viewport.height,
            "set_viewport"
        );
        self.viewport = viewport;
        self.dirty = true;
    }

    pub fn viewport(&self) -> Size {
        self.viewport
    }

    pub fn is_scrolling(&self) -> bool {
        self.tracker.is_scrolling()
    }

    /// When the pending `is_scrolling` reset is due, if any.
    pub fn scrolling_deadline_ms(&self) -> Option<u64> {
        self.tracker.deadline_ms()
    }

    /// Ends the scrolling state once the quiet period has elapsed.
    ///
    /// Returns `true` when `is_scrolling` flipped to `false`.
    pub fn update_scrolling(&mut self, now_ms: u64) -> bool {
        self.tracker.update(now_ms)
    }

    pub fn viewport_state(&self) -> ViewportState {
        let offsets = self.tracker.offsets();
        ViewportState {
            rows: AxisViewport::new(offsets.top, self.viewport.height),
            columns: AxisViewport::new(offsets.left, self.viewport.width),
            is_scrolling: self.tracker.is_scrolling(),
        }
    }

    /// Whether inputs changed since the last layout computation.
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Recomputes the layout if anything changed, and returns it.
    pub fn compute_frame(&mut self) -> GridFrame<'_, RK, CK> {
        if self.dirty {
            self.recompute();
        }
        self.frame()
    }

    /// The last computed layout, which may lag behind pending measurements.
    pub fn frame(&self) -> GridFrame<'_, RK, CK> {
        GridFrame {
            rows: &self.rows,
            columns: &self.columns,
            is_scrolling: self.tracker.is_scrolling(),
        }
    }

    pub fn rows(&self) -> &AxisLayout<RK> {
        &self.rows
    }

    pub fn columns(&self) -> &AxisLayout<CK> {
        &self.columns
    }

    fn recompute(&mut self) {
        let state = self.viewport_state();
        let resolver = SizeResolver {
            rows: &self.options.rows,
            row_sizing: &self.row_sizing,
            row_heights: &self.row_heights,
            columns: &self.options.columns,
            column_sizing: &self.column_sizing,
            column_widths: &self.column_widths,
        };
        let rows = &self.options.rows;
        self.rows = compute_range(
            rows.count,
            state.rows,
            rows.overscan,
            EndBoundary::Exclusive,
            |i| {
                let key = (rows.get_key)(i);
                let size = resolver.row_height(i, &key);
                (key, size)
            },
        );
        let columns = &self.options.columns;
        self.columns = compute_range(
            columns.count,
            state.columns,
            columns.overscan,
            EndBoundary::Inclusive,
            |i| {
                let key = (columns.get_key)(i);
                let size = resolver.column_width(i, &key);
                (key, size)
            },
        );
        self.dirty = false;
        vtrace!(
            row_start = self.rows.window.start_index,
            row_end = self.rows.window.end_index,
            column_start = self.columns.window.start_index,
            column_end = self.columns.window.end_index,
            "recompute"
        );
    }

    pub fn row_cache_len(&self) -> usize {
        self.row_heights.len()
    }

    pub fn column_cache_len(&self) -> usize {
        self.column_widths.len()
    }

    pub fn cached_row_height(&self, key: &RK) -> Option<f64> {
        self.row_heights.get(key)
    }

    pub fn cached_column_width(&self, row: &RK, column: &CK) -> Option<f64> {
        self.column_widths.get(row, column)
    }

    /// Clears both measurement caches.
    ///
    /// Use this when the data set's identity changes and old measurements no longer apply.
    pub fn reset_measurements(&mut self) {
        vdebug!(
            rows = self.row_heights.len(),
            cells = self.column_widths.len(),
            "reset_measurements"
        );
        self.row_heights.clear();
        self.column_widths.clear();
        self.dirty = true;
    }

    pub fn pending_adjustments(&self) -> &[ScrollAdjustment] {
        self.compensator.pending()
    }

    /// Drains the scroll adjustments queued for this paint tick, in arrival order.
    ///
    /// Apply each one with the host's `scroll_by`; the resulting scroll notifications update
    /// the grid's offsets.
    pub fn take_tick(&mut self) -> Vec<ScrollAdjustment> {
        self.compensator.take_tick()
    }

    /// Cancels the pending `is_scrolling` reset and hands back the queued adjustments.
    ///
    /// Callers either flush the returned adjustments or drop them.
    pub fn teardown(&mut self) -> Vec<ScrollAdjustment> {
        vdebug!(
            pending = self.compensator.pending().len(),
            "DynamicSizeGrid::teardown"
        );
        self.tracker.cancel();
        self.compensator.take_tick()
    }
}
