use alloc::vec::Vec;

use crate::options::{DEFAULT_ROW_OVERSCAN, DEFAULT_SCROLLING_DELAY_MS};
use crate::scroll::ScrollTracker;
use crate::{ConfigError, ScrollOffsets};

/// Configuration for [`FixedSizeList`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedSizeListOptions {
    pub items_count: usize,
    pub item_height: f64,
    pub list_height: f64,
    pub overscan: usize,
    pub scrolling_delay_ms: u64,
}

impl FixedSizeListOptions {
    pub fn new(items_count: usize, item_height: f64, list_height: f64) -> Self {
        Self {
            items_count,
            item_height,
            list_height,
            overscan: DEFAULT_ROW_OVERSCAN,
            scrolling_delay_ms: DEFAULT_SCROLLING_DELAY_MS,
        }
    }

    pub fn with_overscan(mut self, overscan: usize) -> Self {
        self.overscan = overscan;
        self
    }

    pub fn with_scrolling_delay_ms(mut self, delay_ms: u64) -> Self {
        self.scrolling_delay_ms = delay_ms;
        self
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedItem {
    pub index: usize,
    pub offset_top: f64,
}

/// The rows to render for one scroll position.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FixedWindow {
    pub items: Vec<FixedItem>,
    pub start_index: usize,
    pub end_index: usize, // inclusive
    pub total_height: f64,
}

/// Single-axis windowing for rows that all share one height.
///
/// Every position is plain arithmetic, so nothing is measured or cached.
#[derive(Clone, Debug)]
pub struct FixedSizeList {
    options: FixedSizeListOptions,
    tracker: ScrollTracker,
}

impl FixedSizeList {
    pub fn new(options: FixedSizeListOptions) -> Result<Self, ConfigError> {
        if !options.item_height.is_finite() || options.item_height <= 0.0 {
            return Err(ConfigError::InvalidItemHeight(options.item_height));
        }
        Ok(Self {
            tracker: ScrollTracker::new(options.scrolling_delay_ms),
            options,
        })
    }

    pub fn options(&self) -> &FixedSizeListOptions {
        &self.options
    }

    pub fn set_items_count(&mut self, items_count: usize) {
        self.options.items_count = items_count;
    }

    pub fn set_list_height(&mut self, list_height: f64) {
        self.options.list_height = list_height;
    }

    pub fn scroll_top(&self) -> f64 {
        self.tracker.offsets().top
    }

    pub fn is_scrolling(&self) -> bool {
        self.tracker.is_scrolling()
    }

    /// Records the scroll position read on mount, without entering the scrolling state.
    pub fn sync_scroll_top(&mut self, scroll_top: f64) {
        self.tracker.sync_offsets(ScrollOffsets::new(0.0, scroll_top));
    }

    pub fn on_scroll(&mut self, scroll_top: f64, now_ms: u64) {
        self.tracker.on_scroll(ScrollOffsets::new(0.0, scroll_top), now_ms);
    }

    pub fn update_scrolling(&mut self, now_ms: u64) -> bool {
        self.tracker.update(now_ms)
    }

    pub fn cancel(&mut self) {
        self.tracker.cancel();
    }

    pub fn total_height(&self) -> f64 {
        self.options.items_count as f64 * self.options.item_height
    }

    pub fn window(&self) -> FixedWindow {
        self.window_for(self.scroll_top())
    }

    /// Computes the window for an arbitrary scroll position.
    ///
    /// The end index is the last row intersecting `[scroll_top, scroll_top + list_height)`.
    pub fn window_for(&self, scroll_top: f64) -> FixedWindow {
        let FixedSizeListOptions {
            items_count,
            item_height,
            list_height,
            overscan,
            ..
        } = self.options;
        let total_height = self.total_height();
        if items_count == 0 {
            return FixedWindow {
                items: Vec::new(),
                start_index: 0,
                end_index: 0,
                total_height,
            };
        }

        let range_start = scroll_top.max(0.0);
        let range_end = (scroll_top + list_height).max(range_start);

        let first = floor_index(range_start / item_height);
        let last = ceil_index(range_end / item_height).saturating_sub(1).max(first);

        let end_index = last.saturating_add(overscan).min(items_count - 1);
        let start_index = first.saturating_sub(overscan).min(end_index);

        let items = (start_index..=end_index)
            .map(|index| FixedItem {
                index,
                offset_top: index as f64 * item_height,
            })
            .collect();

        FixedWindow {
            items,
            start_index,
            end_index,
            total_height,
        }
    }
}

// `as` truncates toward zero and saturates, which is `floor` for the non-negative inputs here.
fn floor_index(v: f64) -> usize {
    v as usize
}

fn ceil_index(v: f64) -> usize {
    let t = v as usize;
    if (t as f64) < v { t.saturating_add(1) } else { t }
}
