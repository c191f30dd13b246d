use alloc::vec::Vec;

use crate::{AxisItem, AxisViewport, VisibleWindow};

/// Comparison used to decide whether an item ends before the viewport's trailing edge.
///
/// Rows and columns historically differ here: rows use a strict comparison, columns a
/// non-strict one (a column ending exactly at the edge still pulls in its successor).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum EndBoundary {
    /// `offset + size < scroll_offset + viewport_extent`
    Exclusive,
    /// `offset + size <= scroll_offset + viewport_extent`
    Inclusive,
}

impl EndBoundary {
    fn ends_before(self, item_end: f64, edge: f64) -> bool {
        match self {
            Self::Exclusive => item_end < edge,
            Self::Inclusive => item_end <= edge,
        }
    }
}

/// The full layout of one axis plus its visible window.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisLayout<K> {
    /// Every item on the axis, in index order.
    pub items: Vec<AxisItem<K>>,
    pub window: VisibleWindow,
    pub total_extent: f64,
}

impl<K> AxisLayout<K> {
    pub fn empty() -> Self {
        Self {
            items: Vec::new(),
            window: VisibleWindow::default(),
            total_extent: 0.0,
        }
    }

    pub fn count(&self) -> usize {
        self.items.len()
    }

    /// The items inside the window, overscan included.
    pub fn visible(&self) -> &[AxisItem<K>] {
        if self.items.is_empty() {
            return &[];
        }
        &self.items[self.window.start_index..=self.window.end_index]
    }

    pub fn item(&self, index: usize) -> Option<&AxisItem<K>> {
        self.items.get(index)
    }
}

/// Lays out `count` items and selects the ones covering `viewport`.
///
/// `resolve(i)` returns the key and resolved size of item `i`; it is called once per index,
/// in order. The walk is linear and keeps every item so later measurement corrections can
/// look up any item's last offset.
pub fn compute_range<K>(
    count: usize,
    viewport: AxisViewport,
    overscan: usize,
    end_boundary: EndBoundary,
    mut resolve: impl FnMut(usize) -> (K, f64),
) -> AxisLayout<K> {
    if count == 0 {
        return AxisLayout::empty();
    }

    let range_start = viewport.scroll_offset;
    let range_end = viewport.end();

    let mut items = Vec::with_capacity(count);
    let mut total = 0.0;
    let mut start_index = 0usize;
    let mut end_index = 0usize;

    for index in 0..count {
        let (key, size) = resolve(index);
        let offset = total;
        total += size;

        if total < range_start {
            start_index += 1;
        }
        if end_boundary.ends_before(total, range_end) {
            end_index += 1;
        }

        items.push(AxisItem {
            key,
            index,
            offset,
            size,
        });
    }

    let end_index = end_index.saturating_add(overscan).min(count - 1);
    let start_index = start_index.saturating_sub(overscan).min(end_index);

    AxisLayout {
        items,
        window: VisibleWindow {
            start_index,
            end_index,
        },
        total_extent: total,
    }
}
