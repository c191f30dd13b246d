use core::fmt;

/// One of the two virtualized axes of a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Axis {
    /// Vertical axis; items are rows, sizes are heights.
    Row,
    /// Horizontal axis; items are columns, sizes are widths.
    Column,
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Row => f.write_str("row"),
            Self::Column => f.write_str("column"),
        }
    }
}

pub type ItemKey = u64;

/// A laid out row or column.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisItem<K = ItemKey> {
    pub key: K,
    pub index: usize,
    /// Sum of the sizes of every preceding item on the same axis.
    pub offset: f64,
    /// Resolved size (fixed, measured or estimated).
    pub size: f64,
}

impl<K> AxisItem<K> {
    pub fn end(&self) -> f64 {
        self.offset + self.size
    }
}

/// Inclusive index interval of the items to render, overscan included.
///
/// An axis with no items reports `[0, 0]`; use the layout's visible slice to tell it apart
/// from a single visible item.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VisibleWindow {
    pub start_index: usize,
    pub end_index: usize, // inclusive
}

impl VisibleWindow {
    pub fn contains(&self, index: usize) -> bool {
        self.start_index <= index && index <= self.end_index
    }
}

/// Scroll position of the scroll surface.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollOffsets {
    pub left: f64,
    pub top: f64,
}

impl ScrollOffsets {
    pub fn new(left: f64, top: f64) -> Self {
        Self { left, top }
    }

    pub fn on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.top,
            Axis::Column => self.left,
        }
    }
}

/// A box size as reported by the host (viewport rect or a probe's border box).
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    pub fn on(&self, axis: Axis) -> f64 {
        match axis {
            Axis::Row => self.height,
            Axis::Column => self.width,
        }
    }
}
