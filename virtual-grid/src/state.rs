/// Scroll position and visible extent along one axis.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AxisViewport {
    pub scroll_offset: f64,
    pub viewport_extent: f64,
}

impl AxisViewport {
    pub fn new(scroll_offset: f64, viewport_extent: f64) -> Self {
        Self {
            scroll_offset,
            viewport_extent,
        }
    }

    pub fn end(&self) -> f64 {
        self.scroll_offset + self.viewport_extent
    }
}

/// A snapshot of both axes' viewport plus the debounced scrolling flag.
///
/// With `feature = "serde"`, this type implements `Serialize`/`Deserialize`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ViewportState {
    pub rows: AxisViewport,
    pub columns: AxisViewport,
    pub is_scrolling: bool,
}
