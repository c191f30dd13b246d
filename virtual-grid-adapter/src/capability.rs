use virtual_grid::{ScrollOffsets, Size};

/// The mounted scrollable element.
pub trait ScrollElement {
    /// Starts delivering scroll notifications (forwarded to `GridController::on_scroll`).
    fn subscribe(&mut self);
    fn unsubscribe(&mut self);
    fn current_offsets(&self) -> ScrollOffsets;
    /// The element's visible box. This is a layout read; the controller throttles it.
    fn bounding_box(&self) -> Size;
    fn scroll_by(&mut self, delta_x: f64, delta_y: f64);
}

/// Resolves the scrollable element, which may not be mounted yet.
pub trait ScrollSurface {
    type Element: ScrollElement;

    fn scroll_element(&mut self) -> Option<&mut Self::Element>;
}

/// A rendered row or cell that reports its size.
///
/// Probes are tagged with `data-row-index` (and `data-column-index` for cells) so a
/// measurement can be traced back to the item it belongs to.
pub trait ProbeElement {
    /// Whether the element is still part of the render tree.
    fn is_connected(&self) -> bool;
    fn tag(&self, name: &str) -> Option<&str>;
    fn border_box(&self) -> Size;
}

/// A size change reported for an observed probe.
#[derive(Clone, Debug)]
pub struct ResizeEntry<P> {
    pub element: P,
    pub block_size: f64,
    pub inline_size: f64,
}

/// The host's element-resize notification primitive.
pub trait ResizeNotifier {
    type Probe: ProbeElement;

    fn observe(&mut self, probe: &Self::Probe);
    fn unobserve(&mut self, probe: &Self::Probe);
}

/// Defers work to the next paint tick.
///
/// The controller only requests a tick when none is outstanding, and expects the host to call
/// `GridController::on_tick` when it fires.
pub trait TickScheduler {
    fn request_tick(&mut self);
}
