use virtual_grid::{
    ConfigError, DynamicSizeGrid, GridFrame, GridOptions, ItemKey, KeyCacheKey, MeasureOutcome,
    MeasureSource, MeasureTarget,
};

use crate::probe::{cell_target, probe_target, row_target};
use crate::{
    AttributionError, FrameThrottle, ProbeElement, ResizeEntry, ResizeNotifier, ScrollElement,
    ScrollSurface, TickScheduler,
};

/// What to do with scroll adjustments still queued when the controller unmounts.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PendingAdjustments {
    /// Apply them immediately, if the scroll element is still there.
    Flush,
    Discard,
}

/// A framework-neutral controller that wires a [`DynamicSizeGrid`] to host capabilities.
///
/// This type does not hold any UI objects of its own. Hosts forward events to it:
/// - `mount` once the scroll surface exists, `unmount` when it goes away;
/// - `on_scroll` for every scroll notification, `on_surface_resize` when the surface resized;
/// - `measure_row` / `measure_cell` when a probe is attached, `on_resize` for resize entries;
/// - `on_tick` when a requested paint tick fires, `poll` from a timer.
#[derive(Debug)]
pub struct GridController<S, N, T, RK = ItemKey, CK = ItemKey> {
    grid: DynamicSizeGrid<RK, CK>,
    surface: S,
    notifier: N,
    scheduler: T,
    extent_read: FrameThrottle,
    tick_requested: bool,
    mounted: bool,
}

impl<S, N, T, RK, CK> GridController<S, N, T, RK, CK>
where
    S: ScrollSurface,
    N: ResizeNotifier,
    T: TickScheduler,
    RK: KeyCacheKey,
    CK: KeyCacheKey,
{
    pub fn new(
        options: GridOptions<RK, CK>,
        surface: S,
        notifier: N,
        scheduler: T,
    ) -> Result<Self, ConfigError> {
        Ok(Self {
            grid: DynamicSizeGrid::new(options)?,
            surface,
            notifier,
            scheduler,
            extent_read: FrameThrottle::new(),
            tick_requested: false,
            mounted: false,
        })
    }

    pub fn grid(&self) -> &DynamicSizeGrid<RK, CK> {
        &self.grid
    }

    pub fn grid_mut(&mut self) -> &mut DynamicSizeGrid<RK, CK> {
        &mut self.grid
    }

    pub fn surface(&self) -> &S {
        &self.surface
    }

    pub fn surface_mut(&mut self) -> &mut S {
        &mut self.surface
    }

    pub fn notifier(&self) -> &N {
        &self.notifier
    }

    pub fn scheduler(&self) -> &T {
        &self.scheduler
    }

    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    pub fn is_tick_requested(&self) -> bool {
        self.tick_requested
    }

    /// Subscribes to the scroll element and reads its initial offsets and size.
    ///
    /// Returns `false` while the element is not mounted yet; call again later.
    pub fn mount(&mut self) -> bool {
        if self.mounted {
            return true;
        }
        let Some(el) = self.surface.scroll_element() else {
            vtrace!("mount: no scroll element yet");
            return false;
        };
        el.subscribe();
        let offsets = el.current_offsets();
        let viewport = el.bounding_box();
        self.grid.sync_scroll_offsets(offsets);
        self.grid.set_viewport(viewport);
        self.mounted = true;
        vdebug!(
            width = viewport.width,
            height = viewport.height,
            "GridController::mount"
        );
        true
    }

    /// Unsubscribes, stops the scrolling timer and settles queued adjustments.
    ///
    /// Returns how many adjustments were handed to `scroll_by`.
    pub fn unmount(&mut self, pending: PendingAdjustments) -> usize {
        let adjustments = self.grid.teardown();
        self.extent_read.take();
        self.tick_requested = false;
        let was_mounted = core::mem::replace(&mut self.mounted, false);

        let Some(el) = self.surface.scroll_element() else {
            return 0;
        };
        if was_mounted {
            el.unsubscribe();
        }
        if pending == PendingAdjustments::Discard {
            vdebug!(dropped = adjustments.len(), "GridController::unmount");
            return 0;
        }
        for adj in &adjustments {
            let (dx, dy) = adj.scroll_by();
            el.scroll_by(dx, dy);
        }
        adjustments.len()
    }

    /// Handles a scroll notification.
    ///
    /// Offsets are applied immediately; the viewport size is re-read at the next tick.
    pub fn on_scroll(&mut self, now_ms: u64) {
        let Some(el) = self.surface.scroll_element() else {
            return;
        };
        let offsets = el.current_offsets();
        self.grid.on_scroll(offsets, now_ms);
        if self.extent_read.request() {
            self.schedule_tick();
        }
    }

    /// Handles a size change of the scroll surface itself.
    pub fn on_surface_resize(&mut self) {
        if self.extent_read.request() {
            self.schedule_tick();
        }
    }

    /// Measures a row probe that was just attached, then observes it for live resizes.
    ///
    /// Returns `Ok(None)` for a detached probe.
    pub fn measure_row(
        &mut self,
        probe: &N::Probe,
    ) -> Result<Option<MeasureOutcome>, AttributionError> {
        if !probe.is_connected() {
            return Ok(None);
        }
        let size = probe.border_box().height;
        self.attach(probe, row_target(probe), size)
    }

    /// Measures a cell probe that was just attached, then observes it for live resizes.
    ///
    /// Returns `Ok(None)` for a detached probe.
    pub fn measure_cell(
        &mut self,
        probe: &N::Probe,
    ) -> Result<Option<MeasureOutcome>, AttributionError> {
        if !probe.is_connected() {
            return Ok(None);
        }
        let size = probe.border_box().width;
        self.attach(probe, cell_target(probe), size)
    }

    fn attach(
        &mut self,
        probe: &N::Probe,
        target: Result<MeasureTarget, AttributionError>,
        size: f64,
    ) -> Result<Option<MeasureOutcome>, AttributionError> {
        let outcome = target
            .and_then(|target| Ok(self.grid.on_measured(target, size, MeasureSource::Attach)?))
            .inspect_err(|_err| {
                vwarn!(error = %_err, "dropping probe measurement");
            })?;
        self.notifier.observe(probe);
        self.apply_outcome(outcome);
        Ok(Some(outcome))
    }

    /// Applies a batch of resize notifications.
    ///
    /// Detached probes are unobserved; malformed ones are dropped with a warning. Returns how
    /// many entries changed a cached size.
    pub fn on_resize(&mut self, entries: impl IntoIterator<Item = ResizeEntry<N::Probe>>) -> usize {
        let mut stored = 0usize;
        for entry in entries {
            if !entry.element.is_connected() {
                self.notifier.unobserve(&entry.element);
                continue;
            }
            let target = match probe_target(&entry.element) {
                Ok(target) => target,
                Err(_err) => {
                    vwarn!(error = %_err, "dropping resize entry");
                    continue;
                }
            };
            let size = match target {
                MeasureTarget::Row(_) => entry.block_size,
                MeasureTarget::Cell { .. } => entry.inline_size,
            };
            match self.grid.on_measured(target, size, MeasureSource::LiveResize) {
                Ok(outcome) => {
                    if matches!(
                        outcome,
                        MeasureOutcome::Stored { .. } | MeasureOutcome::Compensated { .. }
                    ) {
                        stored += 1;
                    }
                    self.apply_outcome(outcome);
                }
                Err(_err) => {
                    vwarn!(error = %_err, "dropping resize entry");
                }
            }
        }
        stored
    }

    /// Runs the work deferred to this paint tick.
    ///
    /// Re-reads the viewport size if requested, then applies every queued scroll adjustment in
    /// order.
    pub fn on_tick(&mut self, now_ms: u64) {
        self.tick_requested = false;
        let read_extent = self.extent_read.take();
        let adjustments = self.grid.take_tick();

        if let Some(el) = self.surface.scroll_element() {
            if read_extent {
                self.grid.set_viewport(el.bounding_box());
            }
            for adj in &adjustments {
                let (dx, dy) = adj.scroll_by();
                el.scroll_by(dx, dy);
            }
        }
        self.grid.update_scrolling(now_ms);
    }

    /// Ends the scrolling state once its quiet period is over.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        self.grid.update_scrolling(now_ms)
    }

    /// Recomputes the layout if needed and returns it.
    pub fn compute_frame(&mut self) -> GridFrame<'_, RK, CK> {
        self.grid.compute_frame()
    }

    fn apply_outcome(&mut self, outcome: MeasureOutcome) {
        if let MeasureOutcome::Compensated {
            schedule_tick: true,
            ..
        } = outcome
        {
            self.schedule_tick();
        }
    }

    fn schedule_tick(&mut self) {
        if self.tick_requested {
            return;
        }
        self.tick_requested = true;
        self.scheduler.request_tick();
    }
}
