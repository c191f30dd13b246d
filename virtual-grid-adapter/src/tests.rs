use crate::*;

use alloc::string::{String, ToString};
use alloc::vec::Vec;
use std::vec;

use virtual_grid::{
    Axis, GridOptions, MeasureError, MeasureOutcome, MeasureTarget, ScrollAdjustment,
    ScrollOffsets, Size,
};

#[derive(Debug, Default)]
struct FakeElement {
    offsets: ScrollOffsets,
    bounds: Size,
    subscribed: bool,
    scrolled_by: Vec<(f64, f64)>,
}

impl ScrollElement for FakeElement {
    fn subscribe(&mut self) {
        self.subscribed = true;
    }

    fn unsubscribe(&mut self) {
        self.subscribed = false;
    }

    fn current_offsets(&self) -> ScrollOffsets {
        self.offsets
    }

    fn bounding_box(&self) -> Size {
        self.bounds
    }

    fn scroll_by(&mut self, delta_x: f64, delta_y: f64) {
        self.offsets.left += delta_x;
        self.offsets.top += delta_y;
        self.scrolled_by.push((delta_x, delta_y));
    }
}

#[derive(Debug, Default)]
struct FakeSurface {
    element: Option<FakeElement>,
}

impl ScrollSurface for FakeSurface {
    type Element = FakeElement;

    fn scroll_element(&mut self) -> Option<&mut FakeElement> {
        self.element.as_mut()
    }
}

#[derive(Clone, Debug)]
struct FakeProbe {
    id: u32,
    connected: bool,
    tags: Vec<(&'static str, String)>,
    bounds: Size,
}

impl FakeProbe {
    fn row(id: u32, row: usize, height: f64) -> Self {
        Self {
            id,
            connected: true,
            tags: vec![(ROW_INDEX_TAG, row.to_string())],
            bounds: Size::new(100.0, height),
        }
    }

    fn cell(id: u32, row: usize, column: usize, width: f64) -> Self {
        Self {
            id,
            connected: true,
            tags: vec![
                (ROW_INDEX_TAG, row.to_string()),
                (COLUMN_INDEX_TAG, column.to_string()),
            ],
            bounds: Size::new(width, 30.0),
        }
    }

    fn tagged(id: u32, tags: Vec<(&'static str, String)>) -> Self {
        Self {
            id,
            connected: true,
            tags,
            bounds: Size::new(100.0, 40.0),
        }
    }

    fn detached(mut self) -> Self {
        self.connected = false;
        self
    }
}

impl ProbeElement for FakeProbe {
    fn is_connected(&self) -> bool {
        self.connected
    }

    fn tag(&self, name: &str) -> Option<&str> {
        self.tags
            .iter()
            .find(|(tag, _)| *tag == name)
            .map(|(_, value)| value.as_str())
    }

    fn border_box(&self) -> Size {
        self.bounds
    }
}

#[derive(Debug, Default)]
struct FakeNotifier {
    observed: Vec<u32>,
    unobserved: Vec<u32>,
}

impl ResizeNotifier for FakeNotifier {
    type Probe = FakeProbe;

    fn observe(&mut self, probe: &FakeProbe) {
        self.observed.push(probe.id);
    }

    fn unobserve(&mut self, probe: &FakeProbe) {
        self.unobserved.push(probe.id);
    }
}

#[derive(Debug, Default)]
struct CountingScheduler {
    requests: usize,
}

impl TickScheduler for CountingScheduler {
    fn request_tick(&mut self) {
        self.requests += 1;
    }
}

type TestController = GridController<FakeSurface, FakeNotifier, CountingScheduler>;

fn element_at(left: f64, top: f64) -> FakeElement {
    FakeElement {
        offsets: ScrollOffsets::new(left, top),
        bounds: Size::new(300.0, 300.0),
        ..FakeElement::default()
    }
}

fn controller(element: Option<FakeElement>) -> TestController {
    let opts = GridOptions::new(1000, 10)
        .with_estimate_row_height(|_| 40.0)
        .with_estimate_column_width(|_| 100.0);
    GridController::new(
        opts,
        FakeSurface { element },
        FakeNotifier::default(),
        CountingScheduler::default(),
    )
    .unwrap()
}

fn mounted_at(left: f64, top: f64) -> TestController {
    let mut c = controller(Some(element_at(left, top)));
    assert!(c.mount());
    c
}

fn element(c: &mut TestController) -> &mut FakeElement {
    c.surface_mut().scroll_element().unwrap()
}

#[test]
fn mount_waits_for_the_scroll_element() {
    let mut c = controller(None);
    assert!(!c.mount());
    assert!(!c.is_mounted());

    c.on_scroll(0);
    assert_eq!(c.scheduler().requests, 0);
    assert!(!c.grid().is_scrolling());

    c.surface_mut().element = Some(element_at(0.0, 120.0));
    assert!(c.mount());
    assert!(element(&mut c).subscribed);
    assert_eq!(c.grid().scroll_offsets(), ScrollOffsets::new(0.0, 120.0));
    assert_eq!(c.grid().viewport(), Size::new(300.0, 300.0));
    // Reading offsets on mount is not a scroll.
    assert!(!c.grid().is_scrolling());
}

#[test]
fn viewport_is_reread_once_per_tick() {
    let mut c = mounted_at(0.0, 0.0);
    element(&mut c).bounds = Size::new(500.0, 600.0);
    element(&mut c).offsets = ScrollOffsets::new(0.0, 80.0);

    c.on_scroll(0);
    c.on_scroll(5);
    assert_eq!(c.scheduler().requests, 1);
    assert_eq!(c.grid().scroll_offsets(), ScrollOffsets::new(0.0, 80.0));
    assert_eq!(c.grid().viewport(), Size::new(300.0, 300.0));

    c.on_tick(16);
    assert_eq!(c.grid().viewport(), Size::new(500.0, 600.0));
    assert!(!c.is_tick_requested());

    c.on_surface_resize();
    assert_eq!(c.scheduler().requests, 2);
}

#[test]
fn measurement_above_viewport_scrolls_at_the_next_tick() {
    let mut c = mounted_at(0.0, 400.0);
    let probe = FakeProbe::row(7, 2, 60.0);

    let outcome = c.measure_row(&probe).unwrap();
    assert_eq!(
        outcome,
        Some(MeasureOutcome::Compensated {
            adjustment: ScrollAdjustment {
                axis: Axis::Row,
                delta: 20.0
            },
            schedule_tick: true,
        })
    );
    assert_eq!(c.notifier().observed, vec![7]);
    assert_eq!(c.scheduler().requests, 1);
    assert!(element(&mut c).scrolled_by.is_empty());

    c.on_tick(16);
    assert_eq!(element(&mut c).scrolled_by, vec![(0.0, 20.0)]);
    assert!(c.grid().pending_adjustments().is_empty());

    // The same probe attaching again keeps its first measurement.
    assert_eq!(
        c.measure_row(&probe).unwrap(),
        Some(MeasureOutcome::AlreadyMeasured)
    );
}

#[test]
fn tick_requests_are_coalesced() {
    let mut c = mounted_at(0.0, 400.0);
    c.on_scroll(0);
    assert_eq!(c.scheduler().requests, 1);

    c.measure_row(&FakeProbe::row(1, 2, 60.0)).unwrap();
    c.measure_row(&FakeProbe::row(2, 3, 30.0)).unwrap();
    assert_eq!(c.scheduler().requests, 1);
    assert_eq!(c.grid().pending_adjustments().len(), 2);

    c.on_tick(16);
    assert_eq!(element(&mut c).scrolled_by, vec![(0.0, 20.0), (0.0, -10.0)]);

    c.measure_row(&FakeProbe::row(3, 4, 50.0)).unwrap();
    assert_eq!(c.scheduler().requests, 2);
}

#[test]
fn malformed_probes_are_rejected() {
    let mut c = mounted_at(0.0, 0.0);

    let err = c
        .measure_row(&FakeProbe::tagged(1, vec![(ROW_INDEX_TAG, "abc".to_string())]))
        .unwrap_err();
    assert_eq!(
        err,
        AttributionError::InvalidTag {
            tag: ROW_INDEX_TAG,
            value: "abc".to_string(),
        }
    );

    let err = c.measure_row(&FakeProbe::tagged(2, Vec::new())).unwrap_err();
    assert_eq!(err, AttributionError::MissingTag { tag: ROW_INDEX_TAG });

    let err = c.measure_row(&FakeProbe::row(3, 5000, 40.0)).unwrap_err();
    assert_eq!(
        err,
        AttributionError::Measure(MeasureError::IndexOutOfRange {
            axis: Axis::Row,
            index: 5000,
            count: 1000,
        })
    );

    assert_eq!(c.grid().row_cache_len(), 0);
    assert!(c.notifier().observed.is_empty());
    assert_eq!(c.scheduler().requests, 0);
}

#[test]
fn detached_probes_are_ignored_and_unobserved() {
    let mut c = mounted_at(0.0, 0.0);
    let probe = FakeProbe::row(4, 1, 55.0).detached();
    assert_eq!(c.measure_row(&probe).unwrap(), None);

    let stored = c.on_resize([ResizeEntry {
        element: probe,
        block_size: 55.0,
        inline_size: 100.0,
    }]);
    assert_eq!(stored, 0);
    assert_eq!(c.notifier().unobserved, vec![4]);
    assert_eq!(c.grid().row_cache_len(), 0);
}

#[test]
fn live_resize_widens_columns_left_of_the_viewport() {
    let mut c = mounted_at(250.0, 0.0);
    let cell = FakeProbe::cell(1, 0, 1, 100.0);
    let row = FakeProbe::row(2, 0, 40.0);
    let bad = FakeProbe::tagged(3, vec![(COLUMN_INDEX_TAG, "x".to_string())]);

    let stored = c.on_resize(vec![
        ResizeEntry {
            element: cell,
            block_size: 30.0,
            inline_size: 150.0,
        },
        ResizeEntry {
            element: row,
            block_size: 50.0,
            inline_size: 100.0,
        },
        ResizeEntry {
            element: bad,
            block_size: 10.0,
            inline_size: 10.0,
        },
    ]);
    assert_eq!(stored, 2);
    assert_eq!(c.grid().cached_column_width(&0, &1), Some(150.0));
    assert_eq!(c.grid().cached_row_height(&0), Some(50.0));
    assert_eq!(c.scheduler().requests, 1);

    c.on_tick(16);
    assert_eq!(element(&mut c).scrolled_by, vec![(50.0, 0.0)]);

    // The grid still reads left = 250 until the host reports the scroll.
    let frame = c.compute_frame();
    let w = frame.column_window();
    assert_eq!((w.start_index, w.end_index), (0, 6));
    assert_eq!(frame.total_width(), 1050.0);
}

#[test]
fn cells_attached_in_one_paint_scroll_by_the_column_growth() {
    let mut c = mounted_at(600.0, 0.0);
    for (id, (row, width)) in [(0, 110.0), (1, 120.0), (2, 130.0)].into_iter().enumerate() {
        c.measure_cell(&FakeProbe::cell(id as u32, row, 1, width)).unwrap();
    }
    assert_eq!(c.scheduler().requests, 1);

    c.on_tick(16);
    let scrolled = element(&mut c).scrolled_by.clone();
    assert_eq!(scrolled, vec![(10.0, 0.0), (10.0, 0.0), (10.0, 0.0)]);
    assert_eq!(element(&mut c).offsets.left, 630.0);
    assert_eq!(c.compute_frame().all_columns()[1].size, 130.0);
}

#[test]
fn unmount_flushes_or_discards_pending_adjustments() {
    let mut flushed = mounted_at(0.0, 400.0);
    flushed.measure_row(&FakeProbe::row(1, 2, 60.0)).unwrap();
    assert_eq!(flushed.unmount(PendingAdjustments::Flush), 1);
    assert_eq!(element(&mut flushed).scrolled_by, vec![(0.0, 20.0)]);
    assert!(!element(&mut flushed).subscribed);
    assert!(!flushed.is_mounted());

    let mut discarded = mounted_at(0.0, 400.0);
    discarded.on_scroll(0);
    discarded
        .measure_row(&FakeProbe::row(1, 2, 60.0))
        .unwrap();
    assert_eq!(discarded.unmount(PendingAdjustments::Discard), 0);
    assert!(element(&mut discarded).scrolled_by.is_empty());
    assert!(!discarded.grid().is_scrolling());
    assert_eq!(discarded.grid().scrolling_deadline_ms(), None);
}

#[test]
fn poll_ends_the_scrolling_state() {
    let mut c = mounted_at(0.0, 0.0);
    element(&mut c).offsets = ScrollOffsets::new(0.0, 40.0);
    c.on_scroll(0);
    assert!(c.grid().is_scrolling());
    assert!(!c.poll(149));
    assert!(c.poll(150));
    assert!(!c.grid().is_scrolling());
}

#[test]
fn probe_target_classifies_by_tag() {
    assert_eq!(
        probe_target(&FakeProbe::row(1, 3, 40.0)),
        Ok(MeasureTarget::Row(3))
    );
    assert_eq!(
        probe_target(&FakeProbe::cell(2, 3, 4, 80.0)),
        Ok(MeasureTarget::Cell { row: 3, column: 4 })
    );

    let missing_row = FakeProbe::tagged(3, vec![(COLUMN_INDEX_TAG, "4".to_string())]);
    assert_eq!(
        cell_target(&missing_row),
        Err(AttributionError::MissingTag { tag: ROW_INDEX_TAG })
    );
    assert_eq!(
        row_target(&FakeProbe::tagged(4, vec![(ROW_INDEX_TAG, " 12 ".to_string())])),
        Ok(MeasureTarget::Row(12))
    );
}

#[test]
fn frame_throttle_runs_once_per_take() {
    let mut t = FrameThrottle::new();
    assert!(t.request());
    assert!(!t.request());
    assert!(t.is_pending());
    assert!(t.take());
    assert!(!t.take());
    assert!(t.request());
}
