// Example: wiring a GridController to an in-memory host.
//
// A real adapter would implement the capability traits on its toolkit's scroll container,
// rendered element handles and resize observer, then forward events:
// - mount/unmount with the scroll container's lifecycle
// - on_scroll for scroll notifications, on_tick when a requested paint tick fires
// - measure_row / measure_cell when a row or cell is attached
use virtual_grid::{GridOptions, ScrollOffsets, Size};
use virtual_grid_adapter::{
    GridController, PendingAdjustments, ProbeElement, ROW_INDEX_TAG, ResizeNotifier,
    ScrollElement, ScrollSurface, TickScheduler,
};

struct Viewport {
    offsets: ScrollOffsets,
    bounds: Size,
}

impl ScrollElement for Viewport {
    fn subscribe(&mut self) {}

    fn unsubscribe(&mut self) {}

    fn current_offsets(&self) -> ScrollOffsets {
        self.offsets
    }

    fn bounding_box(&self) -> Size {
        self.bounds
    }

    fn scroll_by(&mut self, delta_x: f64, delta_y: f64) {
        self.offsets.left += delta_x;
        self.offsets.top += delta_y;
        println!("scroll_by({delta_x}, {delta_y}) -> {:?}", self.offsets);
    }
}

struct Surface(Option<Viewport>);

impl ScrollSurface for Surface {
    type Element = Viewport;

    fn scroll_element(&mut self) -> Option<&mut Viewport> {
        self.0.as_mut()
    }
}

struct RowElement {
    index: String,
    height: f64,
}

impl ProbeElement for RowElement {
    fn is_connected(&self) -> bool {
        true
    }

    fn tag(&self, name: &str) -> Option<&str> {
        (name == ROW_INDEX_TAG).then_some(self.index.as_str())
    }

    fn border_box(&self) -> Size {
        Size::new(640.0, self.height)
    }
}

struct Observer;

impl ResizeNotifier for Observer {
    type Probe = RowElement;

    fn observe(&mut self, _probe: &RowElement) {}

    fn unobserve(&mut self, _probe: &RowElement) {}
}

#[derive(Default)]
struct Frames {
    requested: bool,
}

impl TickScheduler for Frames {
    fn request_tick(&mut self) {
        self.requested = true;
    }
}

fn main() {
    let surface = Surface(Some(Viewport {
        offsets: ScrollOffsets::new(0.0, 2_000.0),
        bounds: Size::new(640.0, 480.0),
    }));
    let mut c = GridController::new(
        GridOptions::new(5_000, 4)
            .with_estimate_row_height(|_| 40.0)
            .with_column_width(|_| 160.0),
        surface,
        Observer,
        Frames::default(),
    )
    .expect("both axes are sized");
    c.mount();

    let frame = c.compute_frame();
    println!("rows={:?}", frame.row_window());

    // Rows above the viewport render taller than estimated.
    for (index, height) in [(3usize, 56.0), (4, 64.0)] {
        let row = RowElement {
            index: index.to_string(),
            height,
        };
        let outcome = c.measure_row(&row).expect("row is tagged");
        println!("measure row {index}: {outcome:?}");
    }

    // The host's paint tick fires.
    if c.scheduler().requested {
        c.on_tick(16);
    }
    println!("rows={:?}", c.compute_frame().row_window());

    c.unmount(PendingAdjustments::Discard);
}
