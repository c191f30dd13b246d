// Example: measuring rows and cells after render, with scroll-jump compensation.
use virtual_grid::{
    DynamicSizeGrid, GridOptions, MeasureSource, MeasureTarget, ScrollOffsets, Size,
};

fn main() {
    let mut g = DynamicSizeGrid::new(
        GridOptions::new(10_000, 50)
            .with_estimate_row_height(|_| 32.0)
            .with_estimate_column_width(|_| 120.0),
    )
    .expect("both axes have an estimate");
    g.set_viewport(Size::new(800.0, 600.0));
    g.on_scroll(ScrollOffsets::new(0.0, 3_200.0), 0);

    let frame = g.compute_frame();
    println!(
        "rows={:?} columns={:?} total={}x{}",
        frame.row_window(),
        frame.column_window(),
        frame.total_width(),
        frame.total_height()
    );

    // A row far above the viewport turns out taller than estimated: the grid queues a
    // corrective scroll so the visible content stays put.
    let outcome = g
        .on_measured(MeasureTarget::Row(10), 48.0, MeasureSource::Attach)
        .expect("row 10 exists");
    println!("measure row 10: {outcome:?}");

    // A wide cell widens its whole column.
    g.on_measured(
        MeasureTarget::Cell { row: 100, column: 2 },
        200.0,
        MeasureSource::LiveResize,
    )
    .expect("cell exists");

    // At the next paint tick, the host applies the queued adjustments with `scroll_by`.
    for adj in g.take_tick() {
        let (dx, dy) = adj.scroll_by();
        println!("scroll_by({dx}, {dy})");
    }

    let frame = g.compute_frame();
    println!(
        "after: rows={:?} total={}x{}",
        frame.row_window(),
        frame.total_width(),
        frame.total_height()
    );

    if g.update_scrolling(150) {
        println!("scrolling ended");
    }
}
