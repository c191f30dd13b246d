// Example: measurements follow row keys when the data set is reordered.
use virtual_grid::{DynamicSizeGrid, GridOptions, MeasureSource, MeasureTarget, Size};

fn main() {
    let ids: Vec<String> = (0..20).map(|i| format!("user-{i}")).collect();
    let keys = ids.clone();
    let mut g = DynamicSizeGrid::new(
        GridOptions::new_with_keys(ids.len(), move |i| keys[i].clone(), 3, |i| i as u64)
            .with_estimate_row_height(|_| 30.0)
            .with_column_width(|_| 100.0),
    )
    .expect("both axes are sized");
    g.set_viewport(Size::new(300.0, 200.0));

    g.on_measured(MeasureTarget::Row(0), 64.0, MeasureSource::Attach)
        .expect("row 0 exists");
    println!("user-0 measured: {:?}", g.cached_row_height(&ids[0]));

    // Reverse the rows: "user-0" is now the last row and keeps its height.
    let reversed: Vec<String> = ids.iter().rev().cloned().collect();
    g.set_row_key(move |i| reversed[i].clone());
    let frame = g.compute_frame();
    let last = frame.rows.item(19).expect("20 rows");
    println!("row 19: key={} size={}", last.key, last.size);
    println!("row 0 size={:?}", frame.rows.item(0).map(|r| r.size));

    // Reloading a different data set: drop every measurement.
    g.reset_measurements();
    println!("cached rows after reset: {}", g.row_cache_len());
}
