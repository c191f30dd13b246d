// Example: a single-axis list where every row has the same height.
use virtual_grid::{FixedSizeList, FixedSizeListOptions};

fn main() {
    let mut list = FixedSizeList::new(FixedSizeListOptions::new(1_000, 24.0, 240.0))
        .expect("item height is positive");

    list.on_scroll(480.0, 0);
    let w = list.window();
    println!(
        "window=[{}, {}] total={} scrolling={}",
        w.start_index,
        w.end_index,
        w.total_height,
        list.is_scrolling()
    );
    for item in w.items.iter().take(3) {
        println!("  row {} at {}", item.index, item.offset_top);
    }

    list.update_scrolling(200);
    println!("scrolling={}", list.is_scrolling());
}
