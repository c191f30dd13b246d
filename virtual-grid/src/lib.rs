//! A headless two-axis windowing engine for rows and columns whose sizes are only known after
//! they have been rendered and measured.
//!
//! For host-side wiring (scroll subscriptions, resize probes, paint ticks), see the
//! `virtual-grid-adapter` crate.
//!
//! The engine keeps per-key measurement caches, lays out both axes from fixed sizes, cached
//! measurements or estimates, selects the overscanned window covering the viewport, and queues
//! corrective scrolls when an item above the viewport turns out to be a different size than it
//! was laid out with.
//!
//! It is UI-agnostic. A host is expected to provide:
//! - scroll offsets and the viewport size
//! - measured sizes of rendered rows and cells
//! - a paint tick at which queued scroll adjustments are applied
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod cache;
mod compensator;
mod error;
mod fixed;
mod grid;
mod key;
mod options;
mod range;
mod reconciler;
mod resolver;
mod scroll;
mod state;
mod types;


pub use cache::{ColumnWidthCache, RowHeightCache};
pub use compensator::{ScrollAdjustment, ScrollCompensator};
pub use error::{ConfigError, MeasureError};
pub use fixed::{FixedItem, FixedSizeList, FixedSizeListOptions, FixedWindow};
pub use grid::{DynamicSizeGrid, GridFrame};
pub use options::{
    AxisOptions, DEFAULT_COLUMN_OVERSCAN, DEFAULT_ROW_OVERSCAN, DEFAULT_SCROLLING_DELAY_MS,
    GridOptions, KeyFn, SizeFn,
};
pub use range::{AxisLayout, EndBoundary, compute_range};
pub use reconciler::{MeasureOutcome, MeasureSource, MeasureTarget};
pub use resolver::SizeResolver;
pub use scroll::ScrollTracker;
pub use state::{AxisViewport, ViewportState};
pub use types::{Axis, AxisItem, ItemKey, ScrollOffsets, Size, VisibleWindow};

#[doc(hidden)]
pub use key::KeyCacheKey;
