//! Host wiring for the `virtual-grid` crate.
//!
//! The `virtual-grid` crate is UI-agnostic and only does layout and bookkeeping. This crate
//! describes what a host has to provide as small capability traits, and ships a
//! [`GridController`] that drives the engine from them:
//!
//! - scroll subscription with a throttled viewport re-read per paint tick
//! - probe attribution through `data-row-index` / `data-column-index` tags
//! - coalesced paint ticks that apply queued scroll adjustments
//!
//! No concrete UI toolkit is bound here.
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

extern crate alloc;

#[cfg(test)]
extern crate std;

#[macro_use]
mod macros;

mod capability;
mod controller;
mod probe;
mod throttle;

#[cfg(test)]
mod tests;

pub use capability::{
    ProbeElement, ResizeEntry, ResizeNotifier, ScrollElement, ScrollSurface, TickScheduler,
};
pub use controller::{GridController, PendingAdjustments};
pub use probe::{
    AttributionError, COLUMN_INDEX_TAG, ROW_INDEX_TAG, cell_target, probe_target, row_target,
};
pub use throttle::FrameThrottle;
