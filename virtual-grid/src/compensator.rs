use alloc::vec::Vec;

use crate::Axis;

/// A corrective scroll applied at the next paint tick.
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScrollAdjustment {
    pub axis: Axis,
    pub delta: f64,
}

impl ScrollAdjustment {
    /// The `(delta_x, delta_y)` pair to pass to a `scroll_by`-style host call.
    pub fn scroll_by(&self) -> (f64, f64) {
        match self.axis {
            Axis::Row => (0.0, self.delta),
            Axis::Column => (self.delta, 0.0),
        }
    }
}

/// Queues scroll adjustments and releases them one paint tick at a time.
///
/// Adjustments are kept as separate entries (never summed) and come out in arrival order.
/// Only the first request after a drain asks for a tick.
#[derive(Clone, Debug, Default)]
pub struct ScrollCompensator {
    queue: Vec<ScrollAdjustment>,
    scheduled: bool,
}

impl ScrollCompensator {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues an adjustment.
    ///
    /// Returns `true` when the caller must request a paint tick.
    pub fn compensate(&mut self, axis: Axis, delta: f64) -> bool {
        vtrace!(%axis, delta, "compensate");
        self.queue.push(ScrollAdjustment { axis, delta });
        if self.scheduled {
            return false;
        }
        self.scheduled = true;
        true
    }

    pub fn is_scheduled(&self) -> bool {
        self.scheduled
    }

    pub fn pending(&self) -> &[ScrollAdjustment] {
        &self.queue
    }

    /// Drains the queue for the current tick and re-arms scheduling.
    pub fn take_tick(&mut self) -> Vec<ScrollAdjustment> {
        self.scheduled = false;
        core::mem::take(&mut self.queue)
    }

    /// Drops every pending adjustment. Returns how many were dropped.
    pub fn discard(&mut self) -> usize {
        let n = self.queue.len();
        self.queue.clear();
        self.scheduled = false;
        n
    }
}
