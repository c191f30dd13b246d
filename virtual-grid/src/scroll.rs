use crate::ScrollOffsets;

/// Tracks the scroll surface's offsets and a debounced "is scrolling" flag.
///
/// The flag turns on with every scroll notification and turns off once `quiet_period_ms` has
/// elapsed without another one. Time is supplied by the caller (`now_ms`), so the tracker never
/// owns a timer: hosts poll [`ScrollTracker::update`] from their timer or paint tick, or arm a
/// single timer for [`ScrollTracker::deadline_ms`].
#[derive(Clone, Debug)]
pub struct ScrollTracker {
    offsets: ScrollOffsets,
    is_scrolling: bool,
    quiet_period_ms: u64,
    deadline_ms: Option<u64>,
}

impl ScrollTracker {
    pub fn new(quiet_period_ms: u64) -> Self {
        Self {
            offsets: ScrollOffsets::default(),
            is_scrolling: false,
            quiet_period_ms,
            deadline_ms: None,
        }
    }

    pub fn offsets(&self) -> ScrollOffsets {
        self.offsets
    }

    pub fn is_scrolling(&self) -> bool {
        self.is_scrolling
    }

    pub fn quiet_period_ms(&self) -> u64 {
        self.quiet_period_ms
    }

    pub fn set_quiet_period_ms(&mut self, quiet_period_ms: u64) {
        self.quiet_period_ms = quiet_period_ms;
    }

    /// When the pending deactivation fires, if one is armed.
    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Records offsets without touching the scrolling flag (e.g. the initial read on mount).
    pub fn sync_offsets(&mut self, offsets: ScrollOffsets) {
        self.offsets = offsets;
    }

    /// Records a scroll notification. Restarts the quiet period.
    pub fn on_scroll(&mut self, offsets: ScrollOffsets, now_ms: u64) {
        self.offsets = offsets;
        self.is_scrolling = true;
        self.deadline_ms = Some(now_ms.saturating_add(self.quiet_period_ms));
    }

    /// Clears the scrolling flag once the quiet period is over.
    ///
    /// Returns `true` when the flag changed.
    pub fn update(&mut self, now_ms: u64) -> bool {
        let Some(deadline) = self.deadline_ms else {
            return false;
        };
        if now_ms < deadline {
            return false;
        }
        self.deadline_ms = None;
        let was_scrolling = self.is_scrolling;
        self.is_scrolling = false;
        was_scrolling
    }

    /// Drops the pending deactivation and clears the flag.
    pub fn cancel(&mut self) {
        self.deadline_ms = None;
        self.is_scrolling = false;
    }
}
