/// Lets a piece of work run at most once per paint tick.
///
/// `request` arms the throttle and tells the caller whether a tick must be requested; `take`
/// (called from the tick) consumes the pending request.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameThrottle {
    pending: bool,
}

impl FrameThrottle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` only for the first request since the last `take`.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn is_pending(&self) -> bool {
        self.pending
    }

    pub fn take(&mut self) -> bool {
        core::mem::replace(&mut self.pending, false)
    }
}
