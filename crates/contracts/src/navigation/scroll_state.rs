/// Mutable bookkeeping of the landing page scroll handler.
///
/// `frame_scheduled` coalesces scroll events into one evaluation per
/// animation frame. `spy_suppressed_until` keeps scroll spy quiet while a
/// programmatic smooth scroll is running; a newer suppression replaces the
/// previous deadline.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ScrollState {
    pub frame_scheduled: bool,
    /// Timestamp in ms (`performance.now()` clock)
    pub spy_suppressed_until: Option<f64>,
}

impl ScrollState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns true when the caller must request an animation frame,
    /// false when one is already pending
    pub fn schedule_frame(&mut self) -> bool {
        if self.frame_scheduled {
            return false;
        }
        self.frame_scheduled = true;
        true
    }

    pub fn frame_ran(&mut self) {
        self.frame_scheduled = false;
    }

    pub fn suppress(&mut self, now_ms: f64, delay_ms: f64) {
        self.spy_suppressed_until = Some(now_ms + delay_ms);
    }

    pub fn release(&mut self) {
        self.spy_suppressed_until = None;
    }

    pub fn is_suppressed(&self, now_ms: f64) -> bool {
        self.spy_suppressed_until
            .map_or(false, |until| now_ms < until)
    }
}
