//! Frame scheduling seam.
//!
//! The host binds one step callback up front (a reusable animation-frame
//! closure on the web). `schedule_step` asks for that callback to run before
//! the next repaint and returns a handle that can cancel it.

pub trait FrameScheduler {
    type Handle;

    /// Request one future step. `None` means the host refused the request.
    fn schedule_step(&mut self) -> Option<Self::Handle>;

    /// Cancel a pending step. Cancelling a step that already ran is a no-op.
    fn cancel_step(&mut self, handle: Self::Handle);
}

/// Deterministic clock: steps only happen when the caller `fire`s.
#[derive(Debug, Default)]
pub struct ManualScheduler {
    pending: Option<u64>,
    next_id: u64,
    scheduled: usize,
    cancelled: usize,
}

impl ManualScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    /// Consume the pending request. Returns true when a step is due.
    pub fn fire(&mut self) -> bool {
        self.pending.take().is_some()
    }

    /// Requests made so far.
    pub fn scheduled(&self) -> usize {
        self.scheduled
    }

    /// Requests cancelled while still pending.
    pub fn cancelled(&self) -> usize {
        self.cancelled
    }
}

impl FrameScheduler for ManualScheduler {
    type Handle = u64;

    fn schedule_step(&mut self) -> Option<u64> {
        let id = self.next_id;
        self.next_id += 1;
        self.pending = Some(id);
        self.scheduled += 1;
        Some(id)
    }

    fn cancel_step(&mut self, handle: u64) {
        if self.pending == Some(handle) {
            self.pending = None;
            self.cancelled += 1;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fire_consumes_pending() {
        let mut s = ManualScheduler::new();
        assert!(!s.fire());
        let h = s.schedule_step().unwrap();
        assert!(s.is_pending());
        assert!(s.fire());
        assert!(!s.is_pending());
        // already ran
        s.cancel_step(h);
        assert_eq!(s.cancelled(), 0);
    }

    #[test]
    fn cancel_pending_request() {
        let mut s = ManualScheduler::new();
        let h = s.schedule_step().unwrap();
        s.cancel_step(h);
        assert!(!s.is_pending());
        assert!(!s.fire());
        assert_eq!((s.scheduled(), s.cancelled()), (1, 1));
    }
}
