//! Component-scoped reset timers.
//!
//! Timers are driven by millisecond timestamps supplied by the caller
//! (`arm(now)`, `poll(now)`), so firing is deterministic and testable. A timer
//! that has been cancelled, or whose owner has been torn down, never fires.

/// Reset delay for the copy acknowledgement on the detail screen.
pub const DETAIL_COPY_RESET_MS: u64 = 2_000;

/// Reset delay for the copy acknowledgement in the wallet dropdown.
pub const WALLET_COPY_RESET_MS: u64 = 3_000;

/// One-shot timer that fires `delay_ms` after it was armed.
#[derive(Debug)]
pub struct ResetTimer {
    delay_ms: u64,
    deadline_ms: Option<u64>,
}

impl ResetTimer {
    pub fn new(delay_ms: u64) -> Self {
        Self {
            delay_ms,
            deadline_ms: None,
        }
    }

    pub fn delay_ms(&self) -> u64 {
        self.delay_ms
    }

    /// (Re)arm from `now_ms`. Re-arming replaces the previous deadline.
    pub fn arm(&mut self, now_ms: u64) {
        self.deadline_ms = Some(now_ms.saturating_add(self.delay_ms));
    }

    pub fn is_armed(&self) -> bool {
        self.deadline_ms.is_some()
    }

    pub fn deadline_ms(&self) -> Option<u64> {
        self.deadline_ms
    }

    /// Returns `true` exactly once, on the first poll at or after the deadline.
    pub fn poll(&mut self, now_ms: u64) -> bool {
        match self.deadline_ms {
            Some(deadline) if now_ms >= deadline => {
                self.deadline_ms = None;
                true
            }
            _ => false,
        }
    }

    pub fn cancel(&mut self) {
        self.deadline_ms = None;
    }
}

impl Drop for ResetTimer {
    fn drop(&mut self) {
        if self.deadline_ms.take().is_some() {
            tracing::trace!(delay_ms = self.delay_ms, "Reset timer cancelled on teardown");
        }
    }
}

/// "Copied!" acknowledgement that reverts after a fixed delay.
#[derive(Debug)]
pub struct CopyFeedback {
    copied: bool,
    timer: ResetTimer,
}

impl CopyFeedback {
    pub fn new(reset_after_ms: u64) -> Self {
        Self {
            copied: false,
            timer: ResetTimer::new(reset_after_ms),
        }
    }

    pub fn is_copied(&self) -> bool {
        self.copied
    }

    /// Record a copy at `now_ms`. A second copy restarts the delay.
    pub fn copied_at(&mut self, now_ms: u64) {
        self.copied = true;
        self.timer.arm(now_ms);
    }

    /// Advance to `now_ms`. Returns `true` when the acknowledgement reverted.
    pub fn tick(&mut self, now_ms: u64) -> bool {
        if self.timer.poll(now_ms) {
            self.copied = false;
            return true;
        }
        false
    }

    /// Cancel any pending reset. Called when the owning component goes away.
    pub fn teardown(&mut self) {
        self.timer.cancel();
        self.copied = false;
    }

    pub fn is_pending(&self) -> bool {
        self.timer.is_armed()
    }
}
