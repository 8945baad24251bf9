//! Swipe-down-to-dismiss gesture for bottom-sheet modals.

/// Downward drag distance (px) past which a modal closes.
pub const SWIPE_DISMISS_THRESHOLD_PX: f32 = 50.0;

/// Tracks one touch drag and reports when it crosses the dismiss threshold.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SwipeDismiss {
    threshold: f32,
    start_y: Option<f32>,
}

impl Default for SwipeDismiss {
    fn default() -> Self {
        Self::new(SWIPE_DISMISS_THRESHOLD_PX)
    }
}

impl SwipeDismiss {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold,
            start_y: None,
        }
    }

    pub fn is_dragging(&self) -> bool {
        self.start_y.is_some()
    }

    pub fn touch_start(&mut self, y: f32) {
        self.start_y = Some(y);
    }

    /// Returns `true` when the drag has moved strictly more than the
    /// threshold downwards. The drag ends at that point.
    pub fn touch_move(&mut self, y: f32) -> bool {
        let Some(start) = self.start_y else {
            return false;
        };
        if y - start > self.threshold {
            self.start_y = None;
            return true;
        }
        false
    }

    pub fn touch_end(&mut self) {
        self.start_y = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drag_past_threshold_dismisses() {
        let mut swipe = SwipeDismiss::default();
        swipe.touch_start(100.0);
        assert!(!swipe.touch_move(130.0));
        assert!(swipe.touch_move(151.0));
        assert!(!swipe.is_dragging());
    }

    #[test]
    fn test_exactly_threshold_does_not_dismiss() {
        let mut swipe = SwipeDismiss::default();
        swipe.touch_start(0.0);
        assert!(!swipe.touch_move(50.0));
    }

    #[test]
    fn test_upward_drag_ignored() {
        let mut swipe = SwipeDismiss::default();
        swipe.touch_start(200.0);
        assert!(!swipe.touch_move(100.0));
    }

    #[test]
    fn test_move_without_start_ignored() {
        let mut swipe = SwipeDismiss::default();
        assert!(!swipe.touch_move(500.0));
        swipe.touch_start(0.0);
        swipe.touch_end();
        assert!(!swipe.touch_move(500.0));
    }
}
