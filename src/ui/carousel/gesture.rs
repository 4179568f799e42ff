//! Drag and swipe recognition.

/// Input device that started a gesture. Only one is tracked at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureKind {
    Mouse,
    Touch,
}

/// Navigation requested by a completed swipe.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    /// Content dragged to the right.
    Previous,
    /// Content dragged to the left.
    Next,
}

/// Turns a start/end pair of horizontal positions into a swipe.
///
/// `delta = end - start`: above `threshold` is [`SwipeDirection::Previous`],
/// below `-threshold` is [`SwipeDirection::Next`], anything in between is a
/// tap. The start position is dropped whenever a gesture ends so a later
/// release cannot pair with a stale press.
#[derive(Debug, Clone)]
pub struct SwipeTracker {
    threshold: u32,
    origin: Option<(GestureKind, i32)>,
}

impl SwipeTracker {
    pub fn new(threshold: u32) -> Self {
        Self {
            threshold,
            origin: None,
        }
    }

    pub fn threshold(&self) -> u32 {
        self.threshold
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    /// Start a gesture, replacing any gesture still in progress.
    pub fn begin(&mut self, kind: GestureKind, x: i32) {
        self.origin = Some((kind, x));
    }

    /// Finish the gesture started by the same device.
    ///
    /// A release from a different device than the one that pressed is ignored
    /// and leaves the current gesture running.
    pub fn finish(&mut self, kind: GestureKind, x: i32) -> Option<SwipeDirection> {
        let (started_by, start_x) = self.origin?;
        if started_by != kind {
            return None;
        }
        self.origin = None;
        self.classify(i64::from(x) - i64::from(start_x))
    }

    /// Pointer left the surface while pressed: ends a mouse gesture at `x`.
    pub fn leave(&mut self, x: i32) -> Option<SwipeDirection> {
        self.finish(GestureKind::Mouse, x)
    }

    fn classify(&self, delta: i64) -> Option<SwipeDirection> {
        let threshold = i64::from(self.threshold);
        if delta > threshold {
            Some(SwipeDirection::Previous)
        } else if delta < -threshold {
            Some(SwipeDirection::Next)
        } else {
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn drag_left_past_threshold_is_next() {
        let mut tracker = SwipeTracker::new(100);
        tracker.begin(GestureKind::Mouse, 300);
        assert_eq!(tracker.finish(GestureKind::Mouse, 150), Some(SwipeDirection::Next));
    }

    #[test]
    fn drag_right_past_threshold_is_previous() {
        let mut tracker = SwipeTracker::new(100);
        tracker.begin(GestureKind::Touch, 300);
        assert_eq!(
            tracker.finish(GestureKind::Touch, 450),
            Some(SwipeDirection::Previous)
        );
    }

    #[test]
    fn short_drag_is_ignored() {
        let mut tracker = SwipeTracker::new(100);
        tracker.begin(GestureKind::Mouse, 300);
        assert_eq!(tracker.finish(GestureKind::Mouse, 350), None);
        tracker.begin(GestureKind::Mouse, 300);
        assert_eq!(tracker.finish(GestureKind::Mouse, 250), None);
    }

    #[test]
    fn exact_threshold_is_not_a_swipe() {
        let mut tracker = SwipeTracker::new(100);
        tracker.begin(GestureKind::Mouse, 0);
        assert_eq!(tracker.finish(GestureKind::Mouse, 100), None);
    }

    #[test]
    fn end_without_start_does_nothing() {
        let mut tracker = SwipeTracker::new(10);
        assert_eq!(tracker.finish(GestureKind::Mouse, 500), None);
        assert_eq!(tracker.leave(-500), None);
    }

    #[test]
    fn origin_is_cleared_after_any_end() {
        let mut tracker = SwipeTracker::new(100);
        tracker.begin(GestureKind::Mouse, 300);
        assert_eq!(tracker.finish(GestureKind::Mouse, 310), None);
        assert!(!tracker.is_tracking());
        // A second release must not reuse the old press at 300.
        assert_eq!(tracker.finish(GestureKind::Mouse, 0), None);
    }

    #[test]
    fn leave_ends_mouse_gesture() {
        let mut tracker = SwipeTracker::new(50);
        tracker.begin(GestureKind::Mouse, 200);
        assert_eq!(tracker.leave(100), Some(SwipeDirection::Next));
        assert!(!tracker.is_tracking());
    }

    #[test]
    fn release_from_other_device_is_ignored() {
        let mut tracker = SwipeTracker::new(50);
        tracker.begin(GestureKind::Touch, 200);
        assert_eq!(tracker.finish(GestureKind::Mouse, 0), None);
        assert!(tracker.is_tracking());
        assert_eq!(tracker.finish(GestureKind::Touch, 0), Some(SwipeDirection::Next));
    }

    #[test]
    fn new_press_replaces_unfinished_gesture() {
        let mut tracker = SwipeTracker::new(50);
        tracker.begin(GestureKind::Mouse, 0);
        tracker.begin(GestureKind::Touch, 500);
        assert_eq!(tracker.finish(GestureKind::Touch, 480), None);
    }
}
