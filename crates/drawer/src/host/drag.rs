use drawer_core::{MIN_DRAG_DISTANCE, Point};

/// Holds back a gesture until it has travelled far enough to be a drag.
#[derive(Debug, Clone, Copy, Default)]
pub struct DragTracker {
    started: bool,
}

impl DragTracker {
    pub fn is_dragging(&self) -> bool {
        self.started
    }

    /// Returns the translation to apply, or `None` while under the threshold.
    pub fn moved(&mut self, translation: Point) -> Option<Point> {
        self.started = self.started || translation.length() >= MIN_DRAG_DISTANCE;
        self.started.then_some(translation)
    }

    /// Returns the end translation if the gesture ever became a drag.
    pub fn ended(&mut self, translation: Point) -> Option<Point> {
        let started = self.started || translation.length() >= MIN_DRAG_DISTANCE;
        self.started = false;
        started.then_some(translation)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_small_moves_are_held_back() {
        let mut tracker = DragTracker::default();
        assert_eq!(tracker.moved(Point::new(3.0, 4.0)), None);
        assert!(!tracker.is_dragging());

        assert_eq!(
            tracker.moved(Point::new(6.0, 8.0)),
            Some(Point::new(6.0, 8.0))
        );
        assert!(tracker.is_dragging());
    }

    #[test]
    fn test_started_drag_forwards_everything() {
        let mut tracker = DragTracker::default();
        tracker.moved(Point::new(0.0, 40.0));

        assert_eq!(tracker.moved(Point::new(0.0, 1.0)), Some(Point::new(0.0, 1.0)));
        assert_eq!(tracker.ended(Point::new(0.0, 2.0)), Some(Point::new(0.0, 2.0)));
        assert!(!tracker.is_dragging());
    }

    #[test]
    fn test_tap_is_not_a_drag() {
        let mut tracker = DragTracker::default();
        tracker.moved(Point::new(1.0, 1.0));
        assert_eq!(tracker.ended(Point::new(2.0, 2.0)), None);
    }

    #[test]
    fn test_fling_without_moves_still_ends() {
        let mut tracker = DragTracker::default();
        assert_eq!(
            tracker.ended(Point::new(0.0, -120.0)),
            Some(Point::new(0.0, -120.0))
        );
    }
}
