//! Pointer tracker: latest pointer position plus the previous frame's.

use glam::Vec2;

/// Raw input the tracker understands.
#[derive(Clone, Debug, PartialEq)]
pub enum PointerInput {
    /// Pointer moved to viewport coordinates.
    Move(Vec2),
    /// Touch began; holds every active touch point in event order.
    TouchStart(Vec<Vec2>),
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PointerState {
    pub position: Vec2,
    /// Position recorded at the end of the previous step.
    pub last: Vec2,
    /// Forces the next step to treat the pointer as moved.
    pub stale: bool,
}

impl PointerState {
    /// Overwrite the current position.
    #[inline]
    pub fn update(&mut self, position: Vec2) {
        self.position = position;
    }

    /// Feed one input event. Returns true when the position was updated and
    /// the driver should be running.
    pub fn apply(&mut self, input: &PointerInput) -> bool {
        let next = match input {
            PointerInput::Move(p) => Some(*p),
            PointerInput::TouchStart(points) => first_touch(points),
        };
        match next {
            Some(p) => {
                self.update(p);
                true
            }
            None => false,
        }
    }

    /// Exact comparison against the previous step's position.
    #[inline]
    pub fn moved(&self) -> bool {
        self.stale || self.position != self.last
    }

    /// Make the next step recompute every marker, e.g. after a rebuild.
    #[inline]
    pub fn mark_stale(&mut self) {
        self.stale = true;
    }

    #[inline]
    pub fn commit_frame(&mut self) {
        self.last = self.position;
        self.stale = false;
    }
}

#[inline]
pub fn first_touch(points: &[Vec2]) -> Option<Vec2> {
    points.first().copied()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_origin_unmoved() {
        let p = PointerState::default();
        assert_eq!(p.position, Vec2::ZERO);
        assert!(!p.moved());
    }

    #[test]
    fn move_updates_and_requests_run() {
        let mut p = PointerState::default();
        assert!(p.apply(&PointerInput::Move(Vec2::new(12.0, 7.0))));
        assert_eq!(p.position, Vec2::new(12.0, 7.0));
        assert!(p.moved());
        p.commit_frame();
        assert!(!p.moved());
    }

    #[test]
    fn stale_counts_as_moved_for_one_frame() {
        let mut p = PointerState::default();
        p.mark_stale();
        assert!(p.moved());
        p.commit_frame();
        assert!(!p.moved());
    }

    #[test]
    fn touch_uses_first_point_only() {
        let mut p = PointerState::default();
        let touches = vec![Vec2::new(3.0, 4.0), Vec2::new(100.0, 100.0)];
        assert!(p.apply(&PointerInput::TouchStart(touches)));
        assert_eq!(p.position, Vec2::new(3.0, 4.0));
    }

    #[test]
    fn empty_touch_is_ignored() {
        let mut p = PointerState {
            position: Vec2::new(5.0, 5.0),
            last: Vec2::new(5.0, 5.0),
            stale: false,
        };
        assert!(!p.apply(&PointerInput::TouchStart(Vec::new())));
        assert_eq!(p.position, Vec2::new(5.0, 5.0));
        assert!(!p.moved());
    }
}
