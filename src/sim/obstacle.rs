//! Scrolling barrier pair with one passable gap

use serde::{Deserialize, Serialize};

use crate::consts::*;

/// One obstacle: a fixed-width vertical barrier pair scrolling left, with a
/// passable gap whose center is fixed at spawn time.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Obstacle {
    /// Left edge of the barrier pair
    pub x: f32,
    /// Vertical center of the passable gap
    pub gap_center: f32,
    /// One-way flag: set the first tick the body has crossed this obstacle
    passed: bool,
}

impl Obstacle {
    pub fn new(x: f32, gap_center: f32) -> Self {
        Self {
            x,
            gap_center,
            passed: false,
        }
    }

    pub fn advance(&mut self, dt: f32) {
        self.x -= OBSTACLE_SPEED * dt;
    }

    /// True once the right edge has crossed the left viewport boundary
    pub fn is_offscreen(&self) -> bool {
        self.x + OBSTACLE_WIDTH < 0.0
    }

    /// One-shot `false -> true` transition once the obstacle's left edge is
    /// behind the body. Returns true only on the call that flips the flag,
    /// so the caller scores each obstacle exactly once.
    pub fn mark_passed_if_crossed(&mut self, body_x: f32) -> bool {
        if self.passed {
            return false;
        }
        if self.x < body_x {
            self.passed = true;
            return true;
        }
        false
    }

    pub fn passed(&self) -> bool {
        self.passed
    }

    /// Barrier rectangle above the gap, as (x, y, w, h)
    pub fn upper_barrier(&self, gap_size: f32) -> [f32; 4] {
        let bottom = self.gap_center - gap_size / 2.0;
        [
            self.x,
            BOUNDS_HEIGHT,
            OBSTACLE_WIDTH,
            (bottom - BOUNDS_HEIGHT).max(0.0),
        ]
    }

    /// Barrier rectangle below the gap, as (x, y, w, h)
    pub fn lower_barrier(&self, gap_size: f32) -> [f32; 4] {
        let top = self.gap_center + gap_size / 2.0;
        [
            self.x,
            top,
            OBSTACLE_WIDTH,
            (LEVEL_HEIGHT - BOUNDS_HEIGHT - top).max(0.0),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn advance_scrolls_left_at_constant_speed() {
        let mut ob = Obstacle::new(640.0, 320.0);
        ob.advance(1.0 / 30.0);
        assert!((ob.x - (640.0 - OBSTACLE_SPEED / 30.0)).abs() < 1e-4);
    }

    #[test]
    fn offscreen_requires_full_width_past_left_edge() {
        let mut ob = Obstacle::new(-OBSTACLE_WIDTH, 320.0);
        assert!(!ob.is_offscreen());
        ob.x = -OBSTACLE_WIDTH - 0.1;
        assert!(ob.is_offscreen());
    }

    #[test]
    fn mark_passed_fires_exactly_once() {
        let mut ob = Obstacle::new(200.0, 320.0);
        assert!(!ob.mark_passed_if_crossed(BODY_X));
        ob.x = BODY_X - 1.0;
        assert!(ob.mark_passed_if_crossed(BODY_X));
        assert!(ob.passed());
        // Still behind the body, but the flag already fired
        assert!(!ob.mark_passed_if_crossed(BODY_X));
        ob.x -= 50.0;
        assert!(!ob.mark_passed_if_crossed(BODY_X));
    }

    #[test]
    fn barrier_rects_share_the_horizontal_span() {
        let ob = Obstacle::new(400.0, 320.0);
        let upper = ob.upper_barrier(200.0);
        let lower = ob.lower_barrier(200.0);
        assert_eq!(upper[0], 400.0);
        assert_eq!(lower[0], 400.0);
        assert_eq!(upper[2], OBSTACLE_WIDTH);
        // Upper runs from the ceiling bar down to the gap top
        assert_eq!(upper[1], BOUNDS_HEIGHT);
        assert_eq!(upper[3], 320.0 - 100.0 - BOUNDS_HEIGHT);
        // Lower runs from the gap bottom down to the floor bar
        assert_eq!(lower[1], 420.0);
        assert_eq!(lower[3], LEVEL_HEIGHT - BOUNDS_HEIGHT - 420.0);
    }
}
