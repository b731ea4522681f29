//! Collision detection between the circular body and barrier pairs
//!
//! An obstacle is two axis-aligned rectangles sharing one horizontal span:
//! the upper barrier from the ceiling bar to the gap top, the lower barrier
//! from the gap bottom to the floor bar. The test is a simplified
//! closest-point approximation carried over from the tuned original: when
//! the body center sits level with a barrier (outside the gap band), the
//! vertical term is dropped and the horizontal clamp alone decides. This
//! misjudges diagonal contact near a barrier corner. The behavior is
//! intentional and must not be tightened; trained controllers depend on it.

use glam::Vec2;

use super::obstacle::Obstacle;
use crate::consts::OBSTACLE_WIDTH;

/// Check collision between the body circle and an obstacle's barrier pair.
pub fn body_obstacle_collision(
    body_pos: Vec2,
    body_radius: f32,
    obstacle: &Obstacle,
    gap_size: f32,
) -> bool {
    // Clamp the body center onto the obstacle's horizontal span
    let closest_x = body_pos.x.clamp(obstacle.x, obstacle.x + OBSTACLE_WIDTH);
    let dx = body_pos.x - closest_x;

    let gap_top = obstacle.gap_center - gap_size / 2.0;
    let gap_bottom = obstacle.gap_center + gap_size / 2.0;

    // Distance to the nearer gap edge, counted only while the body is
    // vertically inside the gap band. Level with a barrier, dy is zero and
    // the horizontal axis alone decides.
    let dy = if body_pos.y < gap_top || body_pos.y > gap_bottom {
        0.0
    } else {
        (body_pos.y - gap_top)
            .abs()
            .min((body_pos.y - gap_bottom).abs())
    };

    dx * dx + dy * dy <= body_radius * body_radius
}
