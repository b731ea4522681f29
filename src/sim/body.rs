//! Vertical kinematics of the player body

use serde::{Deserialize, Serialize};

use crate::config::PhysicsPreset;
use crate::consts::*;

/// The controllable falling body. Horizontal position is fixed at `BODY_X`;
/// only vertical state is simulated.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Body {
    /// Center height, world units (y grows downward)
    pub y: f32,
    /// Signed vertical velocity, clamped to `±MAX_VELOCITY`
    pub vel: f32,
}

impl Body {
    pub fn at_rest() -> Self {
        Self {
            y: REST_HEIGHT,
            vel: 0.0,
        }
    }

    pub fn reset(&mut self) {
        *self = Self::at_rest();
    }

    /// One Euler step. `Classic` updates velocity before position and
    /// bounces off the floor with damping; `Strict` updates position first
    /// and zeroes velocity on floor contact. Ceiling contact always clamps
    /// and zeroes. Position is inside the level bounds afterwards.
    pub fn integrate(&mut self, dt: f32, preset: PhysicsPreset) {
        match preset {
            PhysicsPreset::Classic => {
                self.vel += GRAVITY * dt;
                self.y += self.vel * dt;
            }
            PhysicsPreset::Strict => {
                self.y += self.vel * dt;
                self.vel += GRAVITY * dt;
            }
        }

        self.vel = self.vel.clamp(-MAX_VELOCITY, MAX_VELOCITY);

        if self.y > BODY_MAX_Y {
            self.y = BODY_MAX_Y;
            self.vel = match preset {
                PhysicsPreset::Classic => -self.vel * FLOOR_DAMPING,
                PhysicsPreset::Strict => 0.0,
            };
        } else if self.y < BODY_MIN_Y {
            self.y = BODY_MIN_Y;
            self.vel = 0.0;
        }
    }

    /// Jump impulse: unconditionally overwrites velocity with the upward
    /// impulse. No cooldown, no double-jump restriction.
    pub fn jump(&mut self) {
        self.vel = -JUMP_VELOCITY;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_euler_updates_velocity_before_position() {
        // Free fall away from the bounds: one 1/30 s step from standstill
        let mut body = Body { y: 300.0, vel: 0.0 };
        body.integrate(1.0 / 30.0, PhysicsPreset::Classic);
        assert!((body.vel - GRAVITY / 30.0).abs() < 1e-3); // ≈ 42.67
        assert!((body.y - (300.0 + GRAVITY / 30.0 / 30.0)).abs() < 1e-3); // ≈ +1.42
    }

    #[test]
    fn strict_euler_updates_position_before_velocity() {
        let mut body = Body { y: 300.0, vel: 0.0 };
        body.integrate(1.0 / 30.0, PhysicsPreset::Strict);
        assert!((body.vel - GRAVITY / 30.0).abs() < 1e-3);
        // Position unchanged on the first step from standstill
        assert_eq!(body.y, 300.0);
    }

    #[test]
    fn jump_overwrites_any_velocity() {
        let mut body = Body {
            y: 300.0,
            vel: MAX_VELOCITY,
        };
        body.jump();
        assert_eq!(body.vel, -JUMP_VELOCITY);
        body.jump();
        assert_eq!(body.vel, -JUMP_VELOCITY);
    }

    #[test]
    fn classic_floor_contact_bounces_with_damping() {
        let mut body = Body {
            y: BODY_MAX_Y - 0.5,
            vel: 100.0,
        };
        body.integrate(1.0 / 30.0, PhysicsPreset::Classic);
        assert_eq!(body.y, BODY_MAX_Y);
        assert!(body.vel < 0.0);
        let expected = -(100.0 + GRAVITY / 30.0) * FLOOR_DAMPING;
        assert!((body.vel - expected).abs() < 1e-3);
    }

    #[test]
    fn strict_floor_contact_zeroes_velocity() {
        let mut body = Body {
            y: BODY_MAX_Y - 0.5,
            vel: 100.0,
        };
        body.integrate(1.0 / 30.0, PhysicsPreset::Strict);
        assert_eq!(body.y, BODY_MAX_Y);
        assert_eq!(body.vel, 0.0);
    }

    #[test]
    fn ceiling_contact_clamps_and_zeroes() {
        for preset in [PhysicsPreset::Classic, PhysicsPreset::Strict] {
            let mut body = Body {
                y: BODY_MIN_Y + 1.0,
                vel: -MAX_VELOCITY,
            };
            body.integrate(1.0 / 30.0, preset);
            assert_eq!(body.y, BODY_MIN_Y);
            assert_eq!(body.vel, 0.0);
        }
    }

    #[test]
    fn velocity_is_clamped_to_terminal() {
        let mut body = Body {
            y: 100.0,
            vel: MAX_VELOCITY - 1.0,
        };
        body.integrate(0.5, PhysicsPreset::Classic);
        assert!(body.vel <= MAX_VELOCITY);
    }
}
