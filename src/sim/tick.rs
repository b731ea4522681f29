//! Per-tick simulation advance
//!
//! The single mutating entry point besides `restart`. Drivers differ only in
//! where `dt` comes from: wall-clock deltas for an interactive loop, the
//! fixed `SIM_DT` for the stepped driver. The engine takes `dt` as-is and
//! clamps only the resulting velocity.

use glam::Vec2;

use super::collision::body_obstacle_collision;
use super::state::{SimPhase, SimState};
use crate::consts::*;

/// Input for a single tick
#[derive(Debug, Clone, Copy, Default)]
pub struct TickInput {
    /// Discrete activate signal: apply the jump impulse this tick
    pub jump: bool,
}

/// Advance the simulation by one timestep.
///
/// Evaluated in order: jump impulse, obstacle advance with collision and
/// pass scoring, off-screen retirement, body integration, spawn-on-deficit,
/// win check. Once the phase leaves `Running` the state is frozen and every
/// call is a no-op until `restart`.
pub fn tick(state: &mut SimState, input: &TickInput, dt: f32) {
    if state.phase != SimPhase::Running {
        return;
    }

    state.time_ticks += 1;

    if input.jump {
        state.body.jump();
    }

    // Obstacles see the body position from before this tick's integration
    let body_pos = Vec2::new(BODY_X, state.body.y);
    let gap_size = state.config.gap_size();

    for ob in &mut state.obstacles {
        ob.advance(dt);
        if body_obstacle_collision(body_pos, BODY_RADIUS, ob, gap_size) {
            state.phase = SimPhase::Lost;
        } else if ob.mark_passed_if_crossed(BODY_X) {
            state.score += 1;
        }
    }
    if state.phase == SimPhase::Lost {
        log::debug!(
            "crashed at tick {} with score {}",
            state.time_ticks,
            state.score
        );
    }

    state.obstacles.retain(|ob| !ob.is_offscreen());

    state.body.integrate(dt, state.config.physics());

    // Spawn-on-deficit: restore the on-screen target at the right edge
    while state.obstacles.len() < state.config.obstacles_on_screen() {
        state.spawn_obstacle(LEVEL_WIDTH);
    }

    // Terminal transitions never stack: a tick that crashed cannot also win
    if state.phase == SimPhase::Running && state.score >= state.config.score_to_pass() {
        state.phase = SimPhase::Won;
        log::debug!("won at tick {}", state.time_ticks);
    }
}
