//! Jetdash - deterministic side-scrolling obstacle-avoidance simulation
//!
//! Core modules:
//! - `sim`: Deterministic simulation (physics, collisions, scoring, termination)
//! - `config`: Immutable per-instance configuration, validated at construction
//! - `env`: Fixed-timestep stepped driver for automated control
//!
//! The engine is driven by exactly one thread per instance: a driver applies
//! zero or more jump signals, calls `tick` once, then reads the phase, score
//! and observation. Rendering, input polling and argument parsing live
//! outside this crate.

pub mod config;
pub mod env;
pub mod sim;

pub use config::{ConfigError, PhysicsPreset, SimConfig};
pub use env::{Action, Env, StepOutcome};
pub use sim::{SimPhase, SimState, TickInput, tick};

/// Game configuration constants
pub mod consts {
    /// Fixed simulation timestep for the stepped driver (30 Hz)
    pub const SIM_DT: f32 = 1.0 / 30.0;

    /// Level dimensions (world units, y grows downward)
    pub const LEVEL_WIDTH: f32 = 1280.0;
    pub const LEVEL_HEIGHT: f32 = 640.0;
    /// Thickness of the top and bottom boundary bars
    pub const BOUNDS_HEIGHT: f32 = 48.0;

    /// Body defaults
    pub const BODY_RADIUS: f32 = 20.0;
    /// Fixed horizontal position of the body center
    pub const BODY_X: f32 = 100.0;
    /// Resting height at episode start, just above the floor
    pub const REST_HEIGHT: f32 = LEVEL_HEIGHT - BOUNDS_HEIGHT - BODY_RADIUS - 1.0;
    /// Lowest and highest positions the body center may occupy
    pub const BODY_MIN_Y: f32 = BOUNDS_HEIGHT + BODY_RADIUS;
    pub const BODY_MAX_Y: f32 = LEVEL_HEIGHT - BOUNDS_HEIGHT - BODY_RADIUS;

    /// Gravity (world units/s², downward)
    pub const GRAVITY: f32 = LEVEL_HEIGHT * 2.0;
    /// Jump impulse velocity, applied upward
    pub const JUMP_VELOCITY: f32 = GRAVITY / 3.0;
    /// Terminal velocity clamp, both directions
    pub const MAX_VELOCITY: f32 = LEVEL_HEIGHT * 2.0;
    /// Velocity damping on floor bounce (Classic preset)
    pub const FLOOR_DAMPING: f32 = 0.6;

    /// Obstacle defaults
    pub const OBSTACLE_WIDTH: f32 = 64.0;
    pub const OBSTACLE_SPEED: f32 = 256.0;
    pub const GAP_SIZE: f32 = 200.0;
    pub const MIN_PADDING: f32 = 64.0;
    pub const OBSTACLES_ON_SCREEN: usize = 4;
    pub const SCORE_TO_PASS: u32 = 16;
}
