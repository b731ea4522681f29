//! Fixed-timestep stepped driver for automated control
//!
//! Wraps one simulation instance behind a reset/step interface: the caller
//! picks an action, the simulation advances one fixed tick, and the caller
//! reads the observation, the raw survival reward and the episode-end flag.
//! Instances share no state, so independent evaluations can run on separate
//! threads without coordination.

use crate::config::SimConfig;
use crate::consts::SIM_DT;
use crate::sim::{SimState, TickInput, tick};

/// Decision made by the controller each tick
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Idle,
    Jump,
}

/// Result of one environment step
#[derive(Debug, Clone, Copy)]
pub struct StepOutcome {
    pub observation: [f32; 4],
    /// Raw survival signal: 1.0 per tick
    pub reward: f32,
    /// Episode over (crash or win); call `reset` before stepping again
    pub done: bool,
}

/// Headless fixed-dt environment around one simulation instance
#[derive(Debug, Clone)]
pub struct Env {
    state: SimState,
    dt: f32,
}

impl Env {
    pub fn new(config: SimConfig, seed: u64) -> Self {
        Self {
            state: SimState::new(config, seed),
            dt: SIM_DT,
        }
    }

    /// Restart the episode and return the initial observation
    pub fn reset(&mut self) -> [f32; 4] {
        self.state.restart();
        self.state.observation()
    }

    /// Advance one fixed tick with the given action
    pub fn step(&mut self, action: Action) -> StepOutcome {
        let input = TickInput {
            jump: action == Action::Jump,
        };
        tick(&mut self.state, &input, self.dt);
        StepOutcome {
            observation: self.state.observation(),
            reward: 1.0,
            done: !self.state.is_running(),
        }
    }

    /// Read-only access for drivers that render or inspect
    pub fn state(&self) -> &SimState {
        &self.state
    }
}
