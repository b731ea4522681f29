//! Simulation state and episode lifecycle
//!
//! Everything a deterministic run needs lives here: the body, the ordered
//! obstacle collection, the seeded RNG, score and phase. Two instances share
//! nothing and may run on separate threads without coordination.

use glam::Vec2;
use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;
use serde::{Deserialize, Serialize};

use super::body::Body;
use super::obstacle::Obstacle;
use crate::config::SimConfig;
use crate::consts::*;

/// Episode phase. Transitions out of `Running` are terminal; `restart` is
/// the only way back.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SimPhase {
    Running,
    /// Crashed into an obstacle
    Lost,
    /// Reached the score threshold
    Won,
}

/// Complete simulation state for one episode
#[derive(Debug, Clone)]
pub struct SimState {
    /// Run seed for reproducibility
    pub seed: u64,
    pub(crate) rng: Pcg32,
    pub config: SimConfig,
    pub body: Body,
    /// Spawn order = left-to-right world order; never reordered
    pub obstacles: Vec<Obstacle>,
    pub score: u32,
    pub phase: SimPhase,
    /// Tick counter, for diagnostics
    pub time_ticks: u64,
}

impl SimState {
    /// Create a running simulation with the body at rest and the initial
    /// obstacle set spread across the right half of the level.
    pub fn new(config: SimConfig, seed: u64) -> Self {
        let mut state = Self {
            seed,
            rng: Pcg32::seed_from_u64(seed),
            config,
            body: Body::at_rest(),
            obstacles: Vec::new(),
            score: 0,
            phase: SimPhase::Running,
            time_ticks: 0,
        };
        state.spawn_initial_set();
        state
    }

    /// Reset to the initial shape with a fresh obstacle set. The only exit
    /// from `Lost`/`Won`. Gap centers continue from the live RNG stream, so
    /// consecutive episodes under one seed stay reproducible as a sequence.
    pub fn restart(&mut self) {
        self.score = 0;
        self.body.reset();
        self.obstacles.clear();
        self.spawn_initial_set();
        self.phase = SimPhase::Running;
        self.time_ticks = 0;
        log::debug!("simulation restarted (seed {})", self.seed);
    }

    fn spawn_initial_set(&mut self) {
        let count = self.config.obstacles_on_screen();
        let spacing = LEVEL_WIDTH / count as f32;
        for i in 0..count {
            self.spawn_obstacle(LEVEL_WIDTH / 2.0 + i as f32 * spacing);
        }
    }

    /// Spawn one obstacle at `x` with a freshly sampled gap center.
    pub(crate) fn spawn_obstacle(&mut self, x: f32) {
        let (lo, hi) = self.config.gap_center_range();
        let gap_center = self.rng.random_range(lo..=hi);
        self.obstacles.push(Obstacle::new(x, gap_center));
    }

    pub fn is_running(&self) -> bool {
        self.phase == SimPhase::Running
    }

    pub fn is_won(&self) -> bool {
        self.phase == SimPhase::Won
    }

    /// Fixed 4-element observation, each component normalized to [-1, 1]:
    /// body height (inverted), body velocity, next gap center (inverted),
    /// next obstacle distance. Index 0 of `obstacles` is always the nearest
    /// upcoming obstacle because spawn order equals world order; the
    /// spawn-on-deficit policy keeps the collection non-empty.
    pub fn observation(&self) -> [f32; 4] {
        let next = &self.obstacles[0];
        [
            1.0 - self.body.y / (LEVEL_HEIGHT / 2.0),
            self.body.vel / (LEVEL_HEIGHT * 2.0),
            1.0 - next.gap_center / (LEVEL_HEIGHT / 2.0),
            1.0 - next.x / (LEVEL_WIDTH / 2.0),
        ]
    }

    /// Read-only view for the external renderer: body circle, barrier
    /// rectangles and the score readout.
    pub fn snapshot(&self) -> Snapshot {
        let gap_size = self.config.gap_size();
        Snapshot {
            body_pos: Vec2::new(BODY_X, self.body.y),
            body_radius: BODY_RADIUS,
            obstacles: self
                .obstacles
                .iter()
                .map(|ob| ObstacleView {
                    x: ob.x,
                    gap_center: ob.gap_center,
                    upper: ob.upper_barrier(gap_size),
                    lower: ob.lower_barrier(gap_size),
                })
                .collect(),
            score: self.score,
            phase: self.phase,
        }
    }
}

/// Drawable snapshot handed across the renderer boundary
#[derive(Debug, Clone, Serialize)]
pub struct Snapshot {
    pub body_pos: Vec2,
    pub body_radius: f32,
    pub obstacles: Vec<ObstacleView>,
    pub score: u32,
    pub phase: SimPhase,
}

/// One obstacle as the renderer sees it: two filled rectangles (x, y, w, h)
#[derive(Debug, Clone, Serialize)]
pub struct ObstacleView {
    pub x: f32,
    pub gap_center: f32,
    pub upper: [f32; 4],
    pub lower: [f32; 4],
}
